use director_core::ServiceEvent;
use futures::stream::BoxStream;

use crate::WatchError;

/// The seam between the discovery loop and whatever talks to the cluster
/// API. Transport, authentication, reconnection and resource-version
/// bookkeeping all live on the other side of this trait; the core only
/// asks for "given a label selector, stream events until cancellation".
#[async_trait::async_trait]
pub trait ServiceWatch: Send + Sync {
    /// Opens a watch over services matching `label_selector_key`. The
    /// returned stream runs until the caller drops it or cancels the
    /// future driving it; that release happens on every exit path of
    /// [`crate::DiscoveryLoop::discover_once`].
    async fn watch(
        &self,
        label_selector_key: &str,
    ) -> Result<BoxStream<'static, Result<ServiceEvent, WatchError>>, WatchError>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use futures::StreamExt;
    use tokio::sync::mpsc;
    use tokio_stream::wrappers::ReceiverStream;

    /// An in-memory watcher backed by an mpsc channel, used by the
    /// discovery loop's own tests in place of a live cluster watch.
    pub struct ChannelWatch {
        rx: tokio::sync::Mutex<Option<mpsc::Receiver<Result<ServiceEvent, WatchError>>>>,
    }

    impl ChannelWatch {
        pub fn new(rx: mpsc::Receiver<Result<ServiceEvent, WatchError>>) -> Self {
            Self {
                rx: tokio::sync::Mutex::new(Some(rx)),
            }
        }
    }

    #[async_trait::async_trait]
    impl ServiceWatch for ChannelWatch {
        async fn watch(
            &self,
            _label_selector_key: &str,
        ) -> Result<BoxStream<'static, Result<ServiceEvent, WatchError>>, WatchError> {
            let rx = self
                .rx
                .lock()
                .await
                .take()
                .expect("ChannelWatch only supports a single watch() call in tests");
            Ok(ReceiverStream::new(rx).boxed())
        }
    }
}

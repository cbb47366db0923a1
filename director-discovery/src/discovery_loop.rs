use std::time::Duration;

use director_core::{BackendPoolConfig, DirectorConfig};
use futures::StreamExt;

use crate::{DiscoveryError, ServiceWatch, Updater};

const DEFAULT_DEADLINE: Duration = Duration::from_secs(4);

/// Drives an [`Updater`] from a live watch for a single, time-boxed
/// discovery cycle, handing back a point-in-time snapshot.
///
/// The watcher is an open-ended stream; operational callers want a
/// snapshot they can act on now, so the loop drains events for a soft
/// deadline and returns whatever the updater has accumulated when it
/// fires. That's "best effort within a bounded window" -- callers poll
/// `discover_once` periodically rather than holding the stream open
/// themselves.
pub struct DiscoveryLoop<W> {
    watch: W,
    deadline: Duration,
}

impl<W: ServiceWatch> DiscoveryLoop<W> {
    pub fn new(watch: W) -> Self {
        Self {
            watch,
            deadline: DEFAULT_DEADLINE,
        }
    }

    /// Overrides the soft deadline. Exposed for tests; production callers
    /// should use the default.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Opens a watch under `label_selector_key` and folds events into
    /// `updater` until the soft deadline elapses or `shutdown` fires,
    /// whichever comes first. Both are treated as normal termination; only
    /// a stream error is propagated, discarding whatever partial snapshot
    /// was accumulated, because partial state from a broken stream is
    /// misleading.
    pub async fn discover_once(
        &self,
        mut updater: Updater,
        label_selector_key: &str,
        shutdown: drain::Watch,
    ) -> Result<(DirectorConfig, BackendPoolConfig), DiscoveryError> {
        let mut stream = self.watch.watch(label_selector_key).await?;

        let mut snapshot = updater.snapshot();
        let sleep = tokio::time::sleep(self.deadline);
        tokio::pin!(sleep);
        let shutdown_signal = shutdown.signaled();
        tokio::pin!(shutdown_signal);

        loop {
            tokio::select! {
                _ = &mut sleep => return Ok(snapshot),
                _ = &mut shutdown_signal => return Ok(snapshot),
                next = stream.next() => match next {
                    None => return Ok(snapshot),
                    Some(Err(err)) => return Err(DiscoveryError::Watch(err)),
                    Some(Ok(event)) => {
                        snapshot = updater.on_event(event)?;
                    }
                },
            }
        }
    }
}

use director_core::{EventType, Service as CoreService, ServiceEvent, ServiceMeta};
use director_discovery::{ServiceWatch, WatchError};
use futures::stream::BoxStream;
use futures::StreamExt;
use k8s_openapi::api::core::v1::Service as K8sService;
use kube::runtime::watcher;
use kube::{Api, Client, ResourceExt};

/// The production [`ServiceWatch`]: a `kube` label-selector watch over
/// cluster-wide `Service` objects.
pub struct KubeServiceWatch {
    client: Client,
}

impl KubeServiceWatch {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ServiceWatch for KubeServiceWatch {
    async fn watch(
        &self,
        label_selector_key: &str,
    ) -> Result<BoxStream<'static, Result<ServiceEvent, WatchError>>, WatchError> {
        let api: Api<K8sService> = Api::all(self.client.clone());
        let config = watcher::Config::default().labels(label_selector_key);
        let stream = watcher::watcher(api, config).flat_map(|result| {
            futures::stream::iter(match result {
                Ok(event) => split_event(event),
                Err(err) => vec![Err(WatchError(err.to_string()))],
            })
        });
        Ok(stream.boxed())
    }
}

fn split_event(event: watcher::Event<K8sService>) -> Vec<Result<ServiceEvent, WatchError>> {
    match event {
        watcher::Event::Applied(svc) => vec![Ok(to_event(EventType::Modified, svc))],
        watcher::Event::Deleted(svc) => vec![Ok(to_event(EventType::Deleted, svc))],
        watcher::Event::Restarted(svcs) => svcs
            .into_iter()
            .map(|svc| Ok(to_event(EventType::Added, svc)))
            .collect(),
    }
}

fn to_event(ty: EventType, svc: K8sService) -> ServiceEvent {
    let name = svc.name_any();
    let namespace = svc.namespace().unwrap_or_default();
    let annotations = svc.annotations().clone();
    ServiceEvent {
        ty,
        object: CoreService {
            metadata: ServiceMeta {
                name,
                namespace,
                annotations,
            },
        },
    }
}

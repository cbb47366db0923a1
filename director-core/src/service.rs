use std::collections::BTreeMap;

/// The fields of a Kubernetes Service the updater needs. Ports are not
/// modeled here: annotation-driven discovery derives port numbers from
/// annotation values, not from the service's spec (see
/// `director-discovery`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceMeta {
    pub name: String,
    pub namespace: String,
    pub annotations: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Service {
    pub metadata: ServiceMeta,
}

/// The lifecycle phase of a [`ServiceEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventType {
    Added,
    Modified,
    Deleted,
}

/// A single event from the cluster API watcher's service stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceEvent {
    pub ty: EventType,
    pub object: Service,
}

/// How a backend pool entry's network address is resolved.
///
/// `K8s` is the only variant the core speaks to; `dns_port_name` has the
/// shape `<service>.<namespace>:<port-identifier>`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolver {
    K8s { dns_port_name: String },
}

/// A named entry in a backend pool.
///
/// `name` uniqueness within a pool is the annotation author's
/// responsibility; nothing in this crate enforces it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Backend {
    pub name: String,
    pub resolver: Resolver,
    #[serde(default)]
    pub autogenerated: bool,
}

/// How a matched HTTP route should be handled once a backend is resolved.
///
/// Only `ReverseProxy` is exercised by the router; the variant exists so
/// that future proxy modes don't require changing the route shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProxyMode {
    ReverseProxy,
}

/// An HTTP routing rule: a request predicate paired with a backend name.
///
/// `port_matcher == 0` means "any port". `path_rules` being empty means
/// "any path". Matching is always exact on `host_matcher`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpRoute {
    pub backend_name: String,
    pub host_matcher: String,
    #[serde(default)]
    pub port_matcher: u16,
    #[serde(default)]
    pub path_rules: Vec<String>,
    pub proxy_mode: ProxyMode,
    #[serde(default)]
    pub autogenerated: bool,
}

/// A gRPC routing rule. Identical in shape to [`HttpRoute`] except that the
/// host match is replaced by a service-name match and there are no path
/// rules or proxy mode (gRPC routing is always a method dispatch, not a
/// reverse proxy).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GrpcRoute {
    pub backend_name: String,
    pub service_name_matcher: String,
    #[serde(default)]
    pub port_matcher: u16,
    #[serde(default)]
    pub autogenerated: bool,
}

use crate::{Backend, GrpcRoute, HttpRoute};

/// The routing table: an ordered HTTP route list and an ordered gRPC route
/// list. Order is significant in both — matching is first-hit.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DirectorConfig {
    pub http: Vec<HttpRoute>,
    pub grpc: Vec<GrpcRoute>,
}

/// The backend definitions a [`DirectorConfig`]'s routes refer to by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BackendPoolConfig {
    pub http: Vec<Backend>,
    pub grpc: Vec<Backend>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ProxyMode, Resolver};

    #[test]
    fn director_config_deserializes_from_yaml() {
        let yaml = r#"
http:
  - backend_name: already_there
    host_matcher: something
    port_matcher: 1234
    proxy_mode: reverse_proxy
"#;
        let cfg: DirectorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.http.len(), 1);
        assert_eq!(cfg.http[0].backend_name, "already_there");
        assert_eq!(cfg.http[0].proxy_mode, ProxyMode::ReverseProxy);
        assert!(!cfg.http[0].autogenerated);
        assert!(cfg.grpc.is_empty());
    }

    #[test]
    fn backend_pool_config_deserializes_k8s_resolver() {
        let yaml = r#"
http:
  - name: something
    resolver:
      k8s:
        dns_port_name: "s2.ns1:some"
"#;
        let cfg: BackendPoolConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            cfg.http[0].resolver,
            Resolver::K8s {
                dns_port_name: "s2.ns1:some".to_string()
            }
        );
    }
}

use std::collections::BTreeMap;

use director_core::{
    Backend, BackendPoolConfig, ConfigError, DirectorConfig, EventType, GrpcRoute, HttpRoute,
    ProxyMode, Resolver, Service, ServiceEvent,
};

use crate::UpdaterError;

/// Folds a stream of service lifecycle events into a director/backend-pool
/// snapshot pair, merging discovered routes with an immutable base
/// configuration.
///
/// Single-consumer: `on_event` is synchronous and assumes only one thread
/// of control applies events at a time (see the Discovery Loop, which owns
/// the only `Updater` it drives).
#[derive(Debug)]
pub struct Updater {
    base_director: DirectorConfig,
    base_backendpool: BackendPoolConfig,
    external_domain_suffix: String,
    http_label_prefix: String,
    grpc_label_prefix: String,
    // Keyed by (namespace, name). A `BTreeMap` rather than a hash map so
    // that snapshots across multiple services have a deterministic,
    // reproducible order.
    services: BTreeMap<(String, String), ServiceRoutes>,
}

#[derive(Debug, Default, Clone)]
struct ServiceRoutes {
    http_routes: Vec<HttpRoute>,
    http_backends: Vec<Backend>,
    grpc_routes: Vec<GrpcRoute>,
    grpc_backends: Vec<Backend>,
}

enum Kind {
    Http,
    Grpc,
}

struct ParsedAnnotation {
    /// `None` means the annotation omitted a matcher and the host/service
    /// matcher must be synthesized from the service name.
    matcher: Option<String>,
    port: u16,
    has_colon: bool,
}

impl Updater {
    /// Constructs an updater. `external_domain_suffix`, `http_label_prefix`
    /// and `grpc_label_prefix` are required to be non-empty; an empty value
    /// is a fatal configuration error at start-up, not a per-event failure.
    pub fn new(
        base_director: DirectorConfig,
        base_backendpool: BackendPoolConfig,
        external_domain_suffix: impl Into<String>,
        http_label_prefix: impl Into<String>,
        grpc_label_prefix: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let external_domain_suffix = external_domain_suffix.into();
        let http_label_prefix = http_label_prefix.into();
        let grpc_label_prefix = grpc_label_prefix.into();

        if external_domain_suffix.is_empty() {
            return Err(ConfigError::EmptyExternalDomainSuffix);
        }
        if http_label_prefix.is_empty() {
            return Err(ConfigError::EmptyHttpLabelPrefix);
        }
        if grpc_label_prefix.is_empty() {
            return Err(ConfigError::EmptyGrpcLabelPrefix);
        }

        Ok(Self {
            base_director,
            base_backendpool,
            external_domain_suffix,
            http_label_prefix,
            grpc_label_prefix,
            services: BTreeMap::new(),
        })
    }

    /// The current snapshot, without applying any new event. Used by the
    /// Discovery Loop to return a base-only snapshot when the deadline
    /// fires before any event is consumed.
    pub fn snapshot(&self) -> (DirectorConfig, BackendPoolConfig) {
        let mut director = self.base_director.clone();
        let mut pool = BackendPoolConfig::default();

        // Discovered backends first, base backends after.
        for routes in self.services.values() {
            pool.http.extend(routes.http_backends.iter().cloned());
            pool.grpc.extend(routes.grpc_backends.iter().cloned());
        }
        pool.http.extend(self.base_backendpool.http.iter().cloned());
        pool.grpc
            .extend(self.base_backendpool.grpc.iter().cloned());

        // Base routes first, discovered routes after.
        for routes in self.services.values() {
            director.http.extend(routes.http_routes.iter().cloned());
            director.grpc.extend(routes.grpc_routes.iter().cloned());
        }

        (director, pool)
    }

    /// Applies one service lifecycle event and returns the resulting
    /// snapshot pair.
    ///
    /// `added`/`modified` erase all prior contributions from the service
    /// and re-derive from its current annotations; `deleted` just erases.
    /// A service's contribution is therefore always fully characterized by
    /// its latest event.
    pub fn on_event(
        &mut self,
        event: ServiceEvent,
    ) -> Result<(DirectorConfig, BackendPoolConfig), UpdaterError> {
        let key = (
            event.object.metadata.namespace.clone(),
            event.object.metadata.name.clone(),
        );

        match event.ty {
            EventType::Added | EventType::Modified => {
                let derived = self.derive(&event.object);
                self.services.insert(key, derived);
            }
            EventType::Deleted => {
                self.services.remove(&key);
            }
        }

        Ok(self.snapshot())
    }

    fn derive(&self, service: &Service) -> ServiceRoutes {
        let mut routes = ServiceRoutes::default();
        for (prefix, kind) in [
            (&self.http_label_prefix, Kind::Http),
            (&self.grpc_label_prefix, Kind::Grpc),
        ] {
            self.derive_kind(service, prefix, kind, &mut routes);
        }
        routes
    }

    fn derive_kind(&self, service: &Service, prefix: &str, kind: Kind, out: &mut ServiceRoutes) {
        let name = &service.metadata.name;
        let namespace = &service.metadata.namespace;

        let mut entries: Vec<(String, ParsedAnnotation)> = Vec::new();
        for (key, value) in &service.metadata.annotations {
            let Some(port_id) = key.strip_prefix(prefix) else {
                continue;
            };
            match parse_annotation_value(value) {
                Some(parsed) => entries.push((port_id.to_string(), parsed)),
                None => {
                    tracing::warn!(
                        %namespace, %name, annotation = %key, %value,
                        "skipping annotation with unparseable port"
                    );
                }
            }
        }

        // Backends are emitted in plain ascending port-identifier order.
        let mut backend_order = entries.iter().collect::<Vec<_>>();
        backend_order.sort_by(|a, b| a.0.cmp(&b.0));
        for (port_id, parsed) in &backend_order {
            let backend_name = format!("{name}_{namespace}_{port_id}");
            let dns_port_name = format!("{name}.{namespace}:{port_id}");
            let backend = Backend {
                name: backend_name,
                resolver: Resolver::K8s { dns_port_name },
                autogenerated: true,
            };
            match kind {
                Kind::Http => out.http_backends.push(backend),
                Kind::Grpc => out.grpc_backends.push(backend),
            }
        }

        // Routes are emitted with explicit-matcher annotations first, then
        // synthesized-matcher ones; within each bucket, entries whose value
        // contained a colon sort before ones that didn't, then ties break
        // by the annotation key itself.
        let mut route_order = entries.iter().collect::<Vec<_>>();
        route_order.sort_by(|a, b| {
            let explicit = |p: &ParsedAnnotation| p.matcher.is_some();
            explicit(&b.1)
                .cmp(&explicit(&a.1))
                .then_with(|| b.1.has_colon.cmp(&a.1.has_colon))
                .then_with(|| a.0.cmp(&b.0))
        });
        for (port_id, parsed) in &route_order {
            let backend_name = format!("{name}_{namespace}_{port_id}");
            let matcher = parsed
                .matcher
                .clone()
                .unwrap_or_else(|| format!("{name}.{}", self.external_domain_suffix));
            match kind {
                Kind::Http => out.http_routes.push(HttpRoute {
                    backend_name,
                    host_matcher: matcher,
                    port_matcher: parsed.port,
                    path_rules: Vec::new(),
                    proxy_mode: ProxyMode::ReverseProxy,
                    autogenerated: true,
                }),
                Kind::Grpc => out.grpc_routes.push(GrpcRoute {
                    backend_name,
                    service_name_matcher: matcher,
                    port_matcher: parsed.port,
                    autogenerated: true,
                }),
            }
        }
    }
}

/// Splits an annotation value of the shape `<matcher>:<port>` (both halves
/// optional) into its parts. Returns `None` if a port segment is present
/// but isn't a valid `u16` — the caller logs and skips rather than failing
/// the whole service.
fn parse_annotation_value(value: &str) -> Option<ParsedAnnotation> {
    let (matcher_part, port_part, has_colon) = match value.split_once(':') {
        Some((m, p)) => (m, p, true),
        None => (value, "", false),
    };

    let port = if port_part.is_empty() {
        0
    } else {
        port_part.parse::<u16>().ok()?
    };

    let matcher = if matcher_part.is_empty() {
        None
    } else {
        Some(matcher_part.to_string())
    };

    Some(ParsedAnnotation {
        matcher,
        port,
        has_colon,
    })
}

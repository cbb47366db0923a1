//! Resolves an inbound HTTP request to a backend name.
//!
//! The router is a plain, ordered list of [`HttpRoute`]s built once from a
//! director snapshot. Lookups are a linear first-match scan; there is no
//! indexing because route tables are expected to stay in the tens of
//! entries (see `director-discovery` for how that table is produced).

#![forbid(unsafe_code)]

mod request;

pub use request::{Request, Scheme};

use director_core::HttpRoute;

/// No rule in the table matched the request, or the request was too
/// malformed (no host) to match anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no route matched the request")]
pub struct RouteError;

/// An immutable, ordered HTTP routing table.
///
/// Safe to share across threads without synchronization: nothing mutates
/// after construction.
#[derive(Clone, Debug)]
pub struct Router {
    routes: Vec<HttpRoute>,
}

impl Router {
    /// Builds a router from an ordered route list. The constructor
    /// preserves insertion order, which is what makes tie-breaking
    /// positional: the first matching rule always wins.
    pub fn new(routes: Vec<HttpRoute>) -> Self {
        Self { routes }
    }

    /// Resolves `request` to a backend name, or `RouteError` if no rule in
    /// the table matches.
    pub fn route(&self, request: &Request) -> Result<&str, RouteError> {
        let host = request.host.as_deref().ok_or(RouteError)?;
        let port = request.resolved_port().ok_or(RouteError)?;

        self.routes
            .iter()
            .find(|route| route_matches(route, host, port, &request.path))
            .map(|route| route.backend_name.as_str())
            .ok_or(RouteError)
    }
}

fn route_matches(route: &HttpRoute, host: &str, port: u16, path: &str) -> bool {
    if route.host_matcher != host {
        return false;
    }
    if route.port_matcher != 0 && route.port_matcher != port {
        return false;
    }
    route.path_rules.is_empty()
        || route.path_rules.iter().any(|rule| rule.starts_with(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use director_core::ProxyMode;

    fn route(backend_name: &str, host: &str, port: u16, path_rules: &[&str]) -> HttpRoute {
        HttpRoute {
            backend_name: backend_name.to_string(),
            host_matcher: host.to_string(),
            port_matcher: port,
            path_rules: path_rules.iter().map(|s| s.to_string()).collect(),
            proxy_mode: ProxyMode::ReverseProxy,
            autogenerated: false,
        }
    }

    // Mirrors the fixture and table from the original router test suite.
    fn fixture() -> Router {
        Router::new(vec![
            route("a", "nopath.example.com", 80, &[]),
            route("b", "nopath.example.com", 0, &[]),
            route("c", "nopath.port.example.com", 8343, &[]),
            route("d", "path.port.example.com", 83, &["/some/strict/path"]),
            route(
                "e",
                "path.httsdefport.example.com",
                443,
                &["/some/strict/path"],
            ),
        ])
    }

    #[test]
    fn no_path_no_port_uses_default_http_port() {
        let r = fixture();
        let req = Request::new(Some(Scheme::Http), Some("nopath.example.com"), None, "/");
        assert_eq!(r.route(&req), Ok("a"));
    }

    #[test]
    fn explicit_default_port_matches_same_route_as_implicit() {
        let r = fixture();
        let implicit = Request::new(Some(Scheme::Http), Some("nopath.example.com"), None, "/");
        let explicit = Request::new(
            Some(Scheme::Http),
            Some("nopath.example.com"),
            Some(80),
            "/",
        );
        assert_eq!(r.route(&implicit), r.route(&explicit));
    }

    #[test]
    fn path_is_irrelevant_when_path_rules_are_empty() {
        let r = fixture();
        let req = Request::new(
            Some(Scheme::Http),
            Some("nopath.example.com"),
            Some(80),
            "/test/path",
        );
        assert_eq!(r.route(&req), Ok("a"));
    }

    #[test]
    fn wildcard_port_matches_any_port() {
        let r = fixture();
        let req = Request::new(Some(Scheme::Http), Some("nopath.example.com"), Some(83), "/");
        assert_eq!(r.route(&req), Ok("b"));
    }

    #[test]
    fn exact_port_match() {
        let r = fixture();
        let req = Request::new(
            Some(Scheme::Http),
            Some("nopath.port.example.com"),
            Some(8343),
            "/",
        );
        assert_eq!(r.route(&req), Ok("c"));
    }

    #[test]
    fn path_prefix_match() {
        let r = fixture();
        let req = Request::new(
            Some(Scheme::Http),
            Some("path.port.example.com"),
            Some(83),
            "/some/strict/path",
        );
        assert_eq!(r.route(&req), Ok("d"));
    }

    #[test]
    fn https_default_port_with_path() {
        let r = fixture();
        let req = Request::new(
            Some(Scheme::Https),
            Some("path.httsdefport.example.com"),
            None,
            "/some/strict/path",
        );
        assert_eq!(r.route(&req), Ok("e"));
    }

    #[test]
    fn wrong_host_is_not_found() {
        let r = fixture();
        let req = Request::new(
            Some(Scheme::Http),
            Some("wrong.path.port.example.com"),
            Some(83),
            "/some/strict/path",
        );
        assert_eq!(r.route(&req), Err(RouteError));
    }

    #[test]
    fn wrong_port_is_not_found() {
        let r = fixture();
        let req = Request::new(
            Some(Scheme::Http),
            Some("path.port.example.com"),
            Some(84),
            "/some/strict/path",
        );
        assert_eq!(r.route(&req), Err(RouteError));
    }

    #[test]
    fn path_not_a_prefix_is_not_found() {
        let r = fixture();
        let req = Request::new(
            Some(Scheme::Http),
            Some("path.port.example.com"),
            Some(83),
            "/some/strict/pathwrong",
        );
        assert_eq!(r.route(&req), Err(RouteError));
    }

    #[test]
    fn missing_host_is_not_found() {
        let r = fixture();
        let req: Request = Request::new(Some(Scheme::Http), None::<String>, Some(80), "/");
        assert_eq!(r.route(&req), Err(RouteError));
    }

    #[test]
    fn first_match_wins_on_ties() {
        // Two routes could both match host+port; the earlier one in
        // insertion order must win.
        let r = Router::new(vec![
            route("first", "tie.example.com", 0, &[]),
            route("second", "tie.example.com", 0, &[]),
        ]);
        let req = Request::new(Some(Scheme::Http), Some("tie.example.com"), Some(1234), "/");
        assert_eq!(r.route(&req), Ok("first"));
    }

    #[test]
    fn from_uri_parses_scheme_host_port_path() {
        let uri: http::Uri = "https://path.httsdefport.example.com/some/strict/path"
            .parse()
            .unwrap();
        let req = Request::from_uri(&uri);
        assert_eq!(req.scheme, Some(Scheme::Https));
        assert_eq!(req.host.as_deref(), Some("path.httsdefport.example.com"));
        assert_eq!(req.port, None);
        assert_eq!(req.path, "/some/strict/path");

        let r = fixture();
        assert_eq!(r.route(&req), Ok("e"));
    }
}

/// The scheme of an inbound request, used only to determine the default
/// port when none is given explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "http" => Some(Self::Http),
            "https" => Some(Self::Https),
            _ => None,
        }
    }

    fn default_port(self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }
}

/// An inbound request reduced to the fields the router matches on.
///
/// `host` and `scheme` are `None` for malformed requests (e.g. a proxy
/// protocol with no authority); the router treats that the same as "no
/// route matched" rather than raising a distinct validation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub scheme: Option<Scheme>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: String,
}

impl Request {
    pub fn new(
        scheme: Option<Scheme>,
        host: Option<impl Into<String>>,
        port: Option<u16>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            scheme,
            host: host.map(Into::into),
            port,
            path: path.into(),
        }
    }

    /// Builds a request from a parsed `http::Uri`, the way the proxy
    /// transport (out of core scope) would hand one to the router.
    pub fn from_uri(uri: &http::Uri) -> Self {
        let scheme = uri.scheme_str().and_then(Scheme::parse);
        let host = uri.host().map(str::to_string);
        let port = uri.port_u16();
        let path = match uri.path() {
            "" => "/".to_string(),
            path => path.to_string(),
        };
        Self {
            scheme,
            host,
            port,
            path,
        }
    }

    /// The port to match against: the explicit port if given, otherwise
    /// the scheme's default. `None` if neither is available.
    pub(crate) fn resolved_port(&self) -> Option<u16> {
        self.port.or_else(|| self.scheme.map(Scheme::default_port))
    }
}

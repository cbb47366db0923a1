use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "director", version, about = "Mesh ingress routing director")]
pub struct Args {
    #[clap(long, env = "DIRECTOR_LOG_LEVEL", default_value = "director=info,warn")]
    pub log_level: EnvFilter,

    #[clap(long, env = "DIRECTOR_ADMIN_ADDR", default_value = "0.0.0.0:8090")]
    pub admin_addr: SocketAddr,

    /// Appended to a service name to synthesize a matcher when an
    /// annotation's value omits one.
    #[clap(long, env = "DIRECTOR_EXTERNAL_DOMAIN_SUFFIX")]
    pub external_domain_suffix: String,

    #[clap(
        long,
        env = "DIRECTOR_HTTP_LABEL_PREFIX",
        default_value = "http.mesh-exposed.io/"
    )]
    pub http_label_prefix: String,

    #[clap(
        long,
        env = "DIRECTOR_GRPC_LABEL_PREFIX",
        default_value = "grpc.mesh-exposed.io/"
    )]
    pub grpc_label_prefix: String,

    /// Suffix appended to `http_label_prefix` to form the label key a
    /// service must carry to be discovered at all.
    #[clap(
        long,
        env = "DIRECTOR_LABEL_SELECTOR_SUFFIX",
        default_value = "mesh-exposed"
    )]
    pub label_selector_suffix: String,

    /// YAML file with the persistent base director config, merged ahead of
    /// discovered routes.
    #[clap(long, env = "DIRECTOR_BASE_DIRECTOR_PATH")]
    pub base_director: Option<PathBuf>,

    /// YAML file with the persistent base backend pool config.
    #[clap(long, env = "DIRECTOR_BASE_BACKENDPOOL_PATH")]
    pub base_backendpool: Option<PathBuf>,
}

impl Args {
    pub fn label_selector_key(&self) -> String {
        format!("{}{}", self.http_label_prefix, self.label_selector_suffix)
    }
}

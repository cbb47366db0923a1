//! Mesh ingress director: folds Kubernetes service annotations into a
//! routing table and serves liveness/readiness over a small admin HTTP
//! server while the core router logic is consumed as a library by the
//! data-plane transport (out of scope for this binary).

#![forbid(unsafe_code)]

mod admin;
mod cli;
mod config;
mod watch;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use director_discovery::{DiscoveryLoop, Updater};
use tokio::sync::watch as tokio_watch;
use tracing::{error, info};
use tracing_subscriber::prelude::*;

const POLL_INTERVAL: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();

    tracing_subscriber::registry()
        .with(args.log_level.clone())
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("initializing logging")?;

    let client = kube::Client::try_default()
        .await
        .context("building kube client")?;
    let discovery = DiscoveryLoop::new(watch::KubeServiceWatch::new(client));
    let label_selector_key = args.label_selector_key();

    let (ready_tx, ready_rx) = tokio_watch::channel(false);
    let (shutdown_tx, shutdown_rx) = drain::channel();

    let admin_addr = args.admin_addr;
    tokio::spawn(async move {
        if let Err(err) = admin::serve(admin_addr, ready_rx).await {
            error!(%err, "admin server exited");
        }
    });

    tokio::spawn({
        let shutdown_tx = shutdown_tx;
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("received interrupt, draining");
            }
            shutdown_tx.drain().await;
        }
    });

    info!(%label_selector_key, "starting discovery loop");
    loop {
        let updater = Updater::new(
            config::load_director(args.base_director.as_deref())?,
            config::load_backendpool(args.base_backendpool.as_deref())?,
            args.external_domain_suffix.clone(),
            args.http_label_prefix.clone(),
            args.grpc_label_prefix.clone(),
        )
        .context("constructing updater from startup config")?;

        match discovery
            .discover_once(updater, &label_selector_key, shutdown_rx.clone())
            .await
        {
            Ok((director, backendpool)) => {
                info!(
                    http_routes = director.http.len(),
                    grpc_routes = director.grpc.len(),
                    http_backends = backendpool.http.len(),
                    grpc_backends = backendpool.grpc.len(),
                    "refreshed routing snapshot"
                );
                let _ = ready_tx.send(true);
                // Handing `director`/`backendpool` to a live data-plane
                // transport is the proxying half of this system and isn't
                // implemented here; this binary demonstrates the control
                // plane only.
            }
            Err(err) => error!(%err, "discovery cycle failed"),
        }

        tokio::select! {
            _ = tokio::time::sleep(POLL_INTERVAL) => {}
            _ = shutdown_rx.signaled() => break,
        }
    }

    info!("shutdown complete");
    Ok(())
}

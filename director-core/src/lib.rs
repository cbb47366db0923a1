//! Shared data model for the mesh ingress director.
//!
//! This crate owns the route/backend/config types that the router and
//! discovery updater agree on, plus the service-event types the updater
//! consumes and the `ConfigError` kind returned at construction time.

#![forbid(unsafe_code)]

mod backend;
mod config;
mod error;
mod route;
mod service;

pub use backend::{Backend, Resolver};
pub use config::{BackendPoolConfig, DirectorConfig};
pub use error::ConfigError;
pub use route::{GrpcRoute, HttpRoute, ProxyMode};
pub use service::{EventType, Service, ServiceEvent, ServiceMeta};

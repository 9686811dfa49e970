//! Service configuration loaded via OrthoConfig.
//!
//! Every field can be set with a `RESOURCE_DESK_` environment variable,
//! e.g. `RESOURCE_DESK_BIND_ADDR=127.0.0.1:9000`.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::notifications::DEFAULT_FEED_CAPACITY;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_IDENTITY_DIR: &str = ".resource-desk";

/// Configuration values for the HTTP service.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RESOURCE_DESK")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<SocketAddr>,
    /// Directory holding the persisted identity slot.
    pub identity_dir: Option<PathBuf>,
    /// Seed document replacing the built-in demo data.
    pub seed_path: Option<PathBuf>,
    /// Number of notifications kept for `GET /api/v1/notifications`.
    pub notification_capacity: Option<usize>,
}

impl AppSettings {
    /// Configured listen address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)))
    }

    /// Configured identity directory, falling back to `.resource-desk`.
    pub fn identity_dir(&self) -> PathBuf {
        self.identity_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IDENTITY_DIR))
    }

    /// Configured feed capacity, falling back to the feed default.
    pub fn notification_capacity(&self) -> usize {
        self.notification_capacity.unwrap_or(DEFAULT_FEED_CAPACITY)
    }
}

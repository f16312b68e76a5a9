// Copyright (c) 2025 - Cowboy AI, Inc.
//! API server configuration
//!
//! Resolved from command-line flags, falling back to `DC_CHECK_*`
//! environment variables.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default REST server port
pub const DEFAULT_PORT: u16 = 10101;

/// Configuration for the dc-check API server
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "dc-check-server", about = "Serve rack connectivity as JSON")]
pub struct ServerConfig {
    /// Rack description file to serve
    #[arg(long, env = "DC_CHECK_DB")]
    pub db: PathBuf,

    /// REST server port
    #[arg(
        long,
        env = "DC_CHECK_PORT",
        default_value_t = DEFAULT_PORT,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "DC_CHECK_BIND", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,
}

impl ServerConfig {
    pub fn new(db: impl Into<PathBuf>) -> Self {
        Self {
            db: db.into(),
            port: DEFAULT_PORT,
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

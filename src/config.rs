use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let raw = env::var("SAUBER_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        Self::parse(&raw)
    }

    fn parse(bind: &str) -> Result<Self> {
        let bind_addr = bind
            .parse()
            .with_context(|| format!("parse SAUBER_BIND: {}", bind))?;
        Ok(Self { bind_addr })
    }
}

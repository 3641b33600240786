pub mod api;
pub mod cli;
pub mod config;
pub mod service;
pub mod types;

use std::sync::Arc;

use service::ServiceFactory;

#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceFactory>,
}

pub use types::*;

impl AppState {
    pub fn new(factory: impl ServiceFactory) -> Self {
        Self {
            services: Arc::new(factory),
        }
    }
}

/// Logs go to stderr so the CLI's stdout only carries command output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

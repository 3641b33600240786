use sauber::{api, config::ServerConfig, service, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sauber::init_tracing();

    let config = ServerConfig::from_env()?;
    info!("Starting sauber API");
    info!("Bind address: {}", config.bind_addr);

    // Built once, shared by every request
    let state = AppState::new(service::default_factory());

    api::serve(config, state).await
}

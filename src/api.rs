use crate::config::ServerConfig;
use crate::service::ServiceError;
use crate::types::*;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Failure of a request. Rendered as a bare 500; details stay in the server log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("service task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn root(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    let factory = state.services.clone();
    // main_function is synchronous and may block
    let message = tokio::task::spawn_blocking(move || {
        let service = factory.create()?;
        service.main_function()
    })
    .await??;

    Ok(Json(MessageResponse { message }))
}

pub async fn serve(config: ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("sauber API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

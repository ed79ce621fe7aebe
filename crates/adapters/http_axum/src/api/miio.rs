//! Handlers for device (`miio`) commands.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use mibridge_app::ports::{MiioClient, MinaClient};
use mibridge_domain::command::CommandRequest;

use super::CommandResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /miio/command`
pub async fn command<M, N>(
    State(state): State<AppState<M, N>>,
    body: Result<Json<CommandRequest>, JsonRejection>,
) -> Result<CommandResponse, ApiError>
where
    M: MiioClient + 'static,
    N: MinaClient + 'static,
{
    let Json(request) = body?;
    Ok(state.miio_service.execute(request).await.into())
}

/// `GET /miio/help`
pub async fn help<M, N>(State(state): State<AppState<M, N>>) -> CommandResponse
where
    M: MiioClient + 'static,
    N: MinaClient + 'static,
{
    state.miio_service.help().await.into()
}

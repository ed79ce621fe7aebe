//! Handlers for voice (`mina`) commands.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use mibridge_app::ports::{MiioClient, MinaClient};
use mibridge_domain::command::CommandRequest;

use super::CommandResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /mina/command`
pub async fn command<M, N>(
    State(state): State<AppState<M, N>>,
    body: Result<Json<CommandRequest>, JsonRejection>,
) -> Result<CommandResponse, ApiError>
where
    M: MiioClient + 'static,
    N: MinaClient + 'static,
{
    let Json(request) = body?;
    Ok(state.mina_service.execute(request).await.into())
}

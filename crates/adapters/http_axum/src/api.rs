//! JSON command handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod miio;
#[allow(clippy::missing_errors_doc)]
pub mod mina;

use axum::Json;
use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

use mibridge_app::ports::{MiioClient, MinaClient};
use mibridge_domain::response::CommandOutcome;

use crate::state::AppState;

/// Possible responses from the command endpoints.
///
/// Validation failures and external failures are both carried in the
/// [`CommandOutcome`] and answered with `200 OK`.
pub enum CommandResponse {
    Ok(Json<CommandOutcome>),
}

impl From<CommandOutcome> for CommandResponse {
    fn from(outcome: CommandOutcome) -> Self {
        Self::Ok(Json(outcome))
    }
}

impl IntoResponse for CommandResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Build the command sub-router.
pub fn routes<M, N>() -> Router<AppState<M, N>>
where
    M: MiioClient + 'static,
    N: MinaClient + 'static,
{
    Router::new()
        .route("/miio/command", post(miio::command::<M, N>))
        .route("/miio/help", get(miio::help::<M, N>))
        .route("/mina/command", post(mina::command::<M, N>))
}

//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use mibridge_app::ports::{MiioClient, MinaClient};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the command routes at the root and a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<M, N>(state: AppState<M, N>) -> Router
where
    M: MiioClient + 'static,
    N: MinaClient + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use mibridge_app::services::miio_service::MiioCommandService;
    use mibridge_app::services::mina_service::MinaCommandService;
    use mibridge_domain::command::DeviceId;
    use mibridge_domain::error::BridgeError;
    use mibridge_domain::voice::{DeviceTarget, VoiceDevice};
    use serde_json::{Value, json};
    use std::future::Future;
    use tower::ServiceExt;

    struct StubMiio;
    struct StubMina;

    impl MiioClient for StubMiio {
        fn execute(
            &self,
            did: &DeviceId,
            command: &str,
            _prefix: &str,
        ) -> impl Future<Output = Result<Value, BridgeError>> + Send {
            let reply = if command == "boom" {
                Err(BridgeError::external(std::io::Error::other("boom failed")))
            } else {
                Ok(json!({"did": did.to_string(), "command": command}))
            };
            async { reply }
        }

        fn help(
            &self,
            _did: Option<&DeviceId>,
            _prefix: &str,
        ) -> impl Future<Output = Result<String, BridgeError>> + Send {
            async { Ok("Get Props: <siid[-piid]>[,...]".to_string()) }
        }
    }

    impl MinaClient for StubMina {
        fn device_list(
            &self,
        ) -> impl Future<Output = Result<Vec<VoiceDevice>, BridgeError>> + Send {
            async { Ok(vec![VoiceDevice::new("speaker", "Speaker")]) }
        }

        fn send_message(
            &self,
            _devices: &[VoiceDevice],
            _target: DeviceTarget,
            _message: &str,
        ) -> impl Future<Output = Result<Value, BridgeError>> + Send {
            async { Ok(json!(true)) }
        }
    }

    fn test_app() -> Router {
        build(AppState::new(
            MiioCommandService::new(StubMiio, DeviceId::parse("100")),
            MinaCommandService::new(StubMina),
        ))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_answer_validation_error_with_ok_status() {
        let response = test_app()
            .oneshot(post_json("/miio/command", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"error": "command is required"})
        );
    }

    #[tokio::test]
    async fn should_render_miio_result_as_text() {
        let response = test_app()
            .oneshot(post_json("/miio/command", r#"{"command": "list"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let text = body["result"].as_str().unwrap();
        let rendered: Value = serde_json::from_str(text).unwrap();
        assert_eq!(rendered, json!({"did": "100", "command": "list"}));
    }

    #[tokio::test]
    async fn should_answer_external_failure_in_result_field() {
        let response = test_app()
            .oneshot(post_json("/miio/command", r#"{"command": "boom"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"result": "boom failed"}));
    }

    #[tokio::test]
    async fn should_pass_mina_send_result_through() {
        let response = test_app()
            .oneshot(post_json("/mina/command", r#"{"command": "mina hi"}"#))
            .await
            .unwrap();

        assert_eq!(json_body(response).await, json!({"result": true}));
    }

    #[tokio::test]
    async fn should_serve_command_help() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/miio/help")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["result"].as_str().unwrap().starts_with("Get Props"));
    }

    #[tokio::test]
    async fn should_reject_malformed_body_with_error_envelope() {
        let response = test_app()
            .oneshot(post_json("/mina/command", "not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn should_reject_non_object_body() {
        let response = test_app()
            .oneshot(post_json("/mina/command", r#""hello""#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

pub mod health;
pub mod resources;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rpm_core::{RpmError, RpmResult};
use serde::Serialize;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert anyhow errors to HTTP responses
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<RpmError>() {
            return match err {
                RpmError::NotFound { .. } => StatusCode::NOT_FOUND,
                RpmError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }

        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            return rejection.status();
        }

        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {:#}", self.0);
        }

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Run a store operation on the blocking pool. Store calls do synchronous
/// file I/O and may wait on the store lock.
pub async fn blocking<T, F>(op: F) -> Result<T, AppError>
where
    F: FnOnce() -> RpmResult<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(op).await??)
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header::CONTENT_TYPE},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::app;
    use crate::state::AppState;

    fn test_app(dir: &std::path::Path) -> Router {
        app(AppState::new(dir).unwrap())
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(text) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(text.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).expect("request"))
            .await
            .expect("response");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_category_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        let (status, created) =
            send(&app, Method::POST, "/api/categories", Some(r#"{"name":"Health"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());
        assert_eq!(created, json!({"id": id, "name": "Health"}));

        let (status, listed) = send(&app, Method::GET, "/api/categories", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed, json!([{"id": id, "name": "Health"}]));

        let uri = format!("/api/categories/{id}");
        let (status, updated) = send(&app, Method::PUT, &uri, Some(r#"{"name":"Health2"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated, json!({"id": id, "name": "Health2"}));

        let (status, shown) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(shown, updated);

        let (status, deleted) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted, json!({"message": "Category deleted"}));

        let (_, listed) = send(&app, Method::GET, "/api/categories", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_client_id_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        let (_, created) = send(
            &app,
            Method::POST,
            "/api/rpmblocks",
            Some(r#"{"id":"mine","result":"Marathon"}"#),
        )
        .await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_ne!(id, "mine");

        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/api/rpmblocks/{id}"),
            Some(r#"{"id":"other","result":"Ultra","saved":true}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated, json!({"id": id, "result": "Ultra", "saved": true}));
    }

    #[tokio::test]
    async fn test_non_string_ids_are_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        for (uri, body) in [
            ("/api/categories", r#"{"id":null,"name":"Health"}"#),
            ("/api/categories", r#"{"id":42,"name":"Career"}"#),
            ("/api/calendar-events", r#"{"id":42,"title":"Dentist"}"#),
            ("/api/rpmblocks", r#"{"id":null,"result":"Marathon"}"#),
        ] {
            let (status, created) = send(&app, Method::POST, uri, Some(body)).await;
            assert_eq!(status, StatusCode::CREATED, "body: {body}");
            let id = created["id"].as_str().unwrap().to_string();
            assert!(!id.is_empty());

            let item = format!("{uri}/{id}");
            for client_id in [Value::Null, json!(42)] {
                let mut payload: Value = serde_json::from_str(body).unwrap();
                payload["id"] = client_id;
                let (status, updated) =
                    send(&app, Method::PUT, &item, Some(&payload.to_string())).await;
                assert_eq!(status, StatusCode::OK, "payload: {payload}");
                assert_eq!(updated["id"], json!(id));
            }
        }
    }

    #[tokio::test]
    async fn test_update_returns_payload_as_sent() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        let (_, created) =
            send(&app, Method::POST, "/api/rpmblocks", Some(r#"{"result":"Run"}"#)).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created, json!({"id": id, "result": "Run"}));

        let payload = json!({
            "id": id,
            "result": "Run a marathon",
            "saved": true,
            "createdAt": "2024-01-02T05:04:05.000+02:00",
            "massiveActions": [
                {"id": "a-1", "text": "Long run", "durationAmount": 2, "durationUnit": "hr"}
            ]
        });
        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/api/rpmblocks/{id}"),
            Some(&payload.to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated, payload);

        let (_, listed) = send(&app, Method::GET, "/api/rpmblocks", None).await;
        assert_eq!(listed, json!([payload]));

        let category = json!({
            "name": "Health",
            "updatedAt": "2024-06-30T23:59:59.123-07:00"
        });
        let (_, created) = send(
            &app,
            Method::POST,
            "/api/categories",
            Some(&category.to_string()),
        )
        .await;
        assert_eq!(created["updatedAt"], category["updatedAt"]);
    }

    #[tokio::test]
    async fn test_bad_timestamp_is_422() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/categories",
            Some(r#"{"name":"Health","createdAt":"yesterday"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("createdAt"));
    }

    #[tokio::test]
    async fn test_unknown_id_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/calendar-events/nope",
            Some(r#"{"title":"Dentist"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Calendar event not found"}));

        let (status, body) = send(&app, Method::DELETE, "/api/rpmblocks/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "RPM block not found"}));
    }

    #[tokio::test]
    async fn test_calendar_event_fields_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        let (status, created) = send(
            &app,
            Method::POST,
            "/api/calendar-events",
            Some(r#"{"title":"Dentist","start":"2024-05-01T09:00","end":"2024-05-01T10:00"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["title"], "Dentist");
        assert_eq!(created["end"], "2024-05-01T10:00");
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        let (status, body) = send(&app, Method::POST, "/api/categories", Some("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (_, listed) = send(&app, Method::GET, "/api/categories", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_schema_violations_are_422() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        for body in [
            r#"{"name":"Health","colour":"red"}"#,
            r#"{"name":"Health","type":"hobby"}"#,
            r#"{"description":"no name"}"#,
            r#"{"name":"   "}"#,
        ] {
            let (status, _) = send(&app, Method::POST, "/api/categories", Some(body)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {body}");
        }
    }

    #[tokio::test]
    async fn test_malformed_store_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        std::fs::write(dir.path().join("categories.json"), "garbage").unwrap();

        let (status, body) = send(&app, Method::GET, "/api/categories", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("Malformed store file"));
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        let (status, body) = send(&app, Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db;
use crate::state::SharedState;

pub async fn test_db(State(state): State<SharedState>) -> Response {
    match db::server_time(&state.pool).await {
        Ok(now) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Database connection successful",
                "timestamp": now,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Database test error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Database connection failed",
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

pub async fn test_email(State(state): State<SharedState>) -> Response {
    match state.mailer.send_smtp_test().await {
        Ok(info) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Test email sent successfully",
                "info": info,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Test email error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Failed to send test email",
                    "error": e,
                })),
            )
                .into_response()
        }
    }
}

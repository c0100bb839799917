use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::state::SharedState;
use crate::submission::pipeline;
use crate::submission::{ContactForm, SubmitOutcome};

pub async fn submit(State(state): State<SharedState>, Json(form): Json<ContactForm>) -> Response {
    match pipeline::run(&state, &form).await {
        Ok(SubmitOutcome::Delivered(_)) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Form submitted successfully",
            })),
        )
            .into_response(),
        Ok(SubmitOutcome::Stored { email_error, .. }) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Form submitted successfully but email notification failed",
                "emailError": email_error,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to store contact submission: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "An error occurred while submitting the form",
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

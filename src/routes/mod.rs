pub mod contact;
pub mod diag;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/contact", post(contact::submit))
        .route("/test-db", get(diag::test_db))
        .route("/test-email", get(diag::test_email))
}

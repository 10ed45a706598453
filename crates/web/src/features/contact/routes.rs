use axum::{Router, routing::post};

use super::handlers::send_contact;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(send_contact))
}

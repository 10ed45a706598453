use axum::{Router, routing::get};

use super::handlers::{get_home_page, get_page};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_home_page))
        .route("/*path", get(get_page))
}

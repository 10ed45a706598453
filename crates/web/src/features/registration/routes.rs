use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{
    create_registration, get_festival_event, get_registration, list_festival_events,
    validate_registration_step,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn festival_event_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_festival_events))
        .route("/:event_id", get(get_festival_event))
}

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/:school_id", get(get_registration))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", post(create_registration))
        .route("/steps/:step/validate", post(validate_registration_step))
        .merge(protected)
}

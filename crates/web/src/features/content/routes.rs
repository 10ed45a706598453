use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{
    create_blog, create_event, create_speaker, create_sponsor, get_blog, get_event, get_speaker,
    get_sponsor, list_blogs, list_events, list_speakers, list_sponsors, update_blog, update_event,
    update_speaker, update_sponsor,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn event_routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_event))
        .route("/:id", put(update_event))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_events))
        .route("/:id", get(get_event))
        .merge(protected)
}

pub fn speaker_routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_speaker))
        .route("/:id", put(update_speaker))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_speakers))
        .route("/:id", get(get_speaker))
        .merge(protected)
}

pub fn blog_routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_blog))
        .route("/:id", put(update_blog))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_blogs))
        .route("/:id", get(get_blog))
        .merge(protected)
}

pub fn sponsor_routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_sponsor))
        .route("/:id", put(update_sponsor))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_sponsors))
        .route("/:id", get(get_sponsor))
        .merge(protected)
}

use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{get_user, list_users, register_user};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/register", post(register_user))
        .merge(protected)
}

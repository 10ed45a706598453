use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::features::{contact, content, pages, registration, users};
use crate::middleware::auth::ApiKeys;
use crate::state::AppState;

/// Builds the `/api` router with every feature mounted.
pub fn router(state: AppState, api_keys: ApiKeys) -> Router {
    let api = Router::new()
        .nest(
            "/festival-events",
            registration::routes::festival_event_routes(),
        )
        .nest(
            "/registrations",
            registration::routes::routes(api_keys.clone()),
        )
        .nest("/events", content::routes::event_routes(api_keys.clone()))
        .nest("/speakers", content::routes::speaker_routes(api_keys.clone()))
        .nest("/blogs", content::routes::blog_routes(api_keys.clone()))
        .nest("/sponsors", content::routes::sponsor_routes(api_keys.clone()))
        .nest("/contact", contact::routes::routes())
        .nest("/pages", pages::routes::routes())
        .merge(users::routes::routes(api_keys));

    Router::new()
        .nest("/api", api)
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

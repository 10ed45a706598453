use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::models::{BlogPost, EventListing, Speaker, Sponsor, Stored};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all events", body = [Stored<EventListing>])
    ),
    tag = "content"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Response, WebError> {
    let items = services::list(&state.content.events).await;

    Ok(Json(items).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = Stored<EventListing>),
        (status = 404, description = "Event not found")
    ),
    tag = "content"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let item = services::get(&state.content.events, id).await?;

    Ok(Json(item).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = EventListing,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created", body = Stored<EventListing>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "content"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<EventListing>,
) -> Result<Response, WebError> {
    let item = services::create(&state.content.events, "event", payload).await?;

    Ok((StatusCode::CREATED, Json(item)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    request_body = EventListing,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event updated", body = Stored<EventListing>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "content"
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EventListing>,
) -> Result<Response, WebError> {
    let item = services::update(&state.content.events, "event", id, payload).await?;

    Ok(Json(item).into_response())
}

#[utoipa::path(
    get,
    path = "/api/speakers",
    responses(
        (status = 200, description = "List all speakers", body = [Stored<Speaker>])
    ),
    tag = "content"
)]
pub async fn list_speakers(State(state): State<AppState>) -> Result<Response, WebError> {
    let items = services::list(&state.content.speakers).await;

    Ok(Json(items).into_response())
}

#[utoipa::path(
    get,
    path = "/api/speakers/{id}",
    params(
        ("id" = i64, Path, description = "Speaker id")
    ),
    responses(
        (status = 200, description = "Speaker found", body = Stored<Speaker>),
        (status = 404, description = "Speaker not found")
    ),
    tag = "content"
)]
pub async fn get_speaker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let item = services::get(&state.content.speakers, id).await?;

    Ok(Json(item).into_response())
}

#[utoipa::path(
    post,
    path = "/api/speakers",
    request_body = Speaker,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Speaker created", body = Stored<Speaker>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "content"
)]
pub async fn create_speaker(
    State(state): State<AppState>,
    Json(payload): Json<Speaker>,
) -> Result<Response, WebError> {
    let item = services::create(&state.content.speakers, "speaker", payload).await?;

    Ok((StatusCode::CREATED, Json(item)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/speakers/{id}",
    params(
        ("id" = i64, Path, description = "Speaker id")
    ),
    request_body = Speaker,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Speaker updated", body = Stored<Speaker>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Speaker not found")
    ),
    tag = "content"
)]
pub async fn update_speaker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Speaker>,
) -> Result<Response, WebError> {
    let item = services::update(&state.content.speakers, "speaker", id, payload).await?;

    Ok(Json(item).into_response())
}

#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "List all blogs", body = [Stored<BlogPost>])
    ),
    tag = "content"
)]
pub async fn list_blogs(State(state): State<AppState>) -> Result<Response, WebError> {
    let items = services::list(&state.content.blogs).await;

    Ok(Json(items).into_response())
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(
        ("id" = i64, Path, description = "Blog post id")
    ),
    responses(
        (status = 200, description = "Blog post found", body = Stored<BlogPost>),
        (status = 404, description = "Blog post not found")
    ),
    tag = "content"
)]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let item = services::get(&state.content.blogs, id).await?;

    Ok(Json(item).into_response())
}

#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = BlogPost,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Blog post created", body = Stored<BlogPost>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "content"
)]
pub async fn create_blog(
    State(state): State<AppState>,
    Json(payload): Json<BlogPost>,
) -> Result<Response, WebError> {
    let item = services::create(&state.content.blogs, "blog", payload).await?;

    Ok((StatusCode::CREATED, Json(item)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    params(
        ("id" = i64, Path, description = "Blog post id")
    ),
    request_body = BlogPost,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Blog post updated", body = Stored<BlogPost>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Blog post not found")
    ),
    tag = "content"
)]
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<BlogPost>,
) -> Result<Response, WebError> {
    let item = services::update(&state.content.blogs, "blog", id, payload).await?;

    Ok(Json(item).into_response())
}

#[utoipa::path(
    get,
    path = "/api/sponsors",
    responses(
        (status = 200, description = "List all sponsors", body = [Stored<Sponsor>])
    ),
    tag = "content"
)]
pub async fn list_sponsors(State(state): State<AppState>) -> Result<Response, WebError> {
    let items = services::list(&state.content.sponsors).await;

    Ok(Json(items).into_response())
}

#[utoipa::path(
    get,
    path = "/api/sponsors/{id}",
    params(
        ("id" = i64, Path, description = "Sponsor id")
    ),
    responses(
        (status = 200, description = "Sponsor found", body = Stored<Sponsor>),
        (status = 404, description = "Sponsor not found")
    ),
    tag = "content"
)]
pub async fn get_sponsor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let item = services::get(&state.content.sponsors, id).await?;

    Ok(Json(item).into_response())
}

#[utoipa::path(
    post,
    path = "/api/sponsors",
    request_body = Sponsor,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Sponsor created", body = Stored<Sponsor>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "content"
)]
pub async fn create_sponsor(
    State(state): State<AppState>,
    Json(payload): Json<Sponsor>,
) -> Result<Response, WebError> {
    let item = services::create(&state.content.sponsors, "sponsor", payload).await?;

    Ok((StatusCode::CREATED, Json(item)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/sponsors/{id}",
    params(
        ("id" = i64, Path, description = "Sponsor id")
    ),
    request_body = Sponsor,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Sponsor updated", body = Stored<Sponsor>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Sponsor not found")
    ),
    tag = "content"
)]
pub async fn update_sponsor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Sponsor>,
) -> Result<Response, WebError> {
    let item = services::update(&state.content.sponsors, "sponsor", id, payload).await?;

    Ok(Json(item).into_response())
}

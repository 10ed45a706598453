use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::error::WebError;
use crate::state::AppState;

use super::services::{self, Page, PageView};

#[utoipa::path(
    get,
    path = "/api/pages",
    responses(
        (status = 200, description = "Home page view", body = PageView)
    ),
    tag = "pages"
)]
pub async fn get_home_page(State(state): State<AppState>) -> Result<Response, WebError> {
    render(&state, Page::Home).await
}

#[utoipa::path(
    get,
    path = "/api/pages/{path}",
    params(
        ("path" = String, Path, description = "Site path, e.g. `events` or `blog/3`")
    ),
    responses(
        (status = 200, description = "Page view", body = PageView),
        (status = 404, description = "No page at this path")
    ),
    tag = "pages"
)]
pub async fn get_page(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, WebError> {
    let page = Page::resolve(&path).ok_or(WebError::NotFound)?;
    render(&state, page).await
}

async fn render(state: &AppState, page: Page) -> Result<Response, WebError> {
    let view = services::render(page, &state.content, state.registrations.as_ref()).await?;

    Ok(Json(view).into_response())
}

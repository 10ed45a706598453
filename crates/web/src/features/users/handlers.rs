use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    dto::user::{RegisterUserRequest, UserLookup},
    models::{Stored, UserProfile},
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "User registered", body = Stored<UserProfile>),
        (status = 400, description = "Name or email missing"),
        (status = 500, description = "User could not be stored")
    ),
    tag = "users"
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let profile = req
        .into_profile()
        .ok_or_else(|| WebError::BadRequest("Name and email are required".to_string()))?;
    let user = services::register_user(&state.content, profile).await?;

    Ok(Json(user).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(UserLookup),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All users, or the user matching `email`", body = [Stored<UserProfile>]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No user with that email")
    ),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(lookup): Query<UserLookup>,
) -> Result<Response, WebError> {
    let users = match lookup.email.as_deref() {
        Some(email) => vec![services::find_user_by_email(&state.content, email).await?],
        None => services::list_users(&state.content).await,
    };

    Ok(Json(users).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "User found", body = Stored<UserProfile>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let user = services::get_user(&state.content, id).await?;

    Ok(Json(user).into_response())
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::testing::{TEST_API_KEY, TestApp};

    #[tokio::test]
    async fn test_register_without_fields_is_400() {
        let app = TestApp::new();
        let (status, body) = app.post("/api/register", json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["details"],
            json!(["email: Email is required", "name: Name is required"])
        );
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let app = TestApp::new();
        let (status, body) = app
            .post("/api/register", json!({ "name": "   ", "email": "a@b.com" }))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"], json!(["name: Name is required"]));
        assert!(app.content.users.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_register_then_lookup_by_email() {
        let app = TestApp::new();
        let (status, body) = app
            .post("/api/register", json!({ "name": "A", "email": "a@b.com" }))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        assert_eq!(body["email"], "a@b.com");

        let stored = app.content.find_user_by_email("a@b.com").await.unwrap();
        assert_eq!(stored.data.name, "A");

        let (status, found) = app
            .send(Method::GET, "/api/users?email=a@b.com", None, Some(TEST_API_KEY))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found[0]["name"], "A");
    }

    #[tokio::test]
    async fn test_user_endpoints_are_protected() {
        let app = TestApp::new();

        let (status, _) = app.get("/api/users").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = app
            .send(Method::GET, "/api/users/1", None, Some("wrong-key"))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_user_is_404() {
        let app = TestApp::new();

        let (status, _) = app
            .send(Method::GET, "/api/users/7", None, Some(TEST_API_KEY))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = app
            .send(Method::GET, "/api/users?email=x@y.com", None, Some(TEST_API_KEY))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

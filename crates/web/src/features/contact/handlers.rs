use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::contact::{ContactRequest, MessageResponse};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message sent", body = MessageResponse),
        (status = 400, description = "Missing or invalid field", body = MessageResponse),
        (status = 500, description = "Email could not be sent", body = MessageResponse)
    ),
    tag = "contact"
)]
pub async fn send_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let message = req
        .into_message()
        .ok_or_else(|| WebError::BadRequest("All fields are required".to_string()))?;
    services::send_contact_message(state.mailer.as_ref(), &message).await?;

    Ok(Json(MessageResponse {
        message: "Message sent successfully".to_string(),
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::mail::SmtpMailer;
    use crate::testing::TestApp;

    fn submission() -> serde_json::Value {
        json!({
            "name": "Asha Rao",
            "email": "asha@example.com",
            "subject": "Stall booking",
            "message": "Is there space left?"
        })
    }

    #[tokio::test]
    async fn test_complete_submission_is_sent() {
        let app = TestApp::new();
        let (status, body) = app.post("/api/contact", submission()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Message sent successfully");

        let sent = app.mailer.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Stall booking");
    }

    #[tokio::test]
    async fn test_missing_message_is_400() {
        let app = TestApp::new();
        let mut payload = submission();
        payload.as_object_mut().unwrap().remove("message");

        let (status, body) = app.post("/api/contact", payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"], json!(["message: Message is required"]));
        assert!(app.mailer.sent().await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_credentials_is_500() {
        let app = TestApp::with_mailer(Arc::new(SmtpMailer::new(None).unwrap()));
        let (status, body) = app.post("/api/contact", submission()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to send message");
    }
}

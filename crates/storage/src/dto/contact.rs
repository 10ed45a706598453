use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for `POST /api/contact`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    #[validate(required(message = "Name is required"), length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,

    #[validate(required(message = "Email is required"), email(message = "Enter a valid email address"))]
    pub email: Option<String>,

    #[validate(required(message = "Subject is required"), length(min = 1, max = 255, message = "Subject must be between 1 and 255 characters"))]
    pub subject: Option<String>,

    #[validate(required(message = "Message is required"), length(min = 1, max = 5000, message = "Message must be between 1 and 5000 characters"))]
    pub message: Option<String>,
}

/// A contact submission with every field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    pub fn into_message(self) -> Option<ContactMessage> {
        Some(ContactMessage {
            name: self.name?,
            email: self.email?,
            subject: self.subject?,
            message: self.message?,
        })
    }
}

/// Body returned by the contact endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldErrors;

    #[test]
    fn test_missing_message_is_reported() {
        let req = ContactRequest {
            name: Some("Asha".to_string()),
            email: Some("asha@example.com".to_string()),
            subject: Some("Tickets".to_string()),
            message: None,
        };

        let errors = FieldErrors::from(req.validate().unwrap_err());
        assert_eq!(errors.details(), vec!["message: Message is required"]);
    }
}

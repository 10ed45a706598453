use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::models::UserProfile;

/// Request payload for `POST /api/register`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    #[validate(required(message = "Name is required"), length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(required(message = "Email is required"), email(message = "Enter a valid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[validate(length(max = 255))]
    pub school: Option<String>,
}

impl RegisterUserRequest {
    /// Converts a validated request into the stored profile. Returns `None`
    /// when a required field is absent.
    pub fn into_profile(self) -> Option<UserProfile> {
        Some(UserProfile {
            name: self.name?.trim().to_string(),
            email: self.email?.trim().to_string(),
            phone: self.phone,
            school: self.school,
        })
    }
}

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Name is required".into()));
    }
    Ok(())
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct UserLookup {
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldErrors;

    #[test]
    fn test_missing_name_and_email() {
        let errors = FieldErrors::from(RegisterUserRequest::default().validate().unwrap_err());
        assert_eq!(errors.messages("name"), ["Name is required"]);
        assert_eq!(errors.messages("email"), ["Email is required"]);
    }

    #[test]
    fn test_blank_name_is_required() {
        let req = RegisterUserRequest {
            name: Some("   ".to_string()),
            email: Some("a@b.com".to_string()),
            ..Default::default()
        };

        let errors = FieldErrors::from(req.validate().unwrap_err());
        assert_eq!(errors.messages("name"), ["Name is required"]);
    }

    #[test]
    fn test_minimal_request_is_valid() {
        let req = RegisterUserRequest {
            name: Some("A".to_string()),
            email: Some("a@b.com".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_ok());

        let profile = req.into_profile().unwrap();
        assert_eq!(profile.name, "A");
        assert_eq!(profile.email, "a@b.com");
    }
}

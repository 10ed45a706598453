use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Sponsor {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_tier"))]
    pub tier: String,

    #[validate(url)]
    pub logo_url: Option<String>,

    #[validate(url)]
    pub website: Option<String>,
}

fn validate_tier(tier: &str) -> Result<(), validator::ValidationError> {
    const VALID_TIERS: &[&str] = &["title", "gold", "silver", "bronze", "partner"];

    if VALID_TIERS.contains(&tier) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_tier"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tier_is_rejected() {
        let sponsor = Sponsor {
            name: "Acme".to_string(),
            tier: "platinum".to_string(),
            logo_url: None,
            website: Some("https://acme.example".to_string()),
        };

        let errors = sponsor.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("tier"));
    }
}

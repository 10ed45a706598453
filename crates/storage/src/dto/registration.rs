use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{Participant, School};

static SCHOOL_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 .,'&()\-]+$").expect("school name pattern"));

static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s.,'#/():\-]+$").expect("address pattern"));

static PERSON_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z .'\-]+$").expect("person name pattern"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,12}$").expect("phone pattern"));

/// Step 1: the registering school
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct SchoolDetails {
    #[validate(length(
        min = 3,
        max = 100,
        message = "School name must be between 3 and 100 characters"
    ))]
    #[validate(custom(function = "validate_school_name"))]
    pub name: String,

    #[validate(length(
        min = 10,
        max = 200,
        message = "Address must be between 10 and 200 characters"
    ))]
    #[validate(custom(function = "validate_address"))]
    pub address: String,
}

/// Step 2: the coordinator representing the school
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CoordinatorDetails {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Coordinator name must be between 3 and 50 characters"
    ))]
    #[validate(custom(function = "validate_person_name"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address"))]
    #[validate(length(max = 255))]
    pub email: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
}

/// One filled participant slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ParticipantEntry {
    pub category_id: i32,

    #[validate(range(min = 1, message = "Slot number must be at least 1"))]
    pub slot_number: i16,

    #[validate(length(
        min = 2,
        max = 50,
        message = "Participant name must be between 2 and 50 characters"
    ))]
    #[validate(custom(function = "validate_person_name"))]
    pub name: String,

    #[validate(range(min = 1, max = 12, message = "Class must be between 1 and 12"))]
    pub class: i16,
}

/// Step 3: the selected event and its participants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ParticipantSelection {
    #[validate(range(min = 1, message = "Select an event"))]
    pub event_id: i32,

    #[validate(
        length(min = 1, message = "Add at least one participant"),
        nested
    )]
    pub participants: Vec<ParticipantEntry>,
}

/// Request payload for submitting a complete registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrationRequest {
    #[validate(nested)]
    pub school: SchoolDetails,

    #[validate(nested)]
    pub coordinator: CoordinatorDetails,

    #[validate(range(min = 1, message = "Select an event"))]
    pub event_id: i32,

    #[validate(
        length(min = 1, message = "Add at least one participant"),
        nested
    )]
    pub participants: Vec<ParticipantEntry>,
}

/// A stored registration: the school row and every participant row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub school_id: String,
    pub school: School,
    pub participants: Vec<Participant>,
}

// Validation helpers
fn validate_school_name(name: &str) -> Result<(), ValidationError> {
    matches_pattern(
        name,
        &SCHOOL_NAME_PATTERN,
        "invalid_school_name",
        "School name may only contain letters, numbers, spaces and . , ' & ( ) -",
    )
}

fn validate_address(address: &str) -> Result<(), ValidationError> {
    matches_pattern(
        address,
        &ADDRESS_PATTERN,
        "invalid_address",
        "Address may only contain letters, numbers, spaces and . , ' # / ( ) : -",
    )
}

fn validate_person_name(name: &str) -> Result<(), ValidationError> {
    matches_pattern(
        name,
        &PERSON_NAME_PATTERN,
        "invalid_name",
        "Name may only contain letters, spaces and . ' -",
    )
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone")
            .with_message("Phone number must be 10 to 12 digits, optionally starting with +".into()))
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

fn matches_pattern(
    value: &str,
    pattern: &Regex,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("This field is required".into()));
    }

    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(code).with_message(message.into()))
    }
}

impl From<CreateRegistrationRequest> for ParticipantSelection {
    fn from(req: CreateRegistrationRequest) -> Self {
        Self {
            event_id: req.event_id,
            participants: req.participants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldErrors;

    fn school(name: &str, address: &str) -> SchoolDetails {
        SchoolDetails {
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn test_valid_school_step() {
        assert!(school("St. Mary's High (North)", "12 Park Road, Springfield").validate().is_ok());
        assert!(school("ABC", "Plot #4/7, Sector 2").validate().is_ok());
    }

    #[test]
    fn test_school_name_bounds() {
        let errors = FieldErrors::from(school("AB", "12 Park Road, Springfield").validate().unwrap_err());
        assert_eq!(
            errors.messages("name"),
            ["School name must be between 3 and 100 characters"]
        );

        let long_name = "A".repeat(101);
        let errors = FieldErrors::from(school(&long_name, "12 Park Road, Springfield").validate().unwrap_err());
        assert!(errors.contains("name"));
        assert!(!errors.contains("address"));
    }

    #[test]
    fn test_school_name_characters() {
        let errors = FieldErrors::from(school("School <script>", "12 Park Road, Springfield").validate().unwrap_err());
        assert_eq!(
            errors.messages("name"),
            ["School name may only contain letters, numbers, spaces and . , ' & ( ) -"]
        );
    }

    #[test]
    fn test_address_bounds() {
        let errors = FieldErrors::from(school("Central School", "Short st").validate().unwrap_err());
        assert_eq!(
            errors.messages("address"),
            ["Address must be between 10 and 200 characters"]
        );

        let long_address = "a".repeat(201);
        assert!(school("Central School", &long_address).validate().is_err());
    }

    #[test]
    fn test_blank_name_is_required() {
        let errors = FieldErrors::from(school("     ", "12 Park Road, Springfield").validate().unwrap_err());
        assert_eq!(errors.messages("name"), ["This field is required"]);
    }

    #[test]
    fn test_phone_pattern() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("+919876543210"));
        assert!(is_valid_phone("123456789012"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("notaphone"));
        assert!(!is_valid_phone("1234567890123"));
        assert!(!is_valid_phone("98765 43210"));
    }

    #[test]
    fn test_coordinator_step() {
        let coordinator = CoordinatorDetails {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+919876543210".to_string(),
        };
        assert!(coordinator.validate().is_ok());

        let bad = CoordinatorDetails {
            name: "Asha Rao".to_string(),
            email: "not-an-email".to_string(),
            phone: "123".to_string(),
        };
        let errors = FieldErrors::from(bad.validate().unwrap_err());
        assert_eq!(errors.messages("email"), ["Enter a valid email address"]);
        assert_eq!(
            errors.messages("phone"),
            ["Phone number must be 10 to 12 digits, optionally starting with +"]
        );
    }

    #[test]
    fn test_nested_errors_carry_paths() {
        let request = CreateRegistrationRequest {
            school: school("Central School", "12 Park Road, Springfield"),
            coordinator: CoordinatorDetails {
                name: "Asha Rao".to_string(),
                email: "asha@example.com".to_string(),
                phone: "9876543210".to_string(),
            },
            event_id: 1,
            participants: vec![ParticipantEntry {
                category_id: 1,
                slot_number: 1,
                name: "Ravi".to_string(),
                class: 13,
            }],
        };

        let errors = FieldErrors::from(request.validate().unwrap_err());
        assert_eq!(
            errors.messages("participants[0].class"),
            ["Class must be between 1 and 12"]
        );
    }
}

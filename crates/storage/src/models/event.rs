use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An event as advertised on the marketing pages.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EventListing {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,

    #[validate(length(max = 5000))]
    #[serde(default)]
    pub description: String,

    pub date: Option<NaiveDate>,

    #[validate(length(max = 255))]
    pub venue: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,
}

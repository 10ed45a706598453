use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Speaker {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(max = 255))]
    pub title: Option<String>,

    #[validate(length(max = 5000))]
    #[serde(default)]
    pub bio: String,

    #[validate(url)]
    pub image_url: Option<String>,
}

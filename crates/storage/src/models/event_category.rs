use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A class bracket within an event, e.g. "Juniors (1-5)".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventCategory {
    pub id: i32,
    pub name: String,
    pub min_class: i16,
    pub max_class: i16,
}

/// Binds a category to an event and caps the number of participant slots.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventCategoryLink {
    pub event_id: i32,
    pub category_id: i32,
    pub max_participants: i16,
}

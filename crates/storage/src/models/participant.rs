use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Participant {
    pub id: i32,
    pub school_id: String,
    pub event_id: i32,
    pub category_id: i32,
    pub name: String,
    pub class: i16,
    pub slot_number: i16,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub school_id: String,
    pub event_id: i32,
    pub category_id: i32,
    pub name: String,
    pub class: i16,
    pub slot_number: i16,
}

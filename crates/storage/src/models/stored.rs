use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A content record as held by the in-memory store: the payload plus the
/// id and timestamps assigned on write.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Stored<T> {
    pub id: i64,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
    #[serde(flatten)]
    pub data: T,
}

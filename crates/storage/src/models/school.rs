use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A registering institution, keyed by its generated school code.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct School {
    pub school_id: String,
    pub name: String,
    pub address: String,
    pub coordinator_name: String,
    pub coordinator_email: String,
    pub coordinator_phone: String,
    pub created_at: chrono::NaiveDateTime,
}

/// Row to insert into `schools`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchool {
    pub school_id: String,
    pub name: String,
    pub address: String,
    pub coordinator_name: String,
    pub coordinator_email: String,
    pub coordinator_phone: String,
}

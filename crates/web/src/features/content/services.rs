use serde::Serialize;
use storage::{error::Result, models::Stored, repository::content::Collection};
use validator::Validate;

use crate::error::WebError;

pub async fn list<T: Clone>(collection: &Collection<T>) -> Vec<Stored<T>> {
    collection.list().await
}

pub async fn get<T: Clone>(collection: &Collection<T>, id: i64) -> Result<Stored<T>> {
    collection.get(id).await
}

/// Validate and store a new content record
pub async fn create<T>(collection: &Collection<T>, kind: &str, payload: T) -> std::result::Result<Stored<T>, WebError>
where
    T: Clone + Validate + Serialize,
{
    payload.validate()?;

    let record = collection.create(payload).await;
    tracing::info!(kind, id = record.id, "Content created");
    Ok(record)
}

/// Validate and replace an existing content record
pub async fn update<T>(
    collection: &Collection<T>,
    kind: &str,
    id: i64,
    payload: T,
) -> std::result::Result<Stored<T>, WebError>
where
    T: Clone + Validate + Serialize,
{
    payload.validate()?;

    let record = collection.update(id, payload).await?;
    tracing::info!(kind, id, "Content updated");
    Ok(record)
}

use storage::{
    ContentStore,
    error::{Result, StorageError},
    models::{Stored, UserProfile},
};

/// Store a user registered through the website
pub async fn register_user(store: &ContentStore, profile: UserProfile) -> Result<Stored<UserProfile>> {
    let user = store.users.create(profile).await;
    tracing::info!(user_id = user.id, "User registered");
    Ok(user)
}

pub async fn list_users(store: &ContentStore) -> Vec<Stored<UserProfile>> {
    store.users.list().await
}

pub async fn get_user(store: &ContentStore, id: i64) -> Result<Stored<UserProfile>> {
    store.users.get(id).await
}

pub async fn find_user_by_email(store: &ContentStore, email: &str) -> Result<Stored<UserProfile>> {
    store
        .find_user_by_email(email)
        .await
        .ok_or(StorageError::NotFound)
}

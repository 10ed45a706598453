use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{Result, StorageError};
use crate::models::{BlogPost, EventListing, Speaker, Sponsor, Stored, UserProfile};

#[derive(Debug)]
struct CollectionState<T> {
    next_id: i64,
    items: BTreeMap<i64, Stored<T>>,
}

/// Keyed map of one content kind. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct Collection<T> {
    state: RwLock<CollectionState<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            state: RwLock::new(CollectionState {
                next_id: 1,
                items: BTreeMap::new(),
            }),
        }
    }
}

impl<T: Clone> Collection<T> {
    pub async fn create(&self, data: T) -> Stored<T> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let now = Utc::now().naive_utc();
        let record = Stored {
            id,
            created_at: now,
            updated_at: now,
            data,
        };
        state.items.insert(id, record.clone());

        record
    }

    pub async fn get(&self, id: i64) -> Result<Stored<T>> {
        self.state
            .read()
            .await
            .items
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    /// Replaces the payload of an existing record.
    pub async fn update(&self, id: i64, data: T) -> Result<Stored<T>> {
        let mut state = self.state.write().await;
        let record = state.items.get_mut(&id).ok_or(StorageError::NotFound)?;

        record.data = data;
        record.updated_at = Utc::now().naive_utc();

        Ok(record.clone())
    }

    /// All records in id order
    pub async fn list(&self) -> Vec<Stored<T>> {
        self.state.read().await.items.values().cloned().collect()
    }

    pub async fn find<F>(&self, predicate: F) -> Option<Stored<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.state
            .read()
            .await
            .items
            .values()
            .find(|record| predicate(&record.data))
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.items.len()
    }
}

/// Process-local store for the marketing content. Not durable: everything
/// is lost on restart.
#[derive(Debug, Default)]
pub struct ContentStore {
    pub users: Collection<UserProfile>,
    pub events: Collection<EventListing>,
    pub speakers: Collection<Speaker>,
    pub blogs: Collection<BlogPost>,
    pub sponsors: Collection<Sponsor>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_user_by_email(&self, email: &str) -> Option<Stored<UserProfile>> {
        let email = email.trim();
        self.users
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speaker(name: &str) -> Speaker {
        Speaker {
            name: name.to_string(),
            title: None,
            bio: String::new(),
            image_url: None,
        }
    }

    fn user(name: &str, email: &str) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            school: None,
        }
    }

    #[tokio::test]
    async fn test_ids_increase_per_kind() {
        let store = ContentStore::new();

        let first = store.speakers.create(speaker("Ada")).await;
        let second = store.speakers.create(speaker("Grace")).await;
        let user = store.users.create(user("A", "a@b.com")).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(user.id, 1);
        assert_eq!(store.speakers.len().await, 2);
    }

    #[tokio::test]
    async fn test_update_replaces_payload() {
        let store = ContentStore::new();
        let created = store.speakers.create(speaker("Ada")).await;

        let updated = store
            .speakers
            .update(created.id, speaker("Ada Lovelace"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.data.name, "Ada Lovelace");
        assert_eq!(store.speakers.get(created.id).await.unwrap().data.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_update_missing_id_fails() {
        let store = ContentStore::new();
        let result = store.speakers.update(42, speaker("Nobody")).await;
        assert!(matches!(result, Err(StorageError::NotFound)));
        assert!(matches!(store.speakers.get(42).await, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_user_by_email_ignores_case() {
        let store = ContentStore::new();
        store.users.create(user("A", "a@b.com")).await;

        let found = store.find_user_by_email("A@B.com").await.unwrap();
        assert_eq!(found.data.name, "A");
        assert!(store.find_user_by_email("c@d.com").await.is_none());
    }
}

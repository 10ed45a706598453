//! In-process [`RegistrationStore`] over a fixed event catalog.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::dto::festival_event::FestivalEventDetail;
use crate::error::{Result, StorageError};
use crate::models::{NewParticipant, NewSchool, Participant, School};
use crate::repository::registration::RegistrationStore;

#[derive(Debug, Default)]
struct Tables {
    schools: BTreeMap<String, School>,
    participants: Vec<Participant>,
    next_participant_id: i32,
}

#[derive(Debug, Default)]
pub struct MemoryRegistrationStore {
    events: Vec<FestivalEventDetail>,
    tables: RwLock<Tables>,
    fail_participant_inserts: bool,
}

impl MemoryRegistrationStore {
    pub fn new(events: Vec<FestivalEventDetail>) -> Self {
        Self {
            events,
            ..Default::default()
        }
    }

    /// Makes every participant insert fail, leaving school inserts intact.
    pub fn failing_participant_inserts(mut self) -> Self {
        self.fail_participant_inserts = true;
        self
    }

    pub async fn school_count(&self) -> usize {
        self.tables.read().await.schools.len()
    }

    pub async fn participant_count(&self) -> usize {
        self.tables.read().await.participants.len()
    }
}

#[async_trait]
impl RegistrationStore for MemoryRegistrationStore {
    async fn list_festival_events(&self) -> Result<Vec<FestivalEventDetail>> {
        Ok(self.events.clone())
    }

    async fn find_festival_event(&self, event_id: i32) -> Result<FestivalEventDetail> {
        self.events
            .iter()
            .find(|e| e.event_id == event_id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn school_exists(&self, school_id: &str) -> Result<bool> {
        Ok(self.tables.read().await.schools.contains_key(school_id))
    }

    async fn find_school(&self, school_id: &str) -> Result<School> {
        self.tables
            .read()
            .await
            .schools
            .get(school_id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn insert_school(&self, school: &NewSchool) -> Result<School> {
        let mut tables = self.tables.write().await;
        if tables.schools.contains_key(&school.school_id) {
            return Err(StorageError::ConstraintViolation(
                "School id already exists".to_string(),
            ));
        }

        let stored = School {
            school_id: school.school_id.clone(),
            name: school.name.clone(),
            address: school.address.clone(),
            coordinator_name: school.coordinator_name.clone(),
            coordinator_email: school.coordinator_email.clone(),
            coordinator_phone: school.coordinator_phone.clone(),
            created_at: Utc::now().naive_utc(),
        };
        tables
            .schools
            .insert(stored.school_id.clone(), stored.clone());

        Ok(stored)
    }

    async fn insert_participants(
        &self,
        participants: &[NewParticipant],
    ) -> Result<Vec<Participant>> {
        if self.fail_participant_inserts {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }

        let mut tables = self.tables.write().await;
        let now = Utc::now().naive_utc();
        let mut created = Vec::with_capacity(participants.len());
        for p in participants {
            tables.next_participant_id += 1;
            created.push(Participant {
                id: tables.next_participant_id,
                school_id: p.school_id.clone(),
                event_id: p.event_id,
                category_id: p.category_id,
                name: p.name.clone(),
                class: p.class,
                slot_number: p.slot_number,
                created_at: now,
            });
        }
        tables.participants.extend(created.iter().cloned());

        Ok(created)
    }

    async fn list_participants(&self, school_id: &str) -> Result<Vec<Participant>> {
        Ok(self
            .tables
            .read()
            .await
            .participants
            .iter()
            .filter(|p| p.school_id == school_id)
            .cloned()
            .collect())
    }
}

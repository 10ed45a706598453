use async_trait::async_trait;
use sqlx::PgPool;

use crate::dto::festival_event::FestivalEventDetail;
use crate::error::Result;
use crate::models::{NewParticipant, NewSchool, Participant, School};
use crate::repository::festival_event::FestivalEventRepository;
use crate::repository::participant::ParticipantRepository;
use crate::repository::school::SchoolRepository;

/// Persistence seam for the registration workflow.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn list_festival_events(&self) -> Result<Vec<FestivalEventDetail>>;

    /// Fails with `NotFound` when the event does not exist.
    async fn find_festival_event(&self, event_id: i32) -> Result<FestivalEventDetail>;

    async fn school_exists(&self, school_id: &str) -> Result<bool>;

    async fn find_school(&self, school_id: &str) -> Result<School>;

    async fn insert_school(&self, school: &NewSchool) -> Result<School>;

    async fn insert_participants(&self, participants: &[NewParticipant])
    -> Result<Vec<Participant>>;

    async fn list_participants(&self, school_id: &str) -> Result<Vec<Participant>>;
}

/// PostgreSQL-backed registration store
#[derive(Debug, Clone)]
pub struct PgRegistrationStore {
    pool: PgPool,
}

impl PgRegistrationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationStore for PgRegistrationStore {
    async fn list_festival_events(&self) -> Result<Vec<FestivalEventDetail>> {
        FestivalEventRepository::new(&self.pool).list_detailed().await
    }

    async fn find_festival_event(&self, event_id: i32) -> Result<FestivalEventDetail> {
        FestivalEventRepository::new(&self.pool)
            .find_detailed(event_id)
            .await
    }

    async fn school_exists(&self, school_id: &str) -> Result<bool> {
        SchoolRepository::new(&self.pool).exists(school_id).await
    }

    async fn find_school(&self, school_id: &str) -> Result<School> {
        SchoolRepository::new(&self.pool).find_by_id(school_id).await
    }

    async fn insert_school(&self, school: &NewSchool) -> Result<School> {
        SchoolRepository::new(&self.pool).create(school).await
    }

    async fn insert_participants(
        &self,
        participants: &[NewParticipant],
    ) -> Result<Vec<Participant>> {
        ParticipantRepository::new(&self.pool)
            .create_many(participants)
            .await
    }

    async fn list_participants(&self, school_id: &str) -> Result<Vec<Participant>> {
        ParticipantRepository::new(&self.pool)
            .list_by_school(school_id)
            .await
    }
}

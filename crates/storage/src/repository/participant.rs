use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::Result;
use crate::models::{NewParticipant, Participant};

pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the participants registered by one school, in slot order
    pub async fn list_by_school(&self, school_id: &str) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, school_id, event_id, category_id, name, class, slot_number, created_at
            FROM participants
            WHERE school_id = $1
            ORDER BY event_id, category_id, slot_number
            "#,
        )
        .bind(school_id)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Insert every participant in a single statement
    pub async fn create_many(&self, participants: &[NewParticipant]) -> Result<Vec<Participant>> {
        if participants.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO participants (school_id, event_id, category_id, name, class, slot_number) ",
        );

        builder.push_values(participants, |mut row, p| {
            row.push_bind(&p.school_id)
                .push_bind(p.event_id)
                .push_bind(p.category_id)
                .push_bind(&p.name)
                .push_bind(p.class)
                .push_bind(p.slot_number);
        });

        builder.push(
            " RETURNING id, school_id, event_id, category_id, name, class, slot_number, created_at",
        );

        let created = builder
            .build_query_as::<Participant>()
            .fetch_all(self.pool)
            .await?;

        Ok(created)
    }
}

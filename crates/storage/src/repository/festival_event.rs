use sqlx::{FromRow, PgPool};

use crate::dto::festival_event::{CategoryAllocation, FestivalEventDetail};
use crate::error::{Result, StorageError};

/// One event joined with one of its category links (or none)
#[derive(Debug, FromRow)]
struct EventCategoryRow {
    event_id: i32,
    event_name: String,
    category_id: Option<i32>,
    category_name: Option<String>,
    min_class: Option<i16>,
    max_class: Option<i16>,
    max_participants: Option<i16>,
}

pub struct FestivalEventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FestivalEventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every event with its linked categories
    pub async fn list_detailed(&self) -> Result<Vec<FestivalEventDetail>> {
        let rows = sqlx::query_as::<_, EventCategoryRow>(
            r#"
            SELECT e.id AS event_id, e.name AS event_name,
                   c.id AS category_id, c.name AS category_name,
                   c.min_class, c.max_class, l.max_participants
            FROM festival_events e
            LEFT JOIN event_category_links l ON l.event_id = e.id
            LEFT JOIN event_categories c ON c.id = l.category_id
            ORDER BY e.id, c.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(group_rows(rows))
    }

    /// Find one event with its linked categories
    pub async fn find_detailed(&self, event_id: i32) -> Result<FestivalEventDetail> {
        let rows = sqlx::query_as::<_, EventCategoryRow>(
            r#"
            SELECT e.id AS event_id, e.name AS event_name,
                   c.id AS category_id, c.name AS category_name,
                   c.min_class, c.max_class, l.max_participants
            FROM festival_events e
            LEFT JOIN event_category_links l ON l.event_id = e.id
            LEFT JOIN event_categories c ON c.id = l.category_id
            WHERE e.id = $1
            ORDER BY c.id
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        group_rows(rows).pop().ok_or(StorageError::NotFound)
    }
}

fn group_rows(rows: Vec<EventCategoryRow>) -> Vec<FestivalEventDetail> {
    let mut events: Vec<FestivalEventDetail> = Vec::new();

    for row in rows {
        let is_new_event = events.last().is_none_or(|e| e.event_id != row.event_id);
        if is_new_event {
            events.push(FestivalEventDetail {
                event_id: row.event_id,
                name: row.event_name.clone(),
                categories: Vec::new(),
            });
        }

        if let (
            Some(category_id),
            Some(name),
            Some(min_class),
            Some(max_class),
            Some(max_participants),
        ) = (
            row.category_id,
            row.category_name,
            row.min_class,
            row.max_class,
            row.max_participants,
        ) && let Some(event) = events.last_mut()
        {
            event.categories.push(CategoryAllocation {
                category_id,
                name,
                min_class,
                max_class,
                max_participants,
            });
        }
    }

    events
}

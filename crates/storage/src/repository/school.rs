use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{NewSchool, School};

/// Repository for School database operations
pub struct SchoolRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SchoolRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find a school by its generated code
    pub async fn find_by_id(&self, school_id: &str) -> Result<School> {
        let school = sqlx::query_as::<_, School>(
            r#"
            SELECT school_id, name, address, coordinator_name, coordinator_email,
                   coordinator_phone, created_at
            FROM schools
            WHERE school_id = $1
            "#,
        )
        .bind(school_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(school)
    }

    pub async fn exists(&self, school_id: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM schools WHERE school_id = $1)")
                .bind(school_id)
                .fetch_one(self.pool)
                .await?;

        Ok(exists)
    }

    /// Insert a new school
    pub async fn create(&self, school: &NewSchool) -> Result<School> {
        let school = sqlx::query_as::<_, School>(
            r#"
            INSERT INTO schools (
                school_id, name, address, coordinator_name, coordinator_email, coordinator_phone
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING school_id, name, address, coordinator_name, coordinator_email,
                      coordinator_phone, created_at
            "#,
        )
        .bind(&school.school_id)
        .bind(&school.name)
        .bind(&school.address)
        .bind(&school.coordinator_name)
        .bind(&school.coordinator_email)
        .bind(&school.coordinator_phone)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation("School id already exists".to_string())
            } else {
                err
            }
        })?;

        Ok(school)
    }
}

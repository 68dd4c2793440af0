use crate::domain::{models::volunteer::{NewVolunteer, Volunteer}, ports::VolunteerRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

pub struct SqliteVolunteerRepo {
    pool: SqlitePool,
}

impl SqliteVolunteerRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VolunteerRepository for SqliteVolunteerRepo {
    async fn create(&self, volunteer: &NewVolunteer) -> Result<Volunteer, AppError> {
        sqlx::query_as::<_, Volunteer>(
            "INSERT INTO volunteers (name, email, skills, location, availability, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&volunteer.name).bind(&volunteer.email).bind(&volunteer.skills)
            .bind(&volunteer.location).bind(&volunteer.availability).bind(volunteer.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Volunteer>, AppError> {
        sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Volunteer>, AppError> {
        sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers ORDER BY id ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, volunteer: &Volunteer) -> Result<Volunteer, AppError> {
        sqlx::query_as::<_, Volunteer>(
            "UPDATE volunteers SET name = ?, email = ?, skills = ?, location = ?, availability = ?
             WHERE id = ?
             RETURNING *"
        )
            .bind(&volunteer.name).bind(&volunteer.email).bind(&volunteer.skills)
            .bind(&volunteer.location).bind(&volunteer.availability).bind(volunteer.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Volunteer not found".into()))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM volunteers WHERE id = ?")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Volunteer not found".into()));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM volunteers")
            .fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.get::<i64, _>("count"))
    }
}

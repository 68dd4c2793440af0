use crate::domain::{models::volunteer::{NewVolunteer, Volunteer}, ports::VolunteerRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Row};

pub struct PostgresVolunteerRepo {
    pool: PgPool,
}

impl PostgresVolunteerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VolunteerRepository for PostgresVolunteerRepo {
    async fn create(&self, volunteer: &NewVolunteer) -> Result<Volunteer, AppError> {
        sqlx::query_as::<_, Volunteer>(
            "INSERT INTO volunteers (name, email, skills, location, availability, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *"
        )
            .bind(&volunteer.name).bind(&volunteer.email).bind(&volunteer.skills)
            .bind(&volunteer.location).bind(&volunteer.availability).bind(volunteer.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Volunteer>, AppError> {
        sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Volunteer>, AppError> {
        sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers ORDER BY id ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, volunteer: &Volunteer) -> Result<Volunteer, AppError> {
        sqlx::query_as::<_, Volunteer>(
            "UPDATE volunteers SET name = $1, email = $2, skills = $3, location = $4, availability = $5
             WHERE id = $6
             RETURNING *"
        )
            .bind(&volunteer.name).bind(&volunteer.email).bind(&volunteer.skills)
            .bind(&volunteer.location).bind(&volunteer.availability).bind(volunteer.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Volunteer not found".into()))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM volunteers WHERE id = $1")
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

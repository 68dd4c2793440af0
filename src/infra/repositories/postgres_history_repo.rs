use crate::domain::{
    models::participation::{HistoryRecord, HistoryRow, NewParticipation, ParticipationRecord},
    ports::HistoryRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

const HISTORY_SELECT: &str = "\
SELECT h.id, h.volunteer_id, h.event_id, h.participation_status, h.hours_volunteered, \
       h.participation_date, h.feedback, h.created_at, \
       v.name AS volunteer_name, \
       e.title AS event_title, e.date AS event_date, e.location AS event_location, \
       e.required_skills AS event_skills \
FROM volunteer_history h \
LEFT JOIN volunteers v ON v.id = h.volunteer_id \
LEFT JOIN events e ON e.id = h.event_id";

pub struct PostgresHistoryRepo {
    pool: PgPool,
}

impl PostgresHistoryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_records(rows: Vec<HistoryRow>) -> Vec<HistoryRecord> {
    rows.into_iter().map(HistoryRecord::from).collect()
}

#[async_trait]
impl HistoryRepository for PostgresHistoryRepo {
    async fn create(&self, record: &NewParticipation) -> Result<ParticipationRecord, AppError> {
        sqlx::query_as::<_, ParticipationRecord>(
            "INSERT INTO volunteer_history (volunteer_id, event_id, participation_status, participation_date, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *"
        )
            .bind(record.volunteer_id).bind(record.event_id).bind(&record.participation_status)
            .bind(record.participation_date).bind(record.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ParticipationRecord>, AppError> {
        sqlx::query_as::<_, ParticipationRecord>("SELECT * FROM volunteer_history WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_pair(&self, volunteer_id: i64, event_id: i64) -> Result<Option<ParticipationRecord>, AppError> {
        sqlx::query_as::<_, ParticipationRecord>(
            "SELECT * FROM volunteer_history WHERE volunteer_id = $1 AND event_id = $2"
        )
            .bind(volunteer_id).bind(event_id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_volunteer(&self, volunteer_id: i64) -> Result<Vec<HistoryRecord>, AppError> {
        let sql = format!("{HISTORY_SELECT} WHERE h.volunteer_id = $1 ORDER BY h.participation_date DESC, h.id DESC");
        let rows = sqlx::query_as::<_, HistoryRow>(&sql)
            .bind(volunteer_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)?;
        Ok(into_records(rows))
    }

    async fn list_by_event(&self, event_id: i64) -> Result<Vec<HistoryRecord>, AppError> {
        let sql = format!("{HISTORY_SELECT} WHERE h.event_id = $1 ORDER BY h.participation_date DESC, h.id DESC");
        let rows = sqlx::query_as::<_, HistoryRow>(&sql)
            .bind(event_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)?;
        Ok(into_records(rows))
    }

    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<HistoryRecord>, AppError> {
        let sql = format!("{HISTORY_SELECT} ORDER BY h.created_at DESC, h.id DESC LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, HistoryRow>(&sql)
            .bind(limit).bind(offset)
            .fetch_all(&self.pool).await.map_err(AppError::Database)?;
        Ok(into_records(rows))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<HistoryRecord>, AppError> {
        let sql = format!("{HISTORY_SELECT} ORDER BY h.created_at DESC, h.id DESC LIMIT $1");
        let rows = sqlx::query_as::<_, HistoryRow>(&sql)
            .bind(limit)
            .fetch_all(&self.pool).await.map_err(AppError::Database)?;
        Ok(into_records(rows))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM volunteer_history")
            .fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.get::<i64, _>("count"))
    }

    async fn update(&self, record: &ParticipationRecord) -> Result<ParticipationRecord, AppError> {
        sqlx::query_as::<_, ParticipationRecord>(
            "UPDATE volunteer_history SET participation_status = $1, hours_volunteered = $2, feedback = $3
             WHERE id = $4
             RETURNING *"
        )
            .bind(&record.participation_status).bind(record.hours_volunteered).bind(&record.feedback)
            .bind(record.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("History record not found".into()))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM volunteer_history WHERE id = $1")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("History record not found".into()));
        }
        Ok(())
    }

    async fn sum_positive_hours(&self) -> Result<f64, AppError> {
        let result = sqlx::query(
            "SELECT COALESCE(SUM(hours_volunteered), 0.0) as total
             FROM volunteer_history WHERE hours_volunteered > 0"
        )
            .fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.get::<f64, _>("total"))
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<i64, AppError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM volunteer_history WHERE created_at >= $1")
            .bind(since)
            .fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.get::<i64, _>("count"))
    }
}

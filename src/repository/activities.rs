//! Activities repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::activity::{Activity, ActivityQuery, CreateActivity},
};

#[derive(Clone)]
pub struct ActivitiesRepository {
    pool: Pool<Postgres>,
}

impl ActivitiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get an activity by ID scoped to its owner
    pub async fn get_by_id(&self, user_id: i32, id: Uuid) -> AppResult<Activity> {
        sqlx::query_as::<_, Activity>("SELECT * FROM activities WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Activity with id {} not found", id)))
    }

    /// All activities of a user, most recent first
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Activity>> {
        let activities = sqlx::query_as::<_, Activity>(
            r#"
            SELECT * FROM activities
            WHERE user_id = $1
            ORDER BY date DESC NULLS LAST, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }

    /// Search activities with pagination
    pub async fn search(
        &self,
        user_id: i32,
        query: &ActivityQuery,
    ) -> AppResult<(Vec<Activity>, i64)> {
        let page = query.page.unwrap_or(1);
        let per_page = query.per_page.unwrap_or(50);
        let offset = (page - 1) * per_page;

        let (activities, total) = if let Some(ref sport) = query.sport_type {
            let total = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM activities WHERE user_id = $1 AND sport_type = $2",
            )
            .bind(user_id)
            .bind(sport)
            .fetch_one(&self.pool)
            .await?;

            let activities = sqlx::query_as::<_, Activity>(
                r#"
                SELECT * FROM activities
                WHERE user_id = $1 AND sport_type = $2
                ORDER BY date DESC NULLS LAST, created_at DESC
                LIMIT $3 OFFSET $4
                "#,
            )
            .bind(user_id)
            .bind(sport)
            .bind(per_page)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

            (activities, total)
        } else {
            let total =
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM activities WHERE user_id = $1")
                    .bind(user_id)
                    .fetch_one(&self.pool)
                    .await?;

            let activities = sqlx::query_as::<_, Activity>(
                r#"
                SELECT * FROM activities
                WHERE user_id = $1
                ORDER BY date DESC NULLS LAST, created_at DESC
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(user_id)
            .bind(per_page)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

            (activities, total)
        };

        Ok((activities, total))
    }

    /// Create a new activity
    pub async fn create(&self, user_id: i32, activity: &CreateActivity) -> AppResult<Activity> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO activities (
                id, user_id, name, sport_type, distance, elevation_gain,
                elevation_loss, average_speed, max_speed, calories,
                moving_time, date, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&activity.name)
        .bind(&activity.sport_type)
        .bind(activity.distance)
        .bind(activity.elevation_gain)
        .bind(activity.elevation_loss)
        .bind(activity.average_speed)
        .bind(activity.max_speed)
        .bind(activity.calories)
        .bind(activity.moving_time)
        .bind(activity.date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(user_id, id).await
    }

    /// Delete an activity
    pub async fn delete(&self, user_id: i32, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Activity with id {} not found",
                id
            )));
        }

        Ok(())
    }
}

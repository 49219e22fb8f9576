//! Locations repository for database operations

use std::collections::HashMap;

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::enums::PointType,
    models::location::{CreateLocation, CreateVisit, Location, UpdateLocation, Visit},
};

#[derive(Clone)]
pub struct LocationsRepository {
    pool: Pool<Postgres>,
}

impl LocationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a location by ID scoped to its owner, visits attached
    pub async fn get_by_id(&self, user_id: i32, id: Uuid) -> AppResult<Location> {
        let mut location =
            sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Location with id {} not found", id)))?;

        location.visits =
            sqlx::query_as::<_, Visit>("SELECT * FROM visits WHERE location_id = $1 ORDER BY start_date")
                .bind(id)
                .fetch_all(&self.pool)
                .await?;

        Ok(location)
    }

    /// All locations of a user, visits attached
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Location>> {
        let mut locations =
            sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE user_id = $1 ORDER BY created_at")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;

        let visits = sqlx::query_as::<_, Visit>(
            r#"
            SELECT v.* FROM visits v
            JOIN locations l ON l.id = v.location_id
            WHERE l.user_id = $1
            ORDER BY v.start_date
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut by_location: HashMap<Uuid, Vec<Visit>> = HashMap::new();
        for visit in visits {
            by_location.entry(visit.location_id).or_default().push(visit);
        }
        for location in &mut locations {
            if let Some(vs) = by_location.remove(&location.id) {
                location.visits = vs;
            }
        }

        Ok(locations)
    }

    /// Create a new location
    pub async fn create(&self, user_id: i32, location: &CreateLocation) -> AppResult<Location> {
        let now = Utc::now();
        let point_type = location.point_type.unwrap_or(PointType::Waypoint);

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO locations (
                id, user_id, name, point_type, elevation, description,
                difficulty_level, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&location.name)
        .bind(point_type)
        .bind(location.elevation)
        .bind(&location.description)
        .bind(location.difficulty_level)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(user_id, id).await
    }

    /// Update an existing location
    pub async fn update(
        &self,
        user_id: i32,
        id: Uuid,
        location: &UpdateLocation,
    ) -> AppResult<Location> {
        let now = Utc::now();

        let mut sets = vec!["updated_at = $1".to_string()];
        let mut param_idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, param_idx));
                    param_idx += 1;
                }
            };
        }

        add_field!(location.name, "name");
        add_field!(location.point_type, "point_type");
        add_field!(location.elevation, "elevation");
        add_field!(location.description, "description");
        add_field!(location.difficulty_level, "difficulty_level");

        let query = format!(
            "UPDATE locations SET {} WHERE id = ${} AND user_id = ${}",
            sets.join(", "),
            param_idx,
            param_idx + 1
        );

        let mut builder = sqlx::query(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(location.name);
        bind_field!(location.point_type);
        bind_field!(location.elevation);
        bind_field!(location.description);
        bind_field!(location.difficulty_level);

        let result = builder.bind(id).bind(user_id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Location with id {} not found",
                id
            )));
        }

        self.get_by_id(user_id, id).await
    }

    /// Delete a location and its visits
    pub async fn delete(&self, user_id: i32, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Location with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Record a visit at a location
    pub async fn add_visit(
        &self,
        user_id: i32,
        location_id: Uuid,
        visit: &CreateVisit,
    ) -> AppResult<Visit> {
        let owns: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM locations WHERE id = $1 AND user_id = $2)")
                .bind(location_id)
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;
        if !owns {
            return Err(AppError::NotFound(format!(
                "Location with id {} not found",
                location_id
            )));
        }

        let created = sqlx::query_as::<_, Visit>(
            r#"
            INSERT INTO visits (id, location_id, start_date, end_date, notes, weather_conditions)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(location_id)
        .bind(visit.start_date)
        .bind(visit.end_date)
        .bind(&visit.notes)
        .bind(&visit.weather_conditions)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Delete a visit
    pub async fn remove_visit(
        &self,
        user_id: i32,
        location_id: Uuid,
        visit_id: Uuid,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM visits v
            USING locations l
            WHERE v.id = $1 AND v.location_id = $2
              AND l.id = v.location_id AND l.user_id = $3
            "#,
        )
        .bind(visit_id)
        .bind(location_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Visit with id {} not found",
                visit_id
            )));
        }

        Ok(())
    }
}

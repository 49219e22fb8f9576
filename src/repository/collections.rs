//! Collections repository for database operations

use std::collections::HashSet;

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::collection::{Collection, CreateCollection, UpdateCollection},
};

// Every read goes through this shape so location_ids is always present
const COLLECTION_SELECT: &str = r#"
    SELECT c.*, COALESCE(cl.location_ids, ARRAY[]::uuid[]) AS location_ids
    FROM collections c
    LEFT JOIN (
        SELECT collection_id, ARRAY_AGG(location_id) AS location_ids
        FROM collection_locations
        GROUP BY collection_id
    ) cl ON cl.collection_id = c.id
"#;

#[derive(Clone)]
pub struct CollectionsRepository {
    pool: Pool<Postgres>,
}

impl CollectionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a collection by ID scoped to its owner
    pub async fn get_by_id(&self, user_id: i32, id: Uuid) -> AppResult<Collection> {
        let query = format!("{} WHERE c.id = $1 AND c.user_id = $2", COLLECTION_SELECT);

        sqlx::query_as::<_, Collection>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Collection with id {} not found", id)))
    }

    /// All collections of a user
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Collection>> {
        let query = format!(
            "{} WHERE c.user_id = $1 ORDER BY c.created_at",
            COLLECTION_SELECT
        );

        let collections = sqlx::query_as::<_, Collection>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(collections)
    }

    /// Create a new collection and link its locations
    pub async fn create(&self, user_id: i32, collection: &CreateCollection) -> AppResult<Collection> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO collections (
                id, user_id, name, description, route_type, difficulty_level,
                total_distance_km, total_elevation_gain, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&collection.name)
        .bind(&collection.description)
        .bind(collection.route_type)
        .bind(collection.difficulty_level)
        .bind(collection.total_distance_km)
        .bind(collection.total_elevation_gain)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        if !collection.location_ids.is_empty() {
            Self::link_locations(&mut tx, id, user_id, &collection.location_ids).await?;
        }

        tx.commit().await?;

        self.get_by_id(user_id, id).await
    }

    /// Update an existing collection
    pub async fn update(
        &self,
        user_id: i32,
        id: Uuid,
        collection: &UpdateCollection,
    ) -> AppResult<Collection> {
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

        add_field!(collection.name, "name");
        add_field!(collection.description, "description");
        add_field!(collection.route_type, "route_type");
        add_field!(collection.difficulty_level, "difficulty_level");
        add_field!(collection.total_distance_km, "total_distance_km");
        add_field!(collection.total_elevation_gain, "total_elevation_gain");

        let query = format!(
            "UPDATE collections SET {} WHERE id = ${} AND user_id = ${}",
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

        bind_field!(collection.name);
        bind_field!(collection.description);
        bind_field!(collection.route_type);
        bind_field!(collection.difficulty_level);
        bind_field!(collection.total_distance_km);
        bind_field!(collection.total_elevation_gain);

        let result = builder.bind(id).bind(user_id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Collection with id {} not found",
                id
            )));
        }

        self.get_by_id(user_id, id).await
    }

    /// Delete a collection
    pub async fn delete(&self, user_id: i32, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM collections WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Collection with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Replace the set of locations attached to a collection
    pub async fn set_locations(
        &self,
        user_id: i32,
        id: Uuid,
        location_ids: &[Uuid],
    ) -> AppResult<Collection> {
        let owns: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM collections WHERE id = $1 AND user_id = $2)")
                .bind(id)
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;
        if !owns {
            return Err(AppError::NotFound(format!(
                "Collection with id {} not found",
                id
            )));
        }

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM collection_locations WHERE collection_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if !location_ids.is_empty() {
            Self::link_locations(&mut tx, id, user_id, location_ids).await?;
        }

        sqlx::query("UPDATE collections SET updated_at = $1 WHERE id = $2")
            .bind(Utc::now())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.get_by_id(user_id, id).await
    }

    /// Insert links towards locations owned by the same user
    async fn link_locations(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        collection_id: Uuid,
        user_id: i32,
        location_ids: &[Uuid],
    ) -> AppResult<()> {
        let unique: Vec<Uuid> = location_ids
            .iter()
            .copied()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let result = sqlx::query(
            r#"
            INSERT INTO collection_locations (collection_id, location_id)
            SELECT $1, l.id FROM locations l
            WHERE l.user_id = $2 AND l.id = ANY($3)
            "#,
        )
        .bind(collection_id)
        .bind(user_id)
        .bind(&unique)
        .execute(&mut **tx)
        .await?;

        if result.rows_affected() != unique.len() as u64 {
            return Err(AppError::BadRequest(
                "One or more locations do not exist".to_string(),
            ));
        }

        Ok(())
    }
}

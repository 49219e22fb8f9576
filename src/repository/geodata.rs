//! Geography reference counters for the dashboard

use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

/// City, region and country tallies for one user
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoCounters {
    pub visited_city_count: i64,
    pub total_cities: i64,
    pub visited_region_count: i64,
    pub total_regions: i64,
    pub visited_country_count: i64,
    pub total_countries: i64,
}

#[derive(Clone)]
pub struct GeodataRepository {
    pool: Pool<Postgres>,
}

impl GeodataRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Gather the six geography counters for a user
    pub async fn counters_for_user(&self, user_id: i32) -> AppResult<GeoCounters> {
        let visited_city_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM visited_cities WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        let total_cities = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cities")
            .fetch_one(&self.pool)
            .await?;

        let visited_region_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM visited_regions WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        let total_regions = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM regions")
            .fetch_one(&self.pool)
            .await?;

        // Countries follow from visited regions, they are not tracked directly
        let visited_country_count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(DISTINCT r.country_code)
            FROM visited_regions vr
            JOIN regions r ON r.id = vr.region_id
            WHERE vr.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        let total_countries = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM countries")
            .fetch_one(&self.pool)
            .await?;

        Ok(GeoCounters {
            visited_city_count,
            total_cities,
            visited_region_count,
            total_regions,
            visited_country_count,
            total_countries,
        })
    }

    /// Mark a region as visited for a user
    pub async fn mark_region_visited(&self, user_id: i32, region_id: &str) -> AppResult<()> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM regions WHERE id = $1)")
                .bind(region_id)
                .fetch_one(&self.pool)
                .await?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "Region with id {} not found",
                region_id
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO visited_regions (user_id, region_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(region_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Mark a city as visited for a user, along with its region
    pub async fn mark_city_visited(&self, user_id: i32, city_id: &str) -> AppResult<()> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM cities WHERE id = $1)")
                .bind(city_id)
                .fetch_one(&self.pool)
                .await?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "City with id {} not found",
                city_id
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO visited_cities (user_id, city_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(city_id)
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO visited_regions (user_id, region_id)
            SELECT $1, region_id FROM cities WHERE id = $2
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(city_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

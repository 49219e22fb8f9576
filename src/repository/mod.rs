//! Repository layer for database operations

pub mod activities;
pub mod collections;
pub mod geodata;
pub mod locations;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub locations: locations::LocationsRepository,
    pub collections: collections::CollectionsRepository,
    pub activities: activities::ActivitiesRepository,
    pub geodata: geodata::GeodataRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            locations: locations::LocationsRepository::new(pool.clone()),
            collections: collections::CollectionsRepository::new(pool.clone()),
            activities: activities::ActivitiesRepository::new(pool.clone()),
            geodata: geodata::GeodataRepository::new(pool.clone()),
            pool,
        }
    }
}

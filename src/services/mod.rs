//! Business logic services

pub mod activities;
pub mod collections;
pub mod geo;
pub mod locations;
pub mod stats;
pub mod users;

use crate::{
    config::{AuthConfig, StatsConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub locations: locations::LocationsService,
    pub collections: collections::CollectionsService,
    pub activities: activities::ActivitiesService,
    pub geo: geo::GeoService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig, stats_config: StatsConfig) -> Self {
        Self {
            users: users::UsersService::new(repository.clone(), auth_config),
            locations: locations::LocationsService::new(repository.clone()),
            collections: collections::CollectionsService::new(repository.clone()),
            activities: activities::ActivitiesService::new(repository.clone()),
            geo: geo::GeoService::new(repository.clone()),
            stats: stats::StatsService::new(repository, stats_config.visit_policy),
        }
    }
}

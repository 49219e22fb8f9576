//! Data models for Treklog

pub mod activity;
pub mod collection;
pub mod enums;
pub mod location;
pub mod sport;
pub mod stats;
pub mod user;

// Re-export commonly used types
pub use activity::{Activity, MovingTime};
pub use collection::Collection;
pub use enums::{DifficultyLevel, PointType, RouteType};
pub use location::{Location, Visit, VisitPolicy};
pub use sport::{Category, SportType, HIKING_SPORT_TYPES};
pub use stats::StatsResponse;
pub use user::User;

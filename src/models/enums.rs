//! Shared domain enums (stored as text columns)

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// PointType
// ---------------------------------------------------------------------------

/// Semantic role of a location on a trek
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PointType {
    Summit,
    Viewpoint,
    Refuge,
    Campsite,
    WaterSource,
    Pass,
    Trailhead,
    EmergencyShelter,
    Waypoint,
    Other,
}

impl PointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointType::Summit => "summit",
            PointType::Viewpoint => "viewpoint",
            PointType::Refuge => "refuge",
            PointType::Campsite => "campsite",
            PointType::WaterSource => "water_source",
            PointType::Pass => "pass",
            PointType::Trailhead => "trailhead",
            PointType::EmergencyShelter => "emergency_shelter",
            PointType::Waypoint => "waypoint",
            PointType::Other => "other",
        }
    }
}

impl std::fmt::Display for PointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PointType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summit" => Ok(PointType::Summit),
            "viewpoint" => Ok(PointType::Viewpoint),
            "refuge" => Ok(PointType::Refuge),
            "campsite" => Ok(PointType::Campsite),
            "water_source" => Ok(PointType::WaterSource),
            "pass" => Ok(PointType::Pass),
            "trailhead" => Ok(PointType::Trailhead),
            "emergency_shelter" => Ok(PointType::EmergencyShelter),
            "waypoint" => Ok(PointType::Waypoint),
            "other" => Ok(PointType::Other),
            _ => Err(format!("Invalid point type: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for PointType {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for PointType {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for PointType {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// DifficultyLevel
// ---------------------------------------------------------------------------

/// Route difficulty rating; ordering follows increasing severity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Easy,
    Moderate,
    Hard,
    VeryHard,
    Extreme,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Moderate => "moderate",
            DifficultyLevel::Hard => "hard",
            DifficultyLevel::VeryHard => "very_hard",
            DifficultyLevel::Extreme => "extreme",
        }
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DifficultyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(DifficultyLevel::Easy),
            "moderate" => Ok(DifficultyLevel::Moderate),
            "hard" => Ok(DifficultyLevel::Hard),
            "very_hard" => Ok(DifficultyLevel::VeryHard),
            "extreme" => Ok(DifficultyLevel::Extreme),
            _ => Err(format!("Invalid difficulty level: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for DifficultyLevel {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for DifficultyLevel {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for DifficultyLevel {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// RouteType
// ---------------------------------------------------------------------------

/// Shape of a route collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    Circular,
    Linear,
    Traverse,
    MultiDay,
}

impl RouteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Circular => "circular",
            RouteType::Linear => "linear",
            RouteType::Traverse => "traverse",
            RouteType::MultiDay => "multi_day",
        }
    }
}

impl std::fmt::Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RouteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "circular" => Ok(RouteType::Circular),
            "linear" => Ok(RouteType::Linear),
            "traverse" => Ok(RouteType::Traverse),
            "multi_day" => Ok(RouteType::MultiDay),
            _ => Err(format!("Invalid route type: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for RouteType {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for RouteType {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for RouteType {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_type_round_trip() {
        for pt in [
            PointType::Summit,
            PointType::WaterSource,
            PointType::EmergencyShelter,
            PointType::Other,
        ] {
            assert_eq!(pt.as_str().parse::<PointType>().unwrap(), pt);
        }
    }

    #[test]
    fn test_unknown_point_type_is_rejected() {
        assert!("volcano".parse::<PointType>().is_err());
    }

    #[test]
    fn test_difficulty_orders_by_severity() {
        assert!(DifficultyLevel::Easy < DifficultyLevel::Moderate);
        assert!(DifficultyLevel::Moderate < DifficultyLevel::Hard);
        assert!(DifficultyLevel::Hard < DifficultyLevel::VeryHard);
        assert!(DifficultyLevel::VeryHard < DifficultyLevel::Extreme);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(
            "very_hard".parse::<DifficultyLevel>().unwrap(),
            DifficultyLevel::VeryHard
        );
        assert!("impossible".parse::<DifficultyLevel>().is_err());
    }
}

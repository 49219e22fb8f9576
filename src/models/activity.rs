//! Activity model and moving time handling

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::postgres::types::PgInterval;
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::sport::SportType;

/// Elapsed moving time, stored as a Postgres interval and serialized
/// as whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingTime(pub chrono::Duration);

impl MovingTime {
    pub fn from_seconds(secs: i64) -> Self {
        MovingTime(chrono::Duration::seconds(secs))
    }

    pub fn as_seconds(&self) -> i64 {
        self.0.num_seconds()
    }
}

impl Serialize for MovingTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_seconds())
    }
}

impl<'de> Deserialize<'de> for MovingTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let secs = i64::deserialize(deserializer)?;
        Ok(MovingTime::from_seconds(secs))
    }
}

impl sqlx::Type<Postgres> for MovingTime {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <PgInterval as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for MovingTime {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let interval: PgInterval = Decode::<Postgres>::decode(value)?;
        // Postgres months have no fixed length; 30 days is the storage convention
        let days = i64::from(interval.days) + i64::from(interval.months) * 30;
        let duration =
            chrono::Duration::days(days) + chrono::Duration::microseconds(interval.microseconds);
        Ok(MovingTime(duration))
    }
}

impl Encode<'_, Postgres> for MovingTime {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let interval = PgInterval {
            months: 0,
            days: 0,
            microseconds: self.0.num_microseconds().unwrap_or(i64::MAX),
        };
        <PgInterval as Encode<Postgres>>::encode(interval, buf)
    }
}

impl<'s> ToSchema<'s> for MovingTime {
    fn schema() -> (
        &'s str,
        utoipa::openapi::RefOr<utoipa::openapi::schema::Schema>,
    ) {
        (
            "MovingTime",
            utoipa::openapi::ObjectBuilder::new()
                .schema_type(utoipa::openapi::SchemaType::Integer)
                .format(Some(utoipa::openapi::SchemaFormat::KnownFormat(
                    utoipa::openapi::KnownFormat::Int64,
                )))
                .description(Some("Moving time in seconds"))
                .into(),
        )
    }
}

/// A tracked outdoor activity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: i32,
    pub name: Option<String>,
    /// Raw sport label as recorded by the tracker
    pub sport_type: String,
    /// Distance in kilometers
    pub distance: Option<f64>,
    /// Cumulated ascent in meters
    pub elevation_gain: Option<f64>,
    pub elevation_loss: Option<f64>,
    /// Average speed in km/h
    pub average_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub calories: Option<f64>,
    pub moving_time: Option<MovingTime>,
    pub date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Parsed sport type; None when the label is outside our vocabulary
    pub fn sport(&self) -> Option<SportType> {
        SportType::parse(&self.sport_type)
    }
}

/// Create activity request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateActivity {
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Sport type is required"))]
    pub sport_type: String,
    pub distance: Option<f64>,
    pub elevation_gain: Option<f64>,
    pub elevation_loss: Option<f64>,
    pub average_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub calories: Option<f64>,
    /// Moving time in seconds
    pub moving_time: Option<MovingTime>,
    pub date: Option<DateTime<Utc>>,
}

/// Activity list query parameters
#[derive(Debug, Deserialize, utoipa::IntoParams, ToSchema)]
pub struct ActivityQuery {
    /// Keep only activities with this exact sport label
    pub sport_type: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_time_seconds_round_trip() {
        let mt = MovingTime::from_seconds(3661);
        assert_eq!(mt.as_seconds(), 3661);
    }

    #[test]
    fn test_moving_time_serializes_as_seconds() {
        let mt = MovingTime::from_seconds(5400);
        assert_eq!(serde_json::to_value(mt).unwrap(), serde_json::json!(5400));
    }

    #[test]
    fn test_moving_time_deserializes_from_seconds() {
        let mt: MovingTime = serde_json::from_value(serde_json::json!(90)).unwrap();
        assert_eq!(mt.as_seconds(), 90);
    }

    #[test]
    fn test_activity_sport_parses_raw_label() {
        let activity = Activity {
            id: Uuid::new_v4(),
            user_id: 1,
            name: None,
            sport_type: "trail run".to_string(),
            distance: None,
            elevation_gain: None,
            elevation_loss: None,
            average_speed: None,
            max_speed: None,
            calories: None,
            moving_time: None,
            date: None,
            created_at: Utc::now(),
        };
        assert_eq!(activity.sport(), Some(SportType::TrailRun));
    }
}

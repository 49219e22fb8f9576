//! Sport type taxonomy and category partition

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Recognized sport types, named after the tracker export vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SportType {
    Hike,
    Walk,
    TrailRun,
    Snowshoe,
    BackcountrySki,
    Ride,
    MountainBikeRide,
    GravelRide,
    EBikeRide,
    Run,
    VirtualRun,
    Swim,
    Kayaking,
    Canoeing,
    Rowing,
    StandUpPaddling,
    Surfing,
    Sailing,
    AlpineSki,
    NordicSki,
    Snowboard,
    IceSkate,
    Workout,
    WeightTraining,
    Yoga,
    RockClimbing,
    Golf,
}

/// Activity categories used for the per-category breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Hiking,
    Cycling,
    Running,
    Water,
    Winter,
    Other,
}

/// Sport types whose activities feed the trekking summary
pub const HIKING_SPORT_TYPES: [SportType; 5] = [
    SportType::Hike,
    SportType::Walk,
    SportType::TrailRun,
    SportType::BackcountrySki,
    SportType::Snowshoe,
];

static NORMALIZE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

impl SportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SportType::Hike => "Hike",
            SportType::Walk => "Walk",
            SportType::TrailRun => "TrailRun",
            SportType::Snowshoe => "Snowshoe",
            SportType::BackcountrySki => "BackcountrySki",
            SportType::Ride => "Ride",
            SportType::MountainBikeRide => "MountainBikeRide",
            SportType::GravelRide => "GravelRide",
            SportType::EBikeRide => "EBikeRide",
            SportType::Run => "Run",
            SportType::VirtualRun => "VirtualRun",
            SportType::Swim => "Swim",
            SportType::Kayaking => "Kayaking",
            SportType::Canoeing => "Canoeing",
            SportType::Rowing => "Rowing",
            SportType::StandUpPaddling => "StandUpPaddling",
            SportType::Surfing => "Surfing",
            SportType::Sailing => "Sailing",
            SportType::AlpineSki => "AlpineSki",
            SportType::NordicSki => "NordicSki",
            SportType::Snowboard => "Snowboard",
            SportType::IceSkate => "IceSkate",
            SportType::Workout => "Workout",
            SportType::WeightTraining => "WeightTraining",
            SportType::Yoga => "Yoga",
            SportType::RockClimbing => "RockClimbing",
            SportType::Golf => "Golf",
        }
    }

    /// Parses a raw sport label, tolerating case, spacing and a few
    /// common aliases. Returns None for vocabulary we do not track.
    pub fn parse(raw: &str) -> Option<SportType> {
        let lowercased = raw.to_lowercase();
        let normalized = NORMALIZE_RE.replace_all(&lowercased, "");
        let sport = match normalized.as_ref() {
            "hike" | "hiking" => SportType::Hike,
            "walk" | "walking" => SportType::Walk,
            "trailrun" | "trailrunning" => SportType::TrailRun,
            "snowshoe" | "snowshoeing" => SportType::Snowshoe,
            "backcountryski" | "backcountryskiing" => SportType::BackcountrySki,
            "ride" | "cycling" | "bike" => SportType::Ride,
            "mountainbikeride" | "mountainbiking" => SportType::MountainBikeRide,
            "gravelride" => SportType::GravelRide,
            "ebikeride" => SportType::EBikeRide,
            "run" | "running" => SportType::Run,
            "virtualrun" => SportType::VirtualRun,
            "swim" | "swimming" => SportType::Swim,
            "kayaking" => SportType::Kayaking,
            "canoeing" => SportType::Canoeing,
            "rowing" => SportType::Rowing,
            "standuppaddling" => SportType::StandUpPaddling,
            "surfing" => SportType::Surfing,
            "sailing" => SportType::Sailing,
            "alpineski" | "alpineskiing" => SportType::AlpineSki,
            "nordicski" | "nordicskiing" => SportType::NordicSki,
            "snowboard" | "snowboarding" => SportType::Snowboard,
            "iceskate" | "iceskating" => SportType::IceSkate,
            "workout" => SportType::Workout,
            "weighttraining" => SportType::WeightTraining,
            "yoga" => SportType::Yoga,
            "rockclimbing" => SportType::RockClimbing,
            "golf" => SportType::Golf,
            _ => return None,
        };
        Some(sport)
    }

    pub fn category(&self) -> Category {
        match self {
            SportType::Hike
            | SportType::Walk
            | SportType::TrailRun
            | SportType::Snowshoe
            | SportType::BackcountrySki => Category::Hiking,
            SportType::Ride
            | SportType::MountainBikeRide
            | SportType::GravelRide
            | SportType::EBikeRide => Category::Cycling,
            SportType::Run | SportType::VirtualRun => Category::Running,
            SportType::Swim
            | SportType::Kayaking
            | SportType::Canoeing
            | SportType::Rowing
            | SportType::StandUpPaddling
            | SportType::Surfing
            | SportType::Sailing => Category::Water,
            SportType::AlpineSki
            | SportType::NordicSki
            | SportType::Snowboard
            | SportType::IceSkate => Category::Winter,
            SportType::Workout
            | SportType::WeightTraining
            | SportType::Yoga
            | SportType::RockClimbing
            | SportType::Golf => Category::Other,
        }
    }

    /// True for sport types counted as hiking in the trekking summary
    pub fn is_hiking(&self) -> bool {
        HIKING_SPORT_TYPES.contains(self)
    }
}

impl std::fmt::Display for SportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Category {
    /// Categories in presentation order
    pub const ALL: [Category; 6] = [
        Category::Hiking,
        Category::Cycling,
        Category::Running,
        Category::Water,
        Category::Winter,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hiking => "hiking",
            Category::Cycling => "cycling",
            Category::Running => "running",
            Category::Water => "water",
            Category::Winter => "winter",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SPORTS: [SportType; 27] = [
        SportType::Hike,
        SportType::Walk,
        SportType::TrailRun,
        SportType::Snowshoe,
        SportType::BackcountrySki,
        SportType::Ride,
        SportType::MountainBikeRide,
        SportType::GravelRide,
        SportType::EBikeRide,
        SportType::Run,
        SportType::VirtualRun,
        SportType::Swim,
        SportType::Kayaking,
        SportType::Canoeing,
        SportType::Rowing,
        SportType::StandUpPaddling,
        SportType::Surfing,
        SportType::Sailing,
        SportType::AlpineSki,
        SportType::NordicSki,
        SportType::Snowboard,
        SportType::IceSkate,
        SportType::Workout,
        SportType::WeightTraining,
        SportType::Yoga,
        SportType::RockClimbing,
        SportType::Golf,
    ];

    #[test]
    fn test_parse_canonical_names() {
        for sport in ALL_SPORTS {
            assert_eq!(SportType::parse(sport.as_str()), Some(sport));
        }
    }

    #[test]
    fn test_parse_tolerates_case_and_spacing() {
        assert_eq!(SportType::parse("trail run"), Some(SportType::TrailRun));
        assert_eq!(SportType::parse("TRAIL_RUN"), Some(SportType::TrailRun));
        assert_eq!(
            SportType::parse("Backcountry Ski"),
            Some(SportType::BackcountrySki)
        );
        assert_eq!(SportType::parse("e-bike ride"), Some(SportType::EBikeRide));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(SportType::parse("hiking"), Some(SportType::Hike));
        assert_eq!(SportType::parse("cycling"), Some(SportType::Ride));
        assert_eq!(SportType::parse("running"), Some(SportType::Run));
        assert_eq!(SportType::parse("swimming"), Some(SportType::Swim));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(SportType::parse("Quidditch"), None);
        assert_eq!(SportType::parse(""), None);
    }

    #[test]
    fn test_hiking_sports_belong_to_hiking_category() {
        for sport in HIKING_SPORT_TYPES {
            assert_eq!(sport.category(), Category::Hiking);
            assert!(sport.is_hiking());
        }
    }

    #[test]
    fn test_categories_partition_the_sports() {
        let mut assigned = 0;
        for category in Category::ALL {
            let members = ALL_SPORTS.iter().filter(|s| s.category() == category).count();
            assert!(members > 0);
            assigned += members;
        }
        assert_eq!(assigned, ALL_SPORTS.len());
    }
}

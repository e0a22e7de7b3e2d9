//! Placement entity representing a named banner slot on a page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Algorithm used to pick one eligible banner per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "rotation_strategy", rename_all = "lowercase")]
pub enum RotationStrategy {
    Random,
    Weighted,
    Ordered,
}

impl RotationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationStrategy::Random => "random",
            RotationStrategy::Weighted => "weighted",
            RotationStrategy::Ordered => "ordered",
        }
    }
}

/// A named slot on a page where one banner is shown per render.
///
/// The `slug` is the stable external identifier used by embed calls;
/// `rotation_cursor` is only meaningful under the ordered strategy and is
/// advanced atomically in storage, never through this struct.
#[derive(Debug, Clone)]
pub struct Placement {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub rotation_strategy: RotationStrategy,
    pub rotation_cursor: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new placement.
#[derive(Debug, Clone)]
pub struct NewPlacement {
    pub slug: String,
    pub name: String,
    pub rotation_strategy: RotationStrategy,
}

/// Partial update for an existing placement. `None` fields are unchanged.
#[derive(Debug, Clone, Default)]
pub struct PlacementPatch {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub rotation_strategy: Option<RotationStrategy>,
}

/// One entry of a placement's banner list as submitted by the admin UI.
#[derive(Debug, Clone)]
pub struct BannerAssignment {
    pub banner_id: i64,
    pub weight_override: Option<i32>,
    pub display_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_serde_roundtrip() {
        let json = serde_json::to_string(&RotationStrategy::Weighted).unwrap();
        assert_eq!(json, "\"weighted\"");

        let parsed: RotationStrategy = serde_json::from_str("\"ordered\"").unwrap();
        assert_eq!(parsed, RotationStrategy::Ordered);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let parsed = serde_json::from_str::<RotationStrategy>("\"round-robin\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_strategy_as_str() {
        assert_eq!(RotationStrategy::Random.as_str(), "random");
        assert_eq!(RotationStrategy::Weighted.as_str(), "weighted");
        assert_eq!(RotationStrategy::Ordered.as_str(), "ordered");
    }
}

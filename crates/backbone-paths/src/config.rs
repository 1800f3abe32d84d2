use backbone_core::BLOCKED_WEIGHT;

/// Tunables for a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathfinderConfig {
    /// Cells whose weight is at or above this value are impassable.
    pub blocked_weight: i32,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            blocked_weight: BLOCKED_WEIGHT,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: PathfinderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, PathfinderConfig::default());
        let cfg: PathfinderConfig = serde_json::from_str(r#"{"blocked_weight":50}"#).unwrap();
        assert_eq!(cfg.blocked_weight, 50);
    }
}

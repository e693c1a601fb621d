//! Construction options for [`RingTopology`](crate::RingTopology).

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Uniform weight applied to every edge. Must lie in `[0., 1.]`.
    pub weight: f64,
    /// Number of vertices the ring starts with.
    pub vertices: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            weight: crate::ring::DEFAULT_WEIGHT,
            vertices: 0,
        }
    }
}

impl RingConfig {
    pub fn with_weight(weight: f64) -> Self {
        Self {
            weight,
            ..Self::default()
        }
    }

    /// Parses options from a JSON document. Missing fields keep their defaults.
    ///
    /// The weight is not range-checked here; that happens when the topology is built.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_an_empty_unit_weight_ring() {
        let cfg = RingConfig::default();
        assert_eq!(cfg.weight, 1.0);
        assert_eq!(cfg.vertices, 0);
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let cfg = RingConfig::from_json(r#"{ "weight": 0.25 }"#).unwrap();
        assert_eq!(cfg, RingConfig::with_weight(0.25));

        let cfg = RingConfig::from_json(r#"{ "vertices": 4 }"#).unwrap();
        assert_eq!(cfg.weight, 1.0);
        assert_eq!(cfg.vertices, 4);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(RingConfig::from_json(r#""ring""#).is_err());
        assert!(RingConfig::from_json(r#"{ "vertices": -1 }"#).is_err());
    }
}

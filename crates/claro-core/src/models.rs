//! Data models for the enhancement pipeline

use serde::{Deserialize, Serialize};

/// Numeric parameters of the enhancement pipeline.
///
/// Passed explicitly into `pipeline::enhance_image` so the pipeline can be
/// unit-tested against synthetic buffers without any global state. The
/// defaults are the production values; the batch driver never overrides
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceOptions {
    /// Lower bound of the min-max contrast rescale of the brightness plane.
    pub contrast_floor: u8,

    /// Upper bound of the min-max contrast rescale. Stays below 255 to
    /// leave headroom for the edge overlay.
    pub contrast_ceiling: u8,

    /// Canny hysteresis low threshold (L1 gradient magnitude).
    pub edge_low: f32,

    /// Canny hysteresis high threshold.
    pub edge_high: f32,

    /// Weight of the contrast-enhanced brightness plane in the final blend.
    pub base_weight: f32,

    /// Weight of the edge map in the final blend.
    pub edge_weight: f32,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            contrast_floor: 50,
            contrast_ceiling: 200,
            edge_low: 20.0,
            edge_high: 60.0,
            base_weight: 0.9,
            edge_weight: 0.1,
        }
    }
}

impl EnhanceOptions {
    /// Validate parameter ranges before running the pipeline.
    pub fn validate(&self) -> Result<(), String> {
        if self.contrast_floor >= self.contrast_ceiling {
            return Err(format!(
                "contrast_floor ({}) must be below contrast_ceiling ({})",
                self.contrast_floor, self.contrast_ceiling
            ));
        }
        if self.edge_low < 0.0 || self.edge_high < self.edge_low {
            return Err(format!(
                "edge thresholds must satisfy 0 <= low <= high, got {} / {}",
                self.edge_low, self.edge_high
            ));
        }
        if !(0.0..=1.0).contains(&self.base_weight) || !(0.0..=1.0).contains(&self.edge_weight) {
            return Err(format!(
                "blend weights must be in 0..=1, got {} / {}",
                self.base_weight, self.edge_weight
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        let options = EnhanceOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.contrast_floor, 50);
        assert_eq!(options.contrast_ceiling, 200);
    }

    #[test]
    fn test_options_serde_roundtrip() {
        let options = EnhanceOptions {
            contrast_floor: 40,
            edge_high: 80.0,
            ..Default::default()
        };

        let json = serde_json::to_string(&options).expect("serialize options");
        let restored: EnhanceOptions = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(restored, options);
    }

    #[test]
    fn test_partial_options_fill_in_defaults() {
        // Omitted fields fall back to the production values
        let options: EnhanceOptions =
            serde_json::from_str(r#"{"edge_low": 10.0, "edge_high": 30.0}"#).expect("deserialize");
        assert_eq!(options.edge_low, 10.0);
        assert_eq!(options.edge_high, 30.0);
        assert_eq!(options.contrast_floor, 50);
        assert_eq!(options.contrast_ceiling, 200);
        assert_eq!(options.base_weight, 0.9);
        assert_eq!(options.edge_weight, 0.1);
    }

    #[test]
    fn test_inverted_contrast_range_is_rejected() {
        let options = EnhanceOptions {
            contrast_floor: 200,
            contrast_ceiling: 50,
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_inverted_edge_thresholds_are_rejected() {
        let options = EnhanceOptions {
            edge_low: 60.0,
            edge_high: 20.0,
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }
}

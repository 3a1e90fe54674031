//! Pipeline configuration.

use crate::error::{Error, Result};
use crate::gradient::GradientOperator;
use crate::hysteresis::HysteresisMode;
use crate::threshold::EdgeLevels;

/// Parameters of the Canny pipeline.
///
/// Defaults: `low_ratio` 0.05, `high_ratio` 0.09, `weak` 70, `strong` 255,
/// `smoothing_kernel_size` 3, `smoothing_sigma` 9, Sobel operator,
/// single-pass hysteresis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CannyConfig {
    /// Low threshold as a fraction of the thinned magnitude maximum
    pub low_ratio: f32,
    /// High threshold as a fraction of the thinned magnitude maximum
    pub high_ratio: f32,
    /// Grid value of weak candidates
    pub weak: u8,
    /// Grid value of confirmed edges
    pub strong: u8,
    /// Number of Gaussian taps per axis (odd)
    pub smoothing_kernel_size: u32,
    /// Gaussian standard deviation
    pub smoothing_sigma: f32,
    pub operator: GradientOperator,
    pub hysteresis: HysteresisMode,
}

impl Default for CannyConfig {
    fn default() -> Self {
        let levels = EdgeLevels::default();
        Self {
            low_ratio: 0.05,
            high_ratio: 0.09,
            weak: levels.weak,
            strong: levels.strong,
            smoothing_kernel_size: 3,
            smoothing_sigma: 9.0,
            operator: GradientOperator::Sobel,
            hysteresis: HysteresisMode::SinglePass,
        }
    }
}

impl CannyConfig {
    pub fn with_ratios(mut self, low_ratio: f32, high_ratio: f32) -> Self {
        self.low_ratio = low_ratio;
        self.high_ratio = high_ratio;
        self
    }

    pub fn with_levels(mut self, levels: EdgeLevels) -> Self {
        self.weak = levels.weak;
        self.strong = levels.strong;
        self
    }

    pub fn with_smoothing(mut self, kernel_size: u32, sigma: f32) -> Self {
        self.smoothing_kernel_size = kernel_size;
        self.smoothing_sigma = sigma;
        self
    }

    pub fn with_operator(mut self, operator: GradientOperator) -> Self {
        self.operator = operator;
        self
    }

    pub fn with_hysteresis(mut self, mode: HysteresisMode) -> Self {
        self.hysteresis = mode;
        self
    }

    pub fn levels(&self) -> EdgeLevels {
        EdgeLevels::new(self.weak, self.strong)
    }

    /// Checks ratios, levels and smoothing parameters.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("low", self.low_ratio), ("high", self.high_ratio)] {
            if !(value > 0.0 && value < 1.0) {
                return Err(Error::InvalidRatio { name, value });
            }
        }
        if self.low_ratio > self.high_ratio {
            return Err(Error::InvertedRatios {
                low: self.low_ratio,
                high: self.high_ratio,
            });
        }
        if !self.levels().is_distinct() {
            return Err(Error::InvalidLevels {
                weak: self.weak,
                strong: self.strong,
            });
        }
        if self.smoothing_kernel_size % 2 == 0 {
            return Err(Error::InvalidKernelSize(self.smoothing_kernel_size));
        }
        if !(self.smoothing_sigma.is_finite() && self.smoothing_sigma > 0.0) {
            return Err(Error::InvalidSigma(self.smoothing_sigma));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_pipeline() {
        let config = CannyConfig::default();
        assert_eq!(config.low_ratio, 0.05);
        assert_eq!(config.high_ratio, 0.09);
        assert_eq!(config.levels(), EdgeLevels::new(70, 255));
        assert_eq!(config.smoothing_kernel_size, 3);
        assert_eq!(config.smoothing_sigma, 9.0);
        assert_eq!(config.operator, GradientOperator::Sobel);
        assert_eq!(config.hysteresis, HysteresisMode::SinglePass);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let base = CannyConfig::default();
        assert_eq!(
            base.with_ratios(0.0, 0.5).validate(),
            Err(Error::InvalidRatio { name: "low", value: 0.0 })
        );
        assert!(matches!(
            base.with_ratios(0.1, f32::NAN).validate(),
            Err(Error::InvalidRatio { name: "high", .. })
        ));
        assert_eq!(
            base.with_ratios(0.5, 0.2).validate(),
            Err(Error::InvertedRatios { low: 0.5, high: 0.2 })
        );
        assert_eq!(
            base.with_levels(EdgeLevels::new(0, 255)).validate(),
            Err(Error::InvalidLevels { weak: 0, strong: 255 })
        );
        assert_eq!(
            base.with_smoothing(4, 1.0).validate(),
            Err(Error::InvalidKernelSize(4))
        );
        assert_eq!(
            base.with_smoothing(5, -1.0).validate(),
            Err(Error::InvalidSigma(-1.0))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: CannyConfig =
            serde_json::from_str(r#"{ "high_ratio": 0.2, "operator": "prewitt", "hysteresis": "flood_fill" }"#)
                .unwrap();
        assert_eq!(config.high_ratio, 0.2);
        assert_eq!(config.low_ratio, 0.05);
        assert_eq!(config.operator, GradientOperator::Prewitt);
        assert_eq!(config.hysteresis, HysteresisMode::FloodFill);
    }
}

use crate::scoring::{APPROVAL_THRESHOLD, CONDITIONAL_THRESHOLD, ColorToken, CompositeScore};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeBand {
    pub start: f64,
    pub end: f64,
    pub token: ColorToken,
}

/// Riskometer: the score needle over red/amber/green zones
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSpec {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub bands: Vec<GaugeBand>,
    /// Approval hurdle marker
    pub threshold: f64,
}

impl GaugeSpec {
    /// Filled fraction of the dial, 0.0-1.0
    pub fn ratio(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Zone the current value falls in
    pub fn band(&self) -> Option<&GaugeBand> {
        self.bands
            .iter()
            .find(|b| self.value >= b.start && self.value < b.end)
            .or_else(|| self.bands.last().filter(|b| self.value == b.end))
    }
}

pub fn build_gauge(score: CompositeScore) -> GaugeSpec {
    GaugeSpec {
        value: score.value(),
        min: CompositeScore::MIN,
        max: CompositeScore::MAX,
        bands: vec![
            GaugeBand {
                start: CompositeScore::MIN,
                end: CONDITIONAL_THRESHOLD,
                token: ColorToken::Red,
            },
            GaugeBand {
                start: CONDITIONAL_THRESHOLD,
                end: APPROVAL_THRESHOLD,
                token: ColorToken::Amber,
            },
            GaugeBand {
                start: APPROVAL_THRESHOLD,
                end: CompositeScore::MAX,
                token: ColorToken::Green,
            },
        ],
        threshold: APPROVAL_THRESHOLD,
    }
}

mod factors;
mod verdict;

pub use factors::*;
pub use verdict::*;

use serde::Serialize;
use std::fmt;

/// Committee weight per factor, in whole percent.
/// Weights: Solvency 25%, Efficiency 15%, Strategic Fit 20%, Collateral 30%, Management 10%
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightVector {
    percent: [u32; 5],
}

pub const WEIGHTS: WeightVector = WeightVector {
    percent: [25, 15, 20, 30, 10],
};

impl WeightVector {
    pub fn percent(&self, factor: Factor) -> u32 {
        self.percent[factor.index()]
    }

    /// Weight as a fraction of one
    pub fn fraction(&self, factor: Factor) -> f64 {
        f64::from(self.percent(factor)) / 100.0
    }

    pub fn total_percent(&self) -> u32 {
        self.percent.iter().sum()
    }
}

/// Weighted committee score on a 0-10 scale
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct CompositeScore(f64);

impl CompositeScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 10.0;

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for CompositeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Calculate the composite score for a set of inputs (0-10).
///
/// The sum is accumulated in hundredths so it is exact; the single division
/// at the end yields the nearest `f64` to the true weighted sum.
pub fn compute_score(inputs: &ScoreInputs) -> CompositeScore {
    let hundredths: u32 = Factor::ALL
        .iter()
        .map(|&factor| u32::from(inputs.get(factor)) * WEIGHTS.percent(factor))
        .sum();

    CompositeScore(f64::from(hundredths) / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert_eq!(WEIGHTS.total_percent(), 100);
        let sum: f64 = Factor::ALL.iter().map(|&f| WEIGHTS.fraction(f)).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weight_per_factor() {
        assert_eq!(WEIGHTS.fraction(Factor::Solvency), 0.25);
        assert_eq!(WEIGHTS.fraction(Factor::Efficiency), 0.15);
        assert_eq!(WEIGHTS.fraction(Factor::StrategicFit), 0.20);
        assert_eq!(WEIGHTS.fraction(Factor::Collateral), 0.30);
        assert_eq!(WEIGHTS.fraction(Factor::Management), 0.10);
    }

    #[test]
    fn test_default_score() {
        let score = compute_score(&ScoreInputs::default());
        assert!((score.value() - 6.05).abs() < 1e-9);
        assert_eq!(score.to_string(), "6.05");
    }

    #[test]
    fn test_extreme_scores() {
        let zero = ScoreInputs::try_new(0, 0, 0, 0, 0).unwrap();
        let ten = ScoreInputs::try_new(10, 10, 10, 10, 10).unwrap();
        assert_eq!(compute_score(&zero).value(), 0.0);
        assert_eq!(compute_score(&ten).value(), 10.0);
    }

    #[test]
    fn test_score_is_idempotent() {
        let inputs = ScoreInputs::try_new(3, 7, 1, 6, 9).unwrap();
        assert_eq!(compute_score(&inputs), compute_score(&inputs));
    }

    #[test]
    fn test_collateral_carries_most_weight() {
        let base = ScoreInputs::try_new(5, 5, 5, 5, 5).unwrap();
        let bumped_collateral = compute_score(&base.adjust(Factor::Collateral, 1));
        let bumped_management = compute_score(&base.adjust(Factor::Management, 1));
        assert!(bumped_collateral > bumped_management);
    }
}

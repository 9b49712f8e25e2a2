use crate::error::ScoringError;
use serde::Serialize;
use std::fmt;

/// Lowest value a risk input may take
pub const INPUT_MIN: u8 = 0;
/// Highest value a risk input may take
pub const INPUT_MAX: u8 = 10;

/// The five committee risk factors.
///
/// Declaration order is the canonical order used everywhere a factor list is
/// rendered or serialized (sliders, radar axes, weight tables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Solvency,
    Efficiency,
    StrategicFit,
    Collateral,
    Management,
}

impl Factor {
    pub const ALL: [Factor; 5] = [
        Factor::Solvency,
        Factor::Efficiency,
        Factor::StrategicFit,
        Factor::Collateral,
        Factor::Management,
    ];

    pub fn index(self) -> usize {
        match self {
            Factor::Solvency => 0,
            Factor::Efficiency => 1,
            Factor::StrategicFit => 2,
            Factor::Collateral => 3,
            Factor::Management => 4,
        }
    }

    /// Short axis name (radar theta labels)
    pub fn name(self) -> &'static str {
        match self {
            Factor::Solvency => "Solvency",
            Factor::Efficiency => "Efficiency",
            Factor::StrategicFit => "Strategic Fit",
            Factor::Collateral => "Collateral",
            Factor::Management => "Management",
        }
    }

    /// Slider caption including the metric behind the factor and its weight
    pub fn caption(self) -> &'static str {
        match self {
            Factor::Solvency => "Solvency (Z-Score) [25%]",
            Factor::Efficiency => "Efficiency (F-Score) [15%]",
            Factor::StrategicFit => "Strategic Fit (GPS) [20%]",
            Factor::Collateral => "Collateral Structure [30%]",
            Factor::Management => "Management Quality [10%]",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Factor::Solvency => "Altman Z-Score strength",
            Factor::Efficiency => "Piotroski F-Score trend",
            Factor::StrategicFit => "Alignment with growth/sustainability",
            Factor::Collateral => "0 = unsecured, 10 = fully secured",
            Factor::Management => "Track record and governance",
        }
    }

    /// Next factor in canonical order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous factor in canonical order, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One snapshot of the five slider positions.
///
/// Every field is guaranteed to lie in `INPUT_MIN..=INPUT_MAX`: the only ways
/// to build a value are the validating and clamping constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreInputs {
    solvency: u8,
    efficiency: u8,
    strategic_fit: u8,
    collateral: u8,
    management: u8,
}

impl Default for ScoreInputs {
    /// Committee defaults; these land in the CONDITIONAL band (6.05)
    fn default() -> Self {
        Self {
            solvency: 9,
            efficiency: 4,
            strategic_fit: 9,
            collateral: 2,
            management: 8,
        }
    }
}

impl ScoreInputs {
    /// Build inputs, rejecting any value outside 0..=10
    pub fn try_new(
        solvency: i64,
        efficiency: i64,
        strategic_fit: i64,
        collateral: i64,
        management: i64,
    ) -> Result<Self, ScoringError> {
        Self::try_from_values([solvency, efficiency, strategic_fit, collateral, management])
    }

    /// Build inputs from values in canonical factor order, rejecting the first
    /// out-of-range value
    pub fn try_from_values(values: [i64; 5]) -> Result<Self, ScoringError> {
        let mut checked = [0u8; 5];
        for (factor, (slot, value)) in Factor::ALL.iter().zip(checked.iter_mut().zip(values)) {
            *slot = check_range(*factor, value)?;
        }
        Ok(Self::from_checked(checked))
    }

    /// Build inputs from values in canonical factor order, pinning each
    /// out-of-range value to the nearest bound.
    pub fn clamped(values: [i64; 5]) -> Self {
        let mut checked = [0u8; 5];
        for (factor, (slot, value)) in Factor::ALL.iter().zip(checked.iter_mut().zip(values)) {
            *slot = match check_range(*factor, value) {
                Ok(v) => v,
                Err(err) => {
                    let pinned = clamp_value(value);
                    tracing::warn!(%err, pinned, "clamping risk input");
                    pinned
                }
            };
        }
        Self::from_checked(checked)
    }

    fn from_checked(values: [u8; 5]) -> Self {
        Self {
            solvency: values[0],
            efficiency: values[1],
            strategic_fit: values[2],
            collateral: values[3],
            management: values[4],
        }
    }

    pub fn get(&self, factor: Factor) -> u8 {
        match factor {
            Factor::Solvency => self.solvency,
            Factor::Efficiency => self.efficiency,
            Factor::StrategicFit => self.strategic_fit,
            Factor::Collateral => self.collateral,
            Factor::Management => self.management,
        }
    }

    /// Values in canonical factor order
    pub fn values(&self) -> [u8; 5] {
        [
            self.solvency,
            self.efficiency,
            self.strategic_fit,
            self.collateral,
            self.management,
        ]
    }

    /// Copy of these inputs with one factor replaced (clamped to range)
    pub fn with(&self, factor: Factor, value: i64) -> Self {
        let mut values = self.values();
        values[factor.index()] = clamp_value(value);
        Self::from_checked(values)
    }

    /// Copy of these inputs with one factor moved by `delta`, saturating at the bounds
    pub fn adjust(&self, factor: Factor, delta: i64) -> Self {
        self.with(factor, i64::from(self.get(factor)) + delta)
    }
}

fn check_range(factor: Factor, value: i64) -> Result<u8, ScoringError> {
    if (i64::from(INPUT_MIN)..=i64::from(INPUT_MAX)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ScoringError::InputOutOfRange { factor, value })
    }
}

fn clamp_value(value: i64) -> u8 {
    value.clamp(i64::from(INPUT_MIN), i64::from(INPUT_MAX)) as u8
}

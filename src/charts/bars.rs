use serde::Serialize;

/// Qualitative tag shown next to each conflict bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strength {
    Strong,
    Weak,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictBar {
    pub label: &'static str,
    pub value: f64,
    pub tag: Strength,
}

/// Solvency strength against efficiency weakness, both normalized to 0-10
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictSeries {
    pub bars: Vec<ConflictBar>,
    /// Upper bound of the value axis (leaves headroom above the tallest bar)
    pub axis_max: f64,
}

pub fn build_conflict_series() -> ConflictSeries {
    ConflictSeries {
        bars: vec![
            ConflictBar {
                label: "Solvency (Z-Score)",
                value: 9.2,
                tag: Strength::Strong,
            },
            ConflictBar {
                label: "Efficiency (F-Score)",
                value: 4.4,
                tag: Strength::Weak,
            },
        ],
        axis_max: 11.0,
    }
}

/// Bank hurdle rate for deal RAROC, in percent
pub const HURDLE_RATE: f64 = 16.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RarocScenario {
    pub label: &'static str,
    pub raroc: f64,
}

impl RarocScenario {
    pub fn clears_hurdle(&self) -> bool {
        self.raroc >= HURDLE_RATE
    }
}

/// Deal RAROC per structuring scenario with the hurdle overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RarocSeries {
    pub scenarios: Vec<RarocScenario>,
    /// Hurdle value repeated once per scenario, for drawing a flat overlay line
    pub hurdle: Vec<f64>,
}

pub fn build_raroc_series() -> RarocSeries {
    let scenarios = vec![
        RarocScenario {
            label: "Unsecured (Ask)",
            raroc: 11.2,
        },
        RarocScenario {
            label: "Secured (Offer)",
            raroc: 18.5,
        },
    ];
    let hurdle = vec![HURDLE_RATE; scenarios.len()];

    RarocSeries { scenarios, hurdle }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_series() {
        let series = build_conflict_series();
        assert_eq!(series.bars.len(), 2);
        assert_eq!(series.bars[0].tag, Strength::Strong);
        assert_eq!(series.bars[1].tag, Strength::Weak);
        assert!(series.bars.iter().all(|b| b.value <= series.axis_max));
    }

    #[test]
    fn test_raroc_hurdle_overlay() {
        let series = build_raroc_series();
        assert_eq!(series.hurdle, vec![16.0, 16.0]);
        assert!(!series.scenarios[0].clears_hurdle());
        assert!(series.scenarios[1].clears_hurdle());
    }
}

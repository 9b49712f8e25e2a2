use crate::charts::{ChartSet, build_charts};
use crate::scoring::{CompositeScore, ScoreInputs, Verdict, compute_score, evaluate_verdict};
use serde::Serialize;

/// Everything the dashboard shows for one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub inputs: ScoreInputs,
    pub score: CompositeScore,
    pub verdict: Verdict,
    pub charts: ChartSet,
}

/// Run the full pipeline: inputs -> score -> verdict -> chart series
pub fn evaluate(inputs: ScoreInputs) -> Evaluation {
    let score = compute_score(&inputs);
    let verdict = evaluate_verdict(score);
    let charts = build_charts(&inputs, score);

    tracing::debug!(
        inputs = ?inputs.values(),
        score = score.value(),
        status = %verdict.status,
        "evaluated proposal"
    );

    Evaluation {
        inputs,
        score,
        verdict,
        charts,
    }
}

/// Current dashboard state.
///
/// Holds exactly one evaluation, always consistent with its inputs. Each
/// change replaces it as a whole.
#[derive(Debug, Clone)]
pub struct Dashboard {
    current: Evaluation,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::with_inputs(ScoreInputs::default())
    }

    pub fn with_inputs(inputs: ScoreInputs) -> Self {
        Self {
            current: evaluate(inputs),
        }
    }

    pub fn current(&self) -> &Evaluation {
        &self.current
    }

    pub fn inputs(&self) -> ScoreInputs {
        self.current.inputs
    }

    pub fn apply(&mut self, inputs: ScoreInputs) -> &Evaluation {
        self.current = evaluate(inputs);
        &self.current
    }

    /// Drop the current evaluation and start over from the committee defaults
    pub fn reset(&mut self) -> &Evaluation {
        tracing::info!("resetting dashboard to default inputs");
        self.apply(ScoreInputs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Decision, Factor};

    #[test]
    fn test_new_starts_conditional() {
        let dashboard = Dashboard::new();
        let eval = dashboard.current();
        assert!((eval.score.value() - 6.05).abs() < 1e-9);
        assert_eq!(eval.verdict.status, Decision::Conditional);
    }

    #[test]
    fn test_apply_replaces_everything() {
        let mut dashboard = Dashboard::new();
        let inputs = ScoreInputs::try_new(10, 10, 10, 10, 10).unwrap();
        let eval = dashboard.apply(inputs).clone();

        assert_eq!(eval.inputs, inputs);
        assert_eq!(eval.verdict.status, Decision::Approved);
        assert_eq!(eval.charts.radar.proposal.r, vec![10.0; 5]);
        assert_eq!(eval.charts.gauge.value, 10.0);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut dashboard = Dashboard::new();
        dashboard.apply(dashboard.inputs().adjust(Factor::Collateral, 8));
        assert_eq!(dashboard.current().verdict.status, Decision::Approved);

        dashboard.reset();
        assert_eq!(dashboard.inputs(), ScoreInputs::default());
        assert_eq!(dashboard.current(), &evaluate(ScoreInputs::default()));
    }
}

use credit_committee::charts::build_gauge;
use credit_committee::scoring::{
    APPROVAL_THRESHOLD, CONDITIONAL_THRESHOLD, CompositeScore, Decision, Factor, ScoreInputs,
    compute_score, evaluate_verdict,
};
use proptest::prelude::*;

fn valid_inputs() -> impl Strategy<Value = ScoreInputs> {
    prop::array::uniform5(0i64..=10).prop_map(|v| ScoreInputs::try_from_values(v).unwrap())
}

fn any_factor() -> impl Strategy<Value = Factor> {
    prop::sample::select(Factor::ALL.to_vec())
}

proptest! {
    #[test]
    fn score_stays_in_range(inputs in valid_inputs()) {
        let score = compute_score(&inputs).value();
        prop_assert!((0.0..=10.0).contains(&score), "score {}", score);
    }

    #[test]
    fn score_is_deterministic(inputs in valid_inputs()) {
        prop_assert_eq!(compute_score(&inputs), compute_score(&inputs));
    }

    #[test]
    fn verdict_matches_thresholds(value in 0.0f64..=10.0) {
        let status = evaluate_verdict(CompositeScore::new(value)).status;
        let expected = if value >= APPROVAL_THRESHOLD {
            Decision::Approved
        } else if value >= CONDITIONAL_THRESHOLD {
            Decision::Conditional
        } else {
            Decision::Reject
        };
        prop_assert_eq!(status, expected);
    }

    #[test]
    fn clamping_always_yields_valid_inputs(raw in prop::array::uniform5(-100i64..100)) {
        let inputs = ScoreInputs::clamped(raw);
        prop_assert!(inputs.values().iter().all(|&v| v <= 10));
        prop_assert!(ScoreInputs::try_from_values(inputs.values().map(i64::from)).is_ok());
    }

    #[test]
    fn adjust_never_leaves_range(inputs in valid_inputs(), factor in any_factor(), delta in -20i64..20) {
        let adjusted = inputs.adjust(factor, delta);
        prop_assert!(adjusted.get(factor) <= 10);
        for other in Factor::ALL.iter().filter(|&&f| f != factor) {
            prop_assert_eq!(adjusted.get(*other), inputs.get(*other));
        }
    }

    #[test]
    fn gauge_ratio_in_unit_interval(inputs in valid_inputs()) {
        let gauge = build_gauge(compute_score(&inputs));
        prop_assert!((0.0..=1.0).contains(&gauge.ratio()));
        prop_assert!(gauge.band().is_some());
    }
}

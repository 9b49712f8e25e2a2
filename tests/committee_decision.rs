use credit_committee::dashboard::{Dashboard, evaluate};
use credit_committee::error::ScoringError;
use credit_committee::scoring::{
    ColorToken, CompositeScore, Decision, Factor, ScoreInputs, WEIGHTS, compute_score,
    evaluate_verdict,
};

fn inputs(values: [i64; 5]) -> ScoreInputs {
    ScoreInputs::try_from_values(values).expect("values in range")
}

#[test]
fn default_inputs_score_conditional() {
    let eval = evaluate(ScoreInputs::default());

    // 9*0.25 + 4*0.15 + 9*0.20 + 2*0.30 + 8*0.10
    assert!((eval.score.value() - 6.05).abs() < 1e-9);
    assert_eq!(eval.verdict.status, Decision::Conditional);
    assert_eq!(eval.verdict.color_token, ColorToken::Amber);
}

#[test]
fn all_zero_rejects_and_all_ten_approves() {
    let zero = evaluate(inputs([0; 5]));
    assert_eq!(zero.score.value(), 0.0);
    assert_eq!(zero.verdict.status, Decision::Reject);
    assert_eq!(zero.verdict.color_token, ColorToken::Red);

    let ten = evaluate(inputs([10; 5]));
    assert_eq!(ten.score.value(), 10.0);
    assert_eq!(ten.verdict.status, Decision::Approved);
    assert_eq!(ten.verdict.color_token, ColorToken::Green);
}

#[test]
fn verdict_boundaries_are_inclusive_below() {
    let status = |v: f64| evaluate_verdict(CompositeScore::new(v)).status;
    assert_eq!(status(7.5), Decision::Approved);
    assert_eq!(status(5.5), Decision::Conditional);
    assert_eq!(status(5.4999), Decision::Reject);
}

#[test]
fn integer_inputs_can_land_exactly_on_thresholds() {
    // 10*25 + 0*15 + 10*20 + 10*30 + 0*10 = 750
    let approved = compute_score(&inputs([10, 0, 10, 10, 0]));
    assert_eq!(approved.value(), 7.5);
    assert_eq!(evaluate_verdict(approved).status, Decision::Approved);

    // 10*25 + 0*15 + 0*20 + 10*30 + 0*10 = 550
    let conditional = compute_score(&inputs([10, 0, 0, 10, 0]));
    assert_eq!(conditional.value(), 5.5);
    assert_eq!(evaluate_verdict(conditional).status, Decision::Conditional);
}

#[test]
fn weights_sum_to_one() {
    let sum: f64 = Factor::ALL.iter().map(|&f| WEIGHTS.fraction(f)).sum();
    assert!((sum - 1.0).abs() < 1e-12);
}

#[test]
fn out_of_range_inputs_are_reported_or_clamped() {
    let err = ScoreInputs::try_new(9, 4, 9, 2, 12).unwrap_err();
    assert_eq!(
        err,
        ScoringError::InputOutOfRange {
            factor: Factor::Management,
            value: 12
        }
    );
    assert!(err.to_string().contains("Management"));

    // clamping still yields a verdict
    let eval = evaluate(ScoreInputs::clamped([9, 4, 9, 2, 12]));
    assert_eq!(eval.inputs.get(Factor::Management), 10);
    assert!((eval.score.value() - 6.25).abs() < 1e-9);
    assert_eq!(eval.verdict.status, Decision::Conditional);
}

#[test]
fn radar_follows_input_order() {
    let eval = evaluate(inputs([1, 3, 5, 7, 9]));
    let radar = &eval.charts.radar;

    assert_eq!(
        radar.categories(),
        ["Solvency", "Efficiency", "Strategic Fit", "Collateral", "Management"]
    );
    assert_eq!(radar.proposal.r, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
    assert_eq!(radar.ideal.r, vec![8.0, 7.0, 8.0, 8.0, 8.0]);
}

#[test]
fn constant_series_ignore_inputs() {
    let low = evaluate(inputs([0; 5]));
    let high = evaluate(inputs([10; 5]));

    assert_eq!(low.charts.conflict, high.charts.conflict);
    assert_eq!(low.charts.raroc, high.charts.raroc);
    assert_eq!(low.charts.trend, high.charts.trend);
    assert_ne!(low.charts.radar, high.charts.radar);
    assert_ne!(low.charts.gauge, high.charts.gauge);
}

#[test]
fn reset_restores_default_scenario() {
    let mut dashboard = Dashboard::new();
    dashboard.apply(inputs([0; 5]));
    assert_eq!(dashboard.current().verdict.status, Decision::Reject);

    let eval = dashboard.reset().clone();
    assert_eq!(eval.inputs.values(), [9, 4, 9, 2, 8]);
    assert!((eval.score.value() - 6.05).abs() < 1e-9);
    assert_eq!(eval.verdict.status, Decision::Conditional);
}

#[test]
fn snapshot_serializes_semantic_tokens() {
    let eval = evaluate(ScoreInputs::default());
    let json = serde_json::to_value(&eval).expect("evaluation serializes");

    assert_eq!(json["verdict"]["status"], "CONDITIONAL");
    assert_eq!(json["verdict"]["color_token"], "AMBER");
    assert_eq!(json["inputs"]["strategic_fit"], 9);
    assert_eq!(json["charts"]["raroc"]["hurdle"][1], 16.0);
    assert_eq!(json["charts"]["radar"]["proposal"]["theta"][2], "Strategic Fit");
}

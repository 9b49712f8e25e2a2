use super::CompositeScore;
use serde::Serialize;
use std::fmt;

/// Scores at or above this are approved outright
pub const APPROVAL_THRESHOLD: f64 = 7.5;
/// Scores at or above this (and below approval) get a counter-offer
pub const CONDITIONAL_THRESHOLD: f64 = 5.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Approved,
    Conditional,
    Reject,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Approved => write!(f, "APPROVED"),
            Decision::Conditional => write!(f, "CONDITIONAL"),
            Decision::Reject => write!(f, "REJECT"),
        }
    }
}

/// Semantic color of a decision. The presentation layer picks actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorToken {
    Green,
    Amber,
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub status: Decision,
    pub rationale: &'static str,
    pub color_token: ColorToken,
}

/// Map a composite score onto the committee decision.
///
/// Each tier's lower bound is inclusive: 7.5 approves, 5.5 is conditional.
pub fn evaluate_verdict(score: CompositeScore) -> Verdict {
    let value = score.value();

    if value >= APPROVAL_THRESHOLD {
        Verdict {
            status: Decision::Approved,
            rationale: "Proposal meets all RAROC and risk hurdles.",
            color_token: ColorToken::Green,
        }
    } else if value >= CONDITIONAL_THRESHOLD {
        Verdict {
            status: Decision::Conditional,
            rationale: "Reject unsecured. Counter-offer a secured term loan (₹1,415 Cr) to mitigate F-Score risk.",
            color_token: ColorToken::Amber,
        }
    } else {
        Verdict {
            status: Decision::Reject,
            rationale: "Does not fit risk appetite. Exit relationship.",
            color_token: ColorToken::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(value: f64) -> Decision {
        evaluate_verdict(CompositeScore::new(value)).status
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(status(7.5), Decision::Approved);
        assert_eq!(status(7.4999), Decision::Conditional);
        assert_eq!(status(5.5), Decision::Conditional);
        assert_eq!(status(5.4999), Decision::Reject);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(status(0.0), Decision::Reject);
        assert_eq!(status(10.0), Decision::Approved);
    }

    #[test]
    fn test_color_tokens_follow_status() {
        assert_eq!(evaluate_verdict(CompositeScore::new(8.0)).color_token, ColorToken::Green);
        assert_eq!(evaluate_verdict(CompositeScore::new(6.0)).color_token, ColorToken::Amber);
        assert_eq!(evaluate_verdict(CompositeScore::new(2.0)).color_token, ColorToken::Red);
    }

    #[test]
    fn test_conditional_rationale_offers_secured_facility() {
        let verdict = evaluate_verdict(CompositeScore::new(6.05));
        assert!(verdict.rationale.contains("secured term loan"));
    }
}

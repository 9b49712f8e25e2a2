//! Illustrative figures for the proposal under review.
//!
//! These are fixed headline numbers for the borrower and are not derived from
//! the slider inputs.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealContext {
    pub bank: &'static str,
    pub committee: &'static str,
    pub borrower: &'static str,
    pub facility: &'static str,
}

pub const DEAL: DealContext = DealContext {
    bank: "Axis Bank",
    committee: "Wholesale Banking Credit Committee",
    borrower: "Jindal Steel & Power Ltd (JSPL)",
    facility: "₹1,415 Cr Unsecured Term Loan",
};

/// Whether an indicator's delta reads well or badly for the borrower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Favorable,
    Adverse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyIndicator {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub tone: Tone,
}

pub fn key_risk_indicators() -> [KeyIndicator; 4] {
    [
        KeyIndicator {
            label: "Net Debt / EBITDA",
            value: "1.48x",
            delta: "Safe (< 2.5x)",
            tone: Tone::Favorable,
        },
        KeyIndicator {
            label: "Altman Z''-Score",
            value: "3.71",
            delta: "Strong Solvency",
            tone: Tone::Favorable,
        },
        KeyIndicator {
            label: "Piotroski F-Score",
            value: "4 / 9",
            delta: "Weak Efficiency",
            tone: Tone::Adverse,
        },
        KeyIndicator {
            label: "Deal RAROC",
            value: "11.2%",
            delta: "Below Hurdle (16%)",
            tone: Tone::Adverse,
        },
    ]
}

pub const NEGOTIATION_NOTE: &str = "Negotiation strategy: solvency is excellent (Z-Score > 3), so the borrower is safe. \
Efficiency is low (F-Score < 5), so it is cash-strapped. Pivot to secured lending to protect the bank during this expansion phase.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_tones() {
        let kri = key_risk_indicators();
        let adverse: Vec<_> = kri
            .iter()
            .filter(|k| k.tone == Tone::Adverse)
            .map(|k| k.label)
            .collect();
        assert_eq!(adverse, vec!["Piotroski F-Score", "Deal RAROC"]);
    }
}

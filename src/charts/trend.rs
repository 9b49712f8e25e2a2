use serde::Serialize;

/// Net debt against EBITDA margin over three fiscal years.
///
/// The two series share the year axis but are drawn against separate scales:
/// debt on the primary axis, margin on the secondary one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub years: Vec<&'static str>,
    /// Net debt, ₹ Cr
    pub debt: Vec<f64>,
    /// EBITDA margin, percent
    pub margin: Vec<f64>,
}

impl TrendSeries {
    pub fn debt_max(&self) -> f64 {
        self.debt.iter().copied().fold(0.0, f64::max)
    }

    pub fn margin_max(&self) -> f64 {
        self.margin.iter().copied().fold(0.0, f64::max)
    }

    /// Points of a series rescaled so its own maximum maps onto `height`.
    /// Lets a single-axis renderer overlay two series with different units.
    pub fn normalized(values: &[f64], max: f64, height: f64) -> Vec<(f64, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let y = if max > 0.0 { v / max * height } else { 0.0 };
                (i as f64, y)
            })
            .collect()
    }
}

pub fn build_trend_series() -> TrendSeries {
    TrendSeries {
        years: vec!["FY23", "FY24", "FY25 (Est)"],
        debt: vec![9500.0, 10200.0, 14156.0],
        margin: vec![24.5, 21.0, 16.5],
    }
}

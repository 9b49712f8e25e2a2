use crate::scoring::{Factor, INPUT_MAX, ScoreInputs};
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Committee reference profile, in canonical factor order
pub const IDEAL_THRESHOLD: [f64; 5] = [8.0, 7.0, 8.0, 8.0, 8.0];

/// One r/theta trace of the radar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolarSeries {
    pub name: &'static str,
    pub r: Vec<f64>,
    pub theta: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub proposal: PolarSeries,
    pub ideal: PolarSeries,
    pub radial_max: f64,
}

impl RadarSeries {
    /// Axis labels, shared by both traces
    pub fn categories(&self) -> &[&'static str] {
        &self.proposal.theta
    }

    /// Project a trace onto cartesian points inside the unit circle.
    ///
    /// The first axis points straight up and axes proceed clockwise.
    pub fn vertices(&self, series: &PolarSeries) -> Vec<(f64, f64)> {
        let n = series.r.len();
        series
            .r
            .iter()
            .enumerate()
            .map(|(i, &r)| {
                let (x, y) = axis_direction(i, n);
                let scale = if self.radial_max > 0.0 { r / self.radial_max } else { 0.0 };
                (x * scale, y * scale)
            })
            .collect()
    }
}

/// Unit vector of axis `i` out of `n`
pub fn axis_direction(i: usize, n: usize) -> (f64, f64) {
    let angle = FRAC_PI_2 - TAU * i as f64 / n as f64;
    (angle.cos(), angle.sin())
}

/// Radar traces for the current inputs against the ideal profile.
/// Labels and values both follow `Factor::ALL`, so axes never mislabel values.
pub fn build_radar_series(inputs: &ScoreInputs) -> RadarSeries {
    let theta: Vec<&'static str> = Factor::ALL.iter().map(|f| f.name()).collect();

    RadarSeries {
        proposal: PolarSeries {
            name: "Proposal",
            r: Factor::ALL.iter().map(|&f| f64::from(inputs.get(f))).collect(),
            theta: theta.clone(),
        },
        ideal: PolarSeries {
            name: "Ideal Threshold",
            r: IDEAL_THRESHOLD.to_vec(),
            theta,
        },
        radial_max: f64::from(INPUT_MAX),
    }
}

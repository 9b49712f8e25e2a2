//! Chart data for the dashboard.
//!
//! Every builder is pure and returns plain labels and numbers. Only the radar
//! and the gauge depend on the current evaluation; the conflict, RAROC and
//! trend series are fixed illustrative figures for the proposal.

mod bars;
mod gauge;
mod radar;
mod trend;

pub use bars::*;
pub use gauge::*;
pub use radar::*;
pub use trend::*;

use crate::scoring::{CompositeScore, ScoreInputs};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub gauge: GaugeSpec,
    pub conflict: ConflictSeries,
    pub raroc: RarocSeries,
    pub trend: TrendSeries,
    pub radar: RadarSeries,
}

pub fn build_charts(inputs: &ScoreInputs, score: CompositeScore) -> ChartSet {
    ChartSet {
        gauge: build_gauge(score),
        conflict: build_conflict_series(),
        raroc: build_raroc_series(),
        trend: build_trend_series(),
        radar: build_radar_series(inputs),
    }
}

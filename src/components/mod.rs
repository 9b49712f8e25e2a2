mod conflict_chart;
mod header;
mod indicator_row;
mod input_panel;
mod radar_chart;
mod raroc_chart;
mod score_gauge;
mod status_bar;
mod strategy_note;
mod trend_chart;
mod verdict_card;

pub use conflict_chart::ConflictChart;
pub use header::Header;
pub use indicator_row::IndicatorRow;
pub use input_panel::InputPanel;
pub use radar_chart::RadarChart;
pub use raroc_chart::RarocChart;
pub use score_gauge::ScoreGauge;
pub use status_bar::StatusBar;
pub use strategy_note::StrategyNote;
pub use trend_chart::TrendChart;
pub use verdict_card::VerdictCard;

use crate::app::App;
use ratatui::layout::Rect;
use ratatui::Frame;

pub trait Component {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App);
}

use crate::app::App;
use crate::components::Component;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

/// Solvency vs. efficiency gap
pub struct ConflictChart;

impl Component for ConflictChart {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let series = &app.evaluation().charts.conflict;

        // BarChart takes integers; plot tenths
        let bars: Vec<Bar> = series
            .bars
            .iter()
            .map(|b| {
                Bar::default()
                    .value(tenths(b.value))
                    .text_value(format!("{:.1}", b.value))
                    .label(Line::from(format!("{} ({:?})", short_label(b.label), b.tag)))
                    .style(Theme::strength_style(b.tag))
            })
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Theme::border_style())
                    .title(Span::styled(
                        " The Conflict: Solvency vs. Efficiency ",
                        Theme::title_style(),
                    )),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(12)
            .bar_gap(4)
            .max(tenths(series.axis_max));

        frame.render_widget(chart, area);
    }
}

pub(crate) fn tenths(value: f64) -> u64 {
    (value * 10.0).round().max(0.0) as u64
}

/// Drop the parenthesized metric so labels fit under narrow bars
fn short_label(label: &str) -> &str {
    label.split(" (").next().unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenths() {
        assert_eq!(tenths(9.2), 92);
        assert_eq!(tenths(4.4), 44);
        assert_eq!(tenths(-1.0), 0);
    }

    #[test]
    fn test_short_label() {
        assert_eq!(short_label("Solvency (Z-Score)"), "Solvency");
        assert_eq!(short_label("Plain"), "Plain");
    }
}

use crate::app::App;
use crate::charts::TrendSeries;
use crate::components::Component;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

/// Plot height both series are rescaled onto
const PLOT_HEIGHT: f64 = 100.0;

/// Rising debt (bars, left scale) against shrinking margin (line, right scale).
///
/// The widget has a single y axis, so each series is rescaled to its own
/// maximum and the secondary scale is spelled out in the legend.
pub struct TrendChart;

impl Component for TrendChart {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let trend = &app.evaluation().charts.trend;
        let debt_max = trend.debt_max();
        let margin_max = trend.margin_max();

        let debt_points = TrendSeries::normalized(&trend.debt, debt_max, PLOT_HEIGHT);
        let margin_points = TrendSeries::normalized(&trend.margin, margin_max, PLOT_HEIGHT);

        let margin_name = format!("Margin % (max {:.1})", margin_max);
        let datasets = vec![
            Dataset::default()
                .name("Net Debt")
                .marker(Marker::HalfBlock)
                .graph_type(GraphType::Bar)
                .style(Theme::secondary_series_style())
                .data(&debt_points),
            Dataset::default()
                .name(margin_name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Theme::reference_style())
                .data(&margin_points),
        ];

        let x_labels: Vec<Span> = trend.years.iter().map(|y| Span::raw(*y)).collect();
        let y_labels = vec![
            Span::raw("0"),
            Span::raw(format!("{:.0}", debt_max / 2.0)),
            Span::raw(format!("{:.0}", debt_max)),
        ];
        let x_max = trend.years.len().saturating_sub(1) as f64;

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Theme::border_style())
                    .title(Span::styled(
                        " Trend: Rising Debt, Shrinking Margins ",
                        Theme::title_style(),
                    )),
            )
            .x_axis(Axis::default().bounds([0.0, x_max]).labels(x_labels))
            .y_axis(
                Axis::default()
                    .title("Debt (Cr)")
                    .bounds([0.0, PLOT_HEIGHT])
                    .labels(y_labels),
            );

        frame.render_widget(chart, area);
    }
}

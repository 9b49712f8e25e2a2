use crate::app::App;
use crate::components::Component;
use crate::components::conflict_chart::tenths;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

/// Deal RAROC per scenario, each paired with the hurdle bar
pub struct RarocChart;

impl Component for RarocChart {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let series = &app.evaluation().charts.raroc;

        let groups: Vec<BarGroup> = series
            .scenarios
            .iter()
            .zip(series.hurdle.iter())
            .map(|(scenario, &hurdle)| {
                let raroc_style = if scenario.clears_hurdle() {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                };
                BarGroup::default()
                    .label(Line::from(scenario.label))
                    .bars(&[
                        Bar::default()
                            .value(tenths(scenario.raroc))
                            .text_value(format!("{:.1}%", scenario.raroc))
                            .style(raroc_style),
                        Bar::default()
                            .value(tenths(hurdle))
                            .text_value(format!("{:.0}%", hurdle))
                            .style(Theme::reference_style()),
                    ])
            })
            .collect();

        let ceiling = series
            .scenarios
            .iter()
            .map(|s| s.raroc)
            .chain(series.hurdle.iter().copied())
            .fold(0.0, f64::max);

        let hurdle = series.hurdle.first().copied().unwrap_or_default();
        let title = format!(" RAROC: Unsecured vs. Secured (hurdle {:.0}%) ", hurdle);

        let mut chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Theme::border_style())
                    .title(Span::styled(title, Theme::title_style())),
            )
            .bar_width(6)
            .bar_gap(1)
            .group_gap(4)
            .max(tenths(ceiling * 1.1));

        for group in groups {
            chart = chart.data(group);
        }

        frame.render_widget(chart, area);
    }
}

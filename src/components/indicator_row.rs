use crate::app::App;
use crate::components::Component;
use crate::metrics::key_risk_indicators;
use crate::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Four headline metrics with their favorable/adverse reading
pub struct IndicatorRow;

impl Component for IndicatorRow {
    fn render(&self, frame: &mut Frame, area: Rect, _app: &App) {
        let indicators = key_risk_indicators();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for (indicator, cell) in indicators.iter().zip(cells.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    indicator.value,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(indicator.delta, Theme::tone_style(indicator.tone))),
            ];
            let paragraph = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::LEFT)
                    .border_style(Theme::reference_style())
                    .title(Span::styled(indicator.label, Theme::help_style())),
            );
            frame.render_widget(paragraph, *cell);
        }
    }
}

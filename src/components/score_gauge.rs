use crate::app::App;
use crate::components::Component;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

/// Riskometer showing the composite score against the decision bands
pub struct ScoreGauge;

impl Component for ScoreGauge {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let eval = app.evaluation();
        let gauge = &eval.charts.gauge;
        let token = gauge
            .band()
            .map(|b| b.token)
            .unwrap_or(eval.verdict.color_token);

        let title = format!(" Score (hurdle {:.1}) ", gauge.threshold);
        let widget = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Theme::border_style())
                    .title(Span::styled(title, Theme::title_style())),
            )
            .gauge_style(Style::default().fg(Theme::token_color(token)))
            .ratio(gauge.ratio())
            .label(format!("{} / {:.1}", eval.score, gauge.max));

        frame.render_widget(widget, area);
    }
}

use crate::app::App;
use crate::components::Component;
use crate::theme::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub struct VerdictCard;

impl Component for VerdictCard {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let eval = app.evaluation();
        let token = eval.verdict.color_token;
        let token_style = Theme::token_style(token);

        let lines = vec![
            Line::from(Span::styled(
                format!(
                    "{} RECOMMENDATION: {}",
                    Theme::token_icon(token),
                    eval.verdict.status
                ),
                token_style,
            )),
            Line::from(vec![
                Span::styled(
                    eval.score.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(" / 10.0", Theme::help_style()),
            ]),
            Line::from(""),
            Line::from(eval.verdict.rationale),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Theme::token_color(token)))
                    .title(Span::styled(" Committee Verdict ", Theme::title_style())),
            );

        frame.render_widget(paragraph, area);
    }
}

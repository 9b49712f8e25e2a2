use crate::app::App;
use crate::components::Component;
use crate::scoring::{Factor, INPUT_MAX, WEIGHTS};
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Sidebar with one slider per risk factor
pub struct InputPanel;

impl Component for InputPanel {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let inputs = app.evaluation().inputs;
        let mut lines = vec![
            Line::from(Span::styled(
                "Adjust inputs to simulate committee vote.",
                Theme::help_style(),
            )),
            Line::from(""),
        ];

        for factor in Factor::ALL {
            let is_selected = factor == app.selected;
            let value = inputs.get(factor);
            let row_style = if is_selected {
                Theme::selected_style()
            } else {
                Style::default()
            };
            let indicator = if is_selected { "\u{25b6} " } else { "  " };

            lines.push(Line::from(vec![
                Span::styled(indicator, row_style),
                Span::styled(factor.caption(), row_style),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(slider_bar(value), Theme::reference_style()),
                Span::styled(format!(" {:>2}", value), row_style),
            ]));
            if is_selected {
                lines.push(Line::from(Span::styled(
                    format!("  {}", factor.help()),
                    Theme::help_style(),
                )));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            format!("Weights total {}%", WEIGHTS.total_percent()),
            Theme::help_style(),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .style(Theme::border_style())
                .title(Span::styled(" Credit Scoring Parameters ", Theme::title_style())),
        );

        frame.render_widget(paragraph, area);
    }
}

/// Horizontal slider track, one cell per step
fn slider_bar(value: u8) -> String {
    let filled = usize::from(value);
    let empty = usize::from(INPUT_MAX) - filled;
    format!("{}\u{25cf}{}", "\u{2501}".repeat(filled), "\u{2500}".repeat(empty))
}

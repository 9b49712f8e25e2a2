use crate::app::App;
use crate::components::Component;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct StatusBar;

impl Component for StatusBar {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let selected = Span::styled(format!("[{}]", app.selected), Theme::title_style());

        let status_span = if let Some(ref msg) = app.status_message {
            Span::raw(format!(" {}", msg))
        } else {
            Span::raw("")
        };

        let help_text = Span::styled(
            " | \u{2191}\u{2193} Factor | \u{2190}\u{2192} Adjust | 0-9 Set | r Reset | ? Help | q Quit",
            Theme::help_style(),
        );

        let line = Line::from(vec![selected, status_span, help_text]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

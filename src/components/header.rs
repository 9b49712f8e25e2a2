use crate::app::App;
use crate::components::Component;
use crate::metrics::DEAL;
use crate::theme::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct Header;

impl Component for Header {
    fn render(&self, frame: &mut Frame, area: Rect, _app: &App) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(vec![
                Span::styled(DEAL.bank, Theme::title_style()),
                Span::raw("  \u{2502}  "),
                Span::styled(DEAL.committee, Theme::title_style()),
            ]),
            Line::from(vec![
                Span::styled("Borrower: ", bold),
                Span::raw(DEAL.borrower),
                Span::raw(" | "),
                Span::styled("Facility: ", bold),
                Span::raw(DEAL.facility),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

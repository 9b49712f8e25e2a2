use crate::app::App;
use crate::components::Component;
use crate::metrics::NEGOTIATION_NOTE;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub struct StrategyNote;

impl Component for StrategyNote {
    fn render(&self, frame: &mut Frame, area: Rect, _app: &App) {
        let paragraph = Paragraph::new(NEGOTIATION_NOTE)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Theme::border_style()),
            );
        frame.render_widget(paragraph, area);
    }
}

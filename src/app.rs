use crate::components::{
    Component, ConflictChart, Header, IndicatorRow, InputPanel, RadarChart, RarocChart,
    ScoreGauge, StatusBar, StrategyNote, TrendChart, VerdictCard,
};
use crate::dashboard::{Dashboard, Evaluation};
use crate::scoring::{Factor, INPUT_MAX, ScoreInputs};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct App {
    pub dashboard: Dashboard,
    pub selected: Factor,
    pub should_quit: bool,
    pub show_help: bool,
    /// Status message (shown in status bar)
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(ScoreInputs::default())
    }
}

impl App {
    pub fn new(inputs: ScoreInputs) -> Self {
        Self {
            dashboard: Dashboard::with_inputs(inputs),
            selected: Factor::Solvency,
            should_quit: false,
            show_help: false,
            status_message: None,
        }
    }

    pub fn evaluation(&self) -> &Evaluation {
        self.dashboard.current()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => self.decrement(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.increment()
            }
            KeyCode::Char(c @ '0'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.set_selected(i64::from(digit));
                }
            }
            KeyCode::Char('t') => self.set_selected(i64::from(INPUT_MAX)),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('?') => self.toggle_help(),
            _ => {}
        }
    }

    pub fn navigate_up(&mut self) {
        self.selected = self.selected.prev();
    }

    pub fn navigate_down(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn increment(&mut self) {
        self.adjust(1);
    }

    pub fn decrement(&mut self) {
        self.adjust(-1);
    }

    fn adjust(&mut self, delta: i64) {
        let inputs = self.dashboard.inputs().adjust(self.selected, delta);
        self.apply(inputs);
    }

    pub fn set_selected(&mut self, value: i64) {
        let inputs = self.dashboard.inputs().with(self.selected, value);
        self.apply(inputs);
    }

    fn apply(&mut self, inputs: ScoreInputs) {
        if inputs == self.dashboard.inputs() {
            return;
        }
        let eval = self.dashboard.apply(inputs);
        self.status_message = Some(format!("Score {} \u{2192} {}", eval.score, eval.verdict.status));
    }

    pub fn reset(&mut self) {
        self.dashboard.reset();
        self.selected = Factor::Solvency;
        self.status_message = Some("Dashboard reset to committee defaults".to_string());
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title + deal line
                Constraint::Min(20),   // Main content
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        Header.render(frame, chunks[0], self);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(38), Constraint::Min(40)])
            .split(chunks[1]);

        InputPanel.render(frame, main_chunks[0], self);

        let content = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),  // Gauge + verdict
                Constraint::Length(4),  // Key risk indicators
                Constraint::Min(12),    // Chart grid
                Constraint::Length(3),  // Negotiation note
            ])
            .split(main_chunks[1]);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(content[0]);

        ScoreGauge.render(frame, top[0], self);
        VerdictCard.render(frame, top[1], self);
        IndicatorRow.render(frame, content[1], self);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(content[2]);
        let upper = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);
        let lower = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        ConflictChart.render(frame, upper[0], self);
        RarocChart.render(frame, upper[1], self);
        TrendChart.render(frame, lower[0], self);
        RadarChart.render(frame, lower[1], self);

        StrategyNote.render(frame, content[3], self);
        StatusBar.render(frame, chunks[2], self);

        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        use crate::scoring::{APPROVAL_THRESHOLD, CONDITIONAL_THRESHOLD, ColorToken};
        use crate::theme::Theme;
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Clear, Paragraph};

        let area = centered_rect(50, 60, frame.area());

        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled("Keyboard Shortcuts", Theme::title_style())),
            Line::from(""),
            Line::from("\u{2191}/\u{2193} or k/j   Select factor"),
            Line::from("\u{2190}/\u{2192} or h/l   Lower/raise by one"),
            Line::from("0-9, t         Set value (t = 10)"),
            Line::from("r              Reset to defaults"),
            Line::from("?              Toggle this help"),
            Line::from("q / Esc        Quit"),
            Line::from(""),
            Line::from(Span::styled("Decision Bands", Theme::title_style())),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("\u{2265} {APPROVAL_THRESHOLD:.1}     "), Theme::token_style(ColorToken::Green)),
                Span::raw("Approved"),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("{CONDITIONAL_THRESHOLD:.1}-{APPROVAL_THRESHOLD:.1}   "),
                    Theme::token_style(ColorToken::Amber),
                ),
                Span::raw("Conditional"),
            ]),
            Line::from(vec![
                Span::styled(format!("< {CONDITIONAL_THRESHOLD:.1}     "), Theme::token_style(ColorToken::Red)),
                Span::raw("Reject"),
            ]),
            Line::from(""),
            Line::from("Press ? to close"),
        ];

        let paragraph = Paragraph::new(help_text).block(
            Block::default()
                .borders(Borders::ALL)
                .style(Theme::border_style())
                .title(Span::styled(" Help ", Theme::title_style())),
        );

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

use credit_committee::app::App;
use credit_committee::scoring::{Factor, ScoreInputs};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn screen(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn renders_default_verdict() {
    let app = App::default();
    let text = screen(&app, 150, 48);

    assert!(text.contains("CONDITIONAL"));
    assert!(text.contains("6.05"));
    assert!(text.contains("Credit Scoring Parameters"));
    assert!(text.contains("Net Debt / EBITDA"));
}

#[test]
fn renders_after_changes_and_with_help() {
    let mut app = App::new(ScoreInputs::default());
    app.selected = Factor::Collateral;
    app.set_selected(10);
    let text = screen(&app, 150, 48);
    assert!(text.contains("APPROVED"));

    app.toggle_help();
    let text = screen(&app, 150, 48);
    assert!(text.contains("Keyboard Shortcuts"));
}

#[test]
fn renders_in_small_terminal() {
    let app = App::new(ScoreInputs::clamped([0, 0, 0, 0, 0]));
    // must not panic even when widgets get squeezed
    screen(&app, 60, 20);
}

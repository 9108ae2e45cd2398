use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use emi_calculator::{ui, App, FieldKind};
use ratatui::{backend::TestBackend, Terminal};

fn draw(app: &App) -> String {
    let backend = TestBackend::new(100, 32);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::ui(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn shows_default_figures() {
    let screen = draw(&App::default());
    assert!(screen.contains("Loan Calculator"));
    assert!(screen.contains("Loan Summary"));
    assert!(screen.contains("₹4,707.35"));
    assert!(screen.contains("₹12,976.33"));
    assert!(screen.contains("₹1,12,976.33"));
    assert!(screen.contains("24 Months"));
    assert!(screen.contains("12%"));
}

#[test]
fn shows_placeholder_for_invalid_input() {
    let mut app = App::default();
    app.set_text(FieldKind::Term, "");
    let screen = draw(&app);
    assert!(screen.contains(ui::PLACEHOLDER));
    assert!(screen.contains("loan term is empty"));
    assert!(!screen.contains("Monthly EMI"));
}

#[test]
fn both_slider_styles_render_the_same_figures() {
    let mut app = App::default();
    let bar = draw(&app);
    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
    let line = draw(&app);

    for screen in [&bar, &line] {
        assert!(screen.contains("₹4,707.35"));
        assert!(screen.contains("₹1,00,000"));
        assert!(screen.contains("24 mo"));
    }
}

#[test]
fn rate_slider_label_drops_trailing_zero() {
    let mut app = App::default();
    let screen = draw(&app);
    assert!(!screen.contains("12.0%"));

    app.set_slider(FieldKind::Rate, 12.5);
    let screen = draw(&app);
    assert!(screen.contains("12.5%"));
    assert!(!screen.contains("12.50%"));
}

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Outcome};
use crate::format::{format_rate, format_term, format_term_short};
use crate::input::{format_step_value, FieldKind};
use crate::slider::Slider;

pub const PLACEHOLDER: &str = "Enter valid values to see results";
const SUBTITLE: &str = "Befikar lending for your financial needs";

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(5),
                Constraint::Length(5),
                Constraint::Min(5),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Loan Calculator",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    for (kind, area) in FieldKind::ALL.into_iter().zip(&chunks[1..4]) {
        render_field(f, *area, app, kind);
    }

    render_results(f, chunks[4], app);

    let help = Paragraph::new(
        "Tab/↑↓: field | ←→ PgUp/PgDn Home/End: slider | Ctrl+S: slider style | Ctrl+R: reset | Esc: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(help, chunks[5]);
}

fn slider_label(app: &App, kind: FieldKind, value: f64) -> String {
    match kind {
        FieldKind::Principal => app.currency().amount(value, 0),
        FieldKind::Rate => format_rate(&format_step_value(value, kind.range().step)),
        FieldKind::Term => format_term_short(value),
    }
}

fn echo(app: &App, kind: FieldKind, text: &str) -> String {
    match kind {
        FieldKind::Principal => app.currency().typed_amount(text),
        FieldKind::Rate => format_rate(text),
        FieldKind::Term => format_term(text),
    }
}

fn render_field(f: &mut Frame, area: Rect, app: &App, kind: FieldKind) {
    let focused = app.focus() == kind;
    let field = app.field(kind);

    let title_style = if focused {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let label = match kind {
        FieldKind::Principal => format!("{} ({})", kind.label(), app.currency().symbol),
        _ => kind.label().to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(title_style)
        .title(Span::styled(label, title_style));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(inner);

    let cursor = if focused { "▏" } else { "" };
    let input = Paragraph::new(format!("{}{}", field.text(), cursor))
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(input, rows[0]);

    let value = Slider::value(field);
    app.slider_style()
        .widget()
        .render(f, rows[1], field, slider_label(app, kind, value), focused);

    let shown = Paragraph::new(echo(app, kind, field.text()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(shown, rows[2]);
}

fn figure<'a>(name: &'a str, value: String, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Loan Summary");

    let text = match app.outcome() {
        Outcome::Ready(b) => {
            let currency = app.currency();
            vec![
                figure("Monthly EMI: ", currency.amount(b.emi, 2), Color::Green),
                figure("Total Interest: ", currency.amount(b.total_interest, 2), Color::Red),
                figure("Total Payment: ", currency.amount(b.total_payment, 2), Color::Cyan),
            ]
        }
        Outcome::Unavailable(reason) => vec![
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::Blue))),
            Line::from(Span::styled(
                reason.to_string(),
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let alignment = match app.outcome() {
        Outcome::Ready(_) => Alignment::Left,
        Outcome::Unavailable(_) => Alignment::Center,
    };
    f.render_widget(Paragraph::new(text).block(block).alignment(alignment), area);
}

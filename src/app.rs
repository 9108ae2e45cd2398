use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::config::Config;
use crate::engine::{self, EmiBreakdown};
use crate::error::InputError;
use crate::format::CurrencyFormat;
use crate::input::{FieldKind, NumericField};
use crate::slider::{Slider, SliderStyle};

/// What the result card shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Ready(EmiBreakdown),
    Unavailable(InputError),
}

impl Outcome {
    pub fn breakdown(&self) -> Option<&EmiBreakdown> {
        match self {
            Outcome::Ready(b) => Some(b),
            Outcome::Unavailable(_) => None,
        }
    }
}

fn slot(kind: FieldKind) -> usize {
    match kind {
        FieldKind::Principal => 0,
        FieldKind::Rate => 1,
        FieldKind::Term => 2,
    }
}

/// The loan form. Fields are only reachable through methods that
/// recompute the outcome before returning.
pub struct App {
    fields: [NumericField; 3],
    focus: FieldKind,
    slider_style: SliderStyle,
    currency: CurrencyFormat,
    outcome: Outcome,
    config: Config,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        let fields = FieldKind::ALL.map(|kind| NumericField::new(kind, config.initial_value(kind)));
        let mut app = Self {
            fields,
            focus: FieldKind::Principal,
            slider_style: config.slider,
            currency: config.currency(),
            outcome: Outcome::Unavailable(InputError::Empty {
                field: FieldKind::Principal,
            }),
            config,
        };
        app.recompute();
        app
    }

    pub fn field(&self, kind: FieldKind) -> &NumericField {
        &self.fields[slot(kind)]
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn focus(&self) -> FieldKind {
        self.focus
    }

    pub fn slider_style(&self) -> SliderStyle {
        self.slider_style
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    fn recompute(&mut self) {
        let principal = self.field(FieldKind::Principal).value();
        let rate = self.field(FieldKind::Rate).value();
        let term = self.field(FieldKind::Term).value();

        self.outcome = match (principal, rate, term) {
            (Ok(p), Ok(r), Ok(n)) => match engine::quote(p, r, n) {
                Ok(breakdown) => Outcome::Ready(breakdown),
                Err(e) => Outcome::Unavailable(e),
            },
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => Outcome::Unavailable(e),
        };

        match &self.outcome {
            Outcome::Ready(b) => debug!(emi = b.emi, total = b.total_payment, "recomputed"),
            Outcome::Unavailable(e) => debug!(reason = %e, "inputs unavailable"),
        }
    }

    fn edit<R>(&mut self, kind: FieldKind, f: impl FnOnce(&mut NumericField) -> R) -> R {
        let out = f(&mut self.fields[slot(kind)]);
        self.recompute();
        out
    }

    pub fn set_text(&mut self, kind: FieldKind, text: &str) {
        self.edit(kind, |field| *field = NumericField::with_text(kind, text));
    }

    pub fn type_char(&mut self, c: char) {
        self.edit(self.focus, |field| field.push(c));
    }

    pub fn backspace(&mut self) {
        self.edit(self.focus, NumericField::pop);
    }

    pub fn clear_focused(&mut self) {
        self.edit(self.focus, NumericField::clear);
    }

    /// Drag the slider for `kind` to `value`. Returns the committed value.
    pub fn set_slider(&mut self, kind: FieldKind, value: f64) -> f64 {
        self.edit(kind, |field| field.on_change(value))
    }

    pub fn slide(&mut self, kind: FieldKind, steps: i32) -> f64 {
        self.edit(kind, |field| field.step_by(steps))
    }

    pub fn slide_to_min(&mut self, kind: FieldKind) -> f64 {
        self.edit(kind, |field| field.to_min())
    }

    pub fn slide_to_max(&mut self, kind: FieldKind) -> f64 {
        self.edit(kind, |field| field.to_max())
    }

    pub fn reset(&mut self) {
        for kind in FieldKind::ALL {
            self.fields[slot(kind)] = NumericField::new(kind, self.config.initial_value(kind));
        }
        self.recompute();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        debug!(focus = %self.focus, "focus moved");
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
        debug!(focus = %self.focus, "focus moved");
    }

    pub fn toggle_slider_style(&mut self) {
        self.slider_style = self.slider_style.toggle();
        debug!(style = self.slider_style.name(), "slider style switched");
    }

    /// Apply a key press. Returns `true` when the form should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Char('s') if ctrl => self.toggle_slider_style(),
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char('u') if ctrl => self.clear_focused(),
            KeyCode::Char(c) if !ctrl && !c.is_control() => self.type_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Right => {
                self.slide(self.focus, 1);
            }
            KeyCode::Left => {
                self.slide(self.focus, -1);
            }
            KeyCode::PageUp => {
                self.slide(self.focus, 10);
            }
            KeyCode::PageDown => {
                self.slide(self.focus, -10);
            }
            KeyCode::Home => {
                self.slide_to_min(self.focus);
            }
            KeyCode::End => {
                self.slide_to_max(self.focus);
            }
            _ => {}
        }
        false
    }
}

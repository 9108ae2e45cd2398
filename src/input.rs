use std::fmt;

use crate::error::InputError;
use crate::slider::SliderRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Principal,
    Rate,
    Term,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [FieldKind::Principal, FieldKind::Rate, FieldKind::Term];

    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Principal => "Loan Amount",
            FieldKind::Rate => "Interest Rate (% p.a.)",
            FieldKind::Term => "Loan Term (Months)",
        }
    }

    pub fn range(&self) -> SliderRange {
        match self {
            FieldKind::Principal => SliderRange::new(1_000.0, 500_000.0, 10_000.0),
            FieldKind::Rate => SliderRange::new(1.0, 36.0, 0.1),
            FieldKind::Term => SliderRange::new(1.0, 360.0, 1.0),
        }
    }

    pub fn default_value(&self) -> f64 {
        match self {
            FieldKind::Principal => 100_000.0,
            FieldKind::Rate => 12.0,
            FieldKind::Term => 24.0,
        }
    }

    /// Where the slider thumb rests while the text is empty, zero, or not
    /// a number.
    pub fn slider_fallback(&self) -> f64 {
        match self {
            FieldKind::Principal => 100_000.0,
            FieldKind::Rate => 10.0,
            FieldKind::Term => 12.0,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FieldKind::Principal => FieldKind::Rate,
            FieldKind::Rate => FieldKind::Term,
            FieldKind::Term => FieldKind::Principal,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            FieldKind::Principal => FieldKind::Term,
            FieldKind::Rate => FieldKind::Principal,
            FieldKind::Term => FieldKind::Rate,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Principal => "loan amount",
            FieldKind::Rate => "interest rate",
            FieldKind::Term => "loan term",
        };
        f.write_str(name)
    }
}

/// Free-form text backing one loan input.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericField {
    kind: FieldKind,
    text: String,
}

impl NumericField {
    /// Seed the field with `value` as written. Only slider moves round to
    /// the step.
    pub fn new(kind: FieldKind, value: f64) -> Self {
        Self::with_text(kind, value.to_string())
    }

    pub fn with_text(kind: FieldKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parsed value of the text. Out-of-range numbers are accepted here;
    /// only the slider is bounded.
    pub fn value(&self) -> Result<f64, InputError> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty { field: self.kind });
        }
        trimmed
            .parse::<f64>()
            .map_err(|_| InputError::NotANumber {
                field: self.kind,
                text: self.text.clone(),
            })
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Overwrite the text with `value`, printed to the precision of the
    /// field's slider step.
    pub fn set_value(&mut self, value: f64) {
        self.text = format_step_value(value, self.kind.range().step);
    }
}

fn step_decimals(step: f64) -> usize {
    let mut decimals = 0;
    let mut scaled = step;
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

pub fn format_step_value(value: f64, step: f64) -> String {
    let printed = format!("{:.*}", step_decimals(step), value);
    if printed.contains('.') {
        printed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        printed
    }
}

use thiserror::Error;

use crate::input::FieldKind;

/// Why the current inputs cannot produce a repayment figure.
///
/// This is a value the form renders, not a failure: every variant ends up
/// as the "Enter valid values to see results" placeholder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is empty")]
    Empty { field: FieldKind },

    #[error("{field} is not a number: {text:?}")]
    NotANumber { field: FieldKind, text: String },

    #[error("{field} must be a finite number")]
    NotFinite { field: FieldKind },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: FieldKind, value: f64 },

    #[error("repayment figures overflow for these inputs")]
    Overflow,
}

impl InputError {
    /// The field to blame, if the problem is tied to a single input.
    pub fn field(&self) -> Option<FieldKind> {
        match self {
            InputError::Empty { field }
            | InputError::NotANumber { field, .. }
            | InputError::NotFinite { field }
            | InputError::NotPositive { field, .. } => Some(*field),
            InputError::Overflow => None,
        }
    }
}

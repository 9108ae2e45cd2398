//! Loan EMI calculator: a pure repayment engine and the terminal form
//! that drives it.

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod slider;
pub mod ui;

pub use app::{App, Outcome};
pub use config::Config;
pub use engine::{calculate_emi, quote, EmiBreakdown, LoanTerms, QuoteReport};
pub use error::InputError;
pub use input::{FieldKind, NumericField};
pub use slider::{Slider, SliderRange, SliderStyle, SliderWidget};

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::format::{CurrencyFormat, Grouping};
use crate::input::FieldKind;
use crate::slider::SliderStyle;

/// Startup settings, read from an optional JSON file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    pub principal: f64,
    pub rate: f64,
    pub term: f64,
    pub currency_symbol: String,
    pub grouping: Grouping,
    pub slider: SliderStyle,
}

impl Default for Config {
    fn default() -> Self {
        let currency = CurrencyFormat::default();
        Self {
            principal: FieldKind::Principal.default_value(),
            rate: FieldKind::Rate.default_value(),
            term: FieldKind::Term.default_value(),
            currency_symbol: currency.symbol,
            grouping: currency.grouping,
            slider: SliderStyle::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat {
            symbol: self.currency_symbol.clone(),
            grouping: self.grouping,
        }
    }

    pub fn initial_value(&self, kind: FieldKind) -> f64 {
        match kind {
            FieldKind::Principal => self.principal,
            FieldKind::Rate => self.rate,
            FieldKind::Term => self.term,
        }
    }
}

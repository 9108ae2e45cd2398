use clap::ValueEnum;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    widgets::{Block, Borders, Gauge, LineGauge},
    Frame,
};
use serde::Deserialize;

use crate::input::NumericField;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Round to the nearest `min + k * step`, then clamp. `max` is still
    /// reachable when it does not sit on the step grid.
    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }

    /// The value `steps` grid points away from `value`. An off-grid value
    /// first moves to the grid point nearest it, with ties going against
    /// the direction of travel, so one step never skips a grid point.
    pub fn nudge(&self, value: f64, steps: i32) -> f64 {
        let k = (value - self.min) / self.step;
        let base = match steps {
            s if s > 0 => (k - 0.5).ceil(),
            s if s < 0 => (k + 0.5).floor(),
            _ => k.round(),
        };
        self.snap(self.min + (base + f64::from(steps)) * self.step)
    }

    /// Thumb position in `[0, 1]`.
    pub fn ratio(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.clamp(value) - self.min) / span).clamp(0.0, 1.0)
    }
}

/// A bounded slider: `{ min, max, step, value, on_change }`.
pub trait Slider {
    fn range(&self) -> SliderRange;

    /// Current thumb value, always inside the range.
    fn value(&self) -> f64;

    /// Commit a new thumb value. Returns the value after snapping.
    fn on_change(&mut self, value: f64) -> f64;

    fn step_by(&mut self, steps: i32) -> f64 {
        let target = self.range().nudge(self.value(), steps);
        self.on_change(target)
    }

    fn to_min(&mut self) -> f64 {
        let min = self.range().min;
        self.on_change(min)
    }

    fn to_max(&mut self) -> f64 {
        let max = self.range().max;
        self.on_change(max)
    }
}

/// The field's text is the single source of truth; the slider reads
/// through it and writes back into it, so the two cannot disagree.
impl Slider for NumericField {
    fn range(&self) -> SliderRange {
        self.kind().range()
    }

    fn value(&self) -> f64 {
        let range = self.range();
        match NumericField::value(self) {
            Ok(v) if v.is_finite() && v != 0.0 => range.clamp(v),
            _ => range.clamp(self.kind().slider_fallback()),
        }
    }

    fn on_change(&mut self, value: f64) -> f64 {
        let snapped = self.range().snap(value);
        self.set_value(snapped);
        snapped
    }
}

/// How a slider is drawn. Implementations only render; they never touch
/// the value.
pub trait SliderWidget {
    fn render(&self, f: &mut Frame, area: Rect, slider: &dyn Slider, label: String, focused: bool);
}

fn thumb_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Blue)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    }
}

/// Filled bar, drawn with a ratatui `Gauge`.
pub struct BarSlider;

impl SliderWidget for BarSlider {
    fn render(&self, f: &mut Frame, area: Rect, slider: &dyn Slider, label: String, focused: bool) {
        let ratio = slider.range().ratio(slider.value());
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::NONE))
            .gauge_style(thumb_style(focused))
            .use_unicode(true)
            .ratio(ratio)
            .label(label);
        f.render_widget(gauge, area);
    }
}

/// Thin track with a label, drawn with a ratatui `LineGauge`.
pub struct LineSlider;

impl SliderWidget for LineSlider {
    fn render(&self, f: &mut Frame, area: Rect, slider: &dyn Slider, label: String, focused: bool) {
        let ratio = slider.range().ratio(slider.value());
        let gauge = LineGauge::default()
            .block(Block::default().borders(Borders::NONE))
            .gauge_style(thumb_style(focused))
            .line_set(symbols::line::THICK)
            .ratio(ratio)
            .label(label);
        f.render_widget(gauge, area);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SliderStyle {
    #[default]
    Bar,
    Line,
}

impl SliderStyle {
    pub fn widget(self) -> &'static dyn SliderWidget {
        match self {
            SliderStyle::Bar => &BarSlider,
            SliderStyle::Line => &LineSlider,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            SliderStyle::Bar => SliderStyle::Line,
            SliderStyle::Line => SliderStyle::Bar,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SliderStyle::Bar => "bar",
            SliderStyle::Line => "line",
        }
    }
}

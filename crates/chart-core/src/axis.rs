// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick label formatting.

use chrono::NaiveDate;

/// How tick values on an axis are turned into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Plain number with `decimals` fraction digits.
    Number { decimals: usize },
    /// Value is a day number counted from 0001-01-01 (`NaiveDate::num_days_from_ce`).
    Date,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub format: TickFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: TickFormat::Number { decimals: 1 } }
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 100.0)
    }

    pub fn format_tick(&self, v: f64) -> String {
        match self.format {
            TickFormat::Number { decimals } => format!("{:.*}", decimals, v),
            TickFormat::Date => {
                let day = v.round();
                if day < i32::MIN as f64 || day > i32::MAX as f64 {
                    return String::new();
                }
                NaiveDate::from_num_days_from_ce_opt(day as i32)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            }
        }
    }
}

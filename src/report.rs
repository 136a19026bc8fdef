//! Rendering outcomes into display fields

use console::style;
use std::io::{self, Write};

use crate::calculator::Outcome;
use crate::config::DisplaySettings;
use crate::fmt::{format_grouped, format_percent, icon, CHART};

/// Placeholder shown before anything has been entered
pub const IDLE_MESSAGE: &str = "Enter values to calculate Δ%";

/// The four display fields plus the optional formula line
///
/// States without a comparison put their message in `larger` and leave the
/// other fields blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    /// First line: larger value or a status message
    pub larger: String,
    /// Second line: smaller value
    pub smaller: String,
    /// Third line: delta percentage
    pub delta: String,
    /// Fourth line: proportion sentence
    pub proportion: String,
    /// Explanatory formula, when enabled and available
    pub formula: Option<String>,
}

impl Report {
    /// Report for a session with nothing entered yet
    pub fn idle() -> Self {
        Self::message(IDLE_MESSAGE)
    }

    fn message(text: &str) -> Self {
        Self {
            larger: text.to_string(),
            ..Self::default()
        }
    }

    /// Render an outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use delta_calc::calculator::compute;
    /// use delta_calc::config::DisplaySettings;
    /// use delta_calc::report::Report;
    /// use rust_decimal::Decimal;
    ///
    /// let outcome = compute(Decimal::new(358, 2), Decimal::new(423, 2));
    /// let report = Report::from_outcome(&outcome, &DisplaySettings::default());
    /// assert_eq!(report.larger, "Larger value: 4.2300");
    /// assert_eq!(report.delta, "Δ% = 15.37%");
    /// ```
    pub fn from_outcome(outcome: &Outcome, settings: &DisplaySettings) -> Self {
        match outcome {
            Outcome::BothZero => Self::message("Both values are zero"),
            Outcome::DivideByZero => Self::message("Cannot divide by zero"),
            Outcome::InvalidInput => Self::message("Invalid input"),
            Outcome::Computed(c) => Self {
                larger: format!(
                    "Larger value: {}",
                    format_grouped(c.larger, settings.value_places)
                ),
                smaller: format!(
                    "Smaller value: {}",
                    format_grouped(c.smaller, settings.value_places)
                ),
                delta: format!(
                    "Δ% = {}%",
                    format_percent(c.delta_percent, settings.percent_places)
                ),
                proportion: format!(
                    "The smaller value is {}% of the larger value",
                    format_percent(c.proportion_percent, settings.percent_places)
                ),
                formula: settings
                    .show_formula
                    .then(|| c.formula(settings.value_places)),
            },
        }
    }

    /// Non-empty display lines in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [
            self.larger.as_str(),
            self.smaller.as_str(),
            self.delta.as_str(),
            self.proportion.as_str(),
        ]
        .into_iter()
        .filter(|line| !line.is_empty())
    }

    /// Write the styled report
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{} {}", icon(CHART), style("Result").bold())?;
        for line in self.lines() {
            writeln!(out, "   {} {}", style("→").dim(), line)?;
        }
        if let Some(formula) = &self.formula {
            writeln!(out)?;
            writeln!(out, "   {} {}", style("Formula:").dim(), style(formula).cyan())?;
        }
        Ok(())
    }
}

//! Percentage difference computation
//!
//! The whole calculation is a pure function of two decimals: pick the larger
//! and smaller magnitude, then express how far the smaller falls short of the
//! larger (`Δ%`) and what share of the larger it represents.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::fmt::format_grouped;
use crate::input::{parse_value, InputLimits};

/// Fractional digits kept from `smaller / larger`
///
/// Keeps every intermediate well inside the 28-digit mantissa so that
/// `100 - delta` never rounds.
const RATIO_SCALE: u32 = 20;

/// Result of comparing two values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Both inputs are zero; there is nothing to compare
    BothZero,
    /// The larger magnitude is zero
    DivideByZero,
    /// Comparison succeeded
    Computed(Comparison),
    /// An input could not be parsed
    InvalidInput,
}

impl Outcome {
    /// The comparison, if one was computed
    pub fn comparison(&self) -> Option<&Comparison> {
        match self {
            Self::Computed(c) => Some(c),
            _ => None,
        }
    }
}

/// Magnitudes and percentages for a successful comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Larger absolute value
    pub larger: Decimal,
    /// Smaller absolute value
    pub smaller: Decimal,
    /// How far `smaller` falls short of `larger`, in percent
    pub delta_percent: Decimal,
    /// `smaller` as a percentage of `larger`
    pub proportion_percent: Decimal,
}

impl Comparison {
    /// Explanatory formula with operands rendered at `places` decimals
    ///
    /// # Examples
    ///
    /// ```
    /// use delta_calc::calculator::compute;
    /// use rust_decimal::Decimal;
    ///
    /// let outcome = compute(Decimal::from(100), Decimal::from(50));
    /// let formula = outcome.comparison().unwrap().formula(4);
    /// assert_eq!(formula, "Δ% = (1 - 50.0000/100.0000) × 100");
    /// ```
    pub fn formula(&self, places: u32) -> String {
        format!(
            "Δ% = (1 - {}/{}) × 100",
            format_grouped(self.smaller, places),
            format_grouped(self.larger, places)
        )
    }
}

/// Compare two values
///
/// Ties in magnitude resolve toward the second value, which only matters
/// for which input is reported as "larger" (the numbers are identical).
///
/// # Examples
///
/// ```
/// use delta_calc::calculator::{compute, Outcome};
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute(Decimal::ZERO, Decimal::ZERO), Outcome::BothZero);
///
/// let outcome = compute(Decimal::from(-100), Decimal::from(50));
/// let c = outcome.comparison().unwrap();
/// assert_eq!(c.larger, Decimal::from(100));
/// assert_eq!(c.delta_percent, Decimal::from(50));
/// ```
pub fn compute(value1: Decimal, value2: Decimal) -> Outcome {
    if value1.is_zero() && value2.is_zero() {
        return Outcome::BothZero;
    }

    let (larger, smaller) = if value1.abs() > value2.abs() {
        (value1.abs(), value2.abs())
    } else {
        (value2.abs(), value1.abs())
    };

    // Dead branch: a zero larger magnitude means both inputs were zero
    if larger.is_zero() {
        return Outcome::DivideByZero;
    }

    let ratio = (smaller / larger).round_dp(RATIO_SCALE);
    let delta_percent = (Decimal::ONE - ratio) * Decimal::ONE_HUNDRED;
    let proportion_percent = Decimal::ONE_HUNDRED - delta_percent;

    log::debug!(
        "compared {} and {}: larger={} smaller={} delta={}%",
        value1,
        value2,
        larger,
        smaller,
        delta_percent
    );

    Outcome::Computed(Comparison {
        larger,
        smaller,
        delta_percent,
        proportion_percent,
    })
}

/// Parse two raw inputs and compare them
///
/// Parse failures become [`Outcome::InvalidInput`] instead of an error, so a
/// front end can render every state the same way.
pub fn evaluate(text1: &str, text2: &str, limits: &InputLimits) -> Outcome {
    match (parse_value(text1, limits), parse_value(text2, limits)) {
        (Ok(v1), Ok(v2)) => compute(v1, v2),
        _ => Outcome::InvalidInput,
    }
}

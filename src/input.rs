//! Input parsing for the two compared values
//!
//! Raw text is turned into a bounded [`Decimal`] with the same contract as a
//! 4-decimal spin control: values are rounded to the configured precision and
//! must lie within `±max_magnitude`.

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Default bound on the magnitude of either input
pub const DEFAULT_MAX_MAGNITUDE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Default number of fractional digits kept from an input
pub const DEFAULT_PRECISION: u32 = 4;

/// Reasons a piece of text cannot become an input value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing but whitespace was entered
    #[error("no value entered")]
    Empty,

    /// Text is not a finite decimal number
    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    /// Value parsed but lies outside the supported range
    #[error("{value} is outside the supported range of ±{max}")]
    OutOfRange {
        /// Parsed value
        value: Decimal,
        /// Largest accepted magnitude
        max: Decimal,
    },
}

/// Range and precision applied to every input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    /// Largest accepted absolute value (inclusive)
    pub max_magnitude: Decimal,
    /// Fractional digits kept after rounding
    pub precision: u32,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_magnitude: DEFAULT_MAX_MAGNITUDE,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Parse one input value
///
/// Accepts an optional sign, `,` thousands separators in groups of three
/// and scientific notation. Well-formed numbers too large for a [`Decimal`]
/// are reported as [`InputError::OutOfRange`]. The result is rounded to `limits.precision` digits (midpoint
/// away from zero) before the range check.
///
/// # Examples
///
/// ```
/// use delta_calc::input::{parse_value, InputLimits};
/// use rust_decimal::Decimal;
///
/// let limits = InputLimits::default();
/// assert_eq!(parse_value(" 1,234.5 ", &limits).unwrap(), Decimal::new(12345, 1));
/// assert!(parse_value("abc", &limits).is_err());
/// assert!(parse_value("2000000", &limits).is_err());
/// ```
pub fn parse_value(text: &str, limits: &InputLimits) -> Result<Decimal, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let caps = number_re()
        .captures(trimmed)
        .ok_or_else(|| InputError::NotANumber(trimmed.to_string()))?;

    let negative = caps.name("sign").is_some_and(|m| m.as_str() == "-");
    let mut digits = caps["int"].replace(',', "");
    if let Some(frac) = caps.name("frac") {
        digits.push_str(frac.as_str());
    }
    let exponent = caps.name("exp").map_or(0, |m| {
        let exp = m.as_str();
        exp.parse::<i32>().unwrap_or(if exp.starts_with('-') {
            i32::MIN
        } else {
            i32::MAX
        })
    });

    // The text is a well-formed number here, so a failed parse means overflow
    let magnitude = Decimal::from_str(&digits)
        .ok()
        .and_then(|mantissa| scale_by_power_of_ten(mantissa, exponent))
        .ok_or(InputError::OutOfRange {
            value: if negative { Decimal::MIN } else { Decimal::MAX },
            max: limits.max_magnitude,
        })?;
    let parsed = if negative { -magnitude } else { magnitude };

    let value =
        parsed.round_dp_with_strategy(limits.precision, RoundingStrategy::MidpointAwayFromZero);

    if value.abs() > limits.max_magnitude {
        return Err(InputError::OutOfRange {
            value,
            max: limits.max_magnitude,
        });
    }

    log::debug!("parsed input {:?} as {}", trimmed, value);
    Ok(value)
}

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();

/// Optional sign, an integer part that is either plain digits or well-formed
/// `,` thousands groups, an optional fraction and an optional exponent
fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| {
        Regex::new(
            r"^(?P<sign>[+-])?(?P<int>[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?P<frac>\.[0-9]+)?(?:[eE](?P<exp>[+-]?[0-9]+))?$",
        )
        .expect("number regex is valid")
    })
}

/// Multiply by `10^exponent`; `None` on overflow, underflow goes to zero
fn scale_by_power_of_ten(mut value: Decimal, exponent: i32) -> Option<Decimal> {
    for _ in 0..exponent.unsigned_abs() {
        if value.is_zero() {
            break;
        }
        value = if exponent > 0 {
            value.checked_mul(Decimal::TEN)?
        } else {
            value.checked_div(Decimal::TEN).unwrap_or(Decimal::ZERO)
        };
    }
    Some(value)
}

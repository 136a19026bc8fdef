//! Live calculator state
//!
//! A [`Session`] is what a front end talks to: it holds the two current
//! inputs, recomputes the outcome on every change, and hands out the raw
//! value behind each result field.

use clap::ValueEnum;
use rust_decimal::Decimal;

use crate::calculator::{compute, Outcome};
use crate::input::{parse_value, InputError, InputLimits};

/// One of the four result fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    /// Larger absolute value
    Larger,
    /// Smaller absolute value
    Smaller,
    /// Delta percentage
    Delta,
    /// Smaller as a percentage of larger
    Proportion,
}

impl Field {
    /// Value of this field in `outcome`, if it has one
    pub fn value_in(self, outcome: &Outcome) -> Option<Decimal> {
        let c = outcome.comparison()?;
        Some(match self {
            Self::Larger => c.larger,
            Self::Smaller => c.smaller,
            Self::Delta => c.delta_percent,
            Self::Proportion => c.proportion_percent,
        })
    }
}

/// Which input slot a change applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// First value
    First,
    /// Second value
    Second,
}

/// Two inputs and the outcome derived from them
#[derive(Debug, Clone)]
pub struct Session {
    limits: InputLimits,
    first: Decimal,
    second: Decimal,
    // None until the first edit after construction or clear()
    outcome: Option<Outcome>,
}

impl Session {
    /// Create a session with both inputs at zero and no result
    pub fn new(limits: InputLimits) -> Self {
        Self {
            limits,
            first: Decimal::ZERO,
            second: Decimal::ZERO,
            outcome: None,
        }
    }

    /// Update one input from raw text and recompute
    ///
    /// An unparsable value leaves the stored input untouched and moves the
    /// session to [`Outcome::InvalidInput`]; the parse error is returned so
    /// callers can explain it.
    ///
    /// # Examples
    ///
    /// ```
    /// use delta_calc::calculator::Outcome;
    /// use delta_calc::input::InputLimits;
    /// use delta_calc::session::{Field, Session, Slot};
    /// use rust_decimal::Decimal;
    ///
    /// let mut session = Session::new(InputLimits::default());
    /// session.set(Slot::First, "100").unwrap();
    /// session.set(Slot::Second, "50").unwrap();
    /// assert_eq!(session.field_value(Field::Delta), Some(Decimal::from(50)));
    ///
    /// assert!(session.set(Slot::Second, "oops").is_err());
    /// assert_eq!(session.outcome(), Some(Outcome::InvalidInput));
    /// assert_eq!(session.values().1, Decimal::from(50));
    /// ```
    pub fn set(&mut self, slot: Slot, text: &str) -> Result<Outcome, InputError> {
        let value = match parse_value(text, &self.limits) {
            Ok(v) => v,
            Err(e) => {
                self.outcome = Some(Outcome::InvalidInput);
                return Err(e);
            }
        };

        match slot {
            Slot::First => self.first = value,
            Slot::Second => self.second = value,
        }

        let outcome = compute(self.first, self.second);
        self.outcome = Some(outcome);
        Ok(outcome)
    }

    /// Shorthand for `set(Slot::First, text)`
    pub fn set_first(&mut self, text: &str) -> Result<Outcome, InputError> {
        self.set(Slot::First, text)
    }

    /// Shorthand for `set(Slot::Second, text)`
    pub fn set_second(&mut self, text: &str) -> Result<Outcome, InputError> {
        self.set(Slot::Second, text)
    }

    /// Reset both inputs to zero and drop the result
    pub fn clear(&mut self) {
        self.first = Decimal::ZERO;
        self.second = Decimal::ZERO;
        self.outcome = None;
    }

    /// Current outcome; `None` while idle
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Current stored inputs
    pub fn values(&self) -> (Decimal, Decimal) {
        (self.first, self.second)
    }

    /// Raw value behind a result field, for copying
    pub fn field_value(&self, field: Field) -> Option<Decimal> {
        self.outcome.as_ref().and_then(|o| field.value_in(o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn session() -> Session {
        Session::new(InputLimits::default())
    }

    #[test]
    fn test_new_session_is_idle() {
        let s = session();
        assert_eq!(s.outcome(), None);
        assert_eq!(s.values(), (dec!(0), dec!(0)));
        assert_eq!(s.field_value(Field::Larger), None);
    }

    #[test]
    fn test_each_change_recomputes() {
        let mut s = session();

        assert_eq!(s.set_first("10").unwrap(), compute(dec!(10), dec!(0)));
        assert_eq!(s.field_value(Field::Delta), Some(dec!(100)));

        assert_eq!(s.set_second("-10").unwrap(), compute(dec!(10), dec!(10)));
        assert_eq!(s.field_value(Field::Delta), Some(dec!(0)));
        assert_eq!(s.field_value(Field::Proportion), Some(dec!(100)));
    }

    #[test]
    fn test_setting_zero_pair_reports_both_zero() {
        let mut s = session();
        assert_eq!(s.set_first("0").unwrap(), Outcome::BothZero);
        assert_eq!(s.field_value(Field::Smaller), None);
    }

    #[test]
    fn test_invalid_input_keeps_previous_value() {
        let mut s = session();
        s.set_first("100").unwrap();
        s.set_second("50").unwrap();

        let err = s.set_first("1e99").unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { .. }));
        assert_eq!(s.outcome(), Some(Outcome::InvalidInput));
        assert_eq!(s.values(), (dec!(100), dec!(50)));
        assert_eq!(s.field_value(Field::Larger), None);

        // The next valid edit recovers using the retained value
        s.set_second("25").unwrap();
        assert_eq!(s.field_value(Field::Larger), Some(dec!(100)));
        assert_eq!(s.field_value(Field::Delta), Some(dec!(75)));
    }

    #[test]
    fn test_clear_resets_to_idle() {
        let mut s = session();
        s.set_first("3.58").unwrap();
        s.set_second("4.23").unwrap();

        s.clear();
        assert_eq!(s.outcome(), None);
        assert_eq!(s.values(), (dec!(0), dec!(0)));
    }

    #[test]
    fn test_field_values_match_comparison() {
        let mut s = session();
        s.set_first("4.23").unwrap();
        let outcome = s.set_second("3.58").unwrap();
        let c = outcome.comparison().unwrap();

        assert_eq!(s.field_value(Field::Larger), Some(c.larger));
        assert_eq!(s.field_value(Field::Smaller), Some(c.smaller));
        assert_eq!(s.field_value(Field::Delta), Some(c.delta_percent));
        assert_eq!(s.field_value(Field::Proportion), Some(c.proportion_percent));
    }
}

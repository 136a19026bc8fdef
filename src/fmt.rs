//! Shared formatting utilities for numeric display and console output

use console::Emoji;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::atomic::{AtomicBool, Ordering};

static PLAIN_ICONS: AtomicBool = AtomicBool::new(false);

/// Force the plain-text fallback for every [`icon`]
pub fn set_plain_icons(plain: bool) {
    PLAIN_ICONS.store(plain, Ordering::Relaxed);
}

/// Render an emoji, honouring `--no-emoji`
///
/// # Examples
///
/// ```
/// use delta_calc::fmt::{icon, set_plain_icons, CHECKMARK};
///
/// set_plain_icons(true);
/// assert_eq!(icon(CHECKMARK), "[OK]");
/// ```
pub fn icon(emoji: Emoji<'_, '_>) -> String {
    if PLAIN_ICONS.load(Ordering::Relaxed) {
        emoji.1.to_string()
    } else {
        emoji.to_string()
    }
}

/// Delta emoji for the calculator banner
pub const DELTA: Emoji = Emoji("🔺", "^");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for results
pub const CHART: Emoji = Emoji("📊", "~");

/// Round half-to-even to exactly `places` fractional digits, never producing `-0`
fn fixed(value: Decimal, places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(places);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Format a decimal with `,` thousands separators and fixed places
///
/// # Examples
///
/// ```
/// use delta_calc::fmt::format_grouped;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_grouped(Decimal::new(12345675, 3), 2), "12,345.68");
/// assert_eq!(format_grouped(Decimal::from(-1_000_000), 4), "-1,000,000.0000");
/// assert_eq!(format_grouped(Decimal::from(999), 0), "999");
/// ```
pub fn format_grouped(value: Decimal, places: u32) -> String {
    let text = fixed(value, places).to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format a percentage with fixed places and no grouping
///
/// # Examples
///
/// ```
/// use delta_calc::fmt::format_percent;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percent(Decimal::new(153664, 4), 2), "15.37");
/// assert_eq!(format_percent(Decimal::ONE_HUNDRED, 2), "100.00");
/// ```
pub fn format_percent(value: Decimal, places: u32) -> String {
    fixed(value, places).to_string()
}

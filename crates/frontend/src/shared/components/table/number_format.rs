//! Currency formatting for table cells (en-US, USD)

use contracts::domain::a025_order::{parse_amount, AmountParseError};
use rust_decimal::{Decimal, RoundingStrategy};

/// Inserts `separator` every three digits from the right of an unsigned integer string
pub fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}

/// Formats a decimal as US dollars: `1234.5` -> `$1,234.50`, `-3` -> `-$3.00`
pub fn format_usd(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (integer_part, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        group_thousands(integer_part, ','),
        fraction
    )
}

/// Parses a decimal amount string and formats it as US dollars.
///
/// Malformed input is returned as an error so that bad data stays visible.
pub fn format_currency(amount: &str) -> Result<String, AmountParseError> {
    parse_amount(amount).map(format_usd)
}

/// Formats a filter bound (plain number) as US dollars
pub fn format_usd_f64(value: f64) -> String {
    match Decimal::try_from(value) {
        Ok(decimal) => format_usd(decimal),
        Err(_) => format!("${:.2}", value),
    }
}

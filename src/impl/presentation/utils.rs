use std::fmt;

use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use rust_decimal::prelude::ToPrimitive as _;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::entities::price::{Price, PriceTotal};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format cash amount with currency symbol, correct number of decimal places,
/// and proper thousands separators.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency. Could be generalized in the future.
pub(crate) fn format_amount(amount: Decimal, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    // Half-up, not banker's rounding; receipts total the way they print.
    let rounded = amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let magnitude = rounded.abs();
    let integer_part = magnitude
        .trunc()
        .to_i128()
        .unwrap_or_default()
        .to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        return format!("{}{} {}", sign, integer_part, currency.symbol());
    }
    let fractional_part = format!("{:.places$}", magnitude.fract(), places = decimal_places as usize)
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!(
        "{}{}.{} {}",
        sign,
        integer_part,
        fractional_part,
        currency.symbol()
    )
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_amount(self.amount, self.currency))
    }
}

impl fmt::Display for PriceTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_multi_currency() && self.is_exact() {
            write!(f, "{}", format_amount(self.converted(), self.base_currency()))
        } else {
            // Itemized per source currency, never a collapsed single figure.
            let parts: Vec<String> = self
                .itemized()
                .iter()
                .map(|entry| format_amount(entry.amount, entry.currency))
                .collect();
            write!(f, "{}", parts.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_part(formatted: &str) -> String {
        formatted.split(' ').next().unwrap_or_default().to_string()
    }

    #[test]
    fn test_format_amount_thousands_separators() {
        let formatted = format_amount("1234567.5".parse().unwrap(), Currency::USD);
        assert_eq!(numeric_part(&formatted), "1,234,567.50");
    }

    #[test]
    fn test_format_amount_rounds_to_currency_exponent() {
        let formatted = format_amount("10.005".parse().unwrap(), Currency::USD);
        assert_eq!(numeric_part(&formatted), "10.01");
    }

    #[test]
    fn test_format_amount_zero_exponent_currency() {
        let formatted = format_amount("1234.4".parse().unwrap(), Currency::JPY);
        assert_eq!(numeric_part(&formatted), "1,234");
    }

    #[test]
    fn test_format_amount_negative_below_one() {
        let formatted = format_amount("-0.50".parse().unwrap(), Currency::USD);
        assert_eq!(numeric_part(&formatted), "-0.50");
    }

    #[test]
    fn test_price_total_display_single_currency() {
        let prices = vec![
            Price::new("10.00".parse().unwrap(), Currency::USD),
            Price::new("25.00".parse().unwrap(), Currency::USD),
        ];
        let total = PriceTotal::sum(Currency::USD, &prices);
        assert_eq!(numeric_part(&total.to_string()), "35.00");
    }

    #[test]
    fn test_price_total_display_multi_currency_is_itemized() {
        let prices = vec![
            Price::new("10.00".parse().unwrap(), Currency::USD),
            Price::with_exchange_rate(
                "20.00".parse().unwrap(),
                Currency::EUR,
                "1.10".parse().unwrap(),
            ),
        ];
        let total = PriceTotal::sum(Currency::USD, &prices);
        let display = total.to_string();
        assert!(display.contains("; "));
        assert!(display.contains("20.00"));
        assert!(display.contains("10.00"));
        // The converted figure never appears alone.
        assert!(!display.contains("32.00"));
    }
}

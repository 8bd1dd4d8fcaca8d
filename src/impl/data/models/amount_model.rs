use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::ParseError;

/// Monetary amount as it appears in a CSV cell: optional thousands
/// separators, parentheses for negatives.
#[derive(Debug)]
pub(crate) struct AmountModel(pub Decimal);

impl FromStr for AmountModel {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let is_negative = raw.trim().starts_with("(") && raw.trim().ends_with(")");
        let numeric_part = raw.trim().trim_matches(|c| c == '(' || c == ')');
        let amount = numeric_part
            .parse::<Decimal>()
            .map_err(|_| ParseError::InvalidAmount {
                value: numeric_part.to_string(),
            })?;
        Ok(AmountModel(if is_negative { -amount } else { amount }))
    }
}

impl Into<Decimal> for AmountModel {
    fn into(self) -> Decimal {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let amount = AmountModel::from_str("12.34").unwrap();
        assert_eq!(amount.0, "12.34".parse().unwrap());
    }

    #[test]
    fn test_parse_thousands_separators() {
        let amount = AmountModel::from_str("1,234.56").unwrap();
        assert_eq!(amount.0, "1234.56".parse().unwrap());
    }

    #[test]
    fn test_parse_parenthesized_negative() {
        let amount = AmountModel::from_str("(42.00)").unwrap();
        assert_eq!(amount.0, "-42.00".parse().unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(AmountModel::from_str("12.3.4").is_err());
        assert!(AmountModel::from_str("abc").is_err());
    }
}

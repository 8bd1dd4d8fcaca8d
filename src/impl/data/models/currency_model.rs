use std::str::FromStr;

use iso_currency::Currency;

use crate::errors::ParseError;

#[derive(Debug)]
pub(crate) struct CurrencyModel(pub Currency);

impl FromStr for CurrencyModel {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let currency =
            Currency::from_code(s.trim()).ok_or_else(|| ParseError::InvalidIsoCurrencyCode {
                code: s.to_string(),
            })?;
        Ok(CurrencyModel(currency))
    }
}

impl Into<Currency> for CurrencyModel {
    fn into(self) -> Currency {
        self.0
    }
}

use std::collections::HashMap;

use iso_currency::Currency;
use rust_decimal::Decimal;
use serde_derive::Serialize;

/// A currency-tagged decimal amount.
///
/// The exchange rate, when present, converts the amount into the base currency
/// of the trip the price belongs to. Prices already denominated in the base
/// currency need no rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub amount: Decimal,
    pub currency: Currency,
    pub exchange_rate: Option<Decimal>,
}

impl Price {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            exchange_rate: None,
        }
    }

    pub fn with_exchange_rate(amount: Decimal, currency: Currency, rate: Decimal) -> Self {
        Self {
            amount,
            currency,
            exchange_rate: Some(rate),
        }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Value of this price in the given base currency, if convertible.
    pub fn in_base(&self, base: Currency) -> Option<Decimal> {
        if self.currency == base {
            Some(self.amount)
        } else {
            self.exchange_rate.map(|rate| self.amount * rate)
        }
    }
}

/// One per-currency line of an itemized total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyAmount {
    pub currency: Currency,
    pub amount: Decimal,
}

/// Sum of a list of prices against a base currency.
///
/// `converted` carries the reduction of every convertible input into the base
/// currency; `itemized` keeps the original per-source-currency amounts so
/// renderers can show a breakdown instead of a collapsed figure when the
/// inputs spanned more than one currency. `exact` is false when some non-base
/// input had no exchange rate, in which case `converted` undercounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceTotal {
    base_currency: Currency,
    converted: Decimal,
    itemized: Vec<CurrencyAmount>,
    exact: bool,
}

impl PriceTotal {
    pub fn zero(base_currency: Currency) -> Self {
        Self {
            base_currency,
            converted: Decimal::ZERO,
            itemized: Vec::new(),
            exact: true,
        }
    }

    pub fn sum<'a, I>(base_currency: Currency, prices: I) -> Self
    where
        I: IntoIterator<Item = &'a Price>,
    {
        let mut converted = Decimal::ZERO;
        let mut by_currency: HashMap<Currency, Decimal> = HashMap::new();
        let mut exact = true;

        for price in prices {
            match price.in_base(base_currency) {
                Some(value) => converted += value,
                None => exact = false,
            }
            *by_currency.entry(price.currency).or_insert(Decimal::ZERO) += price.amount;
        }

        let mut itemized: Vec<CurrencyAmount> = by_currency
            .into_iter()
            .map(|(currency, amount)| CurrencyAmount { currency, amount })
            .collect();
        itemized.sort_by_key(|entry| entry.currency.code());

        Self {
            base_currency,
            converted,
            itemized,
            exact,
        }
    }

    pub fn base_currency(&self) -> Currency {
        self.base_currency
    }

    /// Reduction of every convertible input into the base currency. Only the
    /// full total when `is_exact` holds.
    pub fn converted(&self) -> Decimal {
        self.converted
    }

    pub fn itemized(&self) -> &[CurrencyAmount] {
        &self.itemized
    }

    /// Whether the summed inputs spanned more than one currency code.
    pub fn is_multi_currency(&self) -> bool {
        self.itemized.len() > 1
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    pub fn is_zero(&self) -> bool {
        self.converted.is_zero() && self.itemized.iter().all(|entry| entry.amount.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(amount: &str) -> Price {
        Price::new(amount.parse().unwrap(), Currency::USD)
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let total = PriceTotal::sum(Currency::USD, []);
        assert!(total.is_zero());
        assert!(total.is_exact());
        assert!(!total.is_multi_currency());
        assert_eq!(total.converted(), Decimal::ZERO);
        assert!(total.itemized().is_empty());
    }

    #[test]
    fn test_sum_single_currency() {
        let prices = vec![usd("10.00"), usd("20.00"), usd("5.00")];
        let total = PriceTotal::sum(Currency::USD, &prices);
        assert_eq!(total.converted(), "35.00".parse().unwrap());
        assert!(!total.is_multi_currency());
        assert!(total.is_exact());
        assert_eq!(total.itemized().len(), 1);
        assert_eq!(total.itemized()[0].currency, Currency::USD);
    }

    #[test]
    fn test_sum_converts_with_exchange_rate() {
        let prices = vec![
            usd("10.00"),
            Price::with_exchange_rate("20.00".parse().unwrap(), Currency::EUR, "1.10".parse().unwrap()),
        ];
        let total = PriceTotal::sum(Currency::USD, &prices);
        assert_eq!(total.converted(), "32.00".parse().unwrap());
        assert!(total.is_multi_currency());
        assert!(total.is_exact());
    }

    #[test]
    fn test_sum_missing_rate_is_inexact() {
        let prices = vec![usd("10.00"), Price::new("20.00".parse().unwrap(), Currency::EUR)];
        let total = PriceTotal::sum(Currency::USD, &prices);
        assert!(!total.is_exact());
        assert!(total.is_multi_currency());
        // Only the convertible part lands in the base-currency reduction.
        assert_eq!(total.converted(), "10.00".parse().unwrap());
        let itemized = total.itemized();
        assert_eq!(itemized.len(), 2);
        assert_eq!(itemized[0].currency, Currency::EUR);
        assert_eq!(itemized[0].amount, "20.00".parse().unwrap());
        assert_eq!(itemized[1].currency, Currency::USD);
        assert_eq!(itemized[1].amount, "10.00".parse().unwrap());
    }

    #[test]
    fn test_sum_base_currency_ignores_rate() {
        // A rate on a base-currency price must not double-convert.
        let price = Price::with_exchange_rate("10.00".parse().unwrap(), Currency::USD, "2".parse().unwrap());
        let total = PriceTotal::sum(Currency::USD, [&price]);
        assert_eq!(total.converted(), "10.00".parse().unwrap());
    }
}

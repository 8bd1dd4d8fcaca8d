use chrono::NaiveDate;
use iso_currency::Currency;
use rust_decimal::Decimal;

use super::price::Price;

/// A mileage entry attached to a trip. Its price is distance times rate,
/// denominated in the trip's base currency.
#[derive(Debug, Clone)]
pub struct Distance {
    pub location: String,
    pub distance: Decimal,
    pub rate: Decimal,
    pub date: NaiveDate,
    pub comment: Option<String>,
}

impl Distance {
    pub fn price(&self, base_currency: Currency) -> Price {
        Price::new(self.distance * self.rate, base_currency)
    }
}

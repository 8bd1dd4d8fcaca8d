use chrono::NaiveDate;
use iso_currency::Currency;

/// A user-defined expense report spanning a date range.
///
/// The base currency is the currency every aggregation result is expressed
/// against; the directory name is the stem of the generated report files.
#[derive(Debug, Clone)]
pub struct Trip {
    pub name: String,
    pub directory_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub base_currency: Currency,
    pub comment: Option<String>,
}

impl Trip {
    pub fn new(
        name: impl Into<String>,
        directory_name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        base_currency: Currency,
    ) -> Self {
        Self {
            name: name.into(),
            directory_name: directory_name.into(),
            start_date,
            end_date,
            base_currency,
            comment: None,
        }
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use super::{category::Category, payment_method::PaymentMethod, price::Price};

/// A single expense entry. An immutable value once constructed; edits replace
/// the record rather than mutating it.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub index: u32,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    /// Zone the receipt was captured in; day bucketing uses the local date.
    pub time_zone: Tz,
    pub category: Category,
    pub payment_method: Option<PaymentMethod>,
    pub price: Price,
    pub tax: Price,
    pub tax2: Price,
    pub reimbursable: bool,
    pub comment: Option<String>,
    pub image_path: Option<String>,
}

impl Receipt {
    /// Calendar date of the receipt in its own time zone.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.with_timezone(&self.time_zone).date_naive()
    }

    /// Local date as days since the Unix epoch.
    pub fn epoch_day(&self) -> i64 {
        self.local_date()
            .signed_duration_since(NaiveDate::default())
            .num_days()
    }
}

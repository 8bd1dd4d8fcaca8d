use chrono::NaiveDate;
use serde_derive::Serialize;

use super::{
    category::Category, payment_method::PaymentMethod, price::PriceTotal, receipt::Receipt,
};

// Derived aggregation values. Computed on demand from a trip's receipt set,
// never persisted.

/// One category bucket with the receipts that fell into it.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub category: Category,
    pub receipts: Vec<Receipt>,
}

/// Price/tax sums and receipt count for one category bucket.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySum {
    pub category: Category,
    pub count: usize,
    pub price: PriceTotal,
    /// Primary plus secondary tax over every receipt in the bucket.
    pub tax: PriceTotal,
}

/// Price sum for one payment-method bucket.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentMethodSum {
    pub payment_method: PaymentMethod,
    pub price: PriceTotal,
}

/// Price sum for one reimbursement bucket.
#[derive(Debug, Clone, Serialize)]
pub struct ReimbursementSum {
    pub reimbursable: bool,
    pub price: PriceTotal,
}

/// Price sum for one calendar day.
#[derive(Debug, Clone, Serialize)]
pub struct DaySum {
    pub date: NaiveDate,
    pub price: PriceTotal,
}

/// All summations in one bundle, the shape the chart layer consumes.
#[derive(Debug, Clone, Serialize)]
pub struct GroupingSummaries {
    pub by_category: Vec<CategorySum>,
    pub by_payment_method: Vec<PaymentMethodSum>,
    pub by_reimbursement: Vec<ReimbursementSum>,
    pub by_day: Vec<DaySum>,
}

impl GroupingSummaries {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

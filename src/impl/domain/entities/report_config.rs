use serde_derive::Deserialize;

/// User-facing report configuration: the two aggregation toggles plus the
/// output column selections. Deserialized from a RON document; every field
/// falls back to its default when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Include the payment-method summation section.
    pub use_payment_methods: bool,
    /// Drop non-reimbursable receipts before any bucketing.
    pub only_include_reimbursable: bool,
    /// Include the per-category summation table.
    pub include_category_summation: bool,
    /// Include one receipts table per category bucket.
    pub include_category_groups: bool,
    pub receipt_columns: Vec<ReceiptColumn>,
    pub distance_columns: Vec<DistanceColumn>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            use_payment_methods: false,
            only_include_reimbursable: false,
            include_category_summation: true,
            include_category_groups: false,
            receipt_columns: vec![
                ReceiptColumn::Name,
                ReceiptColumn::Date,
                ReceiptColumn::Category,
                ReceiptColumn::Price,
                ReceiptColumn::Tax,
                ReceiptColumn::Currency,
                ReceiptColumn::Reimbursable,
            ],
            distance_columns: vec![
                DistanceColumn::Location,
                DistanceColumn::Distance,
                DistanceColumn::Rate,
                DistanceColumn::Price,
                DistanceColumn::Date,
            ],
        }
    }
}

/// Selectable columns of the receipts tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ReceiptColumn {
    Name,
    Date,
    Category,
    CategoryCode,
    PaymentMethod,
    Price,
    /// Primary plus secondary tax.
    Tax,
    Currency,
    ExchangeRate,
    Reimbursable,
    Comment,
}

/// Selectable columns of the distances table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DistanceColumn {
    Location,
    Distance,
    Rate,
    Price,
    Date,
    Comment,
}

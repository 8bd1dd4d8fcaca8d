use std::fmt;

use serde_derive::Serialize;

/// A named tender type. Receipts with no tender carry `None` instead of a
/// sentinel value, and are excluded from payment-method bucketing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PaymentMethod {
    pub name: String,
}

impl PaymentMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

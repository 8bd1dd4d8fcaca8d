use std::fmt;

use serde_derive::Serialize;

/// A named, coded classification tag attached to a receipt.
///
/// Identity is the (name, code) pair; derived ordering follows field order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Category {
    pub name: String,
    pub code: String,
}

impl Category {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

use super::{distance::Distance, receipt::Receipt};

/// The full in-memory contents of a trip, as read from the data layer.
#[derive(Debug, Clone, Default)]
pub struct TripRecords {
    pub receipts: Vec<Receipt>,
    pub distances: Vec<Distance>,
}

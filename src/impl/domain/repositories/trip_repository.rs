use async_trait::async_trait;

use crate::{
    domain::entities::{report_config::ReportConfig, trip_records::TripRecords},
    errors::ParseError,
};

/// Read access to a trip's raw inputs: the receipts and distances CSVs plus
/// the RON report configuration. An empty distances document or configuration
/// document is valid.
#[async_trait]
pub trait TripRepository {
    fn from_string(
        &self,
        receipts_csv: &str,
        distances_csv: &str,
        config_ron: &str,
    ) -> Result<(TripRecords, ReportConfig), ParseError>;

    async fn from_file<P>(
        &self,
        receipts_csv: P,
        distances_csv: P,
        config_ron: P,
    ) -> Result<(TripRecords, ReportConfig), ParseError>
    where
        P: AsRef<std::path::Path> + Send;
}

use async_trait::async_trait;

use crate::{
    data::datasources::{
        distances_csv_datasource::{DistancesCsvDatasource, DistancesCsvDatasourceImpl},
        receipts_csv_datasource::{ReceiptsCsvDatasource, ReceiptsCsvDatasourceImpl},
        report_config_datasource::{ReportConfigDatasource, ReportConfigDatasourceImpl},
    },
    domain::{
        entities::{report_config::ReportConfig, trip_records::TripRecords},
        repositories::trip_repository::TripRepository,
    },
    errors::ParseError,
};

pub(crate) struct TripRepositoryImpl<
    DS1 = ReceiptsCsvDatasourceImpl, // Defaults.
    DS2 = DistancesCsvDatasourceImpl,
    DS3 = ReportConfigDatasourceImpl,
> where
    DS1: ReceiptsCsvDatasource + Send + Sync,
    DS2: DistancesCsvDatasource + Send + Sync,
    DS3: ReportConfigDatasource + Send + Sync,
{
    receipts_datasource: DS1,
    distances_datasource: DS2,
    config_datasource: DS3,
}

#[async_trait]
impl<DS1, DS2, DS3> TripRepository for TripRepositoryImpl<DS1, DS2, DS3>
where
    DS1: ReceiptsCsvDatasource + Send + Sync,
    DS2: DistancesCsvDatasource + Send + Sync,
    DS3: ReportConfigDatasource + Send + Sync,
{
    fn from_string(
        &self,
        receipts_csv: &str,
        distances_csv: &str,
        config_ron: &str,
    ) -> Result<(TripRecords, ReportConfig), ParseError> {
        Ok((
            TripRecords {
                receipts: self.receipts_datasource.from_string(receipts_csv)?,
                distances: self.distances_datasource.from_string(distances_csv)?,
            },
            self.config_datasource.from_string(config_ron)?,
        ))
    }

    async fn from_file<P>(
        &self,
        receipts_csv: P,
        distances_csv: P,
        config_ron: P,
    ) -> Result<(TripRecords, ReportConfig), ParseError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let (receipts, distances, config) = futures::try_join!(
            tokio::fs::read_to_string(receipts_csv.as_ref()),
            tokio::fs::read_to_string(distances_csv.as_ref()),
            tokio::fs::read_to_string(config_ron.as_ref()),
        )
        .map_err(ParseError::Read)?;
        self.from_string(&receipts, &distances, &config)
    }
}

impl TripRepositoryImpl {
    pub(crate) fn new() -> Self {
        TripRepositoryImpl {
            receipts_datasource: ReceiptsCsvDatasourceImpl::new(),
            distances_datasource: DistancesCsvDatasourceImpl::new(),
            config_datasource: ReportConfigDatasourceImpl::new(),
        }
    }
}

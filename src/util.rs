use std::path::{Path, PathBuf};

use crate::{
    domain::usecases::report_usecase::{ReportUsecase as _, ReportUsecaseImpl},
    entities::{GeneratedReport, Trip},
    errors::ReportError,
    presentation::{report_writer::ReportWriter, section_renderer::SectionRenderer},
};

/// Facade over the full pipeline: parse a trip's inputs, aggregate, assemble
/// the report sections, and (optionally) render and write the output files.
pub struct ReceiptReportUtil {
    report_usecase: ReportUsecaseImpl,
    report_writer: ReportWriter,
}

impl ReceiptReportUtil {
    pub fn new() -> Self {
        Self {
            report_usecase: ReportUsecaseImpl::new(),
            report_writer: ReportWriter::new(),
        }
    }

    pub fn from_string(
        &self,
        trip: &Trip,
        receipts_csv: &str,
        distances_csv: &str,
        config_ron: &str,
    ) -> Result<GeneratedReport, ReportError> {
        self.report_usecase
            .from_string(trip, receipts_csv, distances_csv, config_ron)
    }

    pub async fn from_file<P>(
        &self,
        trip: &Trip,
        receipts_csv: P,
        distances_csv: P,
        config_ron: P,
    ) -> Result<GeneratedReport, ReportError>
    where
        P: AsRef<Path> + Send,
    {
        self.report_usecase
            .from_file(trip, receipts_csv, distances_csv, config_ron)
            .await
    }

    /// Renders both reports with the given renderer and writes them under
    /// `out_dir`, returning the written paths.
    pub async fn write_report_files(
        &self,
        out_dir: impl AsRef<Path>,
        trip: &Trip,
        renderer: &dyn SectionRenderer,
        generated: &GeneratedReport,
    ) -> Result<Vec<PathBuf>, ReportError> {
        self.report_writer
            .write(out_dir, trip, renderer, generated)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use iso_currency::Currency;
    use rust_decimal::Decimal;

    use super::*;
    use crate::CsvRenderer;

    const RECEIPTS_CSV: &str = "name,date_time,time_zone,category_name,category_code,payment_method,amount,currency,exchange_rate,tax,tax2,reimbursable,comment,image_path\n\
        Lunch,2016-11-01T12:30:00,America/New_York,Meals,MEAL,Cash,10.00,USD,,1.00,0,true,,\n\
        Hotel,2016-11-02T21:00:00,America/New_York,Lodging,LODG,Credit Card,120.00,USD,,9.60,0,true,,\n";

    fn trip() -> Trip {
        Trip::new(
            "Conference",
            "Conference",
            NaiveDate::from_ymd_opt(2016, 11, 1).unwrap(),
            NaiveDate::from_ymd_opt(2016, 11, 30).unwrap(),
            Currency::USD,
        )
    }

    #[tokio::test]
    async fn test_generate_and_write_csv_report() {
        let trip = trip();
        let util = ReceiptReportUtil::new();
        let generated = util.from_string(&trip, RECEIPTS_CSV, "", "").unwrap();

        let total: Decimal = generated
            .summaries
            .by_category
            .iter()
            .map(|sum| sum.price.converted())
            .sum();
        assert_eq!(total, Decimal::from(130));

        let dir = tempfile::tempdir().unwrap();
        let written = util
            .write_report_files(dir.path(), &trip, &CsvRenderer::new(), &generated)
            .await
            .unwrap();
        assert_eq!(written, vec![dir.path().join("Conference.csv")]);

        let contents = std::fs::read_to_string(&written[0]).unwrap();
        assert!(contents.contains("Hotel"));
        assert!(contents.contains("130.00"));
    }
}

use async_trait::async_trait;
use log::info;

use crate::{
    data::repositories::trip_repository_impl::TripRepositoryImpl,
    domain::{
        entities::{report::GeneratedReport, trip::Trip},
        logic::{grouping_processor::GroupingProcessor, section_builder::SectionBuilder},
        repositories::trip_repository::TripRepository,
    },
    errors::ReportError,
};

/// The full generation pipeline: parse the trip's inputs, run the grouping
/// engine, and assemble the report sections. Rendering and file output stay
/// with the presentation layer.
#[async_trait]
pub trait ReportUsecase: Send + Sync {
    fn from_string(
        &self,
        trip: &Trip,
        receipts_csv: &str,
        distances_csv: &str,
        config_ron: &str,
    ) -> Result<GeneratedReport, ReportError>;

    async fn from_file<P>(
        &self,
        trip: &Trip,
        receipts_csv: P,
        distances_csv: P,
        config_ron: P,
    ) -> Result<GeneratedReport, ReportError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ReportUsecaseImpl<
    R1 = TripRepositoryImpl, // Default.
> where
    R1: TripRepository + Send + Sync,
{
    trip_repository: R1,
}

#[async_trait]
impl<R1> ReportUsecase for ReportUsecaseImpl<R1>
where
    R1: TripRepository + Send + Sync,
{
    fn from_string(
        &self,
        trip: &Trip,
        receipts_csv: &str,
        distances_csv: &str,
        config_ron: &str,
    ) -> Result<GeneratedReport, ReportError> {
        let (records, config) = self
            .trip_repository
            .from_string(receipts_csv, distances_csv, config_ron)?;
        info!(
            "generating report for trip '{}' ({} receipts, {} distances)",
            trip.name,
            records.receipts.len(),
            records.distances.len()
        );

        let processor = GroupingProcessor::new(trip, &records.receipts, &config);
        let builder = SectionBuilder::new(trip, &records, &config);
        let summaries = processor.summaries();
        let report = builder.build(&processor);
        let images_report = builder.build_images(&processor);

        Ok(GeneratedReport {
            records,
            config,
            summaries,
            report,
            images_report,
        })
    }

    async fn from_file<P>(
        &self,
        trip: &Trip,
        receipts_csv: P,
        distances_csv: P,
        config_ron: P,
    ) -> Result<GeneratedReport, ReportError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let (records, config) = self
            .trip_repository
            .from_file(receipts_csv, distances_csv, config_ron)
            .await?;
        info!(
            "generating report for trip '{}' ({} receipts, {} distances)",
            trip.name,
            records.receipts.len(),
            records.distances.len()
        );

        let processor = GroupingProcessor::new(trip, &records.receipts, &config);
        let builder = SectionBuilder::new(trip, &records, &config);
        let summaries = processor.summaries();
        let report = builder.build(&processor);
        let images_report = builder.build_images(&processor);

        Ok(GeneratedReport {
            records,
            config,
            summaries,
            report,
            images_report,
        })
    }
}

impl ReportUsecaseImpl {
    pub(crate) fn new() -> Self {
        ReportUsecaseImpl {
            trip_repository: TripRepositoryImpl::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use iso_currency::Currency;
    use rust_decimal::Decimal;

    use super::*;

    const RECEIPTS_CSV: &str = "name,date_time,time_zone,category_name,category_code,payment_method,amount,currency,exchange_rate,tax,tax2,reimbursable,comment,image_path\n\
        Lunch,2016-11-01T12:30:00,America/New_York,Meals,MEAL,Cash,10.00,USD,,1.00,0,true,,\n\
        Dinner,2016-11-01T19:30:00,America/New_York,Meals,MEAL,Cash,20.00,USD,,2.00,0,true,,\n\
        Taxi,2016-11-03T08:00:00,America/New_York,Travel,TRVL,Cash,5.00,USD,,0,0,true,,\n";

    fn trip() -> Trip {
        Trip::new(
            "Conference",
            "Conference",
            NaiveDate::from_ymd_opt(2016, 11, 1).unwrap(),
            NaiveDate::from_ymd_opt(2016, 11, 30).unwrap(),
            Currency::USD,
        )
    }

    #[test]
    fn test_from_string_end_to_end() {
        let trip = trip();
        let generated = ReportUsecaseImpl::new()
            .from_string(&trip, RECEIPTS_CSV, "", "")
            .unwrap();

        assert_eq!(generated.records.receipts.len(), 3);
        assert_eq!(generated.summaries.by_category.len(), 2);

        let meals = &generated.summaries.by_category[0];
        assert_eq!(meals.count, 2);
        assert_eq!(meals.price.converted(), Decimal::from(30));
        assert_eq!(meals.tax.converted(), Decimal::from(3));

        // Day series spans Nov 1 through Nov 3 with the gap filled.
        assert_eq!(generated.summaries.by_day.len(), 3);
        assert!(generated.summaries.by_day[1].price.is_zero());

        assert!(generated.report.title.starts_with("Conference"));
        assert!(!generated.report.sections.is_empty());
    }

    #[test]
    fn test_from_string_empty_inputs() {
        let trip = trip();
        let header_only = "name,date_time,time_zone,category_name,category_code,payment_method,amount,currency,exchange_rate,tax,tax2,reimbursable,comment,image_path\n";
        let generated = ReportUsecaseImpl::new()
            .from_string(&trip, header_only, "", "")
            .unwrap();

        assert!(generated.records.receipts.is_empty());
        assert!(generated.summaries.by_category.is_empty());
        assert!(generated.summaries.by_day.is_empty());
    }
}

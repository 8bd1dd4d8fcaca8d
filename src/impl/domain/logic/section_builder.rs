use iso_currency::Currency;
use rust_decimal::Decimal;

use crate::domain::entities::{
    distance::Distance,
    price::{Price, PriceTotal},
    receipt::Receipt,
    report::{ImageEntry, ImageList, Report, Section, Table},
    report_config::{DistanceColumn, ReceiptColumn, ReportConfig},
    trip::Trip,
    trip_records::TripRecords,
};
use crate::domain::logic::grouping_processor::GroupingProcessor;

impl ReceiptColumn {
    fn header(&self) -> &'static str {
        match self {
            ReceiptColumn::Name => "Name",
            ReceiptColumn::Date => "Date",
            ReceiptColumn::Category => "Category",
            ReceiptColumn::CategoryCode => "Category Code",
            ReceiptColumn::PaymentMethod => "Payment Method",
            ReceiptColumn::Price => "Price",
            ReceiptColumn::Tax => "Tax",
            ReceiptColumn::Currency => "Currency",
            ReceiptColumn::ExchangeRate => "Exchange Rate",
            ReceiptColumn::Reimbursable => "Reimbursable",
            ReceiptColumn::Comment => "Comment",
        }
    }

    fn cell(&self, receipt: &Receipt) -> String {
        match self {
            ReceiptColumn::Name => receipt.name.clone(),
            ReceiptColumn::Date => receipt.local_date().to_string(),
            ReceiptColumn::Category => receipt.category.name.clone(),
            ReceiptColumn::CategoryCode => receipt.category.code.clone(),
            ReceiptColumn::PaymentMethod => receipt
                .payment_method
                .as_ref()
                .map(|method| method.name.clone())
                .unwrap_or_default(),
            ReceiptColumn::Price => receipt.price.to_string(),
            ReceiptColumn::Tax => Price::new(
                receipt.tax.amount + receipt.tax2.amount,
                receipt.tax.currency,
            )
            .to_string(),
            ReceiptColumn::Currency => receipt.price.currency.code().to_string(),
            ReceiptColumn::ExchangeRate => receipt
                .price
                .exchange_rate
                .map(|rate| rate.to_string())
                .unwrap_or_default(),
            ReceiptColumn::Reimbursable => if receipt.reimbursable { "yes" } else { "no" }.to_string(),
            ReceiptColumn::Comment => receipt.comment.clone().unwrap_or_default(),
        }
    }

    /// Footer cell: the same summation rule the grouping engine uses; empty
    /// for columns with nothing to total.
    fn footer(&self, receipts: &[&Receipt], base_currency: Currency) -> String {
        match self {
            ReceiptColumn::Price => {
                PriceTotal::sum(base_currency, receipts.iter().map(|r| &r.price)).to_string()
            }
            ReceiptColumn::Tax => {
                PriceTotal::sum(base_currency, receipts.iter().flat_map(|r| [&r.tax, &r.tax2]))
                    .to_string()
            }
            _ => String::new(),
        }
    }
}

impl DistanceColumn {
    fn header(&self) -> &'static str {
        match self {
            DistanceColumn::Location => "Location",
            DistanceColumn::Distance => "Distance",
            DistanceColumn::Rate => "Rate",
            DistanceColumn::Price => "Price",
            DistanceColumn::Date => "Date",
            DistanceColumn::Comment => "Comment",
        }
    }

    fn cell(&self, distance: &Distance, base_currency: Currency) -> String {
        match self {
            DistanceColumn::Location => distance.location.clone(),
            DistanceColumn::Distance => distance.distance.to_string(),
            DistanceColumn::Rate => distance.rate.to_string(),
            DistanceColumn::Price => distance.price(base_currency).to_string(),
            DistanceColumn::Date => distance.date.to_string(),
            DistanceColumn::Comment => distance.comment.clone().unwrap_or_default(),
        }
    }

    fn footer(&self, distances: &[Distance], base_currency: Currency) -> String {
        match self {
            DistanceColumn::Distance => distances
                .iter()
                .map(|d| d.distance)
                .sum::<Decimal>()
                .to_string(),
            DistanceColumn::Price => {
                let prices: Vec<Price> =
                    distances.iter().map(|d| d.price(base_currency)).collect();
                PriceTotal::sum(base_currency, &prices).to_string()
            }
            _ => String::new(),
        }
    }
}

/// Assembles the ordered report sections from already-computed grouping
/// results. Owns no aggregation of its own beyond reusing the price summation
/// rule for column footers.
pub(crate) struct SectionBuilder<'a> {
    trip: &'a Trip,
    records: &'a TripRecords,
    config: &'a ReportConfig,
}

impl<'a> SectionBuilder<'a> {
    pub(crate) fn new(trip: &'a Trip, records: &'a TripRecords, config: &'a ReportConfig) -> Self {
        Self {
            trip,
            records,
            config,
        }
    }

    pub(crate) fn build(&self, processor: &GroupingProcessor) -> Report {
        let receipts = processor.receipts();
        let mut sections = Vec::new();

        sections.push(Section::Table(
            self.receipts_table(Some("Receipts".to_string()), receipts),
        ));

        if self.config.include_category_summation {
            sections.push(Section::Table(self.category_summation_table(processor)));
        }

        if self.config.use_payment_methods {
            let table = self.payment_method_table(processor);
            if !table.rows.is_empty() {
                sections.push(Section::Table(table));
            }
        }

        if self.config.include_category_groups {
            for group in processor.by_category() {
                let receipts: Vec<&Receipt> = group.receipts.iter().collect();
                sections.push(Section::Table(
                    self.receipts_table(Some(group.category.name.clone()), &receipts),
                ));
            }
        }

        if !self.records.distances.is_empty() {
            sections.push(Section::Table(self.distances_table()));
        }

        Report {
            title: self.title(),
            comment: self.trip.comment.clone(),
            sections,
        }
    }

    /// The separate image-attachments report, written beside the main one.
    pub(crate) fn build_images(&self, processor: &GroupingProcessor) -> Report {
        let entries: Vec<ImageEntry> = processor
            .receipts()
            .iter()
            .filter_map(|receipt| {
                receipt.image_path.as_ref().map(|path| ImageEntry {
                    receipt_index: receipt.index,
                    receipt_name: receipt.name.clone(),
                    date: receipt.local_date(),
                    path: path.clone(),
                })
            })
            .collect();
        Report {
            title: format!("{} Images", self.trip.name),
            comment: None,
            sections: vec![Section::ImageList(ImageList {
                title: Some("Receipt Images".to_string()),
                entries,
            })],
        }
    }

    fn title(&self) -> String {
        format!(
            "{} ({} to {})",
            self.trip.name, self.trip.start_date, self.trip.end_date
        )
    }

    fn receipts_table(&self, title: Option<String>, receipts: &[&Receipt]) -> Table {
        let columns = &self.config.receipt_columns;
        let header = columns.iter().map(|c| c.header().to_string()).collect();
        let rows = receipts
            .iter()
            .map(|receipt| columns.iter().map(|c| c.cell(receipt)).collect())
            .collect();
        let footer = self.footer_row(
            columns
                .iter()
                .map(|c| c.footer(receipts, self.trip.base_currency))
                .collect(),
        );
        Table {
            title,
            header,
            rows,
            footer,
        }
    }

    fn category_summation_table(&self, processor: &GroupingProcessor) -> Table {
        let base = self.trip.base_currency;
        let sums = processor.sum_by_category();
        let rows = sums
            .iter()
            .map(|sum| {
                vec![
                    sum.category.name.clone(),
                    sum.category.code.clone(),
                    sum.count.to_string(),
                    sum.price.to_string(),
                    sum.tax.to_string(),
                ]
            })
            .collect();
        let receipts = processor.receipts();
        let footer = self.footer_row(vec![
            String::new(),
            String::new(),
            receipts.len().to_string(),
            PriceTotal::sum(base, receipts.iter().map(|r| &r.price)).to_string(),
            PriceTotal::sum(base, receipts.iter().flat_map(|r| [&r.tax, &r.tax2])).to_string(),
        ]);
        Table {
            title: Some("Category Summation".to_string()),
            header: ["Category", "Code", "Count", "Price", "Tax"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rows,
            footer,
        }
    }

    fn payment_method_table(&self, processor: &GroupingProcessor) -> Table {
        let base = self.trip.base_currency;
        let rows = processor
            .sum_by_payment_method()
            .iter()
            .map(|sum| vec![sum.payment_method.name.clone(), sum.price.to_string()])
            .collect();
        let with_method: Vec<&Receipt> = processor
            .receipts()
            .iter()
            .copied()
            .filter(|r| r.payment_method.is_some())
            .collect();
        let footer = self.footer_row(vec![
            String::new(),
            PriceTotal::sum(base, with_method.iter().map(|r| &r.price)).to_string(),
        ]);
        Table {
            title: Some("Payment Method Summation".to_string()),
            header: ["Payment Method", "Price"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rows,
            footer,
        }
    }

    fn distances_table(&self) -> Table {
        let base = self.trip.base_currency;
        let columns = &self.config.distance_columns;
        let header = columns.iter().map(|c| c.header().to_string()).collect();
        let rows = self
            .records
            .distances
            .iter()
            .map(|distance| columns.iter().map(|c| c.cell(distance, base)).collect())
            .collect();
        let footer = self.footer_row(
            columns
                .iter()
                .map(|c| c.footer(&self.records.distances, base))
                .collect(),
        );
        Table {
            title: Some("Distances".to_string()),
            header,
            rows,
            footer,
        }
    }

    /// A footer row exists only when some column produced a total; the first
    /// otherwise-empty cell carries the label.
    fn footer_row(&self, mut cells: Vec<String>) -> Option<Vec<String>> {
        if cells.iter().all(|cell| cell.is_empty()) {
            return None;
        }
        if let Some(first) = cells.first_mut() {
            if first.is_empty() {
                *first = "Total".to_string();
            }
        }
        Some(cells)
    }
}

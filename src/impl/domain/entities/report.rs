use chrono::NaiveDate;

use super::{report_config::ReportConfig, summaries::GroupingSummaries, trip_records::TripRecords};

/// An assembled report: a title plus an ordered list of sections, ready to be
/// handed to a renderer.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub comment: Option<String>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone)]
pub enum Section {
    Table(Table),
    ImageList(ImageList),
}

/// Pre-formatted table cells. The optional footer row carries per-column
/// totals computed by the section builder.
#[derive(Debug, Clone)]
pub struct Table {
    pub title: Option<String>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub footer: Option<Vec<String>>,
}

/// Listing of receipt image attachments; the stand-in the image-drawing
/// collaborator consumes.
#[derive(Debug, Clone)]
pub struct ImageList {
    pub title: Option<String>,
    pub entries: Vec<ImageEntry>,
}

#[derive(Debug, Clone)]
pub struct ImageEntry {
    pub receipt_index: u32,
    pub receipt_name: String,
    pub date: NaiveDate,
    pub path: String,
}

/// Everything one generation pass produces: the parsed records, the chart
/// feed, and the two assembled reports.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub records: TripRecords,
    pub config: ReportConfig,
    pub summaries: GroupingSummaries,
    pub report: Report,
    pub images_report: Report,
}

use std::path::{Path, PathBuf};

use log::info;
use regex::Regex;

use crate::{
    domain::entities::{
        report::{GeneratedReport, Report, Section},
        trip::Trip,
    },
    errors::ReportError,
    presentation::section_renderer::SectionRenderer,
};

/// Writes rendered reports to trip-scoped files: `<stem>.<ext>` for the main
/// report and `<stem>Images.<ext>` for the image attachments, where the stem
/// is the trip's directory name with unsafe file-name characters replaced.
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn file_stem(trip: &Trip) -> String {
        let unsafe_chars =
            Regex::new(r#"[\\/:*?"<>|]"#).expect("hardcoded regex should be valid");
        unsafe_chars
            .replace_all(&trip.directory_name, "_")
            .into_owned()
    }

    /// Writes the main report and, when image attachments exist, the images
    /// report beside it. Returns the written paths.
    pub async fn write(
        &self,
        out_dir: impl AsRef<Path>,
        trip: &Trip,
        renderer: &dyn SectionRenderer,
        generated: &GeneratedReport,
    ) -> Result<Vec<PathBuf>, ReportError> {
        let out_dir = out_dir.as_ref();
        let stem = Self::file_stem(trip);
        let mut written = Vec::new();

        let path = out_dir.join(format!("{}.{}", stem, renderer.file_extension()));
        written.push(self.write_one(path, renderer, &generated.report).await?);

        if has_images(&generated.images_report) {
            let path = out_dir.join(format!("{}Images.{}", stem, renderer.file_extension()));
            written.push(
                self.write_one(path, renderer, &generated.images_report)
                    .await?,
            );
        }

        Ok(written)
    }

    async fn write_one(
        &self,
        path: PathBuf,
        renderer: &dyn SectionRenderer,
        report: &Report,
    ) -> Result<PathBuf, ReportError> {
        let contents = renderer.render(report)?;
        match tokio::fs::write(&path, contents).await {
            Ok(()) => {
                info!("wrote report file '{}'", path.display());
                Ok(path)
            }
            Err(source) => {
                // Never leave a partial file behind.
                let _ = tokio::fs::remove_file(&path).await;
                Err(ReportError::Write { path, source })
            }
        }
    }
}

fn has_images(report: &Report) -> bool {
    report
        .sections
        .iter()
        .any(|section| matches!(section, Section::ImageList(list) if !list.entries.is_empty()))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use iso_currency::Currency;

    use super::*;
    use crate::{
        domain::usecases::report_usecase::{ReportUsecase as _, ReportUsecaseImpl},
        presentation::text_renderer::TextRenderer,
    };

    const RECEIPTS_CSV: &str = "name,date_time,time_zone,category_name,category_code,payment_method,amount,currency,exchange_rate,tax,tax2,reimbursable,comment,image_path\n\
        Lunch,2016-11-01T12:30:00,America/New_York,Meals,MEAL,Cash,10.00,USD,,1.00,0,true,,img/lunch.jpg\n";

    fn trip(directory_name: &str) -> Trip {
        Trip::new(
            "Client Visit",
            directory_name,
            NaiveDate::from_ymd_opt(2016, 11, 1).unwrap(),
            NaiveDate::from_ymd_opt(2016, 11, 30).unwrap(),
            Currency::USD,
        )
    }

    #[test]
    fn test_file_stem_sanitized() {
        assert_eq!(
            ReportWriter::file_stem(&trip("Client: Visit/2016")),
            "Client_ Visit_2016"
        );
        assert_eq!(ReportWriter::file_stem(&trip("Plain Name")), "Plain Name");
    }

    #[tokio::test]
    async fn test_write_main_and_images_files() {
        let trip = trip("Client Visit");
        let generated = ReportUsecaseImpl::new()
            .from_string(&trip, RECEIPTS_CSV, "", "")
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let written = ReportWriter::new()
            .write(dir.path(), &trip, &TextRenderer::new(), &generated)
            .await
            .unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(written[0], dir.path().join("Client Visit.txt"));
        assert_eq!(written[1], dir.path().join("Client VisitImages.txt"));
        for path in &written {
            assert!(path.is_file());
        }
        let main = std::fs::read_to_string(&written[0]).unwrap();
        assert!(main.contains("Lunch"));
        let images = std::fs::read_to_string(&written[1]).unwrap();
        assert!(images.contains("img/lunch.jpg"));
    }

    #[tokio::test]
    async fn test_write_skips_images_file_without_attachments() {
        let trip = trip("Client Visit");
        let receipts_csv = RECEIPTS_CSV.replace("img/lunch.jpg", "");
        let generated = ReportUsecaseImpl::new()
            .from_string(&trip, &receipts_csv, "", "")
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let written = ReportWriter::new()
            .write(dir.path(), &trip, &TextRenderer::new(), &generated)
            .await
            .unwrap();

        assert_eq!(written.len(), 1);
    }

    #[tokio::test]
    async fn test_write_failure_leaves_no_partial_file() {
        let trip = trip("Client Visit");
        let generated = ReportUsecaseImpl::new()
            .from_string(&trip, RECEIPTS_CSV, "", "")
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let result = ReportWriter::new()
            .write(&missing, &trip, &TextRenderer::new(), &generated)
            .await;

        assert!(matches!(result, Err(ReportError::Write { .. })));
        assert!(!missing.join("Client Visit.txt").exists());
    }
}

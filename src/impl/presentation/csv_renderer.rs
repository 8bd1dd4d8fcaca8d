use crate::{
    domain::entities::report::{ImageList, Report, Section, Table},
    errors::ReportError,
    presentation::section_renderer::SectionRenderer,
};

/// Renders a report as one CSV stream: a title row, then each section's rows
/// separated by blank records.
pub struct CsvRenderer;

impl CsvRenderer {
    pub fn new() -> Self {
        Self
    }

    fn write_table<W: std::io::Write>(
        &self,
        wtr: &mut csv::Writer<W>,
        table: &Table,
    ) -> Result<(), csv::Error> {
        if let Some(title) = &table.title {
            wtr.write_record([title.as_str()])?;
        }
        wtr.write_record(&table.header)?;
        for row in &table.rows {
            wtr.write_record(row)?;
        }
        if let Some(footer) = &table.footer {
            wtr.write_record(footer)?;
        }
        Ok(())
    }

    fn write_image_list<W: std::io::Write>(
        &self,
        wtr: &mut csv::Writer<W>,
        list: &ImageList,
    ) -> Result<(), csv::Error> {
        if let Some(title) = &list.title {
            wtr.write_record([title.as_str()])?;
        }
        wtr.write_record(["Index", "Date", "Name", "Image"])?;
        for entry in &list.entries {
            wtr.write_record([
                entry.receipt_index.to_string(),
                entry.date.to_string(),
                entry.receipt_name.clone(),
                entry.path.clone(),
            ])?;
        }
        Ok(())
    }
}

fn render_error(e: impl std::fmt::Display) -> ReportError {
    ReportError::Render {
        details: e.to_string(),
    }
}

impl SectionRenderer for CsvRenderer {
    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, report: &Report) -> Result<String, ReportError> {
        // Sections have differing column counts within one stream.
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(vec![]);
        wtr.write_record([report.title.as_str()])
            .map_err(render_error)?;
        for section in &report.sections {
            wtr.write_record([""]).map_err(render_error)?;
            match section {
                Section::Table(table) => self.write_table(&mut wtr, table),
                Section::ImageList(list) => self.write_image_list(&mut wtr, list),
            }
            .map_err(render_error)?;
        }
        wtr.flush().map_err(render_error)?;
        let bytes = wtr.into_inner().map_err(render_error)?;
        String::from_utf8(bytes).map_err(render_error)
    }
}

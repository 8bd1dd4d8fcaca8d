use crate::{domain::entities::report::Report, errors::ReportError};

/// Rendering seam between section assembly and file output. The CSV and
/// plain-text implementations ship with the crate; a PDF-drawing collaborator
/// plugs in here without touching assembly or aggregation.
pub trait SectionRenderer {
    /// Extension of the produced file, without the dot.
    fn file_extension(&self) -> &'static str;

    fn render(&self, report: &Report) -> Result<String, ReportError>;
}

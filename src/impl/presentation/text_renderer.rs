use crate::{
    domain::entities::report::{ImageList, Report, Section, Table},
    errors::ReportError,
    presentation::section_renderer::SectionRenderer,
};

const BANNER_WIDTH: usize = 80;
const COMMENT_WRAP_WIDTH: usize = 74;

/// Renders a report as aligned plain-text tables with section banners.
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn print_banner(&self, out: &mut String, title: &str) {
        let used = title.chars().count() + 5;
        out.push_str(&format!(
            "--- {} {}\n\n",
            title,
            "-".repeat(BANNER_WIDTH.saturating_sub(used))
        ));
    }

    fn print_table(&self, out: &mut String, table: &Table) {
        if let Some(title) = &table.title {
            self.print_banner(out, title);
        }

        let columns = table.header.len();
        let mut widths: Vec<usize> = table.header.iter().map(|h| h.chars().count()).collect();
        for row in table.rows.iter().chain(table.footer.as_ref()) {
            for (i, cell) in row.iter().enumerate().take(columns) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let print_row = |out: &mut String, row: &[String]| {
            let line = row
                .iter()
                .take(columns)
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
                .collect::<Vec<_>>()
                .join("  ");
            out.push_str(line.trim_end());
            out.push('\n');
        };

        print_row(out, &table.header);
        let rule: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&format!("{}\n", "-".repeat(rule)));
        for row in &table.rows {
            print_row(out, row);
        }
        if let Some(footer) = &table.footer {
            out.push_str(&format!("{}\n", "-".repeat(rule)));
            print_row(out, footer);
        }
        out.push('\n');
    }

    fn print_image_list(&self, out: &mut String, list: &ImageList) {
        if let Some(title) = &list.title {
            self.print_banner(out, title);
        }
        for entry in &list.entries {
            out.push_str(&format!(
                "{:>4}  {}  {}  {}\n",
                entry.receipt_index, entry.date, entry.receipt_name, entry.path
            ));
        }
        out.push('\n');
    }
}

impl SectionRenderer for TextRenderer {
    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, report: &Report) -> Result<String, ReportError> {
        let mut out = String::new();
        out.push_str(&format!("{}\n", report.title));
        out.push_str(&format!("{}\n\n", "=".repeat(report.title.chars().count())));
        if let Some(comment) = &report.comment {
            for line in textwrap::wrap(comment, COMMENT_WRAP_WIDTH) {
                out.push_str(&format!("{}\n", line));
            }
            out.push('\n');
        }
        for section in &report.sections {
            match section {
                Section::Table(table) => self.print_table(&mut out, table),
                Section::ImageList(list) => self.print_image_list(&mut out, list),
            }
        }
        Ok(out)
    }
}

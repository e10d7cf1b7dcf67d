// ============================================================
// XLSX WRITER
// ============================================================
// Builds the output workbook: fixed header row, one row per
// contact, Arial 10 everywhere, columns sized to content.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::domain::contact::Contact;
use crate::domain::error::{AppError, Result};

const SHEET_NAME: &str = "Contatos";
const BASE_HEADERS: [&str; 4] = ["Nome", "Telefone 1", "Telefone 2", "E-mail"];
const ORGANIZATION_HEADER: &str = "Organização";

/// Extra characters added to the widest cell of each column.
const WIDTH_PADDING: usize = 1;

pub struct SpreadsheetWriter {
    include_organization: bool,
}

impl SpreadsheetWriter {
    pub fn new(include_organization: bool) -> Self {
        Self {
            include_organization,
        }
    }

    fn headers(&self) -> Vec<&'static str> {
        let mut headers = BASE_HEADERS.to_vec();
        if self.include_organization {
            headers.push(ORGANIZATION_HEADER);
        }
        headers
    }

    /// Write the workbook for the retained contacts to `path`.
    pub fn write_to_path(&self, contacts: &[Contact], path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook
            .add_worksheet()
            .set_name(SHEET_NAME)
            .map_err(|e| AppError::Spreadsheet(format!("Failed to create sheet: {}", e)))?;

        let cell_format = Format::new().set_font_name("Arial").set_font_size(10);

        let headers = self.headers();
        let rows: Vec<Vec<&str>> = contacts
            .iter()
            .map(|c| c.as_row(self.include_organization))
            .collect();

        for (col, header) in headers.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *header, &cell_format)
                .map_err(|e| AppError::Spreadsheet(format!("Failed to write header: {}", e)))?;
        }

        for (row_idx, row) in rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                worksheet
                    .write_string_with_format((row_idx + 1) as u32, col as u16, *value, &cell_format)
                    .map_err(|e| {
                        AppError::Spreadsheet(format!(
                            "Failed to write cell ({}, {}): {}",
                            row_idx + 1,
                            col,
                            e
                        ))
                    })?;
            }
        }

        // Widths are computed after all rows are known.
        for (col, width) in column_widths(&headers, &rows).iter().enumerate() {
            worksheet
                .set_column_width(col as u16, *width as f64)
                .map_err(|e| AppError::Spreadsheet(format!("Failed to size column {}: {}", col, e)))?;
        }

        workbook
            .save(path)
            .map_err(|e| AppError::Spreadsheet(format!("Failed to save workbook: {}", e)))
    }
}

/// Per-column width: the longest literal cell value (header included) plus
/// padding. Character count, not bytes, so accented names size correctly.
fn column_widths(headers: &[&str], rows: &[Vec<&str>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (col, value) in row.iter().enumerate() {
            if col < widths.len() {
                widths[col] = widths[col].max(value.chars().count());
            }
        }
    }
    widths.iter().map(|w| w + WIDTH_PADDING).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_header_floor() {
        let widths = column_widths(&["Nome", "Telefone 1"], &[vec!["Jo", "x"]]);
        assert_eq!(widths, vec![5, 11]);
    }

    #[test]
    fn test_column_widths_grow_with_cells() {
        let widths = column_widths(&["Nome"], &[vec!["Maria Clara de Souza"]]);
        assert_eq!(widths, vec![21]);
    }

    #[test]
    fn test_column_widths_count_chars_not_bytes() {
        let widths = column_widths(&["N"], &[vec!["José"]]);
        assert_eq!(widths, vec![5]);
    }

    #[test]
    fn test_headers_with_and_without_organization() {
        assert_eq!(SpreadsheetWriter::new(false).headers().len(), 4);
        assert_eq!(
            SpreadsheetWriter::new(true).headers().last(),
            Some(&"Organização")
        );
    }

    #[test]
    fn test_write_to_path_produces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let contacts = vec![Contact {
            full_name: "Ana".to_string(),
            phone1: "(11) 98765-4321".to_string(),
            ..Contact::default()
        }];

        SpreadsheetWriter::new(true)
            .write_to_path(&contacts, &path)
            .unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}

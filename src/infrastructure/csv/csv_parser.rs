// ============================================================
// CSV PARSER
// ============================================================
// Parse uploaded contact exports with encoding fallback and
// lenient row handling.

use csv::{ReaderBuilder, Trim};
use encoding_rs::WINDOWS_1252;

use crate::domain::csv::{CsvRow, CsvTable};
use crate::domain::error::{AppError, Result};

/// Lenient CSV parser for contact exports.
///
/// Rows may be shorter or longer than the header row; quoting is disabled
/// because exports write fields verbatim and a stray quote must not swallow
/// the rest of a line.
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw upload bytes: decode, then split into header and data rows.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<CsvTable> {
        let content = decode(bytes);
        self.parse_content(&content)
    }

    /// Parse CSV content from a string.
    pub fn parse_content(&self, content: &str) -> Result<CsvTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .flexible(true)
            .quoting(false)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::CsvRead(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result
                .map_err(|e| AppError::CsvRead(format!("Failed to parse CSV row {}: {}", index + 1, e)))?;
            rows.push(CsvRow::new(record.iter().map(str::to_string).collect()));
        }

        Ok(CsvTable::new(headers, rows))
    }
}

/// Decode upload bytes: UTF-8 first, then Windows-1252, which is what older
/// phone export tools actually emit.
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(content) => content.to_string(),
        Err(_) => {
            let (content, _, _) = WINDOWS_1252.decode(bytes);
            content.into_owned()
        }
    }
}

// ============================================================
// CSV TABLE TYPES
// ============================================================
// Data structures representing parsed CSV content

use serde::{Deserialize, Serialize};

/// A single data row in a CSV file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvRow {
    fields: Vec<String>,
}

impl CsvRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field value at a resolved column position.
    ///
    /// Returns the empty string when the column did not resolve or the row is
    /// shorter than the header row. Malformed rows never error here.
    pub fn get(&self, index: Option<usize>) -> &str {
        index
            .and_then(|idx| self.fields.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Parsed CSV content: one header row plus data rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

impl CsvTable {
    pub fn new(headers: Vec<String>, rows: Vec<CsvRow>) -> Self {
        Self { headers, rows }
    }

    /// Resolve a logical column name to its position in the header row.
    ///
    /// Case-insensitive substring match; the first matching header wins.
    /// Exports rename columns freely ("E-mail 1 - Value", "e-mail value"),
    /// so an exact match would miss most real files.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.headers
            .iter()
            .position(|header| header.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str]) -> CsvTable {
        CsvTable::new(headers.iter().map(|h| h.to_string()).collect(), Vec::new())
    }

    #[test]
    fn test_find_column_exact() {
        let t = table(&["First Name", "Last Name"]);
        assert_eq!(t.find_column("First Name"), Some(0));
        assert_eq!(t.find_column("Last Name"), Some(1));
    }

    #[test]
    fn test_find_column_case_insensitive_substring() {
        let t = table(&["FIRST NAME 2", "phone 1 - value"]);
        assert_eq!(t.find_column("first name"), Some(0));
        assert_eq!(t.find_column("Phone 1 - Value"), Some(1));
    }

    #[test]
    fn test_find_column_first_match_wins() {
        let t = table(&["First Name", "First Name 2"]);
        assert_eq!(t.find_column("First Name"), Some(0));
    }

    #[test]
    fn test_find_column_absent() {
        let t = table(&["First Name"]);
        assert_eq!(t.find_column("Organization Name"), None);
    }

    #[test]
    fn test_row_get_out_of_bounds() {
        let row = CsvRow::new(vec!["a".to_string()]);
        assert_eq!(row.get(Some(0)), "a");
        assert_eq!(row.get(Some(5)), "");
        assert_eq!(row.get(None), "");
    }
}

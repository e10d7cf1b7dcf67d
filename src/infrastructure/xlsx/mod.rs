// ============================================================
// XLSX INFRASTRUCTURE LAYER
// ============================================================
// Output workbook generation

mod writer;

pub use writer::SpreadsheetWriter;

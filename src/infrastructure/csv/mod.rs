// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV parsing and encoding fallback

mod csv_parser;

pub use csv_parser::CsvParser;

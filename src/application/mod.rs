pub mod use_cases;

pub use use_cases::convert_contacts::convert_table;

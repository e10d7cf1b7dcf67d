pub mod contact;
pub mod csv;
pub mod error;
pub mod options;

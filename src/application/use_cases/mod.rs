pub mod convert_contacts;
pub mod email_validator;
pub mod name_normalizer;
pub mod phone_normalizer;

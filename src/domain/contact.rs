use serde::{Deserialize, Serialize};

/// Normalized output unit representing one row of the result spreadsheet.
///
/// Transient: built per CSV row, consumed by the spreadsheet writer, gone
/// when the response is sent. No identity beyond row order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub full_name: String,
    pub phone1: String,
    pub phone2: String,
    pub email: String,
    pub organization: String,
}

impl Contact {
    /// A contact is kept only if something useful survived normalization.
    /// Phone 2 alone does not count; it never appears without phone 1 in
    /// practice and the original behaved the same way.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty()
            && self.phone1.is_empty()
            && self.email.is_empty()
            && self.organization.is_empty()
    }

    /// Project into spreadsheet cell order.
    pub fn as_row(&self, include_organization: bool) -> Vec<&str> {
        let mut row = vec![
            self.full_name.as_str(),
            self.phone1.as_str(),
            self.phone2.as_str(),
            self.email.as_str(),
        ];
        if include_organization {
            row.push(self.organization.as_str());
        }
        row
    }
}

// ============================================================
// CONTACT CONVERSION USE CASE
// ============================================================
// Resolves the expected export columns once per table, then derives
// one normalized contact per data row, dropping rows where nothing
// useful survives.

use crate::application::use_cases::{email_validator, name_normalizer, phone_normalizer};
use crate::domain::contact::Contact;
use crate::domain::csv::CsvTable;
use crate::domain::options::ConvertOptions;

// Logical column names as Google Contacts exports them. Matched
// case-insensitively as substrings, so renamed variants still resolve.
const COL_FIRST_NAME: &str = "First Name";
const COL_MIDDLE_NAME: &str = "Middle Name";
const COL_LAST_NAME: &str = "Last Name";
const COL_PHONE_1: &str = "Phone 1 - Value";
const COL_PHONE_2: &str = "Phone 2 - Value";
const COL_EMAIL: &str = "E-mail 1 - Value";
const COL_ORGANIZATION: &str = "Organization Name";

pub fn convert_table(table: &CsvTable, options: &ConvertOptions) -> Vec<Contact> {
    let first = table.find_column(COL_FIRST_NAME);
    let middle = table.find_column(COL_MIDDLE_NAME);
    let last = table.find_column(COL_LAST_NAME);
    let phone1 = table.find_column(COL_PHONE_1);
    let phone2 = table.find_column(COL_PHONE_2);
    let email = table.find_column(COL_EMAIL);
    let organization = table.find_column(COL_ORGANIZATION);

    table
        .rows
        .iter()
        .filter_map(|row| {
            let mut full_name = name_normalizer::normalize_full_name(
                row.get(first),
                row.get(middle),
                row.get(last),
                options.strip_accents,
            );

            let (phone1, phone2) = phone_normalizer::split_phones(
                row.get(phone1),
                row.get(phone2),
                &options.extra_phone_prefixes,
            );

            // Nameless contacts fall back to their primary phone, then to the
            // raw email column.
            if full_name.is_empty() {
                if !phone1.is_empty() {
                    full_name = phone1.clone();
                } else {
                    let email_raw = row.get(email).trim();
                    if !email_raw.is_empty() {
                        full_name = email_raw.to_string();
                    }
                }
            }

            let email = email_validator::validated(row.get(email)).to_string();

            let organization_raw = row.get(organization).trim();
            let organization = if options.include_organization_column && !organization_raw.is_empty()
            {
                format!("{} | {}", full_name, organization_raw)
            } else {
                String::new()
            };

            let contact = Contact {
                full_name,
                phone1,
                phone2,
                email,
                organization,
            };

            (!contact.is_empty()).then_some(contact)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::csv::CsvRow;

    const EXPORT_HEADERS: &[&str] = &[
        "First Name",
        "Middle Name",
        "Last Name",
        "Phone 1 - Value",
        "Phone 2 - Value",
        "E-mail 1 - Value",
    ];

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| CsvRow::new(row.iter().map(|f| f.to_string()).collect()))
                .collect(),
        )
    }

    #[test]
    fn test_full_row() {
        let t = table(
            EXPORT_HEADERS,
            &[&["John", "", "Smith", "+5511987654321", "", "john@x.com"]],
        );
        let contacts = convert_table(&t, &ConvertOptions::default());

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].full_name, "John Smith");
        assert_eq!(contacts[0].phone1, "(11) 98765-4321");
        assert_eq!(contacts[0].phone2, "");
        assert_eq!(contacts[0].email, "john@x.com");
        assert_eq!(contacts[0].organization, "");
    }

    #[test]
    fn test_blank_row_dropped() {
        let t = table(EXPORT_HEADERS, &[&["", "", "", "", "", ""]]);
        assert!(convert_table(&t, &ConvertOptions::default()).is_empty());
    }

    #[test]
    fn test_email_only_row_uses_email_as_name() {
        let t = table(EXPORT_HEADERS, &[&["", "", "", "", "", "ana@x.com"]]);
        let contacts = convert_table(&t, &ConvertOptions::default());

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].full_name, "ana@x.com");
        assert_eq!(contacts[0].email, "ana@x.com");
    }

    #[test]
    fn test_phone_only_row_uses_phone_as_name() {
        let t = table(EXPORT_HEADERS, &[&["", "", "", "11987654321", "", ""]]);
        let contacts = convert_table(&t, &ConvertOptions::default());

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].full_name, "(11) 98765-4321");
    }

    #[test]
    fn test_invalid_email_blanked() {
        let t = table(EXPORT_HEADERS, &[&["Ana", "", "", "", "", "sem email"]]);
        let contacts = convert_table(&t, &ConvertOptions::default());

        assert_eq!(contacts[0].email, "");
    }

    #[test]
    fn test_missing_columns_yield_empty_fields() {
        let t = table(
            &["First Name", "Last Name"],
            &[&["Maria", "Souza"]],
        );
        let contacts = convert_table(&t, &ConvertOptions::default());

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].full_name, "Maria Souza");
        assert_eq!(contacts[0].phone1, "");
        assert_eq!(contacts[0].email, "");
    }

    #[test]
    fn test_short_row_does_not_panic() {
        let t = table(EXPORT_HEADERS, &[&["Maria"]]);
        let contacts = convert_table(&t, &ConvertOptions::default());

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].full_name, "Maria");
        assert_eq!(contacts[0].phone1, "");
    }

    #[test]
    fn test_organization_tag() {
        let headers = &[
            "First Name",
            "Last Name",
            "Phone 1 - Value",
            "Organization Name",
        ];
        let t = table(headers, &[&["Ana", "Lima", "11987654321", "Acme"]]);
        let contacts = convert_table(&t, &ConvertOptions::default());

        assert_eq!(contacts[0].organization, "Ana Lima | Acme");
    }

    #[test]
    fn test_organization_column_disabled() {
        let headers = &["First Name", "Organization Name"];
        let t = table(headers, &[&["Ana", "Acme"]]);
        let options = ConvertOptions {
            include_organization_column: false,
            ..ConvertOptions::default()
        };
        let contacts = convert_table(&t, &options);

        assert_eq!(contacts[0].organization, "");
    }

    #[test]
    fn test_organization_only_row_kept() {
        // A row whose only content is the organization still comes through;
        // the tag degrades to " | Org" because the name is empty.
        let headers = &["First Name", "Organization Name"];
        let t = table(headers, &[&["", "Acme"]]);
        let contacts = convert_table(&t, &ConvertOptions::default());

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].organization, " | Acme");
    }

    #[test]
    fn test_dual_phone_separator() {
        let t = table(
            EXPORT_HEADERS,
            &[&["Bia", "", "", "11987654321 ::: 1138765432", "", ""]],
        );
        let contacts = convert_table(&t, &ConvertOptions::default());

        assert_eq!(contacts[0].phone1, "(11) 98765-4321");
        assert_eq!(contacts[0].phone2, "(11) 3876-5432");
    }
}

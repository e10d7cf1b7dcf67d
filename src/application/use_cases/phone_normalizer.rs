// ============================================================
// PHONE NORMALIZER
// ============================================================
// Digit extraction, country/area prefix removal and shape-based
// formatting for Brazilian phone numbers.

/// Country code stripped before anything else.
const COUNTRY_PREFIX: &str = "55";

/// Area/city prefixes stripped after the country code. Extended per request
/// by `ConvertOptions::extra_phone_prefixes`.
const AREA_PREFIXES: [&str; 1] = ["031"];

/// Keep only ASCII digits.
pub fn strip_to_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Remove the leading "55" country code, then the first matching area
/// prefix. List order decides when prefixes overlap.
pub fn strip_prefixes(digits: &str, extra_prefixes: &[String]) -> String {
    let mut digits = digits;
    if let Some(rest) = digits.strip_prefix(COUNTRY_PREFIX) {
        digits = rest;
    }
    for prefix in AREA_PREFIXES
        .iter()
        .copied()
        .chain(extra_prefixes.iter().map(String::as_str))
    {
        if let Some(rest) = digits.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    digits.to_string()
}

/// Format one raw phone value by digit count:
/// 11 -> `(DD) DDDDD-DDDD`, 10 -> `(DD) DDDD-DDDD`, 9 -> `DDDDD-DDDD`,
/// 8 -> `DDDD-DDDD`. Anything else comes back as the cleaned digit string.
pub fn format_phone(raw: &str, extra_prefixes: &[String]) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let digits = strip_prefixes(&strip_to_digits(raw), extra_prefixes);

    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        9 => format!("{}-{}", &digits[..5], &digits[5..]),
        8 => format!("{}-{}", &digits[..4], &digits[4..]),
        _ => digits,
    }
}

/// Derive the two phone fields from the raw column values.
///
/// A populated second-phone column wins. Otherwise a `":::"` separator in
/// the first column (how some exports glue two numbers into one cell) splits
/// into both fields.
pub fn split_phones(
    phone1_raw: &str,
    phone2_raw: &str,
    extra_prefixes: &[String],
) -> (String, String) {
    if !phone2_raw.trim().is_empty() {
        return (
            format_phone(phone1_raw, extra_prefixes),
            format_phone(phone2_raw, extra_prefixes),
        );
    }

    if let Some((first, second)) = phone1_raw.split_once(":::") {
        return (
            format_phone(first.trim(), extra_prefixes),
            format_phone(second.trim(), extra_prefixes),
        );
    }

    (format_phone(phone1_raw, extra_prefixes), String::new())
}

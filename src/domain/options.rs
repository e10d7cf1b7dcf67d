use serde::{Deserialize, Serialize};

/// How the name normalizer treats accented characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentMode {
    /// Decompose and drop combining marks, then keep word characters,
    /// whitespace, hyphens and apostrophes. Output is ASCII-stable.
    Strip,

    /// Keep accented Latin letters via an explicit allow-list. Mirrors the
    /// legacy behavior, including its lowercase-only accent list.
    KeepLatin,
}

/// Pipeline options unifying the two legacy converter variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Emit the "Organização" column.
    pub include_organization_column: bool,

    /// Accent handling in name cleanup.
    pub strip_accents: AccentMode,

    /// Area/city prefixes stripped after the "55" country code, in addition
    /// to the built-in "031".
    pub extra_phone_prefixes: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            include_organization_column: true,
            strip_accents: AccentMode::Strip,
            extra_phone_prefixes: Vec::new(),
        }
    }
}

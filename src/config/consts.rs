// src/config/consts.rs

// Net config
pub const MDN_ORIGIN: &str = "https://developer.mozilla.org";
pub const ATTRIBUTES_URL: &str = "https://developer.mozilla.org/en-US/docs/Web/HTML/Attributes";
pub const ELEMENTS_URL: &str = "https://developer.mozilla.org/en-US/docs/Web/HTML/Element";
pub const USER_AGENT: &str = concat!("mdn_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Cell text
pub const PARAGRAPH_SEP: &str = "  ";
pub const ALIAS_SEP: &str = ", ";
pub const QUALIFIER_SEP: &str = ", ";

// Sentinels found in the source tables
pub const GLOBAL_ATTRIBUTE: &str = "Global attribute";
pub const WILDCARD_DATA_ATTRIBUTE: &str = "data-*";

// Doc text
pub const MISSING_DESCRIPTION: &str = "*Missing MDN description*";
pub const MISSING_DOCUMENTATION: &str = "*Missing MDN documentation*";
pub const GLOBAL_SENTENCE: &str = "Global attribute, can be applied to any HTML element.";
pub const DEPRECATED_NOTICE: &str = "Deprecated.";
pub const DOC_MARKER: &str = "    /// ";

// Emit
pub const ATTRIBUTES_MACRO: &str = "attributes!";
pub const ELEMENTS_MACRO: &str = "elements!";
pub const ENTRY_INDENT: &str = "    ";

// Column layouts
pub const ATTRIBUTE_COLUMNS: usize = 3;
pub const ELEMENT_COLUMNS: usize = 2;

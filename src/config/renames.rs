// src/config/renames.rs
//! Hand-curated identifiers for attribute names whose first-letter
//! capitalization would read wrong (`readonly` → `ReadOnly`).
//!
//! The table is a plain value: built once, then handed to the normalizer.
//! Names missing here fall back to capitalizing the first character only,
//! which is knowingly wrong for unlisted compound names.

use std::collections::BTreeMap;

const BUILTIN: &[(&str, &str)] = &[
    ("accept-charset", "AcceptCharset"),
    ("accesskey", "AccessKey"),
    ("autocapitalize", "AutoCapitalize"),
    ("autocomplete", "AutoComplete"),
    ("autofocus", "AutoFocus"),
    ("autoplay", "AutoPlay"),
    ("bgcolor", "BgColor"),
    ("contenteditable", "ContentEditable"),
    ("contextmenu", "ContextMenu"),
    ("crossorigin", "CrossOrigin"),
    ("datetime", "DateTime"),
    ("dirname", "DirName"),
    ("enctype", "EncType"),
    ("enterkeyhint", "EnterKeyHint"),
    ("formaction", "FormAction"),
    ("formenctype", "FormEnctype"),
    ("formmethod", "FormMethod"),
    ("formnovalidate", "FormNoValidate"),
    ("formtarget", "FormTarget"),
    ("hreflang", "HrefLang"),
    ("http-equiv", "HttpEquiv"),
    ("intrinsicsize", "IntrinsicSize"),
    ("inputmode", "InputMode"),
    ("ismap", "IsMap"),
    ("itemprop", "ItemProp"),
    ("maxlength", "MaxLength"),
    ("minlength", "MinLength"),
    ("novalidate", "NoValidate"),
    ("placeholder", "PlaceHolder"),
    ("playsinline", "PlaysInline"),
    ("readonly", "ReadOnly"),
    ("referrerpolicy", "ReferrerPolicy"),
    ("rowspan", "RowSpan"),
    ("sandbox", "SandBox"),
    ("spellcheck", "SpellCheck"),
    ("srcdoc", "SrcDoc"),
    ("srclang", "SrcLang"),
    ("srcset", "SrcSet"),
    ("tabindex", "TabIndex"),
    ("usemap", "UseMap"),
    // `Value` is taken by the signal trait downstream.
    ("value", "DefaultValue"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameTable {
    map: BTreeMap<String, String>,
}

impl Default for RenameTable {
    fn default() -> Self {
        Self::from_pairs(BUILTIN.iter().copied())
    }
}

impl RenameTable {
    /// No overrides at all; every identifier is derived mechanically.
    pub fn empty() -> Self {
        Self { map: BTreeMap::new() }
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = pairs
            .into_iter()
            .map(|(name, ident)| (s!(name), s!(ident)))
            .collect();
        Self { map }
    }

    /// Later entries replace earlier ones with the same name.
    pub fn with_overrides(mut self, extra: impl IntoIterator<Item = (String, String)>) -> Self {
        self.map.extend(extra);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Error for a malformed `name=Ident` override.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected name=Identifier, got {0:?}")]
pub struct BadOverride(pub String);

/// Parse one `name=Ident` pair as given on the command line.
pub fn parse_override(s: &str) -> Result<(String, String), BadOverride> {
    let (name, ident) = s.split_once('=').ok_or_else(|| BadOverride(s!(s)))?;
    let (name, ident) = (name.trim(), ident.trim());
    if name.is_empty() || ident.is_empty() {
        return Err(BadOverride(s!(s)));
    }
    Ok((s!(name), s!(ident)))
}

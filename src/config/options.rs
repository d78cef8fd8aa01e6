// src/config/options.rs
use std::fmt;
use std::path::PathBuf;

use super::consts::*;
use super::renames::RenameTable;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub page: PageKind,
    /// `None` means the page's default MDN URL.
    pub source: Option<Source>,
    pub renames: RenameTable,
    pub qualifier_casing: QualifierCasing,
}

impl GenerateOptions {
    pub fn for_page(page: PageKind) -> Self {
        Self { page, ..Self::default() }
    }

    pub fn source(&self) -> Source {
        self.source
            .clone()
            .unwrap_or_else(|| Source::Url(s!(self.page.default_url())))
    }

    /// URL quoted in the emitted header. Offline runs still credit MDN.
    pub fn origin(&self) -> &str {
        match &self.source {
            Some(Source::Url(url)) => url.as_str(),
            _ => self.page.default_url(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageKind {
    #[default]
    Attributes,
    Elements,
    /// Element name listing built from the elements page.
    Catalog,
}

impl PageKind {
    pub fn default_url(self) -> &'static str {
        match self {
            PageKind::Attributes => ATTRIBUTES_URL,
            PageKind::Elements | PageKind::Catalog => ELEMENTS_URL,
        }
    }

    pub fn macro_name(self) -> &'static str {
        match self {
            PageKind::Attributes => ATTRIBUTES_MACRO,
            PageKind::Elements | PageKind::Catalog => ELEMENTS_MACRO,
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageKind::Attributes => "attributes",
            PageKind::Elements => "elements",
            PageKind::Catalog => "catalog",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    /// Saved copy of a reference page.
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// How qualifier words after the first are cased.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QualifierCasing {
    /// First word as found, the rest lowercased. Matches existing generated output.
    #[default]
    AsSource,
    /// Every word lowercased.
    Lowercase,
}

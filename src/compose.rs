// src/compose.rs
//! Doc comment text for one record.

use crate::config::consts::*;
use crate::core::sanitize::{collapse_double_spaces, escape_tags};
use crate::record::{Applicability, SourceRecord};

/// Absolute MDN URL for a cell link. Links are normally site-relative.
pub fn mdn_url(link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        s!(link)
    } else {
        join!(MDN_ORIGIN, link)
    }
}

pub fn mdn_reference(link: &str) -> String {
    format!("[MDN documentation.]({})", mdn_url(link))
}

/// Documentation lines for `record`, tag mentions already escaped.
///
/// Sections, each after a blank line: description paragraphs, qualifier
/// sentence, deprecation notice, applicability, MDN link. Sections with
/// nothing to say are left out entirely.
pub fn compose(record: &SourceRecord, qualifiers: Option<&str>) -> Vec<String> {
    let mut doc: Vec<String> = record.description.split(PARAGRAPH_SEP).map(String::from).collect();
    if doc[0].is_empty() {
        doc[0] = s!(MISSING_DESCRIPTION);
    }

    if let Some(sentence) = qualifiers {
        doc.push(s!());
        doc.push(s!(sentence));
    }

    if record.deprecated {
        doc.push(s!());
        doc.push(s!(DEPRECATED_NOTICE));
    }

    match &record.applicability {
        Some(Applicability::Global) => {
            doc.push(s!());
            doc.push(s!(GLOBAL_SENTENCE));
        }
        Some(Applicability::Elements(list)) => {
            doc.push(s!());
            doc.push(format!(
                "Can be applied to the following HTML elements: {}.",
                collapse_double_spaces(list)
            ));
        }
        None => {}
    }

    if let Some(link) = &record.link {
        doc.push(s!());
        doc.push(mdn_reference(link));
    }

    doc.iter().map(|line| escape_tags(line)).collect()
}

/// Doc lines as comment text, one `    /// ` line each, newline-terminated.
pub fn render_doc(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + DOC_MARKER.len() + 1).sum());
    for line in lines {
        out.push_str(DOC_MARKER);
        out.push_str(line);
        out.push('\n');
    }
    out
}

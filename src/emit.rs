// src/emit.rs
//! Snippet layout:
//!
//! ```text
//! // Programmatically gathered from <url>.
//! attributes! {
//!     /// doc…
//!     Accept => "accept",
//! }
//! ```

use std::fmt::Write;

use crate::compose::render_doc;
use crate::config::consts::ENTRY_INDENT;
use crate::record::CanonicalEntry;

pub fn header(origin: &str) -> String {
    format!("// Programmatically gathered from {origin}.")
}

/// Doc lines plus the `Ident => "literal",` line, newline-terminated.
pub fn render_entry(entry: &CanonicalEntry) -> String {
    let mut out = render_doc(&entry.doc_lines);
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{ENTRY_INDENT}{} => \"{}\",", entry.identifier, entry.literal);
    out
}

pub fn render_snippet(origin: &str, macro_name: &str, entries: &[CanonicalEntry]) -> String {
    let mut out = header(origin);
    out.push('\n');
    out.push_str(&join!(macro_name, " {\n"));
    for entry in entries {
        out.push_str(&render_entry(entry));
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_layout() {
        let entries = vec![CanonicalEntry {
            identifier: s!("ReadOnly"),
            literal: s!("readonly"),
            doc_lines: strings!["Value is not editable.", "", "Global attribute, can be applied to any HTML element."],
        }];
        let text = render_snippet("https://example.org/attrs", "attributes!", &entries);
        // Blank doc lines keep the marker's trailing space.
        let expected = concat!(
            "// Programmatically gathered from https://example.org/attrs.\n",
            "attributes! {\n",
            "    /// Value is not editable.\n",
            "    /// \n",
            "    /// Global attribute, can be applied to any HTML element.\n",
            "    ReadOnly => \"readonly\",\n",
            "}\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_snippet_still_has_braces() {
        let text = render_snippet("u", "elements!", &[]);
        assert_eq!(text, "// Programmatically gathered from u.\nelements! {\n}\n");
    }
}

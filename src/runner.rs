// src/runner.rs
use std::io::Write;

use crate::{
    catalog::Catalog,
    config::{GenerateOptions, PageKind},
    core::{html, net},
    emit,
    error::Result,
    normalize::Normalizer,
    progress::Progress,
    record::{CanonicalEntry, SourceRecord},
    specs,
};

/// Counts for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Table rows read.
    pub records: usize,
    /// Macro entries (or catalog names) produced.
    pub emitted: usize,
    /// Rows dropped on purpose.
    pub skipped: usize,
}

/// Finished output, not yet written anywhere.
#[derive(Clone, Debug)]
pub struct Generated {
    pub text: String,
    pub summary: RunSummary,
}

/// Top-level runner: load the page, generate, then write everything at once.
/// Nothing reaches `out` unless the whole page was processed.
pub fn run<W: Write>(
    opts: &GenerateOptions,
    out: &mut W,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let source = opts.source();
    logf!("{}: reading {source}", opts.page);
    let doc = net::load(&source)?;

    let generated = generate(opts, &doc, progress)?;
    out.write_all(generated.text.as_bytes())?;
    out.flush()?;
    Ok(generated.summary)
}

/// Everything after the fetch, on an HTML document already in memory.
pub fn generate(
    opts: &GenerateOptions,
    doc: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Generated> {
    let origin = opts.origin();
    let tables = html::parse_tables(doc);
    logd!("{} tables in document", tables.len());

    let records = match opts.page {
        PageKind::Attributes => specs::attributes::extract(&tables, origin)?,
        PageKind::Elements | PageKind::Catalog => specs::elements::extract(&tables, origin)?,
    };
    if let Some(p) = progress.as_deref_mut() {
        p.begin(records.len());
    }

    let generated = match opts.page {
        PageKind::Catalog => {
            let mut catalog = Catalog::new();
            catalog.add_elements(&records);
            let summary = RunSummary {
                records: records.len(),
                emitted: catalog.elements.len(),
                skipped: 0,
            };
            Generated { text: catalog.render_element_names(), summary }
        }
        page => {
            let (entries, summary) = normalize_all(opts, page, &records, &mut progress);
            let text = emit::render_snippet(origin, page.macro_name(), &entries);
            Generated { text, summary }
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "{}: {} records, {} emitted, {} skipped",
            opts.page, generated.summary.records, generated.summary.emitted, generated.summary.skipped
        ));
        p.finish();
    }
    Ok(generated)
}

fn normalize_all(
    opts: &GenerateOptions,
    page: PageKind,
    records: &[SourceRecord],
    progress: &mut Option<&mut dyn Progress>,
) -> (Vec<CanonicalEntry>, RunSummary) {
    let normalizer = Normalizer::new(&opts.renames, opts.qualifier_casing);
    let mut entries = Vec::with_capacity(records.len());
    let mut summary = RunSummary { records: records.len(), ..RunSummary::default() };

    for record in records {
        let produced: Vec<CanonicalEntry> = match page {
            PageKind::Attributes => normalizer.attribute(record).into_iter().collect(),
            _ => normalizer.elements(record),
        };

        if let Some(p) = progress.as_deref_mut() {
            if produced.is_empty() {
                p.item_skipped(&record.raw_name);
            } else {
                p.item_done(&record.raw_name);
            }
        }
        if produced.is_empty() {
            summary.skipped += 1;
        }
        summary.emitted += produced.len();
        entries.extend(produced);
    }
    (entries, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        total: Option<usize>,
        done: Vec<String>,
        skipped: Vec<String>,
        finished: bool,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.total = Some(total); }
        fn item_done(&mut self, name: &str) { self.done.push(s!(name)); }
        fn item_skipped(&mut self, name: &str) { self.skipped.push(s!(name)); }
        fn finish(&mut self) { self.finished = true; }
    }

    const ATTRS: &str = r#"<table>
        <thead><tr><th>Attribute Name</th><th>Elements</th><th>Description</th></tr></thead>
        <tbody>
          <tr><td><a href="/en-US/docs/Web/HTML/Attributes/readonly"><code>readonly</code></a></td>
              <td><a><code>&lt;input&gt;</code></a>, <a><code>&lt;textarea&gt;</code></a></td>
              <td>Whether the element can be edited.</td></tr>
          <tr><td><code>data-*</code></td><td>Global attribute</td><td>Custom data.</td></tr>
        </tbody></table>"#;

    #[test]
    fn attributes_document_to_snippet() {
        let mut rec = Recorder::default();
        let opts = GenerateOptions::for_page(PageKind::Attributes);
        let out = generate(&opts, ATTRS, Some(&mut rec)).unwrap();

        assert_eq!(out.summary, RunSummary { records: 2, emitted: 1, skipped: 1 });
        assert!(out.text.starts_with(
            "// Programmatically gathered from https://developer.mozilla.org/en-US/docs/Web/HTML/Attributes.\nattributes! {\n"
        ));
        assert!(out.text.contains(
            "    /// Can be applied to the following HTML elements: `<input>`, `<textarea>`.\n"
        ));
        assert!(out.text.ends_with("    ReadOnly => \"readonly\",\n}\n"));
        assert!(!out.text.contains("data-*"));

        assert_eq!(rec.total, Some(2));
        assert_eq!(rec.done, strings!["readonly"]);
        assert_eq!(rec.skipped, strings!["data-*"]);
        assert!(rec.finished);
    }

    #[test]
    fn inline_abbr_keeps_description_on_one_line() {
        let doc = r#"<table><tbody>
          <tr><td><code>crossorigin</code></td><td>Global attribute</td>
              <td>How the element handles <abbr title="Cross-Origin Resource Sharing">CORS</abbr> requests.</td></tr>
        </tbody></table>"#;
        let opts = GenerateOptions::for_page(PageKind::Attributes);
        let out = generate(&opts, doc, None).unwrap();
        assert!(out.text.contains("    /// How the element handles CORS requests.\n    /// \n"), "{}", out.text);
        assert!(out.text.contains("    CrossOrigin => \"crossorigin\",\n"));
    }

    #[test]
    fn layout_error_stops_the_run() {
        let doc = "<table><tr><td>only</td><td>two</td></tr></table>";
        let opts = GenerateOptions::for_page(PageKind::Attributes);
        assert!(generate(&opts, doc, None).is_err());
    }
}

// src/cli.rs
use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::renames::parse_override;
use crate::config::{GenerateOptions, PageKind, QualifierCasing, RenameTable, Source};
use crate::progress::{LogProgress, NullProgress, Progress};
use crate::runner;

/// Scrape an MDN HTML reference page and print a code-generation snippet.
///
/// The snippet goes to stdout; logs go to stderr (or --log).
#[derive(Debug, Parser)]
#[command(name = "mdn_scrape", version, about)]
pub struct Cli {
    /// Which reference page to turn into a snippet.
    #[arg(value_enum, default_value_t = PageArg::Attributes)]
    pub page: PageArg,

    /// Read a saved copy of the page instead of fetching it.
    #[arg(long, short, value_name = "FILE", conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// Fetch from this URL instead of the default MDN page.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Extra identifier override, e.g. `--rename aria-label=AriaLabel`. Repeatable.
    #[arg(long = "rename", value_name = "NAME=IDENT", value_parser = parse_override)]
    pub renames: Vec<(String, String)>,

    /// Start from an empty rename table instead of the built-in one.
    #[arg(long)]
    pub no_builtin_renames: bool,

    /// Lowercase every qualifier word, including the first.
    #[arg(long)]
    pub lowercase_qualifiers: bool,

    /// Debug-level logging and per-record progress.
    #[arg(long, short)]
    pub verbose: bool,

    /// Append logs to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PageArg {
    Attributes,
    Elements,
    Catalog,
}

impl From<PageArg> for PageKind {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Attributes => PageKind::Attributes,
            PageArg::Elements => PageKind::Elements,
            PageArg::Catalog => PageKind::Catalog,
        }
    }
}

impl Cli {
    pub fn options(&self) -> GenerateOptions {
        let base = if self.no_builtin_renames { RenameTable::empty() } else { RenameTable::default() };
        let source = match (&self.input, &self.url) {
            (Some(path), _) => Some(Source::File(path.clone())),
            (None, Some(url)) => Some(Source::Url(url.clone())),
            (None, None) => None,
        };
        GenerateOptions {
            page: self.page.into(),
            source,
            renames: base.with_overrides(self.renames.iter().cloned()),
            qualifier_casing: if self.lowercase_qualifiers {
                QualifierCasing::Lowercase
            } else {
                QualifierCasing::AsSource
            },
        }
    }
}

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    crate::log::init(cli.log.as_deref(), cli.verbose).wrap_err("could not set up logging")?;
    let opts = cli.options();

    let mut log_progress = LogProgress;
    let mut null_progress = NullProgress;
    let progress: &mut dyn Progress = if cli.verbose { &mut log_progress } else { &mut null_progress };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = runner::run(&opts, &mut out, Some(progress))
        .inspect_err(|e| loge!("{}: {e}", opts.page))
        .wrap_err_with(|| format!("generating {} snippet failed", opts.page))?;

    logf!(
        "{}: {} records, {} emitted, {} skipped",
        opts.page, summary.records, summary.emitted, summary.skipped
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_attributes_from_mdn() {
        let cli = Cli::try_parse_from(["mdn_scrape"]).unwrap();
        let opts = cli.options();
        assert_eq!(opts.page, PageKind::Attributes);
        assert_eq!(opts.source, None);
        assert_eq!(opts.renames, RenameTable::default());
        assert_eq!(opts.qualifier_casing, QualifierCasing::AsSource);
    }

    #[test]
    fn flags_map_to_options() {
        let cli = Cli::try_parse_from([
            "mdn_scrape",
            "elements",
            "--input",
            "saved.html",
            "--rename",
            "aria-label=AriaLabel",
            "--no-builtin-renames",
            "--lowercase-qualifiers",
        ])
        .unwrap();
        let opts = cli.options();
        assert_eq!(opts.page, PageKind::Elements);
        assert_eq!(opts.source, Some(Source::File(PathBuf::from("saved.html"))));
        assert_eq!(opts.renames.len(), 1);
        assert_eq!(opts.renames.get("aria-label"), Some("AriaLabel"));
        assert_eq!(opts.qualifier_casing, QualifierCasing::Lowercase);
    }

    #[test]
    fn input_and_url_conflict() {
        let res = Cli::try_parse_from(["mdn_scrape", "--input", "a.html", "--url", "https://x"]);
        assert!(res.is_err());
    }

    #[test]
    fn bad_rename_rejected() {
        assert!(Cli::try_parse_from(["mdn_scrape", "--rename", "nope"]).is_err());
    }
}

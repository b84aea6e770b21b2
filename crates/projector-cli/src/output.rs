//! Status output on stderr.
//!
//! Stdout belongs to the manifest stream, so every message written through
//! [`OutputManager`] goes to stderr.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use projector_core::application::GenerateSummary;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI status output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => config.output.format.parse().unwrap_or(OutputFormat::Auto),
            explicit => explicit,
        };

        // Auto → Human on a terminal, Plain when stderr is redirected.
        let resolved_format = match requested {
            OutputFormat::Auto if io::stderr().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stderr(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Report a finished `expand` run.
    pub fn summary(&self, summary: &GenerateSummary) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        match self.format() {
            OutputFormat::Json => self.term.write_line(&summary_json(summary).to_string()),
            _ => self.success(&summary_line(summary)),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

fn summary_line(summary: &GenerateSummary) -> String {
    let noun = if summary.applications == 1 {
        "application"
    } else {
        "applications"
    };
    format!(
        "Expanded project '{}' with {} {noun} ({} documents)",
        summary.project, summary.applications, summary.documents
    )
}

fn summary_json(summary: &GenerateSummary) -> serde_json::Value {
    serde_json::json!({
        "project": summary.project,
        "applications": summary.applications,
        "documents": summary.documents,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

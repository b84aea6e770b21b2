//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "projector",
    bin_name = "projector",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Expand an ArgoCDProject into Argo CD manifests",
    long_about = "Projector reads one ArgoCDProject document and writes the AppProject \
                  and Application manifests it stands for to stdout, separated by '---'. \
                  Invoked with a bare FILE it behaves as a kustomize exec generator.",
    after_help = "EXAMPLES:\n\
        \x20 projector project.yaml\n\
        \x20 projector expand project.yaml -o manifests.yaml\n\
        \x20 projector completions bash > /usr/share/bash-completion/completions/projector",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// ArgoCDProject to expand when no subcommand is given.
    #[arg(value_name = "FILE", help = "ArgoCDProject file (generator form)")]
    pub input: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Expand an ArgoCDProject into manifests.
    #[command(
        visible_alias = "x",
        about = "Expand an ArgoCDProject into manifests",
        after_help = "EXAMPLES:\n\
            \x20 projector expand project.yaml\n\
            \x20 projector expand project.yaml --output manifests.yaml"
    )]
    Expand(ExpandArgs),

    /// Initialise a Projector configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 projector init\n\
            \x20 projector init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 projector completions bash > ~/.local/share/bash-completion/completions/projector\n\
            \x20 projector completions zsh  > ~/.zfunc/_projector\n\
            \x20 projector completions fish > ~/.config/fish/completions/projector.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Projector configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 projector config get log.level\n\
            \x20 projector config list\n\
            \x20 projector config path"
    )]
    Config(ConfigCommands),
}

// ── expand ────────────────────────────────────────────────────────────────────

/// Arguments for `projector expand`.
#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// ArgoCDProject document to read.
    #[arg(value_name = "FILE", help = "ArgoCDProject file")]
    pub input: PathBuf,

    /// Write manifests to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Write manifests to PATH instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

impl ExpandArgs {
    /// The bare-FILE generator form: stdout, no status messages.
    pub fn generator(input: PathBuf) -> Self {
        Self {
            input,
            output: None,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `projector init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing config")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `projector completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Shells supported by `clap_complete`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `projector config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `log.level`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

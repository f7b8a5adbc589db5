//! Clap derive structures for the `wirelens` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// wirelens -- browse discovered network interfaces from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "wirelens",
    version,
    about = "Browse discovered network interfaces from the terminal",
    long_about = "Renders network interfaces from a discovery snapshot: SR-IOV roles,\n\
        VXLAN attributes, and the processes attached to TUN/TAP devices.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Discovery snapshot (JSON) to read
    #[arg(long, short = 'f', env = "WIRELENS_SNAPSHOT", global = true)]
    pub snapshot: Option<PathBuf>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "WIRELENS_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect discovered interfaces
    #[command(alias = "if", alias = "i")]
    Interfaces(InterfacesArgs),

    /// Show the resolved brand name and icon
    Brand(BrandArgs),

    /// Re-render interfaces on every refresh (Enter triggers one)
    Watch(WatchArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Interfaces ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InterfacesArgs {
    #[command(subcommand)]
    pub command: InterfacesCommand,
}

#[derive(Debug, Subcommand)]
pub enum InterfacesCommand {
    /// List all interfaces in discovery order
    #[command(alias = "ls")]
    List {
        /// Only show interfaces of this kind (physical, veth, bridge, vxlan, tuntap, ...)
        #[arg(long, short = 'k')]
        kind: Option<String>,
    },

    /// Show one interface with its detail blocks
    Get {
        /// Interface name, or name@netns to disambiguate
        name: String,
    },
}

// ── Brand ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BrandArgs {
    #[command(subcommand)]
    pub command: BrandCommand,
}

#[derive(Debug, Subcommand)]
pub enum BrandCommand {
    /// Print the brand name
    Text,

    /// Print the brand icon markup
    Icon {
        /// Fill color applied to custom icon markup
        #[arg(long)]
        fill: Option<String>,
    },
}

// ── Watch ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Also refresh every N seconds (0 = only on request)
    #[arg(long, short = 'i')]
    pub interval: Option<u64>,

    /// Exit after N renders
    #[arg(long, short = 'n')]
    pub count: Option<u64>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write an initial config file (records --snapshot when given)
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Display current resolved configuration
    Show,

    /// Print the config file location
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

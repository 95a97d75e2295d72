pub mod cli;
pub mod toml_config;

use crate::domain::model::{Direction, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fw", version)]
#[command(about = "Manage the Windows firewall through netsh")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Print the netsh invocations instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Enable the firewall
    Enable,
    /// Disable the firewall
    Disable,
    /// Allow traffic on a port (default: in)
    Allow {
        port: String,
        #[arg(value_enum, ignore_case = true, default_value_t = Direction::In)]
        direction: Direction,
    },
    /// Deny traffic on a port (default: in)
    Deny {
        port: String,
        #[arg(value_enum, ignore_case = true, default_value_t = Direction::In)]
        direction: Direction,
    },
    /// Delete the rule for a port
    Delete { port: String },
    /// Show the current firewall status and rules
    Status,
    /// List rules (Port | Direction | Rule Name)
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

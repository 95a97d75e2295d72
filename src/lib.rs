pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{dry_run::DryRunRunner, netsh::NetshRunner};
pub use crate::config::{cli::parse_args, toml_config::FwConfig, CliConfig, Command};
pub use crate::core::{firewall::Firewall, scraper::RuleScraper};
pub use crate::domain::model::{Direction, OutputFormat, RuleAction, RuleRecord};
pub use crate::domain::ports::CommandRunner;
pub use crate::utils::error::{FwError, Result};

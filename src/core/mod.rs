pub mod firewall;
pub mod report;
pub mod scraper;

pub use crate::domain::model::{Direction, OutputFormat, RuleAction, RuleRecord};
pub use crate::domain::ports::CommandRunner;
pub use crate::utils::error::Result;

use crate::config::CliConfig;
use crate::utils::error::{FwError, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

pub const USAGE: &str = "\
Usage:
  fw enable                 - Enable the firewall
  fw disable                - Disable the firewall
  fw allow <port> [in|out]  - Allow traffic on a port (default: in)
  fw deny <port> [in|out]   - Deny traffic on a port (default: in)
  fw delete <port>          - Delete the rule for a port
  fw status                 - Show the current firewall status and rules
  fw list                   - List rules (Port | Direction | Rule Name)";

/// 解析命令列；`--help`/`--version` 以 HelpDisplayed 回傳，其餘錯誤皆為 UsageError
pub fn parse_args<I, T>(args: I) -> Result<CliConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliConfig::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => FwError::HelpDisplayed {
            text: e.render().to_string(),
        },
        _ => FwError::UsageError {
            message: first_line(&e.render().to_string()),
        },
    })
}

fn first_line(rendered: &str) -> String {
    rendered
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("invalid arguments")
        .trim()
        .to_string()
}

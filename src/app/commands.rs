use crate::config::Command;
use crate::core::firewall::Firewall;
use crate::core::report;
use crate::domain::model::{Direction, RuleAction};
use crate::domain::ports::CommandRunner;
use crate::utils::error::Result;
use std::io::Write;

/// 執行一個子命令，進度訊息與結果寫到 `out`
pub async fn execute<R, W>(firewall: &Firewall<R>, command: &Command, out: &mut W) -> Result<()>
where
    R: CommandRunner,
    W: Write,
{
    match command {
        Command::Enable => {
            writeln!(out, "Enabling firewall...")?;
            firewall.enable().await?;
            writeln!(out, "Firewall enabled.")?;
        }
        Command::Disable => {
            writeln!(out, "Disabling firewall...")?;
            firewall.disable().await?;
            writeln!(out, "Firewall disabled.")?;
        }
        Command::Allow { port, direction } => {
            add_rule(firewall, RuleAction::Allow, port, *direction, out).await?;
        }
        Command::Deny { port, direction } => {
            add_rule(firewall, RuleAction::Deny, port, *direction, out).await?;
        }
        Command::Delete { port } => {
            writeln!(out, "Deleting rule for port {}...", port)?;
            firewall.delete(port).await?;
            writeln!(out, "Rule for port {} deleted.", port)?;
        }
        Command::Status => {
            writeln!(out, "Firewall status:")?;
            let output = firewall.status().await?;
            writeln!(out, "{}", output)?;
        }
        Command::List { format } => {
            let records = firewall.list().await?;
            report::write_records(out, &records, *format)?;
        }
    }

    out.flush()?;
    Ok(())
}

async fn add_rule<R, W>(
    firewall: &Firewall<R>,
    action: RuleAction,
    port: &str,
    direction: Direction,
    out: &mut W,
) -> Result<()>
where
    R: CommandRunner,
    W: Write,
{
    writeln!(
        out,
        "{} {}bound traffic on port {}...",
        action.verb(),
        direction.as_arg(),
        port
    )?;
    firewall.add_rule(action, port, direction).await?;
    writeln!(
        out,
        "{}bound traffic {} on port {}.",
        direction.title(),
        action.past_tense(),
        port
    )?;
    Ok(())
}

use crate::domain::ports::CommandRunner;
use crate::utils::error::{FwError, Result};
use async_trait::async_trait;
use tokio::process::Command;

/// 以子行程執行 netsh，等待結束後回傳 stdout + stderr
#[derive(Debug, Clone)]
pub struct NetshRunner {
    program: String,
}

impl NetshRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl CommandRunner for NetshRunner {
    async fn run(&self, args: &[String]) -> Result<String> {
        tracing::debug!("Running: {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|source| FwError::SpawnError {
                program: self.program.clone(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            tracing::debug!("{} failed with {}", self.program, output.status);
            return Err(FwError::CommandFailed {
                command: format!("{} {}", self.program, args.join(" ")),
                status: output.status.to_string(),
                output: combined,
            });
        }

        Ok(combined)
    }
}

use crate::domain::ports::CommandRunner;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// 不執行任何行程，只記錄並印出將要執行的 netsh 指令
#[derive(Debug, Clone)]
pub struct DryRunRunner {
    program: String,
    echo: bool,
    planned: Arc<Mutex<Vec<String>>>,
}

impl DryRunRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            echo: true,
            planned: Arc::default(),
        }
    }

    /// 不印到 stdout，只保留紀錄
    pub fn quiet(program: impl Into<String>) -> Self {
        Self {
            echo: false,
            ..Self::new(program)
        }
    }

    pub fn planned(&self) -> Vec<String> {
        self.planned
            .lock()
            .map(|planned| planned.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CommandRunner for DryRunRunner {
    async fn run(&self, args: &[String]) -> Result<String> {
        let command_line = format!("{} {}", self.program, args.join(" "));
        tracing::info!("🔍 DRY RUN: {}", command_line);

        if self.echo {
            println!("[dry-run] {}", command_line);
        }
        if let Ok(mut planned) = self.planned.lock() {
            planned.push(command_line);
        }

        Ok(String::new())
    }
}

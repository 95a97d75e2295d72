use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    In,
    Out,
}

impl Direction {
    /// netsh `dir=` 參數值
    pub fn as_arg(&self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }

    /// netsh 顯示的寫法 (In / Out)
    pub fn title(&self) -> &'static str {
        match self {
            Direction::In => "In",
            Direction::Out => "Out",
        }
    }

    pub fn parse_loose(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("in") {
            Some(Direction::In)
        } else if value.eq_ignore_ascii_case("out") {
            Some(Direction::Out)
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    Allow,
    Deny,
}

impl RuleAction {
    /// netsh `action=` 參數值，deny 對應 block
    pub fn as_arg(&self) -> &'static str {
        match self {
            RuleAction::Allow => "allow",
            RuleAction::Deny => "block",
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            RuleAction::Allow => "Allowing",
            RuleAction::Deny => "Denying",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            RuleAction::Allow => "allowed",
            RuleAction::Deny => "denied",
        }
    }
}

/// 從 `netsh advfirewall firewall show rule` 輸出擷取的一筆規則
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    pub port: String,
    pub direction: Direction,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

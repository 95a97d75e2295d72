use crate::config::toml_config::ScraperConfig;
use crate::domain::model::{Direction, RuleRecord};
use crate::utils::error::Result;
use regex::Regex;

/// 逐行比對 `show rule` 輸出；遇到方向欄位時輸出一筆記錄並重設暫存值
#[derive(Debug, Clone)]
pub struct RuleScraper {
    name_re: Regex,
    port_re: Regex,
    direction_re: Regex,
}

impl RuleScraper {
    pub fn new(labels: &ScraperConfig) -> Result<Self> {
        Ok(Self {
            name_re: Regex::new(&format!(
                r"(?i)^{}:\s*(.*)",
                regex::escape(&labels.name_label)
            ))?,
            port_re: Regex::new(&format!(
                r"(?i)^{}:\s*(\d+)",
                regex::escape(&labels.port_label)
            ))?,
            direction_re: Regex::new(&format!(
                r"(?i)^{}:\s*(In|Out)",
                regex::escape(&labels.direction_label)
            ))?,
        })
    }

    pub fn scrape(&self, text: &str) -> Vec<RuleRecord> {
        let mut records = Vec::new();
        let mut name = String::new();
        let mut port = String::new();

        for line in text.lines() {
            let line = line.trim();

            if let Some(caps) = self.name_re.captures(line) {
                name = caps[1].to_string();
            }
            if let Some(caps) = self.port_re.captures(line) {
                port = caps[1].to_string();
            }
            if let Some(caps) = self.direction_re.captures(line) {
                let Some(direction) = Direction::parse_loose(&caps[1]) else {
                    continue;
                };

                records.push(RuleRecord {
                    port: std::mem::take(&mut port),
                    direction,
                    name: std::mem::take(&mut name),
                });
            }
        }

        tracing::debug!("Scraped {} rule records", records.len());
        records
    }
}

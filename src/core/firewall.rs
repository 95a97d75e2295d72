use crate::config::toml_config::FwConfig;
use crate::core::scraper::RuleScraper;
use crate::domain::model::{Direction, RuleAction, RuleRecord};
use crate::domain::ports::CommandRunner;
use crate::utils::error::Result;

/// 把高階操作翻譯成 `netsh advfirewall` 參數並交給 runner 執行
pub struct Firewall<R: CommandRunner> {
    runner: R,
    config: FwConfig,
}

impl<R: CommandRunner> Firewall<R> {
    pub fn new(runner: R, config: FwConfig) -> Self {
        Self { runner, config }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub async fn enable(&self) -> Result<()> {
        tracing::info!("Enabling firewall for {}", self.config.netsh.profiles);
        self.runner.run(&self.set_state_args(true)).await?;
        Ok(())
    }

    pub async fn disable(&self) -> Result<()> {
        tracing::info!("Disabling firewall for {}", self.config.netsh.profiles);
        self.runner.run(&self.set_state_args(false)).await?;
        Ok(())
    }

    pub async fn allow(&self, port: &str, direction: Direction) -> Result<()> {
        self.add_rule(RuleAction::Allow, port, direction).await
    }

    pub async fn deny(&self, port: &str, direction: Direction) -> Result<()> {
        self.add_rule(RuleAction::Deny, port, direction).await
    }

    pub async fn add_rule(&self, action: RuleAction, port: &str, direction: Direction) -> Result<()> {
        tracing::info!(
            "Adding {} rule for port {} ({})",
            action.as_arg(),
            port,
            direction
        );
        self.runner
            .run(&self.add_rule_args(action, port, direction))
            .await?;
        Ok(())
    }

    /// 兩條規則都嘗試刪除；只有 allow 規則刪除失敗才算錯誤
    pub async fn delete(&self, port: &str) -> Result<()> {
        let allow_result = self
            .runner
            .run(&self.delete_rule_args(RuleAction::Allow, port))
            .await;

        if let Err(e) = self
            .runner
            .run(&self.delete_rule_args(RuleAction::Deny, port))
            .await
        {
            tracing::debug!("No deny rule removed for port {}: {}", port, e);
        }

        allow_result?;
        Ok(())
    }

    pub async fn status(&self) -> Result<String> {
        self.runner.run(&self.show_profiles_args()).await
    }

    pub async fn list(&self) -> Result<Vec<RuleRecord>> {
        let scraper = RuleScraper::new(&self.config.scraper)?;
        let output = self.runner.run(&self.show_rules_args()).await?;
        Ok(scraper.scrape(&output))
    }

    pub fn rule_name(&self, action: RuleAction, port: &str) -> String {
        let prefix = match action {
            RuleAction::Allow => &self.config.rules.allow_prefix,
            RuleAction::Deny => &self.config.rules.deny_prefix,
        };
        format!("{}{}", prefix, port)
    }

    fn set_state_args(&self, on: bool) -> Vec<String> {
        to_args(&[
            "advfirewall",
            "set",
            &self.config.netsh.profiles,
            "state",
            if on { "on" } else { "off" },
        ])
    }

    fn add_rule_args(&self, action: RuleAction, port: &str, direction: Direction) -> Vec<String> {
        to_args(&[
            "advfirewall",
            "firewall",
            "add",
            "rule",
            &format!("name={}", self.rule_name(action, port)),
            &format!("protocol={}", self.config.rules.protocol),
            &format!("dir={}", direction.as_arg()),
            &format!("action={}", action.as_arg()),
            &format!("localport={}", port),
        ])
    }

    fn delete_rule_args(&self, action: RuleAction, port: &str) -> Vec<String> {
        to_args(&[
            "advfirewall",
            "firewall",
            "delete",
            "rule",
            &format!("name={}", self.rule_name(action, port)),
        ])
    }

    fn show_profiles_args(&self) -> Vec<String> {
        to_args(&["advfirewall", "show", &self.config.netsh.profiles])
    }

    fn show_rules_args(&self) -> Vec<String> {
        to_args(&["advfirewall", "firewall", "show", "rule", "name=all"])
    }
}

fn to_args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FwError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// 記錄每次呼叫的參數，依序回傳預先排好的結果
    #[derive(Clone, Default)]
    struct MockRunner {
        calls: Arc<Mutex<Vec<Vec<String>>>>,
        responses: Arc<Mutex<VecDeque<std::result::Result<String, String>>>>,
    }

    impl MockRunner {
        fn with_responses(responses: Vec<std::result::Result<String, String>>) -> Self {
            Self {
                calls: Arc::default(),
                responses: Arc::new(Mutex::new(responses.into())),
            }
        }

        async fn calls(&self) -> Vec<String> {
            self.calls
                .lock()
                .await
                .iter()
                .map(|args| args.join(" "))
                .collect()
        }
    }

    #[async_trait]
    impl CommandRunner for MockRunner {
        async fn run(&self, args: &[String]) -> Result<String> {
            self.calls.lock().await.push(args.to_vec());
            match self.responses.lock().await.pop_front() {
                Some(Ok(output)) => Ok(output),
                Some(Err(output)) => Err(FwError::CommandFailed {
                    command: format!("netsh {}", args.join(" ")),
                    status: "exit code: 1".to_string(),
                    output,
                }),
                None => Ok("Ok.".to_string()),
            }
        }
    }

    fn firewall(runner: MockRunner) -> Firewall<MockRunner> {
        Firewall::new(runner, FwConfig::default())
    }

    #[tokio::test]
    async fn test_enable_and_disable_templates() {
        let runner = MockRunner::default();
        let fw = firewall(runner.clone());

        fw.enable().await.unwrap();
        fw.disable().await.unwrap();

        assert_eq!(
            runner.calls().await,
            vec![
                "advfirewall set allprofiles state on",
                "advfirewall set allprofiles state off",
            ]
        );
    }

    #[tokio::test]
    async fn test_allow_template() {
        let runner = MockRunner::default();
        let fw = firewall(runner.clone());

        fw.allow("8080", Direction::In).await.unwrap();

        assert_eq!(
            runner.calls().await,
            vec![
                "advfirewall firewall add rule name=AllowInboundPort8080 protocol=TCP dir=in action=allow localport=8080"
            ]
        );
    }

    #[tokio::test]
    async fn test_deny_outbound_uses_block_and_same_prefix() {
        let runner = MockRunner::default();
        let fw = firewall(runner.clone());

        fw.deny("25", Direction::Out).await.unwrap();

        assert_eq!(
            runner.calls().await,
            vec![
                "advfirewall firewall add rule name=DenyInboundPort25 protocol=TCP dir=out action=block localport=25"
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_tries_both_rules() {
        let runner = MockRunner::default();
        let fw = firewall(runner.clone());

        fw.delete("443").await.unwrap();

        assert_eq!(
            runner.calls().await,
            vec![
                "advfirewall firewall delete rule name=AllowInboundPort443",
                "advfirewall firewall delete rule name=DenyInboundPort443",
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_ignores_missing_deny_rule() {
        let runner = MockRunner::with_responses(vec![
            Ok("Deleted 1 rule(s).".to_string()),
            Err("No rules match the specified criteria.".to_string()),
        ]);
        let fw = firewall(runner);

        assert!(fw.delete("443").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_fails_when_allow_rule_missing() {
        let runner = MockRunner::with_responses(vec![
            Err("No rules match the specified criteria.".to_string()),
            Ok("Deleted 1 rule(s).".to_string()),
        ]);
        let fw = firewall(runner.clone());

        let err = fw.delete("443").await.unwrap_err();

        assert!(matches!(err, FwError::CommandFailed { .. }));
        // deny 規則仍然會被嘗試刪除
        assert_eq!(runner.calls().await.len(), 2);
    }

    #[tokio::test]
    async fn test_command_failure_propagates() {
        let runner = MockRunner::with_responses(vec![Err(
            "The requested operation requires elevation (Run as administrator).".to_string(),
        )]);
        let fw = firewall(runner);

        let err = fw.enable().await.unwrap_err();
        assert!(err.to_string().contains("requires elevation"));
    }

    #[tokio::test]
    async fn test_status_returns_raw_output() {
        let runner = MockRunner::with_responses(vec![Ok(
            "Domain Profile Settings:\nState                                 ON\n".to_string(),
        )]);
        let fw = firewall(runner.clone());

        let output = fw.status().await.unwrap();

        assert!(output.contains("State"));
        assert_eq!(runner.calls().await, vec!["advfirewall show allprofiles"]);
    }

    #[tokio::test]
    async fn test_list_scrapes_rule_output() {
        let runner = MockRunner::with_responses(vec![Ok(
            "Rule Name: Web\nLocalPort: 80\nDirection: In\n\nRule Name: Mail\nLocalPort: 25\nDirection: Out\n"
                .to_string(),
        )]);
        let fw = firewall(runner.clone());

        let records = fw.list().await.unwrap();

        assert_eq!(runner.calls().await, vec!["advfirewall firewall show rule name=all"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Web");
        assert_eq!(records[0].port, "80");
        assert_eq!(records[1].direction, Direction::Out);
    }

    #[tokio::test]
    async fn test_configured_prefixes_protocol_and_profiles() {
        let mut config = FwConfig::default();
        config.netsh.profiles = "publicprofile".to_string();
        config.rules.protocol = "UDP".to_string();
        config.rules.allow_prefix = "fw-allow-".to_string();

        let runner = MockRunner::default();
        let fw = Firewall::new(runner.clone(), config);

        fw.allow("53", Direction::In).await.unwrap();
        fw.enable().await.unwrap();

        assert_eq!(
            runner.calls().await,
            vec![
                "advfirewall firewall add rule name=fw-allow-53 protocol=UDP dir=in action=allow localport=53",
                "advfirewall set publicprofile state on",
            ]
        );
    }
}

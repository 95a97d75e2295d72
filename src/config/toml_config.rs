use crate::utils::error::{FwError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SUPPORTED_PROTOCOLS: [&str; 2] = ["TCP", "UDP"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FwConfig {
    pub netsh: NetshConfig,
    pub rules: RulesConfig,
    pub scraper: ScraperConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetshConfig {
    pub program: String,
    pub profiles: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub protocol: String,
    pub allow_prefix: String,
    pub deny_prefix: String,
}

/// `show rule` 輸出中的欄位名稱，非英文系統可覆寫
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub name_label: String,
    pub port_label: String,
    pub direction_label: String,
}

impl Default for NetshConfig {
    fn default() -> Self {
        Self {
            program: "netsh".to_string(),
            profiles: "allprofiles".to_string(),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            protocol: "TCP".to_string(),
            allow_prefix: "AllowInboundPort".to_string(),
            deny_prefix: "DenyInboundPort".to_string(),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            name_label: "Rule Name".to_string(),
            port_label: "LocalPort".to_string(),
            direction_label: "Direction".to_string(),
        }
    }
}

impl FwConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FwError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FwError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 有給路徑就讀檔，否則使用預設值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// 替換環境變數 (例如 ${NETSH_PATH})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_program("netsh.program", &self.netsh.program)?;
        validation::validate_single_token("netsh.profiles", &self.netsh.profiles)?;

        validation::validate_one_of("rules.protocol", &self.rules.protocol, &SUPPORTED_PROTOCOLS)?;
        validation::validate_single_token("rules.allow_prefix", &self.rules.allow_prefix)?;
        validation::validate_single_token("rules.deny_prefix", &self.rules.deny_prefix)?;

        if self.rules.allow_prefix == self.rules.deny_prefix {
            return Err(FwError::InvalidConfigValueError {
                field: "rules.deny_prefix".to_string(),
                value: self.rules.deny_prefix.clone(),
                reason: "Must differ from rules.allow_prefix".to_string(),
            });
        }

        validation::validate_non_empty_string("scraper.name_label", &self.scraper.name_label)?;
        validation::validate_non_empty_string("scraper.port_label", &self.scraper.port_label)?;
        validation::validate_non_empty_string(
            "scraper.direction_label",
            &self.scraper.direction_label,
        )?;

        Ok(())
    }
}

impl Validate for FwConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_netsh_templates() {
        let config = FwConfig::default();

        assert_eq!(config.netsh.program, "netsh");
        assert_eq!(config.netsh.profiles, "allprofiles");
        assert_eq!(config.rules.protocol, "TCP");
        assert_eq!(config.rules.allow_prefix, "AllowInboundPort");
        assert_eq!(config.rules.deny_prefix, "DenyInboundPort");
        assert_eq!(config.scraper.name_label, "Rule Name");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_content = r#"
[rules]
protocol = "UDP"
"#;

        let config = FwConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.rules.protocol, "UDP");
        assert_eq!(config.rules.allow_prefix, "AllowInboundPort");
        assert_eq!(config.netsh.program, "netsh");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_localized_scraper_labels() {
        let toml_content = r#"
[scraper]
name_label = "Regelname"
port_label = "Lokaler Port"
direction_label = "Richtung"
"#;

        let config = FwConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.scraper.port_label, "Lokaler Port");
        assert_eq!(config.scraper.direction_label, "Richtung");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NETSH_FW_TEST_PROGRAM", r"C:\Windows\System32\netsh.exe");

        let toml_content = r#"
[netsh]
program = '${NETSH_FW_TEST_PROGRAM}'
"#;

        let config = FwConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.netsh.program, r"C:\Windows\System32\netsh.exe");

        std::env::remove_var("NETSH_FW_TEST_PROGRAM");
    }

    #[test]
    fn test_unknown_env_var_is_left_untouched() {
        let toml_content = r#"
[rules]
allow_prefix = "${NETSH_FW_TEST_UNSET_VARIABLE}"
"#;

        let config = FwConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.rules.allow_prefix, "${NETSH_FW_TEST_UNSET_VARIABLE}");
    }

    #[test]
    fn test_config_validation() {
        let mut config = FwConfig::default();
        config.rules.protocol = "ICMP".to_string();
        assert!(config.validate().is_err());

        let mut config = FwConfig::default();
        config.rules.deny_prefix = config.rules.allow_prefix.clone();
        assert!(config.validate().is_err());

        let mut config = FwConfig::default();
        config.netsh.program = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = FwConfig::from_toml_str("[rules\nprotocol = ").unwrap_err();
        assert!(matches!(err, FwError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[netsh]
profiles = "domainprofile"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = FwConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(config.netsh.profiles, "domainprofile");
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = FwConfig::load(None).unwrap();
        assert_eq!(config.netsh.profiles, "allprofiles");
    }
}

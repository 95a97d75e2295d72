use thiserror::Error;

#[derive(Error, Debug)]
pub enum FwError {
    #[error("{message}")]
    UsageError { message: String },

    #[error("{text}")]
    HelpDisplayed { text: String },

    #[error("Failed to launch '{program}': {source}")]
    SpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command error: {command} exited with {status} - {output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FwError {
    pub fn is_usage(&self) -> bool {
        matches!(self, FwError::UsageError { .. })
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FwError::UsageError { message } => message.clone(),
            FwError::HelpDisplayed { text } => text.clone(),
            FwError::SpawnError { program, .. } => {
                format!("Could not run '{}'", program)
            }
            FwError::CommandFailed { command, output, .. } => {
                let detail = output.trim();
                if detail.is_empty() {
                    format!("'{}' failed", command)
                } else {
                    format!("'{}' failed: {}", command, detail)
                }
            }
            FwError::ConfigValidationError { .. } | FwError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FwError::UsageError { .. } | FwError::HelpDisplayed { .. } => {
                "Run 'fw --help' to see the available commands"
            }
            FwError::SpawnError { .. } => {
                "Make sure netsh is installed and on PATH, or set [netsh].program in the config file"
            }
            FwError::CommandFailed { .. } => {
                "Changing firewall rules requires an elevated (Administrator) prompt"
            }
            FwError::ConfigValidationError { .. }
            | FwError::InvalidConfigValueError { .. }
            | FwError::PatternError(_) => "Check the values in the configuration file",
            FwError::IoError(_) | FwError::SerializationError(_) | FwError::CsvError(_) => {
                "Check that standard output is writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FwError>;

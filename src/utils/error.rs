use thiserror::Error;

#[derive(Error, Debug)]
pub enum DmxError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input closed before the session finished")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定的行程結束碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl DmxError {
    pub fn config(message: impl Into<String>) -> Self {
        DmxError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DmxError::IoError(_) => ErrorCategory::Io,
            DmxError::CsvError(_) => ErrorCategory::Serialization,
            DmxError::ConfigError { .. } | DmxError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DmxError::InputClosed => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DmxError::IoError(_) | DmxError::CsvError(_) => ErrorSeverity::Critical,
            DmxError::ConfigError { .. }
            | DmxError::InvalidConfigValueError { .. }
            | DmxError::InputClosed => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DmxError::IoError(e) => format!("Could not write the address file: {}", e),
            DmxError::CsvError(e) => format!("Could not serialize the addresses: {}", e),
            DmxError::ConfigError { message } => format!("Configuration problem: {}", message),
            DmxError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DmxError::InputClosed => "Input ended before the addresses were confirmed".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DmxError::IoError(_) => "Check that the output directory exists and is writable",
            DmxError::CsvError(_) => "Re-run the session; the address list could not be encoded",
            DmxError::ConfigError { .. } => "Check the TOML file syntax and the path given to --config",
            DmxError::InvalidConfigValueError { .. } => "Fix the reported setting and run again",
            DmxError::InputClosed => "Answer every prompt, or pipe a complete session into stdin",
        }
    }
}

pub type Result<T> = std::result::Result<T, DmxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_are_critical() {
        let err = DmxError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
    }

    #[test]
    fn test_input_closed_exits_non_zero() {
        let err = DmxError::InputClosed;
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity().exit_code(), 1);
        assert!(err.user_friendly_message().contains("Input ended"));
    }

    #[test]
    fn test_invalid_value_message_names_field() {
        let err = DmxError::InvalidConfigValueError {
            field: "output.file_name".to_string(),
            value: "a/b".to_string(),
            reason: "File name cannot contain path separators".to_string(),
        };
        assert!(err.to_string().contains("output.file_name"));
        assert!(err.user_friendly_message().contains("path separators"));
    }
}

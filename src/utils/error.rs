use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Failed to list directory {path}: {source}")]
    DirectoryReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read metadata file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report {path}: {source}")]
    ReportWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Catalog returned {status} for {url}. Body: {body}")]
    CatalogStatusError { url: String, status: u16, body: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    LocalIo,
    Network,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ScoutError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScoutError::DirectoryReadError { .. }
            | ScoutError::FileReadError { .. }
            | ScoutError::ReportWriteError { .. } => ErrorCategory::LocalIo,
            ScoutError::ApiError(_) | ScoutError::CatalogStatusError { .. } => {
                ErrorCategory::Network
            }
            ScoutError::ConfigError { .. } | ScoutError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::LocalIo => ErrorSeverity::Critical,
        }
    }

    /// 退出碼：所有錯誤都會中止整批檢查
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScoutError::DirectoryReadError { .. } => {
                "Check that --addons-directory points at your AddOns folder"
            }
            ScoutError::FileReadError { .. } => "Check the file permissions of the addon folder",
            ScoutError::ReportWriteError { .. } => "Make sure the output location is writable",
            ScoutError::ApiError(_) => "Check your network connection and try again",
            ScoutError::CatalogStatusError { .. } => {
                "The catalog rejected the request; verify --catalog-url and the project id"
            }
            ScoutError::ConfigError { .. } | ScoutError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScoutError::DirectoryReadError { path, .. } => {
                format!("Could not open addon directory {}", path.display())
            }
            ScoutError::FileReadError { path, .. } => {
                format!("Could not read {}", path.display())
            }
            ScoutError::ReportWriteError { path, .. } => {
                format!("Could not write the report to {}", path.display())
            }
            ScoutError::CatalogStatusError { url, status, .. } => {
                format!("Catalog page {} answered with status {}", url, status)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;

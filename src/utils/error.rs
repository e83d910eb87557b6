use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Places API returned {status}: {message}")]
    PlacesApiError { status: String, message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EtlError::ApiError(_) | EtlError::PlacesApiError { .. } => ErrorCategory::Network,
            EtlError::IoError(_) | EtlError::ZipError(_) => ErrorCategory::Storage,
            EtlError::CsvError(_)
            | EtlError::SerializationError(_)
            | EtlError::ProcessingError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤通常可以重試
            EtlError::ApiError(_) | EtlError::PlacesApiError { .. } => ErrorSeverity::Medium,
            EtlError::CsvError(_)
            | EtlError::SerializationError(_)
            | EtlError::ProcessingError { .. } => ErrorSeverity::High,
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorSeverity::High,
            EtlError::IoError(_) | EtlError::ZipError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::ApiError(_) => {
                "Check network connectivity and that the API endpoint is reachable".to_string()
            }
            EtlError::PlacesApiError { status, .. } if status == "REQUEST_DENIED" => {
                "Check that the Places API key is valid and the Places API is enabled".to_string()
            }
            EtlError::PlacesApiError { status, .. } if status == "OVER_QUERY_LIMIT" => {
                "Quota exhausted; wait before running the scrape again".to_string()
            }
            EtlError::PlacesApiError { .. } => {
                "Inspect the search parameters sent to the Places API".to_string()
            }
            EtlError::SerializationError(_) => {
                "Make sure the input is a JSON array of message objects with 'id' and 'message_body'"
                    .to_string()
            }
            EtlError::CsvError(_) => "Check the records for values the CSV writer rejects".to_string(),
            EtlError::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            EtlError::ZipError(_) => "Check free disk space and the archive file name".to_string(),
            EtlError::ConfigValidationError { field, .. }
            | EtlError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in the configuration", field)
            }
            EtlError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file or command line", field)
            }
            EtlError::ProcessingError { .. } => "Re-run with --verbose to see the failing step".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Network => format!("Could not talk to the remote service: {}", self),
            ErrorCategory::Storage => format!("Could not read or write files: {}", self),
            ErrorCategory::Data => format!("Could not process the data: {}", self),
        }
    }

    /// 依嚴重程度對應的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

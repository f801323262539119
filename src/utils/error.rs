use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Order file not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: invalid order id {value:?}")]
    InvalidId {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Line {line}: invalid amount {value:?}")]
    InvalidAmount {
        line: usize,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("Line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },

    #[error("Input sequence `{argument}` is absent")]
    NullInput { argument: &'static str },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for `{field}` ({value:?}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Coarse classification of an [`OrderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    ParseError,
    NullInput,
    Config,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::InvalidId { .. } | Self::InvalidAmount { .. } | Self::MissingField { .. } => {
                ErrorKind::ParseError
            }
            Self::NullInput { .. } => ErrorKind::NullInput,
            Self::ConfigError { .. } | Self::InvalidConfigValue { .. } => ErrorKind::Config,
            Self::IoError(_) | Self::CsvError(_) | Self::SerializationError(_) => ErrorKind::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.kind() {
            ErrorKind::FileNotFound | ErrorKind::ParseError | ErrorKind::NullInput => {
                ErrorSeverity::High
            }
            ErrorKind::Config => ErrorSeverity::Medium,
            ErrorKind::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code the host binary uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            ErrorKind::FileNotFound => "Check that the order file exists and is readable",
            ErrorKind::ParseError => {
                "Each line must look like `<id>;<description>;<amount>`, e.g. `1;Widget;19.99`"
            }
            ErrorKind::NullInput => "Pass an order sequence to the reverser",
            ErrorKind::Config => "Fix the configuration file or command-line flags",
            ErrorKind::Output => "Check that the output location is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;

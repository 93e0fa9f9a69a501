use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid vendor input: {message}")]
    InvalidInput { message: String },

    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("Missing required contact fields: {}", fields.join(", "))]
    MissingContactFields { fields: Vec<String> },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid Canadian postal code format: '{value}'")]
    InvalidPostalCode { value: String },

    #[error("Vendor not found: {id}")]
    NotFound { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Storage,
    Configuration,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io(_) | Self::Serialization(_) | Self::NotFound { .. } => ErrorCategory::Storage,
            Self::ConfigParse(_) | Self::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            Self::InvalidInput { .. }
            | Self::MissingFields { .. }
            | Self::MissingContactFields { .. }
            | Self::InvalidPostalCode { .. } => ErrorCategory::Validation,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Io(e) => format!("Could not access the vendor data file: {}", e),
            Self::Serialization(e) => format!("Vendor data is not valid JSON: {}", e),
            Self::NotFound { id } => format!("No vendor with id '{}'", id),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Io(_) => "Check that the data file path exists and is writable",
            Self::Serialization(_) => "Fix or remove the malformed JSON file",
            Self::ConfigParse(_) | Self::InvalidConfigValue { .. } => {
                "Review the configuration file and command-line flags"
            }
            Self::InvalidInput { .. } => "Check the registration file is a JSON vendor object",
            Self::MissingFields { .. } | Self::MissingContactFields { .. } => {
                "Provide every required vendor field"
            }
            Self::InvalidPostalCode { .. } => "Use the format A1A 1A1 (space or hyphen optional)",
            Self::NotFound { .. } => "List vendors to find a valid id",
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

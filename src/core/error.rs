//! Error taxonomy for searching configuration trees

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaripError {
    #[error("file or directory {path} does not exist")]
    NotFound { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode JSON in {path}: {source}")]
    JsonDecode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode YAML in {path}: {source}")]
    YamlDecode {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("unsupported file type {path}")]
    UnsupportedFileType { path: String },

    #[error("error walking {path}: {source}")]
    Walk {
        path: String,
        #[source]
        source: walkdir::Error,
    },
}

impl VaripError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            VaripError::NotFound { .. } => "NOT_FOUND",
            VaripError::Io { .. } => "IO_ERROR",
            VaripError::JsonDecode { .. } | VaripError::YamlDecode { .. } => "DECODE_ERROR",
            VaripError::Pattern(_) => "PATTERN_ERROR",
            VaripError::UnsupportedFileType { .. } => "UNSUPPORTED_FILE_TYPE",
            VaripError::Walk { .. } => "WALK_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, VaripError>;

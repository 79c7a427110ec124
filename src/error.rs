// Error types for the pattern demos.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the delivery factory and its adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Invalid service type: '{0}'")]
    InvalidServiceType(String),

    #[error("Order id '{order_id}' is not numeric")]
    InvalidOrderId {
        order_id: String,
        #[source]
        source: ParseIntError,
    },
}

impl DeliveryError {
    pub fn invalid_order_id(order_id: impl Into<String>, source: ParseIntError) -> Self {
        Self::InvalidOrderId {
            order_id: order_id.into(),
            source,
        }
    }
}

/// A string key that names none of the variants of a closed enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}' (expected one of: {expected})")]
pub struct ParseKindError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl ParseKindError {
    pub fn new(kind: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.into(),
            expected,
        }
    }
}

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML scenario: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON scenario at line {line}, column {col}: {message}")]
    Json {
        line: usize,
        col: usize,
        message: String,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<serde_json::Error> for ScenarioError {
    fn from(err: serde_json::Error) -> Self {
        ScenarioError::Json {
            line: err.line(),
            col: err.column(),
            message: err.to_string(),
        }
    }
}

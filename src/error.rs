use crate::domain::field::Field;
use thiserror::Error;

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// The field was unset (absent or empty).
    Required,
    /// The field was set but did not match its format.
    InvalidFormat {
        value: String,
        expected: &'static str,
    },
}

/// The only error the validators and transaction builders produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", describe(.field, .reason))]
pub struct ValidationError {
    pub field: Field,
    pub reason: ValidationFailure,
}

impl ValidationError {
    pub fn required(field: Field) -> Self {
        Self {
            field,
            reason: ValidationFailure::Required,
        }
    }

    /// Card numbers keep only their last four characters and card codes are
    /// hidden entirely, so the error is safe to print or log.
    pub fn invalid(field: Field, value: &str, expected: &'static str) -> Self {
        Self {
            field,
            reason: ValidationFailure::InvalidFormat {
                value: masked(field, value),
                expected,
            },
        }
    }
}

fn masked(field: Field, value: &str) -> String {
    let len = value.chars().count();
    let visible = match field {
        Field::CardNum if len > 4 => 4,
        Field::CardNum | Field::CardCode => 0,
        _ => return value.to_string(),
    };
    let shown: String = value.chars().skip(len - visible).collect();
    format!("{}{shown}", "*".repeat(len - visible))
}

fn describe(field: &Field, reason: &ValidationFailure) -> String {
    match reason {
        ValidationFailure::Required => format!("{field} is required"),
        ValidationFailure::InvalidFormat { value, expected } => {
            format!("Invalid {field} format '{value}': expected {expected}")
        }
    }
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Malformed gateway response: expected at least 7 fields, got {fields}")]
    MalformedResponse { fields: usize },
    #[error("No transaction has been built for submission")]
    NoPendingTransaction,
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_urlencoded::ser::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmiError {
    #[error("Invalid parameters: {amount} {installments} {annual_rate_percent}")]
    InvalidParameters {
        amount: Decimal,
        installments: i64,
        annual_rate_percent: Decimal,
    },

    #[error("Decimal range exceeded in {context}")]
    OutOfRange { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for EmiError {
    fn from(e: serde_json::Error) -> Self {
        EmiError::SerializationError(e.to_string())
    }
}

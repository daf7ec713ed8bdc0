use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("Invalid billing cycle: {value}")]
    InvalidBillingCycle { value: String },

    #[error("Configuration error: {field} - {message}")]
    Configuration { field: String, message: String },

    #[error("Configuration parse error: {source}")]
    ConfigParse {
        #[from]
        source: serde_json::Error,
    },
}

pub type SubscriptionResult<T> = Result<T, SubscriptionError>;

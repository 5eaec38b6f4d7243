use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("expected exactly one profile row for seller '{seller_id}', found {rows}")]
    NotFound { seller_id: String, rows: usize },

    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("malformed {entity} row: {reason}")]
    MalformedRow {
        entity: &'static str,
        reason: String,
    },

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("configuration error: {field}: {reason}")]
    Config { field: String, reason: String },
}

impl FetchError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::NotFound { seller_id, .. } => {
                format!("Seller '{}' could not be found.", seller_id)
            }
            FetchError::Transport(_) | FetchError::Serialization(_) => {
                "Unable to load seller information.".to_string()
            }
            FetchError::MalformedRow { entity, .. } => {
                format!("The backend returned an unreadable {} record.", entity)
            }
            FetchError::Validation { message } => message.clone(),
            FetchError::Config { field, reason } => {
                format!("Invalid configuration for '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FetchError::NotFound { .. } => {
                "Check that the seller id matches the backend's id format"
            }
            FetchError::Transport(_) => {
                "Check the backend URL and your network connection, then retry"
            }
            FetchError::Serialization(_) | FetchError::MalformedRow { .. } => {
                "The backend data may be out of sync; retry or report the seller id"
            }
            FetchError::Validation { .. } | FetchError::Config { .. } => {
                "Fix the reported argument and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Invalid viewBox '{value}': {message}")]
    InvalidViewBox { value: String, message: String },

    #[error("Invalid icon configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl IconError {
    pub(crate) fn invalid_view_box(value: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        log::debug!("rejecting viewBox '{}': {}", value, message);
        IconError::InvalidViewBox {
            value: value.to_string(),
            message,
        }
    }
}

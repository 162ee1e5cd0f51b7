use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl WindowError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::debug!("rejecting window parameters: {}", msg);
        WindowError::InvalidArgument(msg)
    }
}

pub type Result<T> = std::result::Result<T, WindowError>;

/// Broad classification of an [`OriflameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Decode,
    InvalidArgument,
}

#[derive(Debug, thiserror::Error)]
pub enum OriflameError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl OriflameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OriflameError::Transport(_) => ErrorKind::Transport,
            OriflameError::Decode(_) => ErrorKind::Decode,
            OriflameError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// True for network, connection and body-read failures.
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// True when the response body did not decode into a product.
    pub fn is_decode(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }
}

pub type Result<T> = std::result::Result<T, OriflameError>;

/// Failure of a call to the reviews service.
///
/// Never retried by the client; loaders decide whether a failure is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request cancelled")]
    Cancelled,
}

impl TransportError {
    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

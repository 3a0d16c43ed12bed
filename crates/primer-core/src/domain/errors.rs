use thiserror::Error;

/// Reasons a delayed square cannot produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("Negative number not allowed")]
    NegativeInput,
}

/// A failed [`Outcome`](super::Outcome) lifted into `std::error::Error`.
///
/// The outcome only carries the message, so this is all we can keep.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OutcomeError {
    pub message: String,
}

impl OutcomeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

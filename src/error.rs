/// Errors produced while reading the arguments of a decoded command.
///
/// Every variant is a request-input error: the client sent too few arguments
/// or an argument of the wrong shape. The `Display` text is the exact message
/// surfaced to the client in the error reply, so it must not change.

use thiserror::Error;

/// A request-input error returned by the argument getters of
/// [`Request`](crate::request::Request).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RequestError {
    /// The requested position is past the end of the argument list.
    #[error("Not enough arguments")]
    NotEnoughArguments,

    /// The argument is not a base-10 signed integer.
    #[error("Expected integer")]
    ExpectedInteger,

    /// The argument is an integer but negative where zero or more is required.
    #[error("Expected positive integer")]
    ExpectedPositiveInteger,

    /// No arguments remain from the start index of a key/value run.
    #[error("Expected at least one key val pair")]
    ExpectedKeyValPair,

    /// A key/value run has a key without a value.
    #[error("Got uneven number of key val pairs")]
    UnevenKeyValPairs,
}

impl RequestError {
    /// The message sent back to the client.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

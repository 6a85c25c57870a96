use thiserror::Error;

/// The result of a single invocation of a chaincode entry point.
///
/// A successful response has status [`OK`](crate::OK) and an empty
/// `message`. The `payload` is opaque to the host; its schema is defined by
/// the chaincode that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Status code of the invocation, see [`OK`](crate::OK) and
    /// [`ERROR`](crate::ERROR).
    pub status:  i32,
    /// Error message. Empty on success.
    pub message: String,
    /// Return value of the invocation.
    pub payload: Vec<u8>,
}

/// Errors that can occur when accessing the ledger state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Keys written to the ledger must be non-empty.
    #[error("key must not be an empty string")]
    EmptyKey,
    /// Writes and deletes are only allowed inside a transaction.
    #[error("cannot {0} without a transaction - call mock_transaction_start first")]
    NoTransaction(&'static str),
    /// A composite key component contains one of the reserved characters
    /// `U+0000` or `U+10FFFF`.
    #[error("composite key component {0:?} contains a reserved character")]
    InvalidKeyComponent(String),
    /// The key was not produced by
    /// [`create_composite_key`](crate::create_composite_key).
    #[error("key {0:?} is not a composite key")]
    NotCompositeKey(String),
}

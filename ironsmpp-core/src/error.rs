/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the IronSmpp SMPP session engine.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across all IronSmpp operations.

use thiserror::Error;

/// Result type alias using [`SmppError`] as the error type.
pub type Result<T> = std::result::Result<T, SmppError>;

/// Top-level error type for all IronSmpp operations.
#[derive(Debug, Error)]
pub enum SmppError {
    /// Error during PDU decoding.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error during PDU encoding.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Error in session layer operations.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// I/O error from underlying transport.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur during PDU decoding.
///
/// Produced by [`PduCodec::decode`](crate::codec::PduCodec::decode). A decode
/// failure is fatal for the connection: malformed input is a protocol
/// violation, not a transient condition, so the session closes rather than
/// skipping the chunk.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// PDU buffer is incomplete, need more data.
    #[error("incomplete PDU, need more data")]
    Incomplete,

    /// Declared command_length is outside the legal bounds.
    #[error("invalid command length: {length}")]
    InvalidCommandLength {
        /// Declared length in bytes.
        length: u32,
    },

    /// Body is shorter than the header-declared length.
    #[error("truncated body: declared {declared} bytes, found {actual}")]
    TruncatedBody {
        /// Length declared in the header.
        declared: usize,
        /// Bytes actually available.
        actual: usize,
    },

    /// A C-octet string field is missing its NUL terminator.
    #[error("unterminated c-octet string in field {field}")]
    UnterminatedCString {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Invalid UTF-8 in a string field.
    #[error("invalid utf-8 in field: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// PDU exceeds maximum allowed size.
    #[error("PDU too large: {size} bytes exceeds maximum {max_size}")]
    PduTooLarge {
        /// Actual PDU size in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        max_size: usize,
    },
}

/// Errors that occur during PDU encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Buffer capacity exceeded during encoding.
    #[error("buffer overflow: need {needed} bytes, have {available}")]
    BufferOverflow {
        /// Bytes needed to complete encoding.
        needed: usize,
        /// Bytes available in buffer.
        available: usize,
    },

    /// Field value exceeds maximum length.
    #[error("field value too long for {field}: {length} exceeds max {max_length}")]
    FieldTooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Actual length of the value.
        length: usize,
        /// Maximum allowed length.
        max_length: usize,
    },
}

/// Errors in SMPP session layer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session is not in the correct state for the operation.
    #[error("invalid session state: expected {expected}, current {current}")]
    InvalidState {
        /// Expected state for the operation.
        expected: String,
        /// Current session state.
        current: String,
    },

    /// Session configuration error, surfaced at construction.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Session is already closed.
    #[error("session closed")]
    Closed,
}

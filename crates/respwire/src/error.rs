//! Error types for RESP encoding.

use thiserror::Error;

/// Errors that can occur while turning a value into RESP bytes.
///
/// Every variant is raised at the value that caused it and returned to the
/// direct caller. No bytes are produced alongside an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
	/// The input is not any recognized RESP value
	#[error("Invalid input: {0}")]
	InvalidInput(String),

	/// A number with a fractional part, or one that does not fit an `i64`
	#[error("Invalid integer: {0}")]
	InvalidInteger(String),

	/// A single-line value contains CR or LF
	#[error("Protocol violation: {0}")]
	ProtocolViolation(String),
}

pub mod logger;

use thiserror::Error;

// Re-export logger initialization for convenience
pub use logger::init;

/// Errors raised while setting up logging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TelemetryError {
	#[error("Invalid log level '{0}', expected one of: trace, debug, info, warn, error")]
	InvalidLogLevel(String),

	#[error("Logger is already initialized: {0}")]
	AlreadyInitialized(String),
}

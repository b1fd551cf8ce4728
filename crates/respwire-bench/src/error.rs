use respwire::EncodeError;
use telemetry::TelemetryError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum BenchError {
	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("Telemetry error: {0}")]
	Telemetry(#[from] TelemetryError),

	#[error("Encode error: {0}")]
	Encode(#[from] EncodeError),

	#[error("Benchmark task failed: {0}")]
	Join(#[from] tokio::task::JoinError),

	#[error("Failed to render report: {0}")]
	Report(#[from] serde_json::Error),
}

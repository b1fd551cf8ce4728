//! Encoding throughput benchmark for `respwire`.
//!
//! Each operation encodes the frames a client would send for `SET key key`
//! followed by `GET key`. A warmup run precedes the measured run; both are
//! scoped to the parameters they are given.

pub mod config;
pub mod error;
pub mod job;
pub mod report;
pub mod runner;

use std::sync::Arc;

use tracing::debug;
use tracing::info;

pub use crate::config::BenchConfig;
pub use crate::error::BenchError;
pub use crate::job::Job;
pub use crate::report::Report;
pub use crate::runner::RunStats;

/// Warm up, then measure `config.operations` operations.
pub async fn execute(config: &BenchConfig) -> Result<Report, BenchError> {
	let job = Arc::new(Job::new(config.key_size, config.string_mode()));
	debug!(
		key_len = job.key().len(),
		mode = ?job.mode(),
		"Generated benchmark key"
	);

	let warmup = runner::run(job.clone(), config.warmup_operations(), config.clients).await?;
	info!(
		operations = warmup.operations,
		elapsed_ms = warmup.elapsed.as_millis() as u64,
		"Warmup finished"
	);

	let stats = runner::run(job.clone(), config.operations, config.clients).await?;
	let report = Report::new(config, &job, &stats);
	info!(
		operations = report.total_operations,
		clients = report.concurrent_clients,
		ops_per_sec = report.operations_per_second,
		"Benchmark finished"
	);
	Ok(report)
}

use respwire::StringMode;
use serde::Serialize;

use crate::config::BenchConfig;
use crate::job::Job;
use crate::runner::RunStats;

/// Summary of the measured run, printed as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
	pub total_operations: usize,
	pub concurrent_clients: usize,
	pub key_size: usize,
	pub bulk_strings: bool,
	pub operations_per_second: f64,
	pub bytes_encoded: u64,
	pub elapsed_ms: f64,
}

impl Report {
	pub fn new(config: &BenchConfig, job: &Job, stats: &RunStats) -> Self {
		Self {
			total_operations: stats.operations,
			concurrent_clients: config.clients,
			key_size: job.key().len(),
			bulk_strings: job.mode() == StringMode::Bulk,
			operations_per_second: stats.operations_per_second(),
			bytes_encoded: stats.bytes,
			elapsed_ms: stats.elapsed.as_secs_f64() * 1000.0,
		}
	}

	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string_pretty(self)
	}
}

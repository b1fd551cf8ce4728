use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

use log::debug;

use crate::error::BenchError;
use crate::job::Job;

/// Outcome of one scoped run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
	pub operations: usize,
	pub bytes: u64,
	pub elapsed: Duration,
}

impl RunStats {
	pub fn operations_per_second(&self) -> f64 {
		let secs = self.elapsed.as_secs_f64();
		if secs == 0.0 {
			return 0.0;
		}
		self.operations as f64 / secs
	}
}

/// Run `job` exactly `total` times spread over up to `clients` tasks.
///
/// Tasks claim operations from a counter owned by this run, so nothing
/// outlives the call.
pub async fn run(job: Arc<Job>, total: usize, clients: usize) -> Result<RunStats, BenchError> {
	let claimed = Arc::new(AtomicUsize::new(0));
	let workers = clients.min(total);
	let start = Instant::now();

	let mut handles = Vec::with_capacity(workers);
	for id in 0..workers {
		let job = job.clone();
		let claimed = claimed.clone();
		handles.push(tokio::spawn(async move {
			let mut operations = 0usize;
			let mut bytes = 0u64;
			while claimed.fetch_add(1, Ordering::Relaxed) < total {
				bytes += job.run_once()? as u64;
				operations += 1;
				// Let the other clients interleave like real requests would
				tokio::task::yield_now().await;
			}
			debug!("Client {} finished {} operations", id, operations);
			Ok::<_, BenchError>((operations, bytes))
		}));
	}

	let mut stats = RunStats {
		operations: 0,
		bytes: 0,
		elapsed: Duration::ZERO,
	};
	for handle in handles {
		let (operations, bytes) = handle.await??;
		stats.operations += operations;
		stats.bytes += bytes;
	}
	stats.elapsed = start.elapsed();
	Ok(stats)
}

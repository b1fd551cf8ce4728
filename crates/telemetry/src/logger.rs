use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::TelemetryError;

const VALID_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Custom time formatter that displays time as "YYYY-MM-DD HH:MM:SS.micros"
struct CustomTimeFormat;

impl FormatTime for CustomTimeFormat {
	fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
		let now = std::time::SystemTime::now();
		let datetime: chrono::DateTime<chrono::Local> = now.into();
		write!(w, "{}", datetime.format("[%Y-%m-%d %H:%M:%S%.6f]"))
	}
}

/// Lowercase `level` and check it is one of the supported levels.
pub fn normalize_level(level: &str) -> Result<String, TelemetryError> {
	let level_lower = level.to_lowercase();
	if VALID_LEVELS.contains(&level_lower.as_str()) {
		Ok(level_lower)
	} else {
		Err(TelemetryError::InvalidLogLevel(level.to_string()))
	}
}

/// Initialize the console logger at `level`.
///
/// Output carries a `[YYYY-MM-DD HH:MM:SS.micros]` timestamp, the level,
/// the target and the thread id. Records emitted through the `log` facade
/// are forwarded to the same subscriber.
///
/// # Example
///
/// ```no_run
/// telemetry::init("info")?;
/// log::info!("Benchmark starting");
/// # Ok::<(), telemetry::TelemetryError>(())
/// ```
///
/// # Errors
///
/// Fails if `level` is not a supported level or a global subscriber is
/// already installed.
pub fn init(level: &str) -> Result<(), TelemetryError> {
	let level = normalize_level(level)?;

	tracing_subscriber::registry()
		.with(EnvFilter::new(&level))
		.with(
			fmt::layer()
				.with_timer(CustomTimeFormat)
				.with_target(true)
				.with_thread_ids(true)
				.with_line_number(false)
				.with_file(false),
		)
		.try_init()
		.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}

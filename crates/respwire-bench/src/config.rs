//! Configuration for the encoding benchmark
//!
//! Settings come from an optional file (TOML, JSON or YAML, picked by
//! extension) and are then overridden by any flag passed on the command line.
//!
//! # Example
//!
//! ```no_run
//! use respwire_bench::config::{Cli, Parser, setup};
//!
//! let config = setup(Cli::parse()).unwrap();
//! println!("{} operations over {} clients", config.operations, config.clients);
//! ```

use std::path::Path;

pub use clap::Parser;
use respwire::StringMode;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Looked up when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "conf/bench.toml";

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("Failed to read configuration file '{path}': {source}")]
	Io {
		source: std::io::Error,
		path: String,
	},

	#[error("Failed to parse TOML configuration: {0}")]
	TomlParse(#[from] toml::de::Error),

	#[error("Failed to parse JSON configuration: {0}")]
	JsonParse(#[from] serde_json::Error),

	#[error("Failed to parse YAML configuration: {0}")]
	YamlParse(#[from] serde_yaml::Error),

	#[error("Unsupported configuration format: {0}")]
	UnsupportedFormat(String),

	#[error("Configuration file has no extension")]
	NoExtension,

	#[error("Invalid configuration: {0}")]
	Invalid(String),
}

/// Command-line arguments for the benchmark
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	/// Configuration file path (TOML, JSON, or YAML).
	/// Defaults to conf/bench.toml if it exists.
	#[arg(short, long)]
	pub config: Option<String>,

	/// Number of measured operations (one SET plus one GET each)
	#[arg(short = 'n', long)]
	pub operations: Option<usize>,

	/// Number of concurrent clients
	#[arg(long)]
	pub clients: Option<usize>,

	/// Size of the generated key in bytes
	#[arg(short, long)]
	pub key_size: Option<usize>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long)]
	pub log_level: Option<String>,

	/// Send strings as bulk strings (true) or simple strings (false)
	#[arg(long)]
	pub bulk: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchConfig {
	pub operations: usize,
	pub clients: usize,
	pub key_size: usize,
	pub log_level: String,
	pub bulk: bool,
}

impl BenchConfig {
	pub fn string_mode(&self) -> StringMode {
		StringMode::from(self.bulk)
	}

	/// A tenth of the measured run, capped at 10k and never zero.
	pub fn warmup_operations(&self) -> usize {
		(self.operations / 10).clamp(1, 10_000)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.operations == 0 {
			return Err(ConfigError::Invalid("operations must be at least 1".into()));
		}
		if self.clients == 0 {
			return Err(ConfigError::Invalid("clients must be at least 1".into()));
		}
		if self.key_size == 0 {
			return Err(ConfigError::Invalid("key_size must be at least 1".into()));
		}
		Ok(())
	}
}

impl Default for BenchConfig {
	fn default() -> Self {
		Self {
			operations: 100,
			clients: 10,
			key_size: 1024,
			log_level: "info".into(),
			bulk: true,
		}
	}
}

/// Build the effective configuration from `args`.
pub fn setup(args: Cli) -> Result<BenchConfig, ConfigError> {
	let mut config = match args.config.as_deref() {
		Some(p) => load_from_file(p)?,
		None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
		None => BenchConfig::default(),
	};

	// Override with CLI arguments if explicitly provided
	if let Some(n) = args.operations {
		config.operations = n;
	}
	if let Some(c) = args.clients {
		config.clients = c;
	}
	if let Some(size) = args.key_size {
		config.key_size = size;
	}
	if let Some(log_level) = args.log_level {
		config.log_level = log_level;
	}
	if let Some(bulk) = args.bulk {
		config.bulk = bulk;
	}

	config.validate()?;
	Ok(config)
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<BenchConfig, ConfigError> {
	let path_ref = path.as_ref();
	let content = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
		path: path_ref.display().to_string(),
		source,
	})?;

	let extension = path_ref
		.extension()
		.and_then(|ext| ext.to_str())
		.ok_or(ConfigError::NoExtension)?;

	match extension.to_lowercase().as_str() {
		"toml" => Ok(toml::from_str(&content)?),
		"json" => Ok(serde_json::from_str(&content)?),
		"yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
		_ => Err(ConfigError::UnsupportedFormat(extension.to_string())),
	}
}

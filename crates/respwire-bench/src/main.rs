use respwire_bench::config::Cli;
use respwire_bench::config::Parser;
use respwire_bench::config::setup;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let args = Cli::parse();
	let config = setup(args)?;
	telemetry::init(&config.log_level)?;

	info!(
		operations = config.operations,
		clients = config.clients,
		key_size = config.key_size,
		mode = ?config.string_mode(),
		"Starting encoding benchmark"
	);

	let report = respwire_bench::execute(&config).await?;
	println!("{}", report.to_json()?);
	Ok(())
}

use anyhow::Context;
use dailydiet_infrastructure::config::Settings;
use dailydiet_infrastructure::logging::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().context("Invalid configuration")?;
    init_logger(&settings.log_dir).context("Failed to initialize logging")?;

    tracing::info!("Starting Daily Diet API ({})", settings.env);

    dailydiet_lib::run(settings)
        .await
        .map_err(|e| anyhow::anyhow!(e.format_with_code()))
}

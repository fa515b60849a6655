use stockpile_cli::{CliConfig, run_demo};
use stockpile_infra::JsonFileRepository;

fn main() -> anyhow::Result<()> {
    stockpile_observability::init();

    let config = CliConfig::from_env();
    tracing::debug!(path = %config.inventory_path.display(), threshold = config.low_stock_threshold, "starting");

    let repo = JsonFileRepository::new(config.inventory_path);
    let stdout = std::io::stdout();
    run_demo(&repo, config.low_stock_threshold, &mut stdout.lock())?;

    Ok(())
}

//! Главный исполняемый файл sqlscan

use anyhow::Context;
use clap::Parser;
use sqlscan::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli
        .load_config()
        .context("failed to load configuration")?;

    init_logging(&config.log_level, cli.log_level.is_some());

    let stdout = std::io::stdout();
    cli.execute(&config, &mut stdout.lock())?;

    Ok(())
}

/// Явный `--log-level` важнее `RUST_LOG`, а `RUST_LOG` важнее конфигурации
fn init_logging(level: &str, explicit: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level),
    );
    if explicit {
        builder.parse_filters(level);
    }
    builder.format_timestamp(None).init();
}

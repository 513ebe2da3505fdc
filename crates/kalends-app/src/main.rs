use clap::Parser;
use kalends_app::app::cli::Cli;
use kalends_app::app::command::{Context, run};
use kalends_core::clock::SystemClock;
use kalends_core::config::{OutputFormat, load_config};
use kalends_iso::UtcOffset;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let offset = UtcOffset::parse(&config.clock.offset)?;
    let ctx = Context {
        format: if cli.json {
            OutputFormat::Json
        } else {
            config.output.format
        },
        offset,
        clock: SystemClock,
    };

    let output = run(&cli.command, &ctx)?;
    println!("{output}");

    Ok(())
}

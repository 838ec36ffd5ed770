use anyhow::Context;
use chip_scenario::cli::Cli;
use chipload::prelude::*;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_LOG_FILTER: &str = "chipload=info,chip_scenario=info,chip_load=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let options = cli.resolve_options()?;
    let template = cli.template()?;

    if let Some(addr) = cli.metrics_addr {
        PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
            .context("Unable to install the Prometheus exporter")?;
        info!("Serving metrics on {addr}");
    }

    info!(
        "Running {} VUs for {} against {}",
        options.vus,
        chipload::core::format_duration(options.duration),
        template.url()
    );
    chip_scenario::configure(template)?;

    let stats = chip_scenario::system()
        .options(&options)
        .graceful_stop(cli.graceful_stop)
        .await;

    info!("{stats}");
    Ok(())
}

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use argon::cli;
use argon::config::Config;
use argon::provision::Provisioner;
use argon::transport::DeviceIdentity;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for human-readable logs
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or(
                EnvFilter::default()
                    .add_directive("info".parse()?)
                    .add_directive("reqwest=warn".parse()?)
                    .add_directive("hyper=error".parse()?),
            ),
        )
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE)
                .event_format(fmt::format().compact().with_target(false).without_time()),
        )
        .init();

    let config = Config::new(cli::parse())?;
    debug!("{config:#?}");

    info!("provisioning device identity via {}", config.api_endpoint);
    let provisioner = Provisioner::new(&config)?;
    let result = provisioner.provision().await?;
    info!(
        hub = %result.hub_hostname,
        device = %result.device_id,
        "device identity issued"
    );

    let json = serde_json::to_string_pretty(&result)?;

    // Validate the handoff the same way a transport implementation would
    // before opening a session.
    let identity = DeviceIdentity::try_from(result)?;
    debug!(?identity, "handoff validated");

    println!("{json}");

    Ok(())
}

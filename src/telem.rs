use anyhow::Context;
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::TelemetrySettings;

/// Bunyan-style JSON logs named after the function. `RUST_LOG` beats the
/// configured level, but the configured one has to parse either way.
pub fn get_subscriber<Sink>(
    settings: &TelemetrySettings,
    sink: Sink, //stdout when deployed, io::sink in tests
) -> anyhow::Result<impl Subscriber + Send + Sync>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let configured = EnvFilter::try_new(&settings.log_level)
        .with_context(|| format!("invalid log level `{}`", settings.log_level))?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or(configured);

    let formatting_layer = BunyanFormattingLayer::new(settings.name.clone(), sink);
    Ok(Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer))
}

//can only be called once per process
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> anyhow::Result<()> {
    //actix still talks through the `log` facade, route that into tracing too
    LogTracer::init().context("failed to set the logger")?;
    set_global_default(subscriber).context("failed to set the tracing subscriber")?;
    Ok(())
}

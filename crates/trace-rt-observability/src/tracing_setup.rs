//! Subscriber installation.
//!
//! `RUST_LOG` overrides the default filter in both setups.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::{Tracer as SdkTracer, TracerProvider};
use tracing::Subscriber;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install a global fmt subscriber. Fails if one is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(fmt::layer().with_target(true))
        .try_init()
}

/// OTEL layer exporting tracing spans through `provider`.
pub fn otel_layer<S>(
    provider: &TracerProvider,
    name: &'static str,
) -> OpenTelemetryLayer<S, SdkTracer>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    tracing_opentelemetry::layer().with_tracer(provider.tracer(name))
}

/// Like [`init_tracing`], additionally exporting spans through `provider`.
pub fn init_tracing_with_otel(
    default_filter: &str,
    provider: &TracerProvider,
    name: &'static str,
) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(fmt::layer().with_target(true))
        .with(otel_layer(provider, name))
        .try_init()
}

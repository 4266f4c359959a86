//! Task-local carrier propagation for async call chains.
//!
//! Handlers that cannot thread a [`Carrier`] through every signature can
//! run their future inside [`with_carrier`] and read it back with
//! [`current_carrier`] at any depth of the same task.

use crate::carrier::Carrier;
use crate::ids::TraceId;
use crate::tracer::Tracer;

tokio::task_local! {
    static CURRENT_CARRIER: Carrier;
}

pub fn current_carrier() -> Option<Carrier> {
    CURRENT_CARRIER.try_with(Carrier::clone).ok()
}

/// Carrier of the current task, or an empty one outside any scope.
pub fn current_or_empty() -> Carrier {
    current_carrier().unwrap_or_default()
}

pub fn current_trace_id(tracer: &Tracer) -> Option<TraceId> {
    current_carrier().and_then(|carrier| tracer.try_get(&carrier))
}

pub async fn with_carrier<F, T>(carrier: Carrier, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    CURRENT_CARRIER.scope(carrier, fut).await
}

/// Run `fut` with the current carrier passed through [`Tracer::set`], so
/// a master tracer guarantees a trace id inside the scope.
pub async fn ensure_scope<F, T>(tracer: &Tracer, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let carrier = tracer.set(&current_or_empty());
    with_carrier(carrier, fut).await
}

/// Run `fut` with a caller-supplied trace id layered onto the current carrier.
pub async fn with_trace_id<F, T>(tracer: &Tracer, id: impl Into<TraceId>, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let carrier = tracer.set_id(&current_or_empty(), id);
    with_carrier(carrier, fut).await
}

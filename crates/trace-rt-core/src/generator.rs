//! Pluggable trace id generators.

use crate::carrier::Carrier;
use crate::ids::{TemporalId, TraceId, UuidId};
use std::sync::atomic::AtomicU64;

/// Produces a fresh trace id. Implementations may inspect the carrier
/// but must not assume any particular value is present.
pub trait TraceIdGenerator: Send + Sync {
    fn generate(&self, carrier: &Carrier) -> TraceId;
}

impl<F> TraceIdGenerator for F
where
    F: Fn(&Carrier) -> String + Send + Sync,
{
    fn generate(&self, carrier: &Carrier) -> TraceId {
        TraceId::new(self(carrier))
    }
}

/// Random UUID v4, independent of carrier contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl TraceIdGenerator for UuidGenerator {
    fn generate(&self, _carrier: &Carrier) -> TraceId {
        TraceId::from_uuid(UuidId::new_v4())
    }
}

/// `prefix-millis-counter` ids, ordered within one generator instance.
#[derive(Debug)]
pub struct TemporalGenerator {
    prefix: &'static str,
    counter: AtomicU64,
}

impl TemporalGenerator {
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix, counter: AtomicU64::new(1) }
    }
}

impl Default for TemporalGenerator {
    fn default() -> Self {
        Self::new("trace")
    }
}

impl TraceIdGenerator for TemporalGenerator {
    fn generate(&self, _carrier: &Carrier) -> TraceId {
        TraceId::from_temporal(TemporalId::now(self.prefix, &self.counter))
    }
}

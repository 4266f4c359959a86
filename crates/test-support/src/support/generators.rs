//! Deterministic generators for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use trace_rt_core::{Carrier, TraceId, TraceIdGenerator};

/// Always returns the same id and counts how often it was asked.
#[derive(Debug)]
pub struct FixedGenerator {
    id: String,
    calls: AtomicUsize,
}

impl FixedGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TraceIdGenerator for FixedGenerator {
    fn generate(&self, _carrier: &Carrier) -> TraceId {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(trace_id = %self.id, "FixedGenerator invoked");
        TraceId::new(self.id.clone())
    }
}

/// Returns `prefix-0`, `prefix-1`, ... in call order.
#[derive(Debug)]
pub struct SequenceGenerator {
    prefix: String,
    next: AtomicUsize,
}

impl SequenceGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: AtomicUsize::new(0) }
    }
}

impl TraceIdGenerator for SequenceGenerator {
    fn generate(&self, _carrier: &Carrier) -> TraceId {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        TraceId::new(format!("{}-{}", self.prefix, n))
    }
}

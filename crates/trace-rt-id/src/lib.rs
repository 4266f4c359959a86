//! Identifier construction forms.
//!
//! This crate provides the raw construction tokens used to mint trace
//! identifiers: wall-clock temporal ids and random UUIDs. Label newtypes
//! (protocols, keys, trace ids) live in `trace-rt-core` and accept these
//! tokens at their public boundaries.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalId {
    prefix: &'static str,
    millis: u64,
    counter: u64,
}

impl TemporalId {
    pub const fn new(prefix: &'static str, millis: u64, counter: u64) -> Self {
        Self { prefix, millis, counter }
    }

    /// Stamp a new id from the wall clock and the given counter.
    pub fn now(prefix: &'static str, counter: &AtomicU64) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self::new(prefix, millis, counter.fetch_add(1, Ordering::Relaxed))
    }

    pub fn into_string(self) -> String {
        format!("{}-{}-{}", self.prefix, self.millis, self.counter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UuidId(uuid::Uuid);

impl UuidId {
    pub fn new_v4() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl std::fmt::Display for UuidId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temporal_id_renders_prefix_millis_counter() {
        let id = TemporalId::new("trace", 1_700_000_000_000, 42);
        assert_eq!(id.into_string(), "trace-1700000000000-42");
    }

    #[test]
    fn temporal_now_advances_counter() {
        let counter = AtomicU64::new(7);
        let first = TemporalId::now("t", &counter).into_string();
        let second = TemporalId::now("t", &counter).into_string();
        assert!(first.starts_with("t-") && first.ends_with("-7"), "{first}");
        assert!(second.ends_with("-8"), "{second}");
        assert_eq!(counter.load(Ordering::Relaxed), 9);
    }

    #[test]
    fn uuid_ids_render_as_v4() {
        let id = UuidId::new_v4().to_string();
        let parsed = uuid::Uuid::parse_str(&id).expect("valid uuid");
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(UuidId::new_v4(), UuidId::new_v4());
    }
}

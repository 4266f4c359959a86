//! Process-wide default tracer.
//!
//! Package-level shorthands for callers that do not pass a [`Tracer`]
//! around. The default instance starts as master with only the wildcard
//! protocol registered; configure it once at startup.

use crate::carrier::Carrier;
use crate::generator::TraceIdGenerator;
use crate::ids::{Key, Protocol, TraceId};
use crate::tracer::Tracer;
use std::sync::LazyLock;

static DEFAULT_TRACER: LazyLock<Tracer> = LazyLock::new(|| {
    let tracer = Tracer::new();
    tracer.i_am_master(true);
    tracer
});

pub fn tracer() -> &'static Tracer {
    &DEFAULT_TRACER
}

pub fn register_protocol(protocol: impl Into<Protocol>, key: impl Into<Key>) {
    tracer().register_protocol(protocol, key);
}

pub fn set_generator(generator: impl TraceIdGenerator + 'static) {
    tracer().set_generator(generator);
}

pub fn i_am_master(master: bool) {
    tracer().i_am_master(master);
}

pub fn am_i_master() -> bool {
    tracer().am_i_master()
}

pub fn set(carrier: &Carrier) -> Carrier {
    tracer().set(carrier)
}

pub fn set_id(carrier: &Carrier, id: impl Into<TraceId>) -> Carrier {
    tracer().set_id(carrier, id)
}

pub fn try_get(carrier: &Carrier) -> Option<TraceId> {
    tracer().try_get(carrier)
}

pub fn get(carrier: &Carrier) -> String {
    tracer().get(carrier)
}

pub fn try_get_by_protocol(carrier: &Carrier, protocol: &Protocol) -> Option<TraceId> {
    tracer().try_get_by_protocol(carrier, protocol)
}

pub fn get_by_protocol(carrier: &Carrier, protocol: &Protocol) -> String {
    tracer().get_by_protocol(carrier, protocol)
}

pub fn exist(carrier: &Carrier) -> bool {
    tracer().exist(carrier)
}

pub fn exist_protocol(carrier: &Carrier) -> bool {
    tracer().exist_protocol(carrier)
}

pub fn keys() -> Vec<Key> {
    tracer().keys()
}

pub fn generate(carrier: &Carrier) -> TraceId {
    tracer().generate(carrier)
}

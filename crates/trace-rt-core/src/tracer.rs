//! Trace id accessor over [`Carrier`]s.
//!
//! A [`Tracer`] has two modes:
//!
//! - master: generates a trace id when the carrier has none
//! - not master: only passes along trace ids that were already set
//!
//! In both modes an existing trace id is never overwritten.

use crate::carrier::Carrier;
use crate::config::TracerConfig;
use crate::error::Result;
use crate::generator::{TraceIdGenerator, UuidGenerator};
use crate::ids::{Key, Protocol, TraceId};
use crate::registry::{KeyTable, ProtocolRegistry};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

pub struct Tracer {
    registry: ProtocolRegistry,
    generator: RwLock<Arc<dyn TraceIdGenerator>>,
    master: AtomicBool,
}

impl Tracer {
    /// Non-master tracer with the wildcard protocol bound to the default key.
    pub fn new() -> Self {
        Self::with_key(Key::default_key())
    }

    /// Non-master tracer with the wildcard protocol bound to `any_key`.
    pub fn with_key(any_key: impl Into<Key>) -> Self {
        Self {
            registry: ProtocolRegistry::new(any_key),
            generator: RwLock::new(Arc::new(UuidGenerator)),
            master: AtomicBool::new(false),
        }
    }

    pub fn builder() -> TracerBuilder {
        TracerBuilder::default()
    }

    /// Build a tracer from a loaded or hand-assembled config. The config is
    /// validated first, so empty keys never reach the registry.
    pub fn from_config(config: &TracerConfig) -> Result<Self> {
        config.validate()?;
        let tracer = Self::with_key(config.default_key.as_str());
        for binding in &config.protocols {
            tracer.register_protocol(binding.protocol.clone(), binding.key.clone());
        }
        tracer.i_am_master(config.master);
        Ok(tracer)
    }

    pub fn registry(&self) -> &ProtocolRegistry {
        &self.registry
    }

    /// Bind `protocol` to `key`; a protocol that is already bound keeps its key.
    pub fn register_protocol(&self, protocol: impl Into<Protocol>, key: impl Into<Key>) -> &Self {
        self.registry.register(protocol, key);
        self
    }

    pub fn set_generator(&self, generator: impl TraceIdGenerator + 'static) -> &Self {
        self.install_generator(Arc::new(generator))
    }

    pub fn install_generator(&self, generator: Arc<dyn TraceIdGenerator>) -> &Self {
        *self.generator.write().unwrap_or_else(PoisonError::into_inner) = generator;
        tracing::debug!("Installed trace id generator");
        self
    }

    pub fn i_am_master(&self, master: bool) -> &Self {
        self.master.store(master, Ordering::Release);
        tracing::debug!(master, "Updated tracer master state");
        self
    }

    pub fn am_i_master(&self) -> bool {
        self.master.load(Ordering::Acquire)
    }

    /// Distinct carrier keys across all registered protocols.
    pub fn keys(&self) -> Vec<Key> {
        self.registry.keys()
    }

    /// Ensure the carrier holds a trace id.
    ///
    /// Returns the carrier unchanged when it already has one, or when this
    /// tracer is not master. Otherwise a generated id is written under
    /// every distinct key.
    pub fn set(&self, carrier: &Carrier) -> Carrier {
        if self.try_get(carrier).is_some() {
            return carrier.clone();
        }
        if !self.am_i_master() {
            tracing::trace!("Not master, leaving carrier without trace id");
            return carrier.clone();
        }
        let id = self.generate(carrier);
        tracing::debug!(trace_id = %id, "Generated trace id");
        Self::stamp(carrier, &self.registry.snapshot(), &id)
    }

    /// Like [`Tracer::set`] with a caller-supplied id. Not gated by master
    /// since the id was not minted here; an empty id is ignored.
    pub fn set_id(&self, carrier: &Carrier, id: impl Into<TraceId>) -> Carrier {
        let id = id.into();
        if id.is_empty() || self.try_get(carrier).is_some() {
            return carrier.clone();
        }
        Self::stamp(carrier, &self.registry.snapshot(), &id)
    }

    /// First non-empty string found under any registered key.
    pub fn try_get(&self, carrier: &Carrier) -> Option<TraceId> {
        let table = self.registry.snapshot();
        // A miss on one key must not end the scan; the id may sit under another protocol's key.
        table
            .bindings()
            .iter()
            .filter_map(|(_, key)| carrier.str_value(key.as_str()))
            .find(|value| !value.is_empty())
            .map(TraceId::from)
    }

    /// [`Tracer::try_get`], with an empty string when absent.
    pub fn get(&self, carrier: &Carrier) -> String {
        self.try_get(carrier).map(TraceId::into_string).unwrap_or_default()
    }

    /// Trace id stored under `protocol`'s key. Unregistered protocols and
    /// non-string values are reported as absent.
    pub fn try_get_by_protocol(&self, carrier: &Carrier, protocol: &Protocol) -> Option<TraceId> {
        let key = self.registry.key_for(protocol)?;
        carrier.str_value(key.as_str()).map(TraceId::from)
    }

    pub fn get_by_protocol(&self, carrier: &Carrier, protocol: &Protocol) -> String {
        self.try_get_by_protocol(carrier, protocol)
            .map(TraceId::into_string)
            .unwrap_or_default()
    }

    pub fn exist(&self, carrier: &Carrier) -> bool {
        self.try_get(carrier).is_some()
    }

    /// Whether the wildcard protocol's key holds a trace id. This always
    /// checks [`Protocol::any`]; use [`Tracer::exist_by_protocol`] for others.
    pub fn exist_protocol(&self, carrier: &Carrier) -> bool {
        self.exist_by_protocol(carrier, &Protocol::any())
    }

    pub fn exist_by_protocol(&self, carrier: &Carrier, protocol: &Protocol) -> bool {
        self.try_get_by_protocol(carrier, protocol).is_some()
    }

    /// Mint an id without touching the carrier.
    pub fn generate(&self, carrier: &Carrier) -> TraceId {
        let generator = self.generator.read().unwrap_or_else(PoisonError::into_inner).clone();
        generator.generate(carrier)
    }

    fn stamp(carrier: &Carrier, table: &KeyTable, id: &TraceId) -> Carrier {
        table
            .unique_keys()
            .iter()
            .fold(carrier.clone(), |carrier, key| carrier.with_value(key.as_str(), id.as_str()))
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracer")
            .field("registry", &self.registry.snapshot())
            .field("master", &self.am_i_master())
            .finish_non_exhaustive()
    }
}

/// Fluent construction for [`Tracer`].
#[derive(Default)]
pub struct TracerBuilder {
    default_key: Option<Key>,
    protocols: Vec<(Protocol, Key)>,
    master: bool,
    generator: Option<Arc<dyn TraceIdGenerator>>,
}

impl TracerBuilder {
    pub fn default_key(mut self, key: impl Into<Key>) -> Self {
        self.default_key = Some(key.into());
        self
    }

    pub fn protocol(mut self, protocol: impl Into<Protocol>, key: impl Into<Key>) -> Self {
        self.protocols.push((protocol.into(), key.into()));
        self
    }

    pub fn master(mut self, master: bool) -> Self {
        self.master = master;
        self
    }

    pub fn generator(mut self, generator: impl TraceIdGenerator + 'static) -> Self {
        self.generator = Some(Arc::new(generator));
        self
    }

    pub fn build(self) -> Tracer {
        let tracer = Tracer::with_key(self.default_key.unwrap_or_else(Key::default_key));
        for (protocol, key) in self.protocols {
            tracer.register_protocol(protocol, key);
        }
        if let Some(generator) = self.generator {
            tracer.install_generator(generator);
        }
        tracer.i_am_master(self.master);
        tracer
    }
}

//! Protocol to carrier-key registry.
//!
//! Readers take a snapshot of the current [`KeyTable`] and scan it without
//! holding the lock. Writers clone the table, apply one registration and
//! swap it in, so a reader sees either the old or the new table in full.

use crate::ids::{Key, Protocol};
use std::sync::{Arc, PoisonError, RwLock};

/// Immutable view of the registered bindings, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyTable {
    bindings: Vec<(Protocol, Key)>,
    unique_keys: Vec<Key>,
}

impl KeyTable {
    pub fn key_for(&self, protocol: &Protocol) -> Option<&Key> {
        self.bindings
            .iter()
            .find(|(registered, _)| registered == protocol)
            .map(|(_, key)| key)
    }

    /// Every protocol binding, duplicates of shared keys included.
    pub fn bindings(&self) -> &[(Protocol, Key)] {
        &self.bindings
    }

    /// Distinct keys across all protocols.
    pub fn unique_keys(&self) -> &[Key] {
        &self.unique_keys
    }

    pub fn protocols(&self) -> impl Iterator<Item = &Protocol> {
        self.bindings.iter().map(|(protocol, _)| protocol)
    }

    fn with_binding(&self, protocol: Protocol, key: Key) -> Self {
        let mut next = self.clone();
        if !next.unique_keys.contains(&key) {
            next.unique_keys.push(key.clone());
        }
        next.bindings.push((protocol, key));
        next
    }
}

#[derive(Debug)]
pub struct ProtocolRegistry {
    table: RwLock<Arc<KeyTable>>,
}

impl ProtocolRegistry {
    /// Registry with the wildcard protocol bound to `any_key`.
    pub fn new(any_key: impl Into<Key>) -> Self {
        let table = KeyTable::default().with_binding(Protocol::any(), any_key.into());
        Self { table: RwLock::new(Arc::new(table)) }
    }

    /// Bind `protocol` to `key`. Returns `false` and leaves the registry
    /// untouched when the protocol is already bound.
    pub fn register(&self, protocol: impl Into<Protocol>, key: impl Into<Key>) -> bool {
        let protocol = protocol.into();
        let key = key.into();
        // Swaps are single assignments, a poisoned guard still holds a whole table.
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = table.key_for(&protocol) {
            tracing::debug!(
                protocol = %protocol,
                existing_key = %existing,
                ignored_key = %key,
                "Protocol already registered, keeping first binding"
            );
            return false;
        }
        tracing::debug!(protocol = %protocol, key = %key, "Registering trace protocol");
        *table = Arc::new(table.with_binding(protocol, key));
        true
    }

    pub fn snapshot(&self) -> Arc<KeyTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn key_for(&self, protocol: &Protocol) -> Option<Key> {
        self.snapshot().key_for(protocol).cloned()
    }

    /// Distinct keys in use. Callers must not rely on the ordering.
    pub fn keys(&self) -> Vec<Key> {
        self.snapshot().unique_keys().to_vec()
    }

    pub fn protocols(&self) -> Vec<Protocol> {
        self.snapshot().protocols().cloned().collect()
    }
}

impl Default for ProtocolRegistry {
    fn default() -> Self {
        Self::new(Key::default_key())
    }
}

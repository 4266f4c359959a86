//! Immutable, layered key/value carrier for one call chain.
//!
//! Every write returns a new [`Carrier`] whose head layer points at the
//! previous one. Handles are cheap to clone and safe to share across
//! tasks; nothing reachable from an existing handle is ever mutated.

use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

struct Layer {
    key: String,
    value: Value,
    parent: Option<Arc<Layer>>,
}

#[derive(Clone, Default)]
pub struct Carrier {
    head: Option<Arc<Layer>>,
}

impl Carrier {
    /// Empty root carrier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a carrier from pairs the transport layer already decoded.
    /// Later pairs shadow earlier ones with the same key.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |carrier, (key, value)| carrier.with_value(key, value))
    }

    /// Derive a carrier with `key` bound to `value`, leaving `self` untouched.
    pub fn with_value(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            head: Some(Arc::new(Layer {
                key: key.into(),
                value: value.into(),
                parent: self.head.clone(),
            })),
        }
    }

    /// Look up `key`, walking from the newest layer outward.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.layers().find(|layer| layer.key == key).map(|layer| &layer.value)
    }

    /// Look up `key` and accept it only when the value is a string.
    pub fn str_value(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of layers between this handle and the root.
    pub fn depth(&self) -> usize {
        self.layers().count()
    }

    /// Flatten the visible bindings, nearest layer wins.
    pub fn snapshot(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for layer in self.layers() {
            if !map.contains_key(&layer.key) {
                map.insert(layer.key.clone(), layer.value.clone());
            }
        }
        map
    }

    fn layers(&self) -> impl Iterator<Item = &Layer> {
        std::iter::successors(self.head.as_deref(), |layer| layer.parent.as_deref())
    }
}

impl fmt::Debug for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carrier")
            .field("depth", &self.depth())
            .field("values", &self.snapshot())
            .finish()
    }
}

impl Drop for Carrier {
    // Unlink uniquely owned layers iteratively so long chains don't recurse on drop.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(layer) = next {
            // `into_inner` hands the layer to exactly one of several racing owners.
            next = Arc::into_inner(layer).and_then(|mut layer| layer.parent.take());
        }
    }
}

//! Strongly-typed labels for the trace registry.
//!
//! These newtypes keep protocols, carrier keys and trace identifiers from
//! being mixed up at compile time even though all three are strings.

pub use trace_rt_id::{TemporalId, UuidId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wildcard protocol registered on every tracer.
pub const PROTOCOL_ANY: &str = "any";

/// Key used for [`PROTOCOL_ANY`] when none is supplied.
pub const DEFAULT_KEY: &str = "trace_id";

macro_rules! define_label_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_label_type!(
    /// Transport or integration surface, e.g. `http` or `kafka`.
    Protocol
);
define_label_type!(
    /// Carrier slot under which a protocol's trace id is stored, e.g. `X-Trace-Id`.
    Key
);
define_label_type!(
    /// Correlation identifier carried through one call chain.
    TraceId
);

impl Protocol {
    pub fn any() -> Self {
        Self(PROTOCOL_ANY.to_string())
    }
}

impl Key {
    pub fn default_key() -> Self {
        Self(DEFAULT_KEY.to_string())
    }
}

impl TraceId {
    pub fn from_uuid(id: UuidId) -> Self {
        Self(id.to_string())
    }

    pub fn from_temporal(id: TemporalId) -> Self {
        Self(id.into_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

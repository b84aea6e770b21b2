//! Shared pieces of the Argo CD resource model.
//!
//! Every resource is a typed projection: the fields the engine reads or
//! writes are struct fields, everything else lands in an [`Extra`] map and is
//! written back untouched.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Fields the engine does not interpret, kept verbatim for re-encoding.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// `apiVersion` of every resource this crate emits.
pub const ARGO_API_VERSION: &str = "argoproj.io/v1alpha1";

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Standard object metadata. Only `name` is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,

    #[serde(flatten)]
    pub extra: Extra,
}

impl ObjectMeta {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Extra::new(),
        }
    }
}

/// Where a deployable unit runs: a cluster (by `server` URL or by `name`)
/// plus a namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub server: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub namespace: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
}

impl Destination {
    /// Destination addressed by cluster server URL.
    pub fn server(server: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            namespace: namespace.into(),
            name: String::new(),
        }
    }

    /// Destination addressed by cluster name.
    pub fn cluster(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            server: String::new(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Canonical identity used for de-duplication.
    pub fn identity(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.server, self.name, self.namespace)
    }
}

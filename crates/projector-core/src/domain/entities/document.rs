use serde::Serialize;

use crate::domain::{entities::common::Extra, error::DomainError};

/// Top-level key holding observed runtime state.
pub const STATUS_FIELD: &str = "status";

/// A resource as a generic record, ready for the codec.
///
/// Generated manifests describe desired state only, so the top-level
/// `status` key is always removed. Nested keys named `status` are left alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fields: Extra,
}

impl Document {
    /// Build a document from a typed resource.
    pub fn from_resource<T: Serialize>(kind: &'static str, resource: &T) -> Result<Self, DomainError> {
        let value = serde_json::to_value(resource).map_err(|e| DomainError::ResourceEncoding {
            kind,
            reason: e.to_string(),
        })?;

        match value {
            serde_json::Value::Object(fields) => Ok(Self::from_fields(fields)),
            _ => Err(DomainError::NotAMapping { kind }),
        }
    }

    /// Wrap an already generic record.
    pub fn from_fields(mut fields: Extra) -> Self {
        fields.remove(STATUS_FIELD);
        Self { fields }
    }

    pub fn fields(&self) -> &Extra {
        &self.fields
    }

    pub fn into_fields(self) -> Extra {
        self.fields
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }
}

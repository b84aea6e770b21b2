//! The `ArgoCDProject` input document.
//!
//! Decoding is permissive: fields the generator does not know about are
//! dropped here, while the embedded AppProject and Application templates keep
//! theirs for pass-through.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{
        app_project::AppProject,
        application::Application,
        common::{ObjectMeta, null_as_default},
    },
    policy::AccessLevel,
};

/// Root of the input: one logical project plus its applications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectTemplate {
    #[serde(rename = "apiVersion", default, deserialize_with = "null_as_default")]
    pub api_version: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: ObjectMeta,

    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: TemplateSpec,
}

impl ProjectTemplate {
    pub const KIND: &'static str = "ArgoCDProject";

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            kind: Self::KIND.into(),
            metadata: ObjectMeta::named(name),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.spec.environment = environment.into();
        self
    }

    pub fn with_access(mut self, level: AccessLevel, groups: Vec<String>) -> Self {
        match level {
            AccessLevel::ReadOnly => self.spec.access_control.read_only = groups,
            AccessLevel::ReadSync => self.spec.access_control.read_sync = groups,
        }
        self
    }

    pub fn with_app_project(mut self, app_project: AppProject) -> Self {
        self.spec.app_project = app_project;
        self
    }

    pub fn with_application(mut self, application: Application) -> Self {
        self.spec.applications.push(application);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateSpec {
    #[serde(
        rename = "accessControl",
        default,
        deserialize_with = "null_as_default"
    )]
    pub access_control: AccessControl,

    /// Overlay name; empty leaves application sources alone.
    #[serde(default, deserialize_with = "null_as_default")]
    pub environment: String,

    #[serde(
        rename = "appProjectTemplate",
        default,
        deserialize_with = "null_as_default"
    )]
    pub app_project: AppProject,

    #[serde(
        rename = "applicationTemplates",
        default,
        deserialize_with = "null_as_default"
    )]
    pub applications: Vec<Application>,
}

/// SSO groups per access level. The capitalised keys are the wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControl {
    #[serde(rename = "ReadOnly", default, deserialize_with = "null_as_default")]
    pub read_only: Vec<String>,

    #[serde(rename = "ReadSync", default, deserialize_with = "null_as_default")]
    pub read_sync: Vec<String>,
}

impl AccessControl {
    /// Groups declared for `level`, in declaration order.
    pub fn groups(&self, level: AccessLevel) -> &[String] {
        match level {
            AccessLevel::ReadOnly => &self.read_only,
            AccessLevel::ReadSync => &self.read_sync,
        }
    }
}

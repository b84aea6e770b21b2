use serde::{Deserialize, Serialize};

use crate::domain::entities::common::{Destination, Extra, ObjectMeta, null_as_default};

/// Argo CD `Application`: one deployable unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(
        rename = "apiVersion",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub api_version: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub kind: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: ObjectMeta,

    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: ApplicationSpec,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Application {
    pub const KIND: &'static str = "Application";

    pub fn new(name: impl Into<String>, destination: Destination) -> Self {
        Self {
            metadata: ObjectMeta::named(name),
            spec: ApplicationSpec {
                destination,
                ..ApplicationSpec::default()
            },
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: ApplicationSource) -> Self {
        self.spec.source = Some(source);
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSpec {
    /// Owning AppProject; blank until re-projection.
    #[serde(default, deserialize_with = "null_as_default")]
    pub project: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ApplicationSource>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub destination: Destination,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSource {
    #[serde(rename = "repoURL", default, deserialize_with = "null_as_default")]
    pub repo_url: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub path: String,

    #[serde(
        rename = "targetRevision",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub target_revision: String,

    /// `helm`, `kustomize`, `directory`, `chart`, ...
    #[serde(flatten)]
    pub extra: Extra,
}

impl ApplicationSource {
    pub fn new(
        repo_url: impl Into<String>,
        path: impl Into<String>,
        target_revision: impl Into<String>,
    ) -> Self {
        Self {
            repo_url: repo_url.into(),
            path: path.into(),
            target_revision: target_revision.into(),
            extra: Extra::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_wire_names() {
        let app: Application = serde_json::from_value(json!({
            "metadata": {"name": "api"},
            "spec": {
                "source": {"repoURL": "https://git.example/api", "path": "deploy", "targetRevision": "main"},
                "destination": {"server": "https://kubernetes.default.svc", "namespace": "api"}
            }
        }))
        .unwrap();

        let source = app.spec.source.as_ref().unwrap();
        assert_eq!(source.repo_url, "https://git.example/api");
        assert_eq!(source.target_revision, "main");
        assert_eq!(app.spec.destination.namespace, "api");
        assert_eq!(app.spec.project, "");
    }

    #[test]
    fn project_and_destination_are_always_written() {
        let value = serde_json::to_value(Application::default()).unwrap();
        assert_eq!(value["spec"], json!({"project": "", "destination": {}}));
    }
}

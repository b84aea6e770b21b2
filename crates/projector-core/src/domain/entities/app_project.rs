use serde::{Deserialize, Serialize};

use crate::domain::entities::common::{Destination, Extra, ObjectMeta, null_as_default};

/// Argo CD `AppProject`: the access scope and allowed destinations shared by
/// a group of applications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppProject {
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
    pub spec: AppProjectSpec,

    /// Everything else, `status` included.
    #[serde(flatten)]
    pub extra: Extra,
}

impl AppProject {
    pub const KIND: &'static str = "AppProject";

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta::named(name),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppProjectSpec {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub source_repos: Vec<String>,

    /// `None` when the input did not declare destinations at all.
    #[serde(default, skip_serializing_if = "none_or_empty")]
    pub destinations: Option<Vec<Destination>>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub namespace_resource_whitelist: Vec<GroupKind>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub roles: Vec<ProjectRole>,

    #[serde(flatten)]
    pub extra: Extra,
}

fn none_or_empty(destinations: &Option<Vec<Destination>>) -> bool {
    destinations.as_ref().is_none_or(Vec::is_empty)
}

/// A Kubernetes API group plus kind, `*` matching everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupKind {
    #[serde(default, deserialize_with = "null_as_default")]
    pub group: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,
}

impl GroupKind {
    pub fn new(group: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            kind: kind.into(),
        }
    }

    pub fn any() -> Self {
        Self::new("*", "*")
    }
}

/// A named role inside an AppProject, bound to SSO groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRole {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub policies: Vec<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub groups: Vec<String>,

    /// `description`, `jwtTokens` and anything newer.
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_and_empty_destinations_are_distinct() {
        let absent: AppProjectSpec = serde_json::from_value(json!({})).unwrap();
        let null: AppProjectSpec = serde_json::from_value(json!({"destinations": null})).unwrap();
        let empty: AppProjectSpec = serde_json::from_value(json!({"destinations": []})).unwrap();

        assert_eq!(absent.destinations, None);
        assert_eq!(null.destinations, None);
        assert_eq!(empty.destinations, Some(vec![]));
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let input = json!({
            "metadata": {"name": "web", "annotations": {"owner": "ops"}},
            "spec": {"clusterResourceWhitelist": [{"group": "", "kind": "Namespace"}]},
            "status": {"jwtTokensByRole": {}}
        });

        let project: AppProject = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(project.name(), "web");
        assert!(project.spec.extra.contains_key("clusterResourceWhitelist"));

        assert_eq!(serde_json::to_value(&project).unwrap(), input);
    }

    #[test]
    fn role_keeps_description() {
        let role: ProjectRole = serde_json::from_value(json!({
            "name": "ci",
            "description": "pipeline access",
            "policies": ["p, proj:web:ci, applications, sync, web/*, allow"]
        }))
        .unwrap();

        assert_eq!(role.policies.len(), 1);
        assert!(role.groups.is_empty());
        assert_eq!(role.extra["description"], "pipeline access");
    }
}

//! Role construction: one AppProject role per access level.

use crate::domain::{
    entities::{AccessControl, ProjectRole},
    policy::AccessLevel,
};

/// Build the role for `level` in `project`, bound to the groups declared for it.
pub fn build_role(level: AccessLevel, project: &str, access: &AccessControl) -> ProjectRole {
    ProjectRole {
        name: level.as_str().to_string(),
        policies: level.policies(project),
        groups: access.groups(level).to_vec(),
        ..ProjectRole::default()
    }
}

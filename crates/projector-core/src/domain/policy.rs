//! Access levels and the policy statements they grant.
//!
//! # Design
//!
//! The set of access levels is closed. Every match over [`AccessLevel`] is
//! exhaustive, so adding a level is a compile error everywhere its policies,
//! name, or groups are needed, never a runtime fallthrough.
//!
//! Statement text is consumed verbatim by Argo CD's casbin enforcer and by
//! diff-based review of generated manifests, so the format and order below
//! are part of the output contract.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Resource actions granted to `read-sync` on top of `read-only`, in emission order.
const READ_SYNC_ACTIONS: [&str; 7] = [
    "action/apps/Deployment/restart",
    "action/argoproj.io/Rollout/abort",
    "action/argoproj.io/Rollout/promote-full",
    "action/argoproj.io/Rollout/restart",
    "action/argoproj.io/Rollout/resume",
    "action/argoproj.io/Rollout/retry",
    "sync",
];

/// A permission tier for an AppProject role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccessLevel {
    ReadOnly,
    ReadSync,
}

impl AccessLevel {
    /// Every level, in the order roles are appended to a project.
    pub const ALL: [AccessLevel; 2] = [Self::ReadOnly, Self::ReadSync];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReadOnly => "read-only",
            Self::ReadSync => "read-sync",
        }
    }

    /// Casbin subject for this level's role in `project`, e.g. `proj:payments:read-only`.
    pub fn subject(&self, project: &str) -> String {
        format!("proj:{}:{}", project, self.as_str())
    }

    /// Policy statements for this level's role in `project`.
    pub fn policies(&self, project: &str) -> Vec<String> {
        let subject = self.subject(project);

        match self {
            Self::ReadOnly => vec![format!("p, {subject}, *, get, {project}/*, allow")],
            Self::ReadSync => {
                let mut policies: Vec<String> = READ_SYNC_ACTIONS
                    .iter()
                    .map(|action| format!("p, {subject}, applications, {action}, {project}/*, allow"))
                    .collect();

                // read-sync inherits everything read-only can do
                policies.push(format!(
                    "g, {subject}, {}",
                    Self::ReadOnly.subject(project)
                ));
                policies
            }
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read-only" => Ok(Self::ReadOnly),
            "read-sync" => Ok(Self::ReadSync),
            other => Err(DomainError::UnknownAccessLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_is_a_single_get_statement() {
        let policies = AccessLevel::ReadOnly.policies("payments");

        assert_eq!(
            policies,
            vec!["p, proj:payments:read-only, *, get, payments/*, allow".to_string()]
        );
        assert!(policies[0].contains("proj:payments:read-only"));
        assert!(policies[0].contains("payments/*"));
    }

    #[test]
    fn read_sync_grants_actions_in_order() {
        let policies = AccessLevel::ReadSync.policies("shop");

        assert_eq!(policies.len(), 8);
        assert_eq!(
            policies[0],
            "p, proj:shop:read-sync, applications, action/apps/Deployment/restart, shop/*, allow"
        );
        assert_eq!(
            policies[2],
            "p, proj:shop:read-sync, applications, action/argoproj.io/Rollout/promote-full, shop/*, allow"
        );
        assert_eq!(
            policies[6],
            "p, proj:shop:read-sync, applications, sync, shop/*, allow"
        );
    }

    #[test]
    fn read_sync_ends_with_group_inheritance() {
        let policies = AccessLevel::ReadSync.policies("shop");
        assert_eq!(
            policies.last().map(String::as_str),
            Some("g, proj:shop:read-sync, proj:shop:read-only")
        );
    }

    #[test]
    fn all_lists_read_only_first() {
        assert_eq!(
            AccessLevel::ALL,
            [AccessLevel::ReadOnly, AccessLevel::ReadSync]
        );
    }

    #[test]
    fn parses_display_names() {
        for level in AccessLevel::ALL {
            assert_eq!(level.to_string().parse::<AccessLevel>().unwrap(), level);
        }
        assert!(matches!(
            "admin".parse::<AccessLevel>(),
            Err(DomainError::UnknownAccessLevel(_))
        ));
    }
}

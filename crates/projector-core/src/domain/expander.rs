//! Expansion of an `ArgoCDProject` into its AppProject and Applications.
//!
//! The whitelist overrides below are platform requirements, not defaults:
//! they are applied after every other step and have no input that can
//! change them.

use tracing::debug;

use crate::domain::{
    destinations::collect_destinations,
    entities::{
        ARGO_API_VERSION, AppProject, Application, ApplicationSource, GroupKind, ProjectTemplate,
    },
    error::DomainError,
    policy::AccessLevel,
    roles::build_role,
    validation::DomainValidator,
};

/// The expanded resources, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub project: AppProject,
    pub applications: Vec<Application>,
}

impl Expansion {
    /// Documents this expansion emits: the project plus one per application.
    pub fn document_count(&self) -> usize {
        1 + self.applications.len()
    }
}

/// Expand `template` into the AppProject and its re-projected Applications.
pub fn expand(template: &ProjectTemplate) -> Result<Expansion, DomainError> {
    let project = expand_project(template)?;
    let applications = reproject_applications(template, project.name());

    Ok(Expansion {
        project,
        applications,
    })
}

/// Build the canonical AppProject from the template.
pub fn expand_project(template: &ProjectTemplate) -> Result<AppProject, DomainError> {
    DomainValidator::validate_template(template)?;

    let mut project = template.spec.app_project.clone();
    project.api_version = ARGO_API_VERSION.to_string();
    project.kind = AppProject::KIND.to_string();

    if project.metadata.name.is_empty() {
        project.metadata.name = template.name().to_string();
    }

    if project.spec.destinations.is_some() {
        debug!(project = %project.name(), "Destinations declared explicitly, skipping collection");
    } else {
        project.spec.destinations = Some(collect_destinations(&template.spec.applications));
    }

    for level in AccessLevel::ALL {
        let role = build_role(level, project.name(), &template.spec.access_control);
        project.spec.roles.push(role);
    }

    project.spec.namespace_resource_whitelist = vec![GroupKind::any()];
    project.spec.source_repos = vec!["*".to_string()];

    Ok(project)
}

/// Point every application template at `project_name` and, when the
/// template names an environment, at that environment's overlay.
pub fn reproject_applications(template: &ProjectTemplate, project_name: &str) -> Vec<Application> {
    let environment = template.spec.environment.as_str();

    template
        .spec
        .applications
        .iter()
        .cloned()
        .map(|mut app| {
            app.api_version = ARGO_API_VERSION.to_string();
            app.kind = Application::KIND.to_string();
            app.spec.project = project_name.to_string();

            if !environment.is_empty() {
                let source = app.spec.source.get_or_insert_with(ApplicationSource::default);
                source.path = overlay_path(environment);
                source.target_revision = environment_revision(environment);
            }

            app
        })
        .collect()
}

/// Kustomize overlay directory for `environment`.
pub fn overlay_path(environment: &str) -> String {
    format!("./k8s/overlays/{environment}")
}

/// Git revision holding `environment`'s rendered state.
pub fn environment_revision(environment: &str) -> String {
    format!("env-{environment}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Destination, ProjectRole};

    fn payments() -> ProjectTemplate {
        ProjectTemplate::named("payments")
            .with_environment("prod")
            .with_access(AccessLevel::ReadOnly, vec!["team-a".into()])
            .with_application(
                Application::new("ledger", Destination::cluster("clusterA", "nsX"))
                    .with_source(ApplicationSource::new("https://git/ledger", "deploy", "main")),
            )
            .with_application(Application::new(
                "gateway",
                Destination::cluster("clusterB", "nsY"),
            ))
    }

    #[test]
    fn end_to_end_payments() {
        let expansion = expand(&payments()).unwrap();
        let project = &expansion.project;

        assert_eq!(project.name(), "payments");
        assert_eq!(project.api_version, ARGO_API_VERSION);
        assert_eq!(project.kind, "AppProject");
        assert_eq!(project.spec.destinations.as_ref().map(Vec::len), Some(2));

        let roles = &project.spec.roles;
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].name, "read-only");
        assert_eq!(roles[0].policies.len(), 1);
        assert_eq!(roles[0].groups, vec!["team-a"]);
        assert_eq!(roles[1].name, "read-sync");
        assert_eq!(roles[1].policies.len(), 8);
        assert!(roles[1].groups.is_empty());

        assert_eq!(expansion.applications.len(), 2);
        for app in &expansion.applications {
            assert_eq!(app.kind, "Application");
            assert_eq!(app.spec.project, "payments");
            let source = app.spec.source.as_ref().unwrap();
            assert_eq!(source.path, "./k8s/overlays/prod");
            assert_eq!(source.target_revision, "env-prod");
        }
        assert_eq!(expansion.document_count(), 3);
    }

    #[test]
    fn environment_rewrite_keeps_repo_url() {
        let expansion = expand(&payments()).unwrap();
        let source = expansion.applications[0].spec.source.as_ref().unwrap();
        assert_eq!(source.repo_url, "https://git/ledger");
    }

    #[test]
    fn empty_environment_leaves_sources_untouched() {
        let template = payments().with_environment("");
        let expansion = expand(&template).unwrap();

        for (out, input) in expansion.applications.iter().zip(&template.spec.applications) {
            assert_eq!(out.spec.source, input.spec.source);
        }
        assert!(expansion.applications[1].spec.source.is_none());
    }

    #[test]
    fn application_order_is_preserved() {
        let expansion = expand(&payments()).unwrap();
        let names: Vec<_> = expansion.applications.iter().map(Application::name).collect();
        assert_eq!(names, ["ledger", "gateway"]);
    }

    #[test]
    fn explicit_project_name_wins() {
        let template = payments().with_app_project(AppProject::named("billing"));
        let expansion = expand(&template).unwrap();

        assert_eq!(expansion.project.name(), "billing");
        assert!(expansion.project.spec.roles[0].policies[0].contains("proj:billing:read-only"));
        assert!(expansion.applications.iter().all(|a| a.spec.project == "billing"));
    }

    #[test]
    fn whitelists_are_always_forced() {
        let mut app_project = AppProject::named("payments");
        app_project.spec.source_repos = vec!["https://git/only-this".into()];
        app_project.spec.namespace_resource_whitelist = vec![GroupKind::new("apps", "Deployment")];

        let project = expand_project(&payments().with_app_project(app_project)).unwrap();

        assert_eq!(project.spec.source_repos, vec!["*"]);
        assert_eq!(project.spec.namespace_resource_whitelist, vec![GroupKind::any()]);
    }

    #[test]
    fn explicit_destinations_disable_collection() {
        let mut app_project = AppProject::named("payments");
        app_project.spec.destinations = Some(vec![Destination::server("https://other", "*")]);

        let project = expand_project(&payments().with_app_project(app_project)).unwrap();

        assert_eq!(
            project.spec.destinations,
            Some(vec![Destination::server("https://other", "*")])
        );
    }

    #[test]
    fn explicit_empty_destinations_stay_empty() {
        let mut app_project = AppProject::named("payments");
        app_project.spec.destinations = Some(vec![]);

        let project = expand_project(&payments().with_app_project(app_project)).unwrap();

        assert_eq!(project.spec.destinations, Some(vec![]));
    }

    #[test]
    fn existing_roles_come_first() {
        let mut app_project = AppProject::named("payments");
        app_project.spec.roles = vec![ProjectRole {
            name: "read-only".into(),
            ..ProjectRole::default()
        }];

        let project = expand_project(&payments().with_app_project(app_project)).unwrap();
        let names: Vec<_> = project.spec.roles.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, ["read-only", "read-only", "read-sync"]);
        assert!(project.spec.roles[0].policies.is_empty());
    }

    #[test]
    fn unnamed_template_fails_before_expansion() {
        assert!(matches!(
            expand(&ProjectTemplate::default()),
            Err(DomainError::MissingRequiredField { .. })
        ));
    }

    #[test]
    fn overlay_helpers() {
        assert_eq!(overlay_path("staging"), "./k8s/overlays/staging");
        assert_eq!(environment_revision("staging"), "env-staging");
    }
}

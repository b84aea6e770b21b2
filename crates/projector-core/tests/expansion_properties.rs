//! Integration tests for projector-core.
//!
//! Each property is checked over a small table of templates rather than a
//! single hand-picked case.

use std::collections::BTreeSet;
use std::path::Path;

use projector_core::{
    application::DOCUMENT_SEPARATOR,
    domain::{
        ApplicationSource, GroupKind, STATUS_FIELD, expand, expand_project,
        reproject_applications,
    },
    prelude::*,
};

const PROJECT_NAMES: [&str; 4] = ["payments", "a", "team-42", "billing.internal"];

fn units(n: usize) -> Vec<Application> {
    (0..n)
        .map(|i| {
            Application::new(
                format!("unit-{i}"),
                // three clusters, two namespaces: duplicates from n >= 7
                Destination::cluster(format!("cluster-{}", i % 3), format!("ns-{}", i % 2)),
            )
            .with_source(ApplicationSource::new(
                format!("https://git.example.com/unit-{i}"),
                "deploy",
                "main",
            ))
        })
        .collect()
}

fn template(name: &str, environment: &str, n: usize) -> ProjectTemplate {
    units(n).into_iter().fold(
        ProjectTemplate::named(name)
            .with_environment(environment)
            .with_access(AccessLevel::ReadOnly, vec!["team-a".into()]),
        ProjectTemplate::with_application,
    )
}

#[test]
fn read_only_yields_one_scoped_statement() {
    for name in PROJECT_NAMES {
        let project = expand_project(&template(name, "", 1)).unwrap();
        let role = &project.spec.roles[0];

        assert_eq!(role.name, "read-only");
        assert_eq!(role.policies.len(), 1);
        assert!(role.policies[0].contains(&format!("proj:{name}:read-only")));
        assert!(role.policies[0].contains(&format!("{name}/*")));
    }
}

#[test]
fn read_sync_ends_with_inheritance_statement() {
    for name in PROJECT_NAMES {
        let project = expand_project(&template(name, "", 0)).unwrap();
        let role = &project.spec.roles[1];

        assert_eq!(role.policies.len(), 8);
        assert_eq!(
            role.policies[7],
            format!("g, proj:{name}:read-sync, proj:{name}:read-only")
        );
    }
}

#[test]
fn whitelists_forced_regardless_of_input() {
    let inputs = [
        (vec![], vec![]),
        (vec!["https://only".to_string()], vec![GroupKind::new("apps", "Deployment")]),
        (vec!["*".to_string()], vec![GroupKind::any()]),
    ];

    for (repos, kinds) in inputs {
        let mut app_project = AppProject::named("payments");
        app_project.spec.source_repos = repos;
        app_project.spec.namespace_resource_whitelist = kinds;

        let project = expand_project(&template("payments", "", 2).with_app_project(app_project))
            .unwrap();

        assert_eq!(project.spec.source_repos, vec!["*"]);
        assert_eq!(project.spec.namespace_resource_whitelist, vec![GroupKind::any()]);
    }
}

#[test]
fn collected_destinations_are_the_distinct_pairs() {
    for n in [0, 1, 2, 5, 9] {
        let template = template("payments", "", n);
        let project = expand_project(&template).unwrap();
        let destinations = project.spec.destinations.unwrap_or_default();

        let expected: BTreeSet<String> = template
            .spec
            .applications
            .iter()
            .map(|a| a.spec.destination.identity())
            .collect();
        let actual: Vec<String> = destinations.iter().map(Destination::identity).collect();

        assert_eq!(actual.len(), expected.len(), "duplicates for n = {n}");
        assert_eq!(actual.into_iter().collect::<BTreeSet<_>>(), expected);
    }
}

#[test]
fn declared_destinations_win() {
    let declared = vec![Destination::server("https://kubernetes.default.svc", "*")];
    let mut app_project = AppProject::named("payments");
    app_project.spec.destinations = Some(declared.clone());

    let project =
        expand_project(&template("payments", "", 5).with_app_project(app_project)).unwrap();

    assert_eq!(project.spec.destinations, Some(declared));
}

#[test]
fn staging_rewrites_every_source() {
    let applications = reproject_applications(&template("payments", "staging", 4), "payments");

    for app in &applications {
        let source = app.spec.source.as_ref().unwrap();
        assert_eq!(source.path, "./k8s/overlays/staging");
        assert_eq!(source.target_revision, "env-staging");
    }
}

#[test]
fn empty_environment_keeps_sources_byte_identical() {
    let template = template("payments", "", 4);
    let applications = reproject_applications(&template, "payments");

    for (out, input) in applications.iter().zip(&template.spec.applications) {
        assert_eq!(
            serde_json::to_string(&out.spec.source).unwrap(),
            serde_json::to_string(&input.spec.source).unwrap()
        );
    }
}

#[test]
fn status_stripped_at_top_level_only() {
    let mut app = Application::new("ledger", Destination::cluster("clusterA", "nsX"));
    app.extra
        .insert(STATUS_FIELD.into(), serde_json::json!({"sync": "Synced"}));
    app.spec
        .extra
        .insert(STATUS_FIELD.into(), serde_json::json!("nested"));

    let document = Document::from_resource(Application::KIND, &app).unwrap();

    assert!(!document.contains_key(STATUS_FIELD));
    assert_eq!(document.get("spec").unwrap()[STATUS_FIELD], "nested");
    assert_eq!(document.get("metadata").unwrap()["name"], "ledger");
}

#[test]
fn payments_scenario() {
    let template = ProjectTemplate::named("payments")
        .with_environment("prod")
        .with_access(AccessLevel::ReadOnly, vec!["team-a".into()])
        .with_access(AccessLevel::ReadSync, vec![])
        .with_application(Application::new("ledger", Destination::cluster("clusterA", "nsX")))
        .with_application(Application::new("gateway", Destination::cluster("clusterB", "nsY")));

    let expansion = expand(&template).unwrap();
    let roles = &expansion.project.spec.roles;

    assert_eq!(expansion.project.name(), "payments");
    assert_eq!(expansion.project.spec.destinations.as_ref().map(Vec::len), Some(2));
    assert_eq!((roles[0].policies.len(), roles[0].groups.clone()), (1, vec!["team-a".to_string()]));
    assert_eq!((roles[1].policies.len(), roles[1].groups.len()), (8, 0));
    assert!(expansion.applications.iter().all(|a| {
        let source = a.spec.source.as_ref().unwrap();
        a.spec.project == "payments"
            && source.path == "./k8s/overlays/prod"
            && source.target_revision == "env-prod"
    }));
}

// ── stream shape through the service ─────────────────────────────────────────

struct Fixed(ProjectTemplate);

impl TemplateSource for Fixed {
    fn read(&self, _path: &Path) -> ProjectorResult<String> {
        Ok(String::new())
    }
}

impl ManifestCodec for Fixed {
    fn decode(&self, _path: &Path, _text: &str) -> ProjectorResult<ProjectTemplate> {
        Ok(self.0.clone())
    }

    fn encode(&self, document: &Document) -> ProjectorResult<String> {
        Ok(serde_json::to_string(document.fields()).unwrap_or_default())
    }
}

#[test]
fn n_units_give_n_plus_one_documents() {
    for n in [0, 1, 3, 8] {
        let template = template("payments", "prod", n);
        let service = ExpandService::new(
            Box::new(Fixed(template.clone())),
            Box::new(Fixed(template)),
        );
        let mut out: Vec<u8> = Vec::new();

        let summary = service.generate("project.yaml", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(summary.documents, n + 1);
        assert_eq!(text.matches(DOCUMENT_SEPARATOR).count(), n);
        assert_eq!(text.split(DOCUMENT_SEPARATOR).count(), n + 1);
    }
}

pub mod app_project;
pub mod application;
pub mod common;
pub mod document;
pub mod template;

pub use crate::domain::DomainError;
pub use app_project::{AppProject, AppProjectSpec, GroupKind, ProjectRole};
pub use application::{Application, ApplicationSource, ApplicationSpec};
pub use common::{ARGO_API_VERSION, Destination, Extra, ObjectMeta};
pub use document::{Document, STATUS_FIELD};
pub use template::{AccessControl, ProjectTemplate, TemplateSpec};

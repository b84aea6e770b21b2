use crate::domain::{entities::ProjectTemplate, error::DomainError};

/// Centralized domain validation.
///
/// Runs before expansion so that policy strings are never generated for an
/// unnamed project.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_template(template: &ProjectTemplate) -> Result<(), DomainError> {
        if template.name().is_empty() && template.spec.app_project.name().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "metadata.name",
            });
        }

        Ok(())
    }
}

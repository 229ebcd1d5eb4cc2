use crate::errors::Result;
use crate::features::project_model::ProjectModel;
use crate::shared::constants::fault_tolerance::{ASYNCHRONOUS_ANNOTATION, FALLBACK_ANNOTATION};

/// Whether the project can resolve `@Fallback` or `@Asynchronous`.
///
/// Projects without the fault tolerance API have nothing to validate.
pub fn is_applicable(project: &dyn ProjectModel) -> Result<bool> {
    Ok(project.contains_type(FALLBACK_ANNOTATION)? || project.contains_type(ASYNCHRONOUS_ANNOTATION)?)
}

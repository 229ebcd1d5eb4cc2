use crate::errors::Result;

/// Type lookup against a project's classpath.
///
/// A lookup answers "is this fully-qualified type resolvable here". It must
/// be cheap: no resolution of members or supertypes. An `Err` means the
/// model could not answer, which callers must not read as "absent".
pub trait ProjectModel: Send + Sync {
    fn contains_type(&self, qualified_name: &str) -> Result<bool>;
}

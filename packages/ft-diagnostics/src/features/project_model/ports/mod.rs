//! Project model ports

mod project_model;

pub use project_model::ProjectModel;

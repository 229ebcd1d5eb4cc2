//! Project Model Feature
//!
//! The universe of types a project can resolve. Backs the applicability gate
//! and the same-package / on-demand import steps of type resolution.
//!
//! ## Structure
//! - `ports/` - ProjectModel trait
//! - `infrastructure/` - ClasspathIndex (known types + scanned source roots)

pub mod infrastructure;
pub mod ports;

pub use infrastructure::ClasspathIndex;
pub use ports::ProjectModel;

//! Fault tolerance domain

pub mod annotation_matcher;
mod error_code;
mod method_index;

pub use annotation_matcher::{find_annotation, is_match_annotation};
pub use error_code::FaultToleranceErrorCode;
pub use method_index::MethodNameIndex;

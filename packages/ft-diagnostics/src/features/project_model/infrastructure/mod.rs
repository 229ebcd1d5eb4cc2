//! Project model infrastructure

mod classpath_index;

pub use classpath_index::ClasspathIndex;

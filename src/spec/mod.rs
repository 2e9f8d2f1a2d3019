//! Spec layer: the in-memory API specification document.
//!
//! This module is intentionally separate from annotation and rendering.
//! It owns:
//! - Document (top-level Swagger/OpenAPI object)
//! - Paths, PathItem + Method (operations keyed by HTTP method)
//! - Operation + Extensions (tags and vendor extension metadata)
//! - loading the document produced by the annotation extractor

pub mod document;
pub mod load;
pub mod operation;
pub mod path;

pub use document::Document;
pub use load::read_document;
pub use operation::{Badge, Operation};

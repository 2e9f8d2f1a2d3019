//! Post-processing passes over a loaded document: tag filtering, badge
//! resolution and operation annotation.

pub mod badges;
pub mod ops;
pub mod tags;

pub use badges::BadgeConfig;
pub use ops::{AnnotateOptions, annotate};
pub use tags::TagFilter;

//! Caret Module - positions and bounded navigation
//!
//! - Location: immutable (node, offset) caret position
//! - relate: single relational query combining order and containment
//! - Relevance: two-layer filter deciding which nodes carry carets
//! - Space: bounded region with escaping, stepping and iteration

pub mod location;
pub mod order;
pub mod relevance;
pub mod space;

pub use location::Location;
pub use order::{relate, Relation};
pub use relevance::{AllNodes, Relevance};
pub use space::{Backward, Forward, Space};

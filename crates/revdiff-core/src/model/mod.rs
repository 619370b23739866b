//! Revision metadata model.

pub mod revision;

pub use revision::{Editor, Note, Revision, RevisionDiff};

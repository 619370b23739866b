//! Core types shared across the revision diff facilities
//!
//! This crate provides foundational types used by the formatting core and
//! its outer surfaces:
//!
//! - **Entity identity**: [`Bbid`], the stable UUID identifying an entity
//! - **Entity kinds**: [`EntityType`], the closed set of diffable entities
//! - **Correlation**: [`RequestId`], [`TraceId`] and [`RequestContext`] for
//!   tying an operation's log events together
//! - **Schema constants**: canonical field keys and event names for
//!   structured logging

pub mod correlation;
pub mod entity;
pub mod ids;
pub mod schema;

pub use correlation::{RequestContext, RequestId, TraceId};
pub use entity::EntityType;
pub use ids::Bbid;

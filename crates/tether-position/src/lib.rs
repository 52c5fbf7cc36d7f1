//! Geometry and anchored placement for overlays.
//!
//! # Scope
//!
//! This crate provides:
//! - **Offset** - an element's bounding box relative to the document,
//!   independent of the current scroll position
//! - **Position** - an element's bounding box relative to its nearest
//!   positioned ancestor
//! - **Placement** - coordinates for a target box anchored to one of twelve
//!   sides/corners of a host box
//!
//! The live render tree is reached only through the [`GeometryQuery`] trait,
//! so everything here is a pure function of what that surface reports at
//! call time. Nothing is cached between calls.
//!
//! # Not Implemented
//!
//! - Viewport collision avoidance or placement fallback
//! - Measuring or styling elements

pub mod engine;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod surface;

pub use engine::{
    DEFAULT_MAX_ANCESTOR_DEPTH, PositionEngine, PositionOptions, offset, position,
};
pub use error::PositionError;
pub use geometry::{BorderWidths, BoundingBox, Coordinates, ScrollOffset, ViewportRect};
pub use placement::{Alignment, Placement, Side, position_elements};
pub use surface::GeometryQuery;

//! Core geometry types for the navmesh pipeline.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`Point2`] and [`Vec2`]: planar coordinate and direction types
//! - [`Edge`]: a directed boundary segment with an outward normal
//! - [`Polygon`]: a closed counterclockwise loop of edges
//!
//! All coordinates are in world units, counterclockwise positive.

pub mod math;

mod edge;
mod point;
mod polygon;

pub use edge::Edge;
pub use point::{Point2, Vec2};
pub use polygon::Polygon;

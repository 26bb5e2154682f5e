//! aerodb-spatial - Geometric value types for the aerodb query engine
//!
//! Point, Linestring and Polygon values, their SQL type descriptors,
//! the planar predicates used to validate polygon rings, and the
//! POINT / LINESTRING / POLYGON constructor expressions.

pub mod config;
pub mod errors;
pub mod expression;
pub mod function;
pub mod geometry;
pub mod observability;
pub mod sql;

pub use config::SpatialConfig;
pub use errors::{SpatialError, SpatialResult};

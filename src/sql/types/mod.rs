//! Value-type descriptors for the geometric SQL types
//!
//! Each descriptor is a zero-sized singleton holding no per-value state,
//! shared freely across concurrent evaluations.
//!
//! # Ordering rules
//!
//! - NULL < any non-null value; two NULLs are equal
//! - Points: x first, then y
//! - Coordinates: NaN is greater than every number, all NaNs are equal,
//!   and -0.0 equals 0.0
//! - Linestrings: pointwise, then shorter first
//! - Polygons: ringwise, then fewer rings first

mod linestring;
mod point;
mod polygon;

pub use linestring::{LinestringType, LINESTRING_TYPE};
pub use point::{PointType, POINT_TYPE};
pub use polygon::{PolygonType, POLYGON_TYPE};

use std::cmp::Ordering;
use std::fmt;

use super::{Value, WireType, WireValue};
use crate::errors::SpatialResult;
use crate::geometry::{Linestring, Point, Polygon};

/// Contract every SQL scalar type descriptor satisfies
pub trait SqlType: fmt::Debug + fmt::Display + Send + Sync {
    /// Display name used in schema and describe output
    fn name(&self) -> &'static str;

    /// Wire classification used by type negotiation
    fn wire_type(&self) -> WireType;

    /// Totally orders two values of this type (or NULL)
    fn compare(&self, a: &Value, b: &Value) -> SpatialResult<Ordering>;

    /// Converts a value into this type; no coercion between shapes
    fn convert(&self, v: Value) -> SpatialResult<Value>;

    /// Encodes a value for the client wire
    fn sql(&self, v: &Value) -> SpatialResult<WireValue>;

    /// Default value for a column of this type
    fn zero(&self) -> Value {
        Value::Null
    }
}

/// Shared NULL ordering.
///
/// Returns `None` when neither side is NULL and the caller must compare.
pub fn compare_nulls(a: &Value, b: &Value) -> Option<Ordering> {
    match (a.is_null(), b.is_null()) {
        (true, true) => Some(Ordering::Equal),
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        (false, false) => None,
    }
}

/// Returns the descriptor for a geometric value
pub fn descriptor_for(v: &Value) -> Option<&'static dyn SqlType> {
    match v {
        Value::Point(_) => Some(&POINT_TYPE),
        Value::Linestring(_) => Some(&LINESTRING_TYPE),
        Value::Polygon(_) => Some(&POLYGON_TYPE),
        _ => None,
    }
}

pub(crate) fn compare_coords(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

pub(crate) fn compare_points(a: &Point, b: &Point) -> Ordering {
    compare_coords(a.x, b.x).then_with(|| compare_coords(a.y, b.y))
}

pub(crate) fn compare_linestrings(a: &Linestring, b: &Linestring) -> Ordering {
    a.points
        .iter()
        .zip(&b.points)
        .map(|(pa, pb)| compare_points(pa, pb))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or_else(|| a.points.len().cmp(&b.points.len()))
}

pub(crate) fn compare_polygons(a: &Polygon, b: &Polygon) -> Ordering {
    a.rings
        .iter()
        .zip(&b.rings)
        .map(|(ra, rb)| compare_linestrings(ra, rb))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or_else(|| a.rings.len().cmp(&b.rings.len()))
}

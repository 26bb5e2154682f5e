//! Geometric value types for aerodb
//!
//! Point, Linestring and Polygon are plain immutable records. They carry
//! no behavior beyond equality and WKT-style display; ordering, conversion
//! and wire encoding live in the type descriptors (`sql::types`).
//!
//! # Invariants
//!
//! - Values are never mutated after construction
//! - Point equality is exact floating-point equality (no epsilon)
//! - Polygon rings are closed linear rings (checked by the constructor,
//!   not by this module)

pub mod algorithms;
pub mod encoding;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use algorithms::{
    check_ring, is_linear_ring, is_simple_ring, on_segment, orientation, segments_intersect,
    Orientation, RingDefect, RingValidation,
};
pub use encoding::{decode_geometry, encode_geometry, Geometry, DEFAULT_SRID};

/// A point in the plane.
///
/// See <https://dev.mysql.com/doc/refman/8.0/en/gis-class-point.html>
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POINT({} {})", self.x, self.y)
    }
}

/// An ordered path of points.
///
/// Used as a polygon ring it must be empty or hold at least 4 points with
/// the first equal to the last.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Linestring {
    pub points: Vec<Point>,
}

impl Linestring {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Builds a linestring from raw coordinate pairs
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self {
            points: coords.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the first and last points are equal.
    ///
    /// An empty linestring is considered closed.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => true,
        }
    }
}

impl fmt::Display for Linestring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LINESTRING(")?;
        write_coords(f, &self.points)?;
        write!(f, ")")
    }
}

/// An ordered set of rings; the first ring is the exterior by convention.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub rings: Vec<Linestring>,
}

impl Polygon {
    pub fn new(rings: Vec<Linestring>) -> Self {
        Self { rings }
    }

    /// Returns the exterior ring, if any
    pub fn exterior(&self) -> Option<&Linestring> {
        self.rings.first()
    }

    /// Returns the interior rings (holes)
    pub fn interiors(&self) -> &[Linestring] {
        self.rings.get(1..).unwrap_or(&[])
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POLYGON(")?;
        for (i, ring) in self.rings.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "(")?;
            write_coords(f, &ring.points)?;
            write!(f, ")")?;
        }
        write!(f, ")")
    }
}

fn write_coords(f: &mut fmt::Formatter<'_>, points: &[Point]) -> fmt::Result {
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{} {}", p.x, p.y)?;
    }
    Ok(())
}

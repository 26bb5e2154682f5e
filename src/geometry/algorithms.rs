//! Planar predicates used to validate polygon rings
//!
//! All functions are pure and operate on exact f64 arithmetic.
//! No tolerance is applied anywhere.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Linestring, Point};

/// Turn direction formed by three ordered points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// On one line (also covers axis-aligned perpendicular configurations)
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Classifies the turn p1 -> p2 -> p3.
///
/// Compares the slopes of (p1, p2) and (p2, p3): zero is collinear,
/// positive clockwise, negative counter-clockwise.
pub fn orientation(p1: Point, p2: Point, p3: Point) -> Orientation {
    let val = (p2.y - p1.y) * (p3.x - p2.x) - (p3.y - p2.y) * (p2.x - p1.x);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Returns true if c lies strictly inside the bounding box of segment ab.
///
/// Only meaningful once a, b and c are known to be collinear. The bounds
/// are strict on both axes, so axis-aligned segments never contain c.
pub fn on_segment(a: Point, b: Point, c: Point) -> bool {
    c.x > a.x.min(b.x) && c.x < a.x.max(b.x) && c.y > a.y.min(b.y) && c.y < a.y.max(b.y)
}

/// Returns true if segment ab intersects segment cd.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let abc = orientation(a, b, c);
    let abd = orientation(a, b, d);
    let cda = orientation(c, d, a);
    let cdb = orientation(c, d, b);

    // Endpoints on opposite sides of each other's line
    if abc != abd && cda != cdb {
        return true;
    }

    // Touching or overlapping collinear cases
    (abc == Orientation::Collinear && on_segment(a, b, c))
        || (abd == Orientation::Collinear && on_segment(a, b, d))
        || (cda == Orientation::Collinear && on_segment(c, d, a))
        || (cdb == Orientation::Collinear && on_segment(c, d, b))
}

/// How thoroughly polygon rings are validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingValidation {
    /// Point count and closure only (MySQL-compatible)
    #[default]
    Closure,
    /// Closure plus rejection of self-intersecting rings
    Simple,
}

impl RingValidation {
    pub fn as_str(&self) -> &'static str {
        match self {
            RingValidation::Closure => "closure",
            RingValidation::Simple => "simple",
        }
    }
}

/// Reason a linestring is not an acceptable ring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingDefect {
    #[error("ring has {0} points, needs 0 or at least 4")]
    TooFewPoints(usize),

    #[error("ring is not closed")]
    NotClosed,

    #[error("ring segments {first} and {second} intersect")]
    SelfIntersecting { first: usize, second: usize },
}

/// Minimum point count of a non-empty ring: three vertices plus the
/// repeated closing vertex.
pub const MIN_RING_POINTS: usize = 4;

/// Checks a ring candidate, reporting the first defect found.
pub fn check_ring(line: &Linestring, validation: RingValidation) -> Result<(), RingDefect> {
    let n = line.len();
    if n != 0 && n < MIN_RING_POINTS {
        return Err(RingDefect::TooFewPoints(n));
    }
    if !line.is_closed() {
        return Err(RingDefect::NotClosed);
    }

    match validation {
        RingValidation::Closure => Ok(()),
        RingValidation::Simple => find_self_intersection(&line.points),
    }
}

/// O(n²) scan over all pairs of non-adjacent segments.
///
/// Segment i runs from points[i] to points[i + 1]. The first and last
/// segments share the closing vertex and count as adjacent.
fn find_self_intersection(points: &[Point]) -> Result<(), RingDefect> {
    let segments = points.len().saturating_sub(1);

    for i in 0..segments {
        for j in (i + 2)..segments {
            if i == 0 && j == segments - 1 {
                continue;
            }
            if segments_intersect(points[i], points[i + 1], points[j], points[j + 1]) {
                return Err(RingDefect::SelfIntersecting { first: i, second: j });
            }
        }
    }
    Ok(())
}

/// Returns true if the line is empty, or closed with at least 4 points.
///
/// Self-intersecting rings are accepted, matching MySQL.
pub fn is_linear_ring(line: &Linestring) -> bool {
    check_ring(line, RingValidation::Closure).is_ok()
}

/// Like [`is_linear_ring`], but also rejects self-intersecting rings.
pub fn is_simple_ring(line: &Linestring) -> bool {
    check_ring(line, RingValidation::Simple).is_ok()
}

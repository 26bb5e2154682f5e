//! Geometry Invariant Tests
//!
//! Tests for the ordering and validity invariants of geometric values:
//! - Point ordering is a total order (antisymmetric, transitive, reflexive)
//! - Ordering is lexicographic on (x, y)
//! - NaN coordinates sort last and compare equal to each other
//! - Ring validity rejects short and open rings
//! - Orientation and intersection predicates handle degenerate input

use std::cmp::Ordering;

use aerodb_spatial::geometry::{
    check_ring, is_linear_ring, is_simple_ring, orientation, segments_intersect, Linestring,
    Orientation, Point, RingDefect, RingValidation,
};
use aerodb_spatial::sql::{SqlType, Value, LINESTRING_TYPE, POINT_TYPE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// Helper Functions
// =============================================================================

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Small integer grid so that ties on x and y are frequent
fn random_points(seed: u64, count: usize) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.gen_range(-3..=3) as f64;
            let y = rng.gen_range(-3..=3) as f64;
            Value::Point(p(x, y))
        })
        .collect()
}

fn cmp(a: &Value, b: &Value) -> Ordering {
    POINT_TYPE.compare(a, b).unwrap()
}

// =============================================================================
// Total Order Tests
// =============================================================================

/// compare(p, p) is Equal for every point.
#[test]
fn test_point_order_reflexive() {
    for v in random_points(1, 100) {
        assert_eq!(cmp(&v, &v), Ordering::Equal);
    }
}

/// compare(a, b) is the reverse of compare(b, a).
#[test]
fn test_point_order_antisymmetric() {
    let points = random_points(2, 40);
    for a in &points {
        for b in &points {
            assert_eq!(cmp(a, b), cmp(b, a).reverse());
        }
    }
}

/// a <= b and b <= c implies a <= c.
#[test]
fn test_point_order_transitive() {
    let points = random_points(3, 20);
    for a in &points {
        for b in &points {
            for c in &points {
                if cmp(a, b) != Ordering::Greater && cmp(b, c) != Ordering::Greater {
                    assert_ne!(cmp(a, c), Ordering::Greater, "{} {} {}", a, b, c);
                }
            }
        }
    }
}

/// Ordering agrees with lexicographic (x, y) order.
#[test]
fn test_point_order_lexicographic() {
    let points = random_points(4, 60);
    for a in &points {
        for b in &points {
            let (pa, pb) = (a.as_point().unwrap(), b.as_point().unwrap());
            let expected = pa
                .x
                .partial_cmp(&pb.x)
                .unwrap()
                .then(pa.y.partial_cmp(&pb.y).unwrap());
            assert_eq!(cmp(a, b), expected);
        }
    }
}

/// NULL sorts first, NaN coordinates sort after every number.
#[test]
fn test_sort_with_nan_and_infinity() {
    let mut values = vec![
        Value::Point(p(f64::NAN, 0.0)),
        Value::Point(p(f64::INFINITY, 0.0)),
        Value::Null,
        Value::Point(p(f64::NEG_INFINITY, 5.0)),
        Value::Point(p(0.0, f64::NAN)),
        Value::Point(p(0.0, 1.0)),
    ];
    values.sort_by(cmp);

    assert!(values[0].is_null());
    assert_eq!(values[1], Value::Point(p(f64::NEG_INFINITY, 5.0)));
    assert_eq!(values[2], Value::Point(p(0.0, 1.0)));
    // (0, NaN) sorts after (0, 1) but before larger x
    assert!(values[3].as_point().unwrap().y.is_nan());
    assert_eq!(values[4], Value::Point(p(f64::INFINITY, 0.0)));
    assert!(values[5].as_point().unwrap().x.is_nan());
}

/// Linestrings of random points also form a total order.
#[test]
fn test_linestring_order_antisymmetric() {
    let mut rng = StdRng::seed_from_u64(5);
    let lines: Vec<Value> = (0..30)
        .map(|_| {
            let len = rng.gen_range(0..4);
            let coords: Vec<(f64, f64)> = (0..len)
                .map(|_| (rng.gen_range(0..2) as f64, rng.gen_range(0..2) as f64))
                .collect();
            Value::Linestring(Linestring::from_coords(&coords))
        })
        .collect();

    for a in &lines {
        for b in &lines {
            let ab = LINESTRING_TYPE.compare(a, b).unwrap();
            let ba = LINESTRING_TYPE.compare(b, a).unwrap();
            assert_eq!(ab, ba.reverse());
            assert_eq!(ab == Ordering::Equal, a == b);
        }
    }
}

// =============================================================================
// Ring Validity Tests
// =============================================================================

/// Rings with 1-3 points are never valid.
#[test]
fn test_short_rings_invalid() {
    let coords = [(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)];
    for n in 1..=3 {
        let line = Linestring::from_coords(&coords[..n]);
        assert!(!is_linear_ring(&line), "{} points", n);
    }
}

/// The closed 4-point ring is valid in both modes.
#[test]
fn test_closed_ring_valid() {
    let ring = Linestring::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)]);
    assert!(is_linear_ring(&ring));
    assert!(is_simple_ring(&ring));
}

/// A 4-point sequence with different endpoints is not a ring.
#[test]
fn test_open_ring_invalid() {
    let open = Linestring::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    assert!(!is_linear_ring(&open));
}

/// A self-intersecting ring passes closure but fails the simple check.
#[test]
fn test_self_intersection_is_mode_dependent() {
    let figure_eight = Linestring::from_coords(&[
        (0.0, 0.0),
        (2.0, 2.0),
        (2.0, 0.0),
        (0.0, 2.0),
        (0.0, 0.0),
    ]);

    assert_eq!(check_ring(&figure_eight, RingValidation::Closure), Ok(()));
    assert!(matches!(
        check_ring(&figure_eight, RingValidation::Simple),
        Err(RingDefect::SelfIntersecting { .. })
    ));
}

// =============================================================================
// Predicate Tests
// =============================================================================

#[test]
fn test_orientation_classes() {
    assert_eq!(orientation(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)), Orientation::Collinear);

    let turn = orientation(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0));
    let mirror = orientation(p(0.0, 0.0), p(1.0, 0.0), p(1.0, -1.0));
    assert_ne!(turn, Orientation::Collinear);
    assert_ne!(mirror, Orientation::Collinear);
    assert_ne!(turn, mirror);
}

#[test]
fn test_intersection_cases() {
    // Disjoint bounding boxes
    assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(5.0, 5.0), p(6.0, 4.0)));
    // Crossing diagonals of the unit square
    assert!(segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 0.0), p(0.0, 1.0)));
    // Collinear overlap
    assert!(segments_intersect(p(0.0, 0.0), p(4.0, 2.0), p(2.0, 1.0), p(6.0, 3.0)));
}

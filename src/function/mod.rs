//! Geometry constructor functions
//!
//! `POINT(x, y)`, `LINESTRING(p1, p2, ...)` and `POLYGON(ring, ...)`.
//!
//! Constructors hold only their immutable children. Children are
//! evaluated in argument order and the first failure is returned, so
//! error reporting is deterministic. No partial value is ever produced.

mod linestring;
mod point;
mod polygon;

pub use linestring::LinestringConstructor;
pub use point::PointConstructor;
pub use polygon::PolygonConstructor;

use crate::expression::ExprRef;

pub(crate) fn all_resolved(args: &[ExprRef]) -> bool {
    args.iter().all(|arg| arg.resolved())
}

pub(crate) fn any_nullable(args: &[ExprRef]) -> bool {
    args.iter().any(|arg| arg.is_nullable())
}

/// Renders `NAME(arg1,arg2,...)`
pub(crate) fn display_call(name: &str, args: &[ExprRef]) -> String {
    let rendered: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    format!("{}({})", name, rendered.join(","))
}

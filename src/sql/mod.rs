//! Engine-facing value layer
//!
//! Defines the dynamic [`Value`] carried in rows, the evaluation
//! [`Context`], the client wire representation and the value-type
//! descriptors for the geometric types.

mod wire;
pub mod types;

pub use types::{
    compare_nulls, descriptor_for, LinestringType, PointType, PolygonType, SqlType,
    LINESTRING_TYPE, POINT_TYPE, POLYGON_TYPE,
};
pub use wire::{WireType, WireValue};

use std::fmt;
use std::sync::Arc;

use crate::config::SpatialConfig;
use crate::geometry::{Geometry, Linestring, Point, Polygon};

/// A single SQL value as carried through expression evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int64(i64),
    Float64(f64),
    Text(String),
    Point(Point),
    Linestring(Linestring),
    Polygon(Polygon),
}

impl Value {
    /// Returns the lowercase shape name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int64(_) => "int64",
            Value::Float64(_) => "float64",
            Value::Text(_) => "text",
            Value::Point(_) => "point",
            Value::Linestring(_) => "linestring",
            Value::Polygon(_) => "polygon",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Value::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_linestring(&self) -> Option<&Linestring> {
        match self {
            Value::Linestring(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Value::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Point> for Value {
    fn from(p: Point) -> Self {
        Value::Point(p)
    }
}

impl From<Linestring> for Value {
    fn from(l: Linestring) -> Self {
        Value::Linestring(l)
    }
}

impl From<Polygon> for Value {
    fn from(p: Polygon) -> Self {
        Value::Polygon(p)
    }
}

impl From<Geometry> for Value {
    fn from(g: Geometry) -> Self {
        match g {
            Geometry::Point(p) => Value::Point(p),
            Geometry::Linestring(l) => Value::Linestring(l),
            Geometry::Polygon(p) => Value::Polygon(p),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "'{}'", s),
            Value::Point(p) => write!(f, "{}", p),
            Value::Linestring(l) => write!(f, "{}", l),
            Value::Polygon(p) => write!(f, "{}", p),
        }
    }
}

/// A row of values, addressed by column index
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

/// Per-query evaluation context
///
/// Cheap to clone; the configuration is shared.
#[derive(Debug, Clone, Default)]
pub struct Context {
    config: Arc<SpatialConfig>,
}

impl Context {
    pub fn new(config: SpatialConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Create a context sharing an existing configuration
    pub fn with_shared_config(config: Arc<SpatialConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SpatialConfig {
        &self.config
    }
}

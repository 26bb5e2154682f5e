//! POINT constructor

use std::fmt;
use std::sync::Arc;

use super::{all_resolved, any_nullable, display_call};
use crate::errors::{SpatialError, SpatialResult};
use crate::expression::{ExprRef, Expression, FunctionExpression};
use crate::geometry::Point;
use crate::sql::{Context, Row, SqlType, Value, POINT_TYPE};

const CONTEXT: &str = "point constructor";

/// Builds a point from two numeric coordinates
#[derive(Debug, Clone)]
pub struct PointConstructor {
    x: ExprRef,
    y: ExprRef,
}

impl PointConstructor {
    pub fn new(x: ExprRef, y: ExprRef) -> Self {
        Self { x, y }
    }

    /// Builds from a variadic argument list, requiring exactly two
    pub fn from_args(args: Vec<ExprRef>) -> SpatialResult<Self> {
        match <[ExprRef; 2]>::try_from(args) {
            Ok([x, y]) => Ok(Self::new(x, y)),
            Err(args) => Err(SpatialError::InvalidArgumentCount {
                function: "point",
                expected: "2",
                actual: args.len(),
            }),
        }
    }

    fn eval_coord(arg: &ExprRef, ctx: &Context, row: &Row) -> SpatialResult<f64> {
        match arg.eval(ctx, row)? {
            Value::Float64(v) => Ok(v),
            Value::Int64(v) => Ok(v as f64),
            other => Err(SpatialError::TypeMismatch {
                context: CONTEXT,
                expected: "number",
                actual: other.type_name(),
            }),
        }
    }
}

impl Expression for PointConstructor {
    fn resolved(&self) -> bool {
        all_resolved(&self.children())
    }

    fn is_nullable(&self) -> bool {
        any_nullable(&self.children())
    }

    fn children(&self) -> Vec<ExprRef> {
        vec![Arc::clone(&self.x), Arc::clone(&self.y)]
    }

    fn with_children(&self, children: Vec<ExprRef>) -> SpatialResult<ExprRef> {
        Ok(Arc::new(Self::from_args(children)?))
    }

    fn eval(&self, ctx: &Context, row: &Row) -> SpatialResult<Value> {
        let x = Self::eval_coord(&self.x, ctx, row)?;
        let y = Self::eval_coord(&self.y, ctx, row)?;
        Ok(Value::Point(Point::new(x, y)))
    }
}

impl FunctionExpression for PointConstructor {
    fn function_name(&self) -> &'static str {
        "point"
    }

    fn description(&self) -> &'static str {
        "returns a new point."
    }

    fn sql_type(&self) -> &'static dyn SqlType {
        &POINT_TYPE
    }
}

impl fmt::Display for PointConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_call("POINT", &self.children()))
    }
}

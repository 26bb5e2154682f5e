//! LINESTRING constructor

use std::fmt;
use std::sync::Arc;

use super::{all_resolved, any_nullable, display_call};
use crate::errors::{SpatialError, SpatialResult};
use crate::expression::{ExprRef, Expression, FunctionExpression};
use crate::geometry::Linestring;
use crate::sql::{Context, Row, SqlType, Value, LINESTRING_TYPE};

const CONTEXT: &str = "linestring constructor";

const MIN_POINTS: usize = 2;

/// Builds a linestring from two or more points
#[derive(Debug, Clone)]
pub struct LinestringConstructor {
    args: Vec<ExprRef>,
}

impl LinestringConstructor {
    pub fn new(args: Vec<ExprRef>) -> SpatialResult<Self> {
        if args.len() < MIN_POINTS {
            return Err(SpatialError::InvalidArgumentCount {
                function: "linestring",
                expected: "2 or more",
                actual: args.len(),
            });
        }
        Ok(Self { args })
    }
}

impl Expression for LinestringConstructor {
    fn resolved(&self) -> bool {
        all_resolved(&self.args)
    }

    fn is_nullable(&self) -> bool {
        any_nullable(&self.args)
    }

    fn children(&self) -> Vec<ExprRef> {
        self.args.clone()
    }

    fn with_children(&self, children: Vec<ExprRef>) -> SpatialResult<ExprRef> {
        Ok(Arc::new(Self::new(children)?))
    }

    fn eval(&self, ctx: &Context, row: &Row) -> SpatialResult<Value> {
        let mut points = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            match arg.eval(ctx, row)? {
                Value::Point(p) => points.push(p),
                other => {
                    return Err(SpatialError::TypeMismatch {
                        context: CONTEXT,
                        expected: "point",
                        actual: other.type_name(),
                    })
                }
            }
        }
        Ok(Value::Linestring(Linestring::new(points)))
    }
}

impl FunctionExpression for LinestringConstructor {
    fn function_name(&self) -> &'static str {
        "linestring"
    }

    fn description(&self) -> &'static str {
        "returns a new linestring."
    }

    fn sql_type(&self) -> &'static dyn SqlType {
        &LINESTRING_TYPE
    }
}

impl fmt::Display for LinestringConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_call("LINESTRING", &self.args))
    }
}

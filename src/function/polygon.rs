//! POLYGON constructor

use std::fmt;
use std::sync::Arc;

use super::{all_resolved, any_nullable, display_call};
use crate::errors::{SpatialError, SpatialResult};
use crate::expression::{ExprRef, Expression, FunctionExpression};
use crate::geometry::{check_ring, Polygon};
use crate::sql::{Context, Row, SqlType, Value, POLYGON_TYPE};

const CONTEXT: &str = "polygon constructor";

/// Builds a polygon from one or more linear-ring linestrings
#[derive(Debug, Clone)]
pub struct PolygonConstructor {
    args: Vec<ExprRef>,
}

impl PolygonConstructor {
    /// Requires at least one ring argument
    pub fn new(args: Vec<ExprRef>) -> SpatialResult<Self> {
        if args.is_empty() {
            return Err(SpatialError::InvalidArgumentCount {
                function: "polygon",
                expected: "1 or more",
                actual: 0,
            });
        }
        Ok(Self { args })
    }
}

impl Expression for PolygonConstructor {
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
        let validation = ctx.config().ring_validation;
        let mut rings = Vec::with_capacity(self.args.len());

        for arg in &self.args {
            match arg.eval(ctx, row)? {
                Value::Linestring(line) => {
                    check_ring(&line, validation)
                        .map_err(|defect| SpatialError::InvalidRing {
                            context: CONTEXT,
                            defect,
                        })?;
                    rings.push(line);
                }
                other => {
                    return Err(SpatialError::TypeMismatch {
                        context: CONTEXT,
                        expected: "linestring",
                        actual: other.type_name(),
                    })
                }
            }
        }

        Ok(Value::Polygon(Polygon::new(rings)))
    }
}

impl FunctionExpression for PolygonConstructor {
    fn function_name(&self) -> &'static str {
        "polygon"
    }

    fn description(&self) -> &'static str {
        "returns a new polygon."
    }

    fn sql_type(&self) -> &'static dyn SqlType {
        &POLYGON_TYPE
    }
}

impl fmt::Display for PolygonConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_call("POLYGON", &self.args))
    }
}

//! Constant expression

use std::fmt;
use std::sync::Arc;

use super::{expect_no_children, ExprRef, Expression};
use crate::errors::SpatialResult;
use crate::sql::{Context, Row, Value};

/// A constant value
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: Value,
}

impl Literal {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Shorthand for a shared literal node
    pub fn arc(value: impl Into<Value>) -> ExprRef {
        Arc::new(Self::new(value))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Expression for Literal {
    fn resolved(&self) -> bool {
        true
    }

    fn is_nullable(&self) -> bool {
        self.value.is_null()
    }

    fn children(&self) -> Vec<ExprRef> {
        Vec::new()
    }

    fn with_children(&self, children: Vec<ExprRef>) -> SpatialResult<ExprRef> {
        expect_no_children("literal", &children)?;
        Ok(Arc::new(self.clone()))
    }

    fn eval(&self, _ctx: &Context, _row: &Row) -> SpatialResult<Value> {
        Ok(self.value.clone())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_literal_eval() {
        let lit = Literal::new(Point::new(1.0, 2.0));
        let value = lit.eval(&Context::default(), &Row::default()).unwrap();
        assert_eq!(value, Value::Point(Point::new(1.0, 2.0)));
        assert!(lit.resolved());
        assert!(!lit.is_nullable());
    }

    #[test]
    fn test_null_literal_nullable() {
        assert!(Literal::new(Value::Null).is_nullable());
    }

    #[test]
    fn test_with_children_rejects_children() {
        let lit = Literal::new(1i64);
        assert!(lit.with_children(Vec::new()).is_ok());

        let err = lit.with_children(vec![Literal::arc(2i64)]).unwrap_err();
        assert_eq!(err.code(), "AERO_INVALID_ARGUMENT_COUNT");
    }
}

//! Expression capability traits
//!
//! Constructors depend only on this capability set, never on concrete
//! expression kinds. Children are shared, immutable trait objects, so an
//! expression tree can be evaluated concurrently across rows.

mod field;
mod literal;

pub use field::{GetField, UnresolvedColumn};
pub use literal::Literal;

use std::fmt;
use std::sync::Arc;

use crate::errors::{SpatialError, SpatialResult};
use crate::sql::{Context, Row, SqlType, Value};

/// Shared handle to an expression node
pub type ExprRef = Arc<dyn Expression>;

/// An evaluable expression node
pub trait Expression: fmt::Display + fmt::Debug + Send + Sync {
    /// True once this node and all its children are bound
    fn resolved(&self) -> bool;

    /// True if evaluation may produce NULL
    fn is_nullable(&self) -> bool;

    fn children(&self) -> Vec<ExprRef>;

    /// Rebuilds this node with new children, re-validating arity.
    ///
    /// Never mutates `self`.
    fn with_children(&self, children: Vec<ExprRef>) -> SpatialResult<ExprRef>;

    /// Evaluates the expression against one row
    fn eval(&self, ctx: &Context, row: &Row) -> SpatialResult<Value>;
}

/// An expression exposed as a SQL-callable function
pub trait FunctionExpression: Expression {
    /// Lowercase function name as registered
    fn function_name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Descriptor of the values this function produces
    fn sql_type(&self) -> &'static dyn SqlType;
}

/// Arity check shared by leaf expressions
pub(crate) fn expect_no_children(node: &'static str, children: &[ExprRef]) -> SpatialResult<()> {
    if children.is_empty() {
        Ok(())
    } else {
        Err(SpatialError::InvalidArgumentCount {
            function: node,
            expected: "0",
            actual: children.len(),
        })
    }
}

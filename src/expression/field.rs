//! Column reference expressions

use std::fmt;
use std::sync::Arc;

use super::{expect_no_children, ExprRef, Expression};
use crate::errors::{SpatialError, SpatialResult};
use crate::sql::{Context, Row, Value};

/// A bound column reference, read from the row by index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetField {
    index: usize,
    name: String,
    nullable: bool,
}

impl GetField {
    pub fn new(index: usize, name: impl Into<String>, nullable: bool) -> Self {
        Self {
            index,
            name: name.into(),
            nullable,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Expression for GetField {
    fn resolved(&self) -> bool {
        true
    }

    fn is_nullable(&self) -> bool {
        self.nullable
    }

    fn children(&self) -> Vec<ExprRef> {
        Vec::new()
    }

    fn with_children(&self, children: Vec<ExprRef>) -> SpatialResult<ExprRef> {
        expect_no_children("get_field", &children)?;
        Ok(Arc::new(self.clone()))
    }

    fn eval(&self, _ctx: &Context, row: &Row) -> SpatialResult<Value> {
        row.get(self.index)
            .cloned()
            .ok_or(SpatialError::FieldOutOfRange {
                index: self.index,
                len: row.len(),
            })
    }
}

impl fmt::Display for GetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A column name not yet bound to a row position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedColumn {
    name: String,
}

impl UnresolvedColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Expression for UnresolvedColumn {
    fn resolved(&self) -> bool {
        false
    }

    fn is_nullable(&self) -> bool {
        true
    }

    fn children(&self) -> Vec<ExprRef> {
        Vec::new()
    }

    fn with_children(&self, children: Vec<ExprRef>) -> SpatialResult<ExprRef> {
        expect_no_children("unresolved_column", &children)?;
        Ok(Arc::new(self.clone()))
    }

    fn eval(&self, _ctx: &Context, _row: &Row) -> SpatialResult<Value> {
        Err(SpatialError::UnresolvedExpression(self.name.clone()))
    }
}

impl fmt::Display for UnresolvedColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

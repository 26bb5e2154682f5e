//! POINT type descriptor
//!
//! See <https://dev.mysql.com/doc/refman/8.0/en/gis-class-point.html>

use std::cmp::Ordering;
use std::fmt;

use super::{compare_nulls, compare_points, SqlType};
use crate::errors::{SpatialError, SpatialResult};
use crate::geometry::{encode_geometry, Point};
use crate::sql::{Value, WireType, WireValue};

/// Descriptor for the POINT type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointType;

/// The shared POINT descriptor
pub static POINT_TYPE: PointType = PointType;

impl PointType {
    fn expect_point(v: &Value) -> SpatialResult<&Point> {
        v.as_point().ok_or(SpatialError::TypeMismatch {
            context: "point comparison",
            expected: "point",
            actual: v.type_name(),
        })
    }
}

impl SqlType for PointType {
    fn name(&self) -> &'static str {
        "POINT"
    }

    fn wire_type(&self) -> WireType {
        WireType::Geometry
    }

    fn compare(&self, a: &Value, b: &Value) -> SpatialResult<Ordering> {
        if let Some(ord) = compare_nulls(a, b) {
            return Ok(ord);
        }
        let a = Self::expect_point(a)?;
        let b = Self::expect_point(b)?;
        Ok(compare_points(a, b))
    }

    fn convert(&self, v: Value) -> SpatialResult<Value> {
        match v {
            Value::Point(_) => Ok(v),
            other => Err(SpatialError::Conversion {
                target: "point",
                actual: other.type_name(),
            }),
        }
    }

    fn sql(&self, v: &Value) -> SpatialResult<WireValue> {
        match v {
            Value::Null => Ok(WireValue::null()),
            Value::Point(p) => Ok(WireValue::trusted(WireType::Geometry, encode_geometry(p))),
            other => Err(SpatialError::Conversion {
                target: "point",
                actual: other.type_name(),
            }),
        }
    }
}

impl fmt::Display for PointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{decode_geometry, Geometry, Linestring};

    fn pt(x: f64, y: f64) -> Value {
        Value::Point(Point::new(x, y))
    }

    #[test]
    fn test_compare_lexicographic() {
        assert_eq!(POINT_TYPE.compare(&pt(1.0, 5.0), &pt(2.0, 0.0)).unwrap(), Ordering::Less);
        assert_eq!(POINT_TYPE.compare(&pt(2.0, 0.0), &pt(1.0, 5.0)).unwrap(), Ordering::Greater);
        assert_eq!(POINT_TYPE.compare(&pt(1.0, 1.0), &pt(1.0, 2.0)).unwrap(), Ordering::Less);
        assert_eq!(POINT_TYPE.compare(&pt(1.0, 1.0), &pt(1.0, 1.0)).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_compare_nulls() {
        assert_eq!(POINT_TYPE.compare(&Value::Null, &pt(0.0, 0.0)).unwrap(), Ordering::Less);
        assert_eq!(POINT_TYPE.compare(&Value::Null, &Value::Null).unwrap(), Ordering::Equal);
        // NULL short-circuits before the shape check
        assert_eq!(
            POINT_TYPE.compare(&Value::Int64(1), &Value::Null).unwrap(),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_non_point_fails() {
        let err = POINT_TYPE.compare(&pt(0.0, 0.0), &Value::from("POINT(0 0)")).unwrap_err();
        assert_eq!(err.code(), "AERO_TYPE_MISMATCH");
        assert!(err.to_string().contains("non-point"));

        let err = POINT_TYPE
            .compare(&Value::Linestring(Linestring::default()), &pt(0.0, 0.0))
            .unwrap_err();
        assert!(err.to_string().contains("linestring"));
    }

    #[test]
    fn test_compare_nan_convention() {
        let nan = pt(f64::NAN, 0.0);
        assert_eq!(POINT_TYPE.compare(&nan, &pt(f64::INFINITY, 9.0)).unwrap(), Ordering::Greater);
        assert_eq!(POINT_TYPE.compare(&nan, &nan).unwrap(), Ordering::Equal);
        assert_eq!(POINT_TYPE.compare(&pt(0.0, f64::NAN), &pt(0.0, 1.0)).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_convert_identity() {
        let p = pt(3.5, -2.0);
        assert_eq!(POINT_TYPE.convert(p.clone()).unwrap(), p);
    }

    #[test]
    fn test_convert_rejects_other_shapes() {
        for v in [Value::Null, Value::Int64(1), Value::Float64(1.0), Value::from("x")] {
            let err = POINT_TYPE.convert(v).unwrap_err();
            assert_eq!(err.code(), "AERO_CONVERSION_FAILED");
        }
    }

    #[test]
    fn test_sql_encoding() {
        let wire = POINT_TYPE.sql(&pt(1.0, 2.0)).unwrap();
        assert_eq!(wire.wire_type(), WireType::Geometry);

        let decoded = decode_geometry(wire.payload().unwrap()).unwrap();
        assert_eq!(decoded, Geometry::Point(Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_sql_null_is_wire_null() {
        assert_eq!(POINT_TYPE.sql(&Value::Null).unwrap(), WireValue::null());
    }

    #[test]
    fn test_sql_propagates_conversion_error() {
        let err = POINT_TYPE.sql(&Value::from("POINT(1 2)")).unwrap_err();
        assert_eq!(err, SpatialError::Conversion { target: "point", actual: "text" });
    }

    #[test]
    fn test_descriptor_metadata() {
        assert_eq!(POINT_TYPE.name(), "POINT");
        assert_eq!(POINT_TYPE.to_string(), "POINT");
        assert_eq!(POINT_TYPE.wire_type(), WireType::Geometry);
        assert_eq!(POINT_TYPE.zero(), Value::Null);
        assert_eq!(std::mem::size_of::<PointType>(), 0);
    }
}

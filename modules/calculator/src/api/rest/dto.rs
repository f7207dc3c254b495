//! REST DTOs for the calculator module.
//!
//! Transport-specific types (serde + utoipa). The interesting part is
//! [`Number`]: the wire accepts integers, floats, and numeric-looking
//! strings, and echoes integral values back without a trailing `.0`,
//! while the domain only ever sees f64. Integer-vs-float is purely a
//! presentation concern of this layer.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

use crate::domain::Operation;

/// Largest magnitude at which every integral f64 maps to a distinct
/// i64 (2^53). Beyond that, echoing as an integer would fabricate
/// precision the value never had.
const MAX_INTEGRAL: f64 = 9_007_199_254_740_992.0;

/// A numeric operand or result.
///
/// Deserializes from JSON numbers and from strings that parse as
/// numbers (`"2"` → 2); anything else is a schema violation that the
/// `Json` extractor turns into a 422 before handlers run. Serializes
/// integral finite values as JSON integers, everything else as floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(f64);

impl Number {
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_INTEGRAL {
            // integral and in range, checked above
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        // f64 is the single numeric representation at this boundary
        Ok(Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.trim()
            .parse::<f64>()
            .map(Number)
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor)
    }
}

/// Operands for the six two-operand operations.
///
/// Unknown extra fields are ignored rather than rejected.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct BinaryOperands {
    /// First operand
    #[schema(value_type = f64)]
    pub a: Number,
    /// Second operand (divisor, exponent, or percent depending on the operation)
    #[schema(value_type = f64)]
    pub b: Number,
}

/// Operand for square-root.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct UnaryOperands {
    /// The operand
    #[schema(value_type = f64)]
    pub a: Number,
}

/// Echo of the original operand set, keyed by operand name.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct OperandEcho {
    #[schema(value_type = f64)]
    pub a: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub b: Option<Number>,
}

/// The uniform operation envelope shared by all arithmetic endpoints.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct CalculationResponse {
    /// Computed value
    #[schema(value_type = f64)]
    pub result: Number,
    /// Canonical operation name, e.g. "addition"
    #[schema(value_type = String)]
    pub operation: Operation,
    /// Original operands, for client-side display
    pub operands: OperandEcho,
}

impl CalculationResponse {
    pub(crate) fn binary(operation: Operation, operands: BinaryOperands, result: f64) -> Self {
        Self {
            result: result.into(),
            operation,
            operands: OperandEcho {
                a: operands.a,
                b: Some(operands.b),
            },
        }
    }

    pub(crate) fn unary(operation: Operation, operands: UnaryOperands, result: f64) -> Self {
        Self {
            result: result.into(),
            operation,
            operands: OperandEcho {
                a: operands.a,
                b: None,
            },
        }
    }
}

/// Fixed liveness payload for `GET /health`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String)]
    pub status: &'static str,
    #[schema(value_type = String)]
    pub message: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy",
            message: "Calculator API is running",
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_accepts_integers_floats_and_numeric_strings() {
        let n: Number = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(n.get(), 2.0);
        let n: Number = serde_json::from_value(json!(-7)).unwrap();
        assert_eq!(n.get(), -7.0);
        let n: Number = serde_json::from_value(json!(2.5)).unwrap();
        assert_eq!(n.get(), 2.5);
        let n: Number = serde_json::from_value(json!("2")).unwrap();
        assert_eq!(n.get(), 2.0);
        let n: Number = serde_json::from_value(json!("-3.25")).unwrap();
        assert_eq!(n.get(), -3.25);
    }

    #[test]
    fn number_rejects_non_numeric_input() {
        assert!(serde_json::from_value::<Number>(json!("invalid")).is_err());
        assert!(serde_json::from_value::<Number>(json!(true)).is_err());
        assert!(serde_json::from_value::<Number>(json!(null)).is_err());
        assert!(serde_json::from_value::<Number>(json!([1])).is_err());
    }

    #[test]
    fn number_serializes_integral_values_as_integers() {
        assert_eq!(serde_json::to_string(&Number(5.0)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Number(-3.0)).unwrap(), "-3");
        assert_eq!(serde_json::to_string(&Number(2.5)).unwrap(), "2.5");
        // beyond 2^53 integral rendering would lie about precision
        assert_eq!(serde_json::to_string(&Number(1e300)).unwrap(), "1e300");
    }

    #[test]
    fn binary_operands_requires_both_fields() {
        assert!(serde_json::from_value::<BinaryOperands>(json!({"a": 1})).is_err());
        assert!(serde_json::from_value::<BinaryOperands>(json!({"a": 1, "b": 2})).is_ok());
    }

    #[test]
    fn envelope_echoes_operands_and_omits_absent_b() {
        let operands: UnaryOperands = serde_json::from_value(json!({"a": 16})).unwrap();
        let resp = CalculationResponse::unary(Operation::SquareRoot, operands, 4.0);
        let value = serde_json::to_value(resp).unwrap();
        assert_eq!(
            value,
            json!({"result": 4, "operation": "square_root", "operands": {"a": 16}})
        );
    }

    #[test]
    fn health_payload_is_fixed() {
        let value = serde_json::to_value(HealthResponse::default()).unwrap();
        assert_eq!(
            value,
            json!({"status": "healthy", "message": "Calculator API is running"})
        );
    }
}

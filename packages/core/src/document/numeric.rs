//! Numeric narrowing for JSON numbers.
//!
//! Narrowing never fails: integer narrowing keeps the low bits, float to integer
//! saturates, and wide integers lose precision when read as floats.

use serde_json::Number;

#[inline]
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn to_i64(number: &Number) -> i64 {
    if let Some(v) = number.as_i64() {
        v
    } else if let Some(v) = number.as_u64() {
        v as i64
    } else {
        number.as_f64().map_or(0, |v| v as i64)
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn to_i32(number: &Number) -> i32 {
    if number.is_f64() {
        number.as_f64().map_or(0, |v| v as i32)
    } else {
        to_i64(number) as i32
    }
}

#[inline]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn to_f64(number: &Number) -> f64 {
    if let Some(v) = number.as_f64() {
        v
    } else if let Some(v) = number.as_i64() {
        v as f64
    } else {
        number.as_u64().map_or(0.0, |v| v as f64)
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn to_f32(number: &Number) -> f32 {
    to_f64(number) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_narrowing_wraps() {
        let big = Number::from(4_294_967_297_i64);
        assert_eq!(to_i64(&big), 4_294_967_297);
        assert_eq!(to_i32(&big), 1);
    }

    #[test]
    fn test_float_to_integer_truncates_and_saturates() {
        let frac = Number::from_f64(-3.9).unwrap_or_else(|| Number::from(0));
        assert_eq!(to_i32(&frac), -3);
        assert_eq!(to_i64(&frac), -3);

        let huge = Number::from_f64(1e30).unwrap_or_else(|| Number::from(0));
        assert_eq!(to_i32(&huge), i32::MAX);
    }

    #[test]
    fn test_integer_to_float() {
        let n = Number::from(7);
        assert!((to_f64(&n) - 7.0).abs() < f64::EPSILON);
        assert!((to_f32(&n) - 7.0).abs() < f32::EPSILON);
        assert_eq!(to_i64(&Number::from(u64::MAX)), -1);
    }
}

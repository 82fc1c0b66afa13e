//! Numeric range derivation by declared width
//!
//! Descriptor literals are `f64`. Each bound is checked against what the
//! field's width can hold: a bound outside that range (or not finite) is
//! replaced by the width's own minimum/maximum, and an unusable step by the
//! width's default step.

use contracts::shared::metadata::{FieldValue, NumericWidth};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Natural bounds of a width
pub fn width_bounds(width: NumericWidth) -> (f64, f64) {
    match width {
        NumericWidth::I8 => (i8::MIN as f64, i8::MAX as f64),
        NumericWidth::I16 => (i16::MIN as f64, i16::MAX as f64),
        NumericWidth::I32 => (i32::MIN as f64, i32::MAX as f64),
        NumericWidth::I64 => (i64::MIN as f64, i64::MAX as f64),
        NumericWidth::F32 => (-(f32::MAX as f64), f32::MAX as f64),
        NumericWidth::F64 => (f64::MIN, f64::MAX),
    }
}

pub fn default_step(width: NumericWidth) -> f64 {
    if width.is_integer() {
        1.0
    } else {
        0.01
    }
}

pub fn derive_range(width: NumericWidth, min: f64, max: f64, step: f64) -> NumericRange {
    let (lower, upper) = width_bounds(width);
    let mut min = fit(width, min, lower, upper).unwrap_or(lower);
    let mut max = fit(width, max, lower, upper).unwrap_or(upper);
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }

    let step = fit(width, step, lower, upper)
        .filter(|step| *step > 0.0)
        .unwrap_or_else(|| default_step(width));

    NumericRange { min, max, step }
}

/// Literal as a value of `width`, or `None` when it does not fit
pub fn fit(width: NumericWidth, value: f64, lower: f64, upper: f64) -> Option<f64> {
    if !value.is_finite() || value < lower || value > upper {
        return None;
    }
    Some(if width.is_integer() { value.trunc() } else { value })
}

/// Field value carrying `value` in the representation of `width`
pub fn value_of(width: NumericWidth, value: f64) -> FieldValue {
    if width.is_integer() {
        FieldValue::Integer(value.trunc() as i64)
    } else {
        FieldValue::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTHS: [NumericWidth; 6] = [
        NumericWidth::I8,
        NumericWidth::I16,
        NumericWidth::I32,
        NumericWidth::I64,
        NumericWidth::F32,
        NumericWidth::F64,
    ];

    #[test]
    fn every_width_yields_ordered_bounds_and_positive_step() {
        let literals = [
            (f64::NEG_INFINITY, f64::INFINITY, 0.0),
            (-1000.0, 1000.0, -5.0),
            (1e300, -1e300, f64::NAN),
            (10.0, 5.0, 0.5),
            (0.0, 0.0, 1e40),
            (f64::MIN, f64::MAX, f64::MAX),
        ];
        for width in WIDTHS {
            for (min, max, step) in literals {
                let range = derive_range(width, min, max, step);
                assert!(range.min <= range.max, "{:?} {:?}", width, range);
                assert!(range.step > 0.0, "{:?} {:?}", width, range);
            }
        }
    }

    #[test]
    fn out_of_range_bounds_fall_back_to_width_limits() {
        let range = derive_range(NumericWidth::I8, -1000.0, 1000.0, 1.0);
        assert_eq!(range.min, -128.0);
        assert_eq!(range.max, 127.0);

        let range = derive_range(NumericWidth::I16, 0.0, 70.0, 0.0);
        assert_eq!((range.min, range.max, range.step), (0.0, 70.0, 1.0));

        let range = derive_range(NumericWidth::F32, f64::NEG_INFINITY, 1e39, -1.0);
        assert_eq!(range.min, -(f32::MAX as f64));
        assert_eq!(range.max, f32::MAX as f64);
        assert_eq!(range.step, 0.01);
    }

    #[test]
    fn integer_widths_truncate_and_reject_fractional_steps() {
        let range = derive_range(NumericWidth::I32, -2.7, 9.9, 0.5);
        assert_eq!((range.min, range.max, range.step), (-2.0, 9.0, 1.0));

        let range = derive_range(NumericWidth::F64, 0.0, 100.0, 0.25);
        assert_eq!(range.step, 0.25);
    }

    #[test]
    fn swapped_bounds_are_reordered() {
        let range = derive_range(NumericWidth::I64, 10.0, 5.0, 1.0);
        assert_eq!((range.min, range.max), (5.0, 10.0));
    }

    #[test]
    fn values_follow_the_width_representation() {
        assert_eq!(value_of(NumericWidth::I16, 12.9), FieldValue::Integer(12));
        assert_eq!(value_of(NumericWidth::F32, 0.5), FieldValue::Number(0.5));
    }
}

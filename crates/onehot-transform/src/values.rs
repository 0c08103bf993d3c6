//! Rendering of Polars cell values into category keys.

use std::fmt::Display;

use onehot_model::Category;
use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` into a [`Category`].
///
/// Nulls become [`Category::Missing`]. Numbers use their `Display` form,
/// with `-0.0` folded into `0.0` and every NaN rendered as `NaN`. Booleans
/// render as `true`/`false`, and strings are kept verbatim.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use onehot_transform::{Category, category_of};
///
/// assert_eq!(category_of(AnyValue::Null), Category::Missing);
/// assert_eq!(category_of(AnyValue::Int32(42)), Category::value("42"));
/// assert_eq!(category_of(AnyValue::String("red")), Category::value("red"));
/// ```
pub fn category_of(value: AnyValue<'_>) -> Category {
    let rendered = match value {
        AnyValue::Null => return Category::Missing,
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => float_label(v),
        AnyValue::Float64(v) => float_label(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        // Display of other dtypes may wrap the value in quotes
        other => {
            let s = other.to_string();
            if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    };
    Category::Value(rendered)
}

/// `-0.0 == 0.0`, so both zeros must share one label.
fn float_label<T>(v: T) -> String
where
    T: Copy + Default + PartialEq + Display,
{
    let zero = T::default();
    if v == zero { zero.to_string() } else { v.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_keep_their_precision() {
        assert_eq!(category_of(AnyValue::Float64(1.5)), Category::value("1.5"));
        assert_eq!(category_of(AnyValue::Float64(2.0)), Category::value("2"));
        assert_eq!(
            category_of(AnyValue::Float64(1e20)),
            Category::value("100000000000000000000")
        );
    }

    #[test]
    fn signed_zeros_share_a_category() {
        assert_eq!(category_of(AnyValue::Float64(-0.0)), Category::value("0"));
        assert_eq!(category_of(AnyValue::Float32(-0.0)), Category::value("0"));
        assert_eq!(
            category_of(AnyValue::Float64(-0.0)),
            category_of(AnyValue::Float64(0.0))
        );
        assert_eq!(category_of(AnyValue::Float64(-1.5)), Category::value("-1.5"));
        assert_eq!(category_of(AnyValue::Float32(0.1)), Category::value("0.1"));
    }

    #[test]
    fn nan_payloads_share_a_category() {
        assert_eq!(category_of(AnyValue::Float64(f64::NAN)), Category::value("NaN"));
        assert_eq!(category_of(AnyValue::Float64(-f64::NAN)), Category::value("NaN"));
        assert_eq!(category_of(AnyValue::Float32(f32::NAN)), Category::value("NaN"));
    }

    #[test]
    fn booleans_render_as_words() {
        assert_eq!(category_of(AnyValue::Boolean(true)), Category::value("true"));
        assert_eq!(category_of(AnyValue::Boolean(false)), Category::value("false"));
    }

    #[test]
    fn empty_string_is_not_missing() {
        assert_eq!(category_of(AnyValue::String("")), Category::value(""));
        assert_ne!(category_of(AnyValue::String("")), Category::Missing);
    }
}

//! Shared range-validation helper used by all section validators.

use std::fmt::Display;

/// Push an error if `value` is outside `[min, max]`. NaN is always out of range.
pub(crate) fn validate_range<T>(errors: &mut Vec<String>, name: &str, value: T, min: T, max: T)
where
    T: PartialOrd + Display + Copy,
{
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

//! opt
//!
//! Optional-value construction, inspection, and extraction.
//!
//! # Features
//!
//! - Wrap any value into a present [`Option`], unconditionally or on a condition
//! - Typed constructors for the common primitive kinds
//! - Extract a contained value with a caller-supplied fallback
//!
//! # Equality
//!
//! Two optionals are equal when both are absent, or both are present and hold
//! equal values. A present and an absent optional are never equal.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Wrap a value into a present optional.
///
/// Always returns `Some`. This is the generic constructor the typed
/// convenience constructors below specialize.
///
/// # Example
///
/// ```
/// use optkit::opt::wrap;
///
/// assert_eq!(wrap(42), Some(42));
/// assert_eq!(wrap("hello"), Some("hello"));
/// ```
pub fn wrap<T>(value: T) -> Option<T> {
    Some(value)
}

/// Wrap a string into a present optional.
///
/// Accepts anything convertible into an owned `String`.
///
/// # Example
///
/// ```
/// use optkit::opt::wrap_string;
///
/// assert_eq!(wrap_string("hello"), Some("hello".to_string()));
/// ```
pub fn wrap_string(value: impl Into<String>) -> Option<String> {
    wrap(value.into())
}

/// Wrap an integer into a present optional.
pub fn wrap_int(value: i64) -> Option<i64> {
    wrap(value)
}

/// Wrap a boolean into a present optional.
pub fn wrap_bool(value: bool) -> Option<bool> {
    wrap(value)
}

/// Wrap a floating-point number into a present optional.
pub fn wrap_float(value: f64) -> Option<f64> {
    wrap(value)
}

/// Wrap a UTC timestamp into a present optional.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use optkit::opt::wrap_timestamp;
///
/// let now = Utc::now();
/// assert_eq!(wrap_timestamp(now), Some(now));
/// ```
pub fn wrap_timestamp(value: DateTime<Utc>) -> Option<DateTime<Utc>> {
    wrap(value)
}

/// Wrap a vector into a present optional.
///
/// The optional holds the whole sequence, not its elements; an empty vector
/// still produces a present optional.
pub fn wrap_vec<T>(value: Vec<T>) -> Option<Vec<T>> {
    wrap(value)
}

/// Wrap a map into a present optional.
pub fn wrap_map<K, V>(value: HashMap<K, V>) -> Option<HashMap<K, V>> {
    wrap(value)
}

/// Wrap a value when the condition holds, otherwise return an absent optional.
///
/// # Example
///
/// ```
/// use optkit::opt::wrap_if;
///
/// assert_eq!(wrap_if(true, 42), Some(42));
/// assert_eq!(wrap_if(false, 42), None);
/// ```
pub fn wrap_if<T>(condition: bool, value: T) -> Option<T> {
    if condition {
        Some(value)
    } else {
        None
    }
}

/// Check whether an optional holds no value.
///
/// # Example
///
/// ```
/// use optkit::opt::{is_absent, wrap};
///
/// assert!(is_absent(&None::<i64>));
/// assert!(!is_absent(&wrap(42)));
/// ```
pub fn is_absent<T>(opt: &Option<T>) -> bool {
    opt.is_none()
}

/// Return the contained value, or the default when absent.
///
/// # Example
///
/// ```
/// use optkit::opt::value_or_default;
///
/// assert_eq!(value_or_default(Some(42), 0), 42);
/// assert_eq!(value_or_default(None, 7), 7);
/// ```
pub fn value_or_default<T>(opt: Option<T>, default: T) -> T {
    opt.unwrap_or(default)
}

/// Return the contained value, or the default when absent **or zero**.
///
/// A present value that equals `T::default()` (the type's zero value: `0`,
/// `""`, `false`, an empty vector, ...) is treated exactly like an absent
/// optional. This is a deliberate sharp edge inherited from the original
/// design, not a bug: `non_zero_value_or_default(Some(0), 7)` is `7`, even
/// though `0` was explicitly present. Use [`value_or_default`] when a present
/// zero must be honored.
///
/// # Example
///
/// ```
/// use optkit::opt::non_zero_value_or_default;
///
/// assert_eq!(non_zero_value_or_default(Some(5), 7), 5);
/// assert_eq!(non_zero_value_or_default(Some(0), 7), 7);
/// assert_eq!(non_zero_value_or_default(None, 7), 7);
/// ```
pub fn non_zero_value_or_default<T>(opt: Option<T>, default: T) -> T
where
    T: Default + PartialEq,
{
    match opt {
        Some(value) if value != T::default() => value,
        _ => default,
    }
}

/// Compare two optionals for equality.
///
/// Both absent compare equal; one absent and one present compare unequal;
/// both present compare by inner value.
///
/// # Example
///
/// ```
/// use optkit::opt::equal;
///
/// assert!(equal(&None::<i64>, &None));
/// assert!(equal(&Some(42), &Some(42)));
/// assert!(!equal(&Some(42), &Some(43)));
/// assert!(!equal(&None, &Some(42)));
/// ```
pub fn equal<T: PartialEq>(a: &Option<T>, b: &Option<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

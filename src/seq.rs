//! seq
//!
//! Non-mutating transforms over slices and maps.
//!
//! # Features
//!
//! - [`map`], [`filter`], [`reduce`] over borrowed slices
//! - [`map_keys`] key extraction from a map
//! - [`first_or_default`] head access with a fallback
//! - [`try_map`], [`try_reduce`] fallible variants that abort on the first error
//!
//! # Error propagation
//!
//! The infallible transforms require total callbacks; a panic inside one
//! unwinds through the transform unchanged. When a callback can fail, use the
//! `try_` variants: the first `Err` aborts the transform and propagates to the
//! caller with no partial result.

use std::collections::HashMap;

/// Apply `f` to every element, producing a new vector of the same length.
///
/// Elements are visited in order; the input is not mutated.
///
/// # Example
///
/// ```
/// use optkit::seq::map;
///
/// assert_eq!(map(&[1, 2, 3], |x| x * 2), vec![2, 4, 6]);
/// ```
pub fn map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(f).collect()
}

/// Keep the elements for which `pred` holds, preserving relative order.
///
/// The result may be empty; the input is not mutated.
///
/// # Example
///
/// ```
/// use optkit::seq::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4, 5], |x| x % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<T, F>(items: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|&v| pred(v)).cloned().collect()
}

/// Left fold over `items` in order, starting from `initial`.
///
/// An empty slice returns `initial` unchanged.
///
/// # Example
///
/// ```
/// use optkit::seq::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3, 4], |acc, x| acc + x, 0), 10);
/// assert_eq!(reduce(&[], |acc: i64, x| acc + x, 0), 0);
/// ```
pub fn reduce<T, A, F>(items: &[T], mut f: F, initial: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    items.iter().fold(initial, |acc, v| f(acc, v))
}

/// Collect all keys of a map.
///
/// The order of the returned keys is unspecified; callers must not depend on
/// it.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use optkit::seq::map_keys;
///
/// let m = HashMap::from([("a", 1), ("b", 2)]);
/// let mut keys = map_keys(&m);
/// keys.sort();
/// assert_eq!(keys, vec!["a", "b"]);
/// ```
pub fn map_keys<K, V>(m: &HashMap<K, V>) -> Vec<K>
where
    K: Clone,
{
    m.keys().cloned().collect()
}

/// Return the first element, or the default when the slice is empty.
///
/// # Example
///
/// ```
/// use optkit::seq::first_or_default;
///
/// assert_eq!(first_or_default(&[1, 2, 3], 0), 1);
/// assert_eq!(first_or_default(&[], 0), 0);
/// ```
pub fn first_or_default<T: Clone>(items: &[T], default: T) -> T {
    items.first().cloned().unwrap_or(default)
}

/// Fallible [`map`]: the first `Err` aborts the transform and propagates.
///
/// On success the output has the same length and order as the input. On
/// failure no partial result is returned.
///
/// # Errors
///
/// Returns the first error produced by `f`.
///
/// # Example
///
/// ```
/// use optkit::seq::try_map;
///
/// let ok: Result<Vec<i64>, String> = try_map(&[1, 2, 3], |x| Ok(x * 2));
/// assert_eq!(ok, Ok(vec![2, 4, 6]));
///
/// let err: Result<Vec<i64>, String> =
///     try_map(&[1, 2, 3], |x| if *x == 2 { Err("two".into()) } else { Ok(*x) });
/// assert_eq!(err, Err("two".to_string()));
/// ```
pub fn try_map<T, U, E, F>(items: &[T], mut f: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        result.push(f(item)?);
    }
    Ok(result)
}

/// Fallible [`reduce`]: the first `Err` aborts the fold and propagates.
///
/// An empty slice returns `Ok(initial)`.
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub fn try_reduce<T, A, E, F>(items: &[T], mut f: F, initial: A) -> Result<A, E>
where
    F: FnMut(A, &T) -> Result<A, E>,
{
    let mut acc = initial;
    for item in items {
        acc = f(acc, item)?;
    }
    Ok(acc)
}

//! Optkit - generic optional-value helpers and slice transforms
//!
//! Optkit is a small utility library with two concerns: wrapping values into
//! [`Option`] (with typed convenience constructors and default-aware
//! extraction) and non-mutating transforms over slices and maps (map, filter,
//! reduce, key extraction, first-or-default).
//!
//! # Modules
//!
//! - [`opt`] - Optional-value construction, inspection, and extraction
//! - [`seq`] - Slice and map transforms
//!
//! # Design
//!
//! Every function is pure: inputs are never mutated, and no function touches
//! shared state, so concurrent calls on independent inputs are safe by
//! construction. Absence is always `Option::None`; no sentinel values are
//! used.
//!
//! One deliberate sharp edge is preserved from the original design:
//! [`opt::non_zero_value_or_default`] treats a present value that equals the
//! type's default ("zero value") as if it were absent. See the function
//! documentation before reaching for it.

pub mod opt;
pub mod seq;

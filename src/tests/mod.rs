//! Tests for enum types, values and the column adapter.
//!
//! ## Test Organization
//!
//! - `common`: Shared enum declarations and helpers
//! - `definition`: Type construction and the lookup tables
//! - `coercion`: Inflate and coerce operations
//! - `values`: Predicates, stringification and unchecked mutation
//! - `ordering`: Comparison and the operator impls built on it
//! - `typed`: Enums generated by `enum_type!`
//! - `column`: Column inflate/deflate and field registration
//!
//! ## Test Enums
//!
//! - `Doneness`: `bread, toasting, toast, burnt` (ordinals 0..=3)
//! - `Perm`: `READ = 1, WRITE = 2, EXECUTE = 4` (bitfield style)
//! - `Switch`: `OFF = 0, ON = 1, YES = 1` (colliding ordinals)

mod common;

mod coercion;

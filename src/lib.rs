#![deny(missing_docs)]

//! Symenum: symbol/ordinal enum types with coercion, ordering and column
//! inflation.
//!
//! # Design Goals
//!
//! - **One table per type**: every enum is a fixed bijection between symbols
//!   and integer ordinals, built once and read-only afterwards
//! - **Strict coercion**: invalid symbols and ordinals are errors, never
//!   silently replaced
//! - **Compile-time predicates**: `enum_type!` generates an `is_<symbol>()`
//!   method per symbol instead of installing methods at runtime
//!
//! # Core Concepts
//!
//! - [`EnumType`]: The symbol/ordinal tables and the inflate/coerce operations
//! - [`EnumValue`]: One ordinal of one type, with comparison and predicates
//! - [`EnumLike`]: Implemented by named enums declared with [`enum_type!`]
//! - [`ColumnAdapter`]: Inflates and deflates stored column values
//!
// Re-exports for macros
pub use once_cell;
pub use paste;

// Modules
pub mod column;
pub mod definition;
pub mod enum_type;
pub mod error;
mod macros;
pub mod raw;
pub mod registry;
pub mod typed;
pub mod value;

// Re-exports for convenience
pub use column::{ColumnAdapter, ColumnCodec, EnumColumn, FieldDescriptor, StorageMode};
pub use definition::EnumDefinition;
pub use enum_type::EnumType;
pub use error::EnumError;
pub use raw::RawValue;
pub use registry::EnumRegistry;
pub use typed::EnumLike;
pub use value::{Coercible, Comparand, EnumValue};

#[cfg(test)]
mod tests;

//! Common enum declarations and helpers for tests.
//!
//! This module contains:
//! - Named enums declared with `enum_type!`
//! - Runtime-built equivalents for tests that exercise `EnumType` directly
//! - A registry preloaded with the runtime types

use crate::{enum_type, EnumDefinition, EnumRegistry, EnumType};

// ============================================================================
// Named Enums
// ============================================================================

enum_type! {
    /// Toast, from raw to ruined.
    pub Doneness { bread, toasting, toast, burnt }
}

enum_type! {
    /// File permission bits.
    pub Perm { READ = 1, WRITE = 2, EXECUTE = 4 }
}

enum_type! {
    /// Two symbols share ordinal 1; `YES` is defined last.
    pub Switch { OFF = 0, ON = 1, YES = 1 }
}

// ============================================================================
// Runtime Types
// ============================================================================

pub const DONENESS: [&str; 4] = ["bread", "toasting", "toast", "burnt"];

/// `Doneness` built at runtime, independent of the macro-generated type.
pub fn doneness() -> EnumType {
    EnumType::new("Doneness", EnumDefinition::sequence(DONENESS))
        .expect("doneness definition should be valid")
}

/// `Perm` built at runtime, defined out of ordinal order.
pub fn perm() -> EnumType {
    EnumType::new(
        "Perm",
        EnumDefinition::mapping([("WRITE", 2), ("READ", 1), ("EXECUTE", 4)]),
    )
    .expect("perm definition should be valid")
}

/// A registry holding the runtime `Doneness` and `Perm`.
pub fn registry() -> EnumRegistry {
    let registry = EnumRegistry::new();
    registry.register(doneness());
    registry.register(perm());
    registry
}

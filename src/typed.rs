//! Named enum types generated by [`enum_type!`](crate::enum_type).

use std::sync::Arc;

use crate::enum_type::EnumType;
use crate::error::EnumError;
use crate::registry::EnumRegistry;
use crate::value::{Coercible, EnumValue};

/// Implemented by every enum declared with [`enum_type!`](crate::enum_type).
///
/// Each implementor owns exactly one [`EnumType`] and wraps its
/// [`EnumValue`]s. The provided methods are the type-level operations of
/// [`EnumType`], returning `Self` instead of a bare value.
pub trait EnumLike: Sized {
    /// The shared runtime type.
    fn enum_type() -> &'static EnumType;

    /// Wrap a value already known to belong to [`enum_type`](Self::enum_type).
    #[doc(hidden)]
    fn wrap(value: EnumValue) -> Self;

    /// The wrapped value.
    fn as_value(&self) -> &EnumValue;

    /// The wrapped value, mutably (for [`EnumValue::increment`] and friends).
    fn as_value_mut(&mut self) -> &mut EnumValue;

    /// See [`EnumType::inflate_symbol`].
    fn inflate_symbol(symbol: &str) -> Result<Self, EnumError> {
        Self::enum_type().inflate_symbol(symbol).map(Self::wrap)
    }

    /// See [`EnumType::inflate_ordinal`].
    fn inflate_ordinal(ordinal: i64) -> Result<Self, EnumError> {
        Self::enum_type().inflate_ordinal(ordinal).map(Self::wrap)
    }

    /// See [`EnumType::coerce_symbol`].
    fn coerce_symbol(value: impl Into<Coercible>) -> Result<Self, EnumError> {
        Self::enum_type().coerce_symbol(value).map(Self::wrap)
    }

    /// See [`EnumType::coerce_ordinal`].
    fn coerce_ordinal(value: impl Into<Coercible>) -> Result<Self, EnumError> {
        Self::enum_type().coerce_ordinal(value).map(Self::wrap)
    }

    /// See [`EnumType::coerce_any`].
    fn coerce_any(value: impl Into<Coercible>) -> Result<Self, EnumError> {
        Self::enum_type().coerce_any(value).map(Self::wrap)
    }

    /// Adopt a dynamic value; values of other types are coerced by symbol.
    fn from_value(value: EnumValue) -> Result<Self, EnumError> {
        Self::coerce_symbol(value)
    }

    /// See [`EnumType::test_symbol`].
    fn test_symbol(symbol: &str) -> bool {
        Self::enum_type().test_symbol(symbol)
    }

    /// See [`EnumType::test_ordinal`].
    fn test_ordinal(ordinal: i64) -> bool {
        Self::enum_type().test_ordinal(ordinal)
    }

    /// See [`EnumType::ordered_symbols`].
    fn ordered_symbols() -> &'static [Arc<str>] {
        Self::enum_type().ordered_symbols()
    }

    /// See [`EnumType::predicate_names`].
    fn predicate_names() -> Vec<String> {
        Self::enum_type().predicate_names()
    }

    /// Make this type resolvable by name in `registry`.
    fn register(registry: &EnumRegistry) {
        registry.register(Self::enum_type().clone());
    }
}

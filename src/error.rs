//! Error type shared by every enum operation.

use std::sync::Arc;

use crate::raw::RawValue;

/// Errors raised while defining, inflating, coercing or comparing enum values.
///
/// Every failure is reported to the caller immediately; nothing in this crate
/// substitutes a default value.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EnumError {
    /// The enum definition was malformed.
    #[error("Invalid enum definition: {0}")]
    Definition(String),

    /// A symbol is not a member of the enum type.
    #[error("Invalid symbol for {type_name}: {symbol:?}")]
    InvalidSymbol {
        /// The symbol that failed to resolve.
        symbol: String,
        /// Name of the enum type the lookup ran against.
        type_name: Arc<str>,
    },

    /// An ordinal is not a member of the enum type.
    #[error("Invalid ordinal for {type_name}: {ordinal}")]
    InvalidOrdinal {
        /// The ordinal (or raw value standing in for one) that failed to resolve.
        ordinal: RawValue,
        /// Name of the enum type the lookup ran against.
        type_name: Arc<str>,
    },

    /// A value matched neither an ordinal nor a symbol.
    #[error("Cannot coerce {value} into {type_name}")]
    Coercion {
        /// The value that could not be coerced.
        value: RawValue,
        /// Name of the target enum type.
        type_name: Arc<str>,
    },

    /// A column was configured with something that is not an enum type.
    #[error("Invalid column configuration for {field}: {reason}")]
    Configuration {
        /// The column/field name.
        field: String,
        /// What was wrong with it.
        reason: String,
    },
}

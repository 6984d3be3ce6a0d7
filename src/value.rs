//! Enum values and the inputs accepted by coercion and comparison.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::enum_type::EnumType;
use crate::error::EnumError;
use crate::raw::RawValue;

/// An instance of an [`EnumType`], holding exactly one ordinal.
///
/// Values are only created through their type, so a fresh value always holds
/// a valid ordinal. [`increment`](Self::increment) and
/// [`decrement`](Self::decrement) are the exception: they move the ordinal
/// without checking it, and a value moved that way may hold an ordinal with
/// no symbol (see [`is_valid`](Self::is_valid)).
///
/// Equality, hashing and ordering use the ordinal alone, exactly like
/// [`compare`](Self::compare); values of different enum types are compared
/// by ordinal too.
#[derive(Clone)]
pub struct EnumValue {
    enum_type: EnumType,
    ordinal: i64,
}

/// Anything coercion accepts: an existing value or a raw representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Coercible {
    /// An existing enum value, of this or another type.
    Value(EnumValue),
    /// A raw ordinal or symbol.
    Raw(RawValue),
}

/// The right-hand side of [`EnumValue::compare`].
#[derive(Debug, Clone, Copy)]
pub enum Comparand<'a> {
    /// Another enum value; compared by ordinal.
    Value(&'a EnumValue),
    /// A symbol of the left-hand value's type.
    Symbol(&'a str),
}

impl EnumValue {
    pub(crate) fn new(enum_type: EnumType, ordinal: i64) -> Self {
        Self { enum_type, ordinal }
    }

    /// The type this value belongs to.
    pub fn enum_type(&self) -> &EnumType {
        &self.enum_type
    }

    /// The raw ordinal.
    pub fn numify(&self) -> i64 {
        self.ordinal
    }

    /// The symbol for this value's ordinal, if it has one.
    pub fn symbol(&self) -> Option<&str> {
        self.enum_type.symbol_of(self.ordinal)
    }

    /// The symbol for this value's ordinal.
    ///
    /// Returns an empty string for an ordinal left without a symbol by
    /// [`increment`](Self::increment) or [`decrement`](Self::decrement).
    pub fn stringify(&self) -> &str {
        match self.symbol() {
            Some(symbol) => symbol,
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    enum_type = %self.enum_type,
                    ordinal = self.ordinal,
                    "enum.value.orphan"
                );
                ""
            }
        }
    }

    /// `true` while the ordinal still belongs to the type.
    pub fn is_valid(&self) -> bool {
        self.enum_type.test_ordinal(self.ordinal)
    }

    /// `true` iff this value has the ordinal of `symbol`.
    ///
    /// Fails if `symbol` is not a member of the type.
    pub fn is(&self, symbol: &str) -> Result<bool, EnumError> {
        self.enum_type
            .ordinal_of(symbol)
            .map(|ordinal| ordinal == self.ordinal)
            .ok_or_else(|| self.enum_type.invalid_symbol(symbol))
    }

    /// Evaluate a generated predicate such as `"is_toast"`.
    ///
    /// Returns `None` if the type has no predicate of that name.
    pub fn predicate(&self, name: &str) -> Option<bool> {
        self.enum_type
            .predicate_ordinal(name)
            .map(|ordinal| ordinal == self.ordinal)
    }

    /// `true` if [`is`](Self::is) holds for any of `symbols`.
    ///
    /// Evaluation stops at the first match, so symbols after it are not
    /// validated.
    pub fn any<I, S>(&self, symbols: I) -> Result<bool, EnumError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for symbol in symbols {
            if self.is(symbol.as_ref())? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// `true` if [`is`](Self::is) holds for none of `symbols`.
    pub fn none<I, S>(&self, symbols: I) -> Result<bool, EnumError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.any(symbols).map(|matched| !matched)
    }

    /// Order against another value (by ordinal) or a symbol of this type.
    pub fn compare<'a>(&self, other: impl Into<Comparand<'a>>) -> Result<Ordering, EnumError> {
        let ordinal = match other.into() {
            Comparand::Value(value) => value.ordinal,
            Comparand::Symbol(symbol) => self
                .enum_type
                .ordinal_of(symbol)
                .ok_or_else(|| self.enum_type.invalid_symbol(symbol))?,
        };
        Ok(self.ordinal.cmp(&ordinal))
    }

    /// Another value of the same type, built from `symbol`.
    pub fn new_value(&self, symbol: &str) -> Result<EnumValue, EnumError> {
        self.enum_type.inflate_symbol(symbol)
    }

    /// The value with the next ordinal up. Fails if that ordinal has no symbol.
    pub fn next(&self) -> Result<EnumValue, EnumError> {
        self.step(1)
    }

    /// The value with the next ordinal down. Fails if that ordinal has no symbol.
    pub fn prev(&self) -> Result<EnumValue, EnumError> {
        self.step(-1)
    }

    fn step(&self, delta: i64) -> Result<EnumValue, EnumError> {
        match self.ordinal.checked_add(delta) {
            Some(ordinal) => self.enum_type.inflate_ordinal(ordinal),
            None => Err(self.enum_type.invalid_ordinal(RawValue::Text(format!(
                "{}{:+}",
                self.ordinal, delta
            )))),
        }
    }

    /// Add one to the ordinal in place, without validation.
    ///
    /// The result may have no symbol; check [`is_valid`](Self::is_valid)
    /// or use [`next`](Self::next) for a checked step.
    pub fn increment(&mut self) {
        self.ordinal = self.ordinal.wrapping_add(1);
    }

    /// Subtract one from the ordinal in place, without validation.
    pub fn decrement(&mut self) {
        self.ordinal = self.ordinal.wrapping_sub(1);
    }
}

impl std::fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{}::{}({})", self.enum_type, symbol, self.ordinal),
            None => write!(f, "{}::?({})", self.enum_type, self.ordinal),
        }
    }
}

impl std::fmt::Display for EnumValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.stringify())
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal
    }
}

impl Eq for EnumValue {}

impl Hash for EnumValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordinal.hash(state);
    }
}

impl PartialOrd for EnumValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnumValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }
}

// Symbol comparisons resolve through the value's own type. An unknown symbol
// is never equal and has no ordering.
impl PartialEq<&str> for EnumValue {
    fn eq(&self, other: &&str) -> bool {
        matches!(self.compare(*other), Ok(Ordering::Equal))
    }
}

impl PartialOrd<&str> for EnumValue {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        self.compare(*other).ok()
    }
}

impl From<&EnumValue> for i64 {
    fn from(value: &EnumValue) -> Self {
        value.numify()
    }
}

impl<'a> From<&'a EnumValue> for Comparand<'a> {
    fn from(value: &'a EnumValue) -> Self {
        Self::Value(value)
    }
}

impl<'a> From<&'a str> for Comparand<'a> {
    fn from(symbol: &'a str) -> Self {
        Self::Symbol(symbol)
    }
}

impl<'a> From<&'a String> for Comparand<'a> {
    fn from(symbol: &'a String) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<EnumValue> for Coercible {
    fn from(value: EnumValue) -> Self {
        Self::Value(value)
    }
}

impl From<&EnumValue> for Coercible {
    fn from(value: &EnumValue) -> Self {
        Self::Value(value.clone())
    }
}

impl From<RawValue> for Coercible {
    fn from(raw: RawValue) -> Self {
        Self::Raw(raw)
    }
}

impl From<i64> for Coercible {
    fn from(value: i64) -> Self {
        Self::Raw(value.into())
    }
}

impl From<i32> for Coercible {
    fn from(value: i32) -> Self {
        Self::Raw(value.into())
    }
}

impl From<&str> for Coercible {
    fn from(value: &str) -> Self {
        Self::Raw(value.into())
    }
}

impl From<String> for Coercible {
    fn from(value: String) -> Self {
        Self::Raw(value.into())
    }
}

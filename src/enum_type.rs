//! Runtime enum types: the symbol/ordinal tables and the operations that
//! turn raw input into [`EnumValue`]s.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::column::StorageMode;
use crate::definition::EnumDefinition;
use crate::error::EnumError;
use crate::raw::RawValue;
use crate::value::{Coercible, EnumValue};

/// Immutable tables shared by an [`EnumType`] handle and its values.
#[derive(Debug)]
struct Tables {
    name: Arc<str>,
    symbol_to_ordinal: HashMap<Arc<str>, i64>,
    ordinal_to_symbol: BTreeMap<i64, Arc<str>>,
    ordered: Vec<Arc<str>>,
    predicates: HashMap<String, i64>,
}

/// A generated enum type.
///
/// Built once from an [`EnumDefinition`] and never modified afterwards.
/// Cloning is cheap: clones share the same tables and compare equal, while
/// two types built from identical definitions are still distinct types.
#[derive(Clone)]
pub struct EnumType {
    tables: Arc<Tables>,
}

impl EnumType {
    /// Build a new enum type called `name`.
    pub fn new(name: impl Into<Arc<str>>, definition: EnumDefinition) -> Result<Self, EnumError> {
        let name = name.into();
        let entries = definition.resolve().map_err(|e| match e {
            EnumError::Definition(reason) => {
                EnumError::Definition(format!("{}: {}", name, reason))
            }
            other => other,
        })?;

        let mut symbol_to_ordinal = HashMap::with_capacity(entries.len());
        let mut ordinal_to_symbol = BTreeMap::new();
        for (symbol, ordinal) in &entries {
            symbol_to_ordinal.insert(symbol.clone(), *ordinal);
            if let Some(_shadowed) = ordinal_to_symbol.insert(*ordinal, symbol.clone()) {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    enum_type = %name,
                    ordinal = *ordinal,
                    kept = %symbol,
                    shadowed = %_shadowed,
                    "enum.ordinal_collision"
                );
            }
        }

        // Stable sort: symbols sharing an ordinal keep definition order.
        let mut sorted = entries.clone();
        sorted.sort_by_key(|(_, ordinal)| *ordinal);
        let ordered: Vec<Arc<str>> = sorted.into_iter().map(|(symbol, _)| symbol).collect();

        let predicates = entries
            .iter()
            .map(|(symbol, ordinal)| (predicate_name(symbol), *ordinal))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(enum_type = %name, symbols = entries.len(), "enum.define");

        Ok(Self {
            tables: Arc::new(Tables {
                name,
                symbol_to_ordinal,
                ordinal_to_symbol,
                ordered,
                predicates,
            }),
        })
    }

    /// Name the type was defined with.
    pub fn name(&self) -> &str {
        &self.tables.name
    }

    pub(crate) fn name_arc(&self) -> Arc<str> {
        self.tables.name.clone()
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.tables.ordered.len()
    }

    /// `true` if the type has no symbols.
    pub fn is_empty(&self) -> bool {
        self.tables.ordered.is_empty()
    }

    /// Symbol → ordinal table.
    pub fn symbol_to_ordinal(&self) -> &HashMap<Arc<str>, i64> {
        &self.tables.symbol_to_ordinal
    }

    /// Ordinal → symbol table. When several symbols share an ordinal, the
    /// one defined last is the one kept here.
    pub fn ordinal_to_symbol(&self) -> &BTreeMap<i64, Arc<str>> {
        &self.tables.ordinal_to_symbol
    }

    /// All symbols by ascending ordinal.
    pub fn ordered_symbols(&self) -> &[Arc<str>] {
        &self.tables.ordered
    }

    /// `is_<symbol>` for every symbol, in [`ordered_symbols`](Self::ordered_symbols) order.
    pub fn predicate_names(&self) -> Vec<String> {
        self.tables
            .ordered
            .iter()
            .map(|symbol| predicate_name(symbol))
            .collect()
    }

    /// Ordinal of `symbol`, if it is a member.
    pub fn ordinal_of(&self, symbol: &str) -> Option<i64> {
        self.tables.symbol_to_ordinal.get(symbol).copied()
    }

    /// Symbol stored for `ordinal`, if any.
    pub fn symbol_of(&self, ordinal: i64) -> Option<&str> {
        self.tables.ordinal_to_symbol.get(&ordinal).map(|s| &**s)
    }

    pub(crate) fn predicate_ordinal(&self, name: &str) -> Option<i64> {
        self.tables.predicates.get(name).copied()
    }

    /// `true` iff `symbol` is a member.
    pub fn test_symbol(&self, symbol: &str) -> bool {
        self.tables.symbol_to_ordinal.contains_key(symbol)
    }

    /// `true` iff `ordinal` is a member.
    pub fn test_ordinal(&self, ordinal: i64) -> bool {
        self.tables.ordinal_to_symbol.contains_key(&ordinal)
    }

    /// One value per distinct ordinal, ascending.
    pub fn values(&self) -> Vec<EnumValue> {
        self.tables
            .ordinal_to_symbol
            .keys()
            .map(|&ordinal| EnumValue::new(self.clone(), ordinal))
            .collect()
    }

    /// Build the value for `symbol`.
    pub fn inflate_symbol(&self, symbol: &str) -> Result<EnumValue, EnumError> {
        self.ordinal_of(symbol)
            .map(|ordinal| EnumValue::new(self.clone(), ordinal))
            .ok_or_else(|| self.invalid_symbol(symbol))
    }

    /// Build the value for `ordinal`.
    pub fn inflate_ordinal(&self, ordinal: i64) -> Result<EnumValue, EnumError> {
        if self.test_ordinal(ordinal) {
            Ok(EnumValue::new(self.clone(), ordinal))
        } else {
            Err(self.invalid_ordinal(RawValue::Int(ordinal)))
        }
    }

    /// Inflate a stored value according to `mode`.
    ///
    /// In ordinal mode text must be the canonical form of an integer; in
    /// symbol mode an integer is looked up by its decimal text.
    pub fn inflate_raw(&self, raw: &RawValue, mode: StorageMode) -> Result<EnumValue, EnumError> {
        match mode {
            StorageMode::Ordinal => match raw.as_ordinal() {
                Some(ordinal) => self.inflate_ordinal(ordinal),
                None => Err(self.invalid_ordinal(raw.clone())),
            },
            StorageMode::Symbol => self.inflate_symbol(&raw.as_symbol()),
        }
    }

    /// General-purpose constructor; same as [`inflate_symbol`](Self::inflate_symbol).
    pub fn new_value(&self, symbol: &str) -> Result<EnumValue, EnumError> {
        self.inflate_symbol(symbol)
    }

    /// Pass values of this type through, inflate anything else as a symbol.
    pub fn coerce_symbol(&self, value: impl Into<Coercible>) -> Result<EnumValue, EnumError> {
        match self.own_or_raw(value.into()) {
            Ok(own) => Ok(own),
            Err(raw) => self.inflate_symbol(&raw.as_symbol()),
        }
    }

    /// Pass values of this type through, inflate anything else as an ordinal.
    pub fn coerce_ordinal(&self, value: impl Into<Coercible>) -> Result<EnumValue, EnumError> {
        match self.own_or_raw(value.into()) {
            Ok(own) => Ok(own),
            Err(raw) => self.inflate_raw(&raw, StorageMode::Ordinal),
        }
    }

    /// Pass values of this type through, otherwise try the ordinal reading
    /// first and the symbol reading second.
    ///
    /// The order is fixed regardless of what the input looks like: text that
    /// is a valid ordinal resolves as that ordinal even if a symbol with the
    /// same spelling exists. Use [`coerce_symbol`](Self::coerce_symbol) to
    /// prefer the symbol.
    pub fn coerce_any(&self, value: impl Into<Coercible>) -> Result<EnumValue, EnumError> {
        let raw = match self.own_or_raw(value.into()) {
            Ok(own) => return Ok(own),
            Err(raw) => raw,
        };

        if let Some(ordinal) = raw.as_ordinal() {
            if self.test_ordinal(ordinal) {
                return Ok(EnumValue::new(self.clone(), ordinal));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(enum_type = %self.tables.name, value = %raw, "enum.coerce.fallback");

        match self.ordinal_of(&raw.as_symbol()) {
            Some(ordinal) => Ok(EnumValue::new(self.clone(), ordinal)),
            None => Err(EnumError::Coercion {
                value: raw,
                type_name: self.name_arc(),
            }),
        }
    }

    /// `true` if `value` was produced by this type.
    pub fn owns(&self, value: &EnumValue) -> bool {
        value.enum_type() == self
    }

    /// Split a coercion input into "already ours" or its raw reading.
    /// Values of other enum types are read as their symbol text.
    fn own_or_raw(&self, value: Coercible) -> Result<EnumValue, RawValue> {
        match value {
            Coercible::Value(v) if self.owns(&v) => Ok(v),
            Coercible::Value(v) => Err(RawValue::Text(v.stringify().to_owned())),
            Coercible::Raw(raw) => Err(raw),
        }
    }

    pub(crate) fn invalid_symbol(&self, symbol: &str) -> EnumError {
        EnumError::InvalidSymbol {
            symbol: symbol.to_owned(),
            type_name: self.name_arc(),
        }
    }

    pub(crate) fn invalid_ordinal(&self, ordinal: RawValue) -> EnumError {
        EnumError::InvalidOrdinal {
            ordinal,
            type_name: self.name_arc(),
        }
    }
}

fn predicate_name(symbol: &str) -> String {
    format!("is_{}", symbol)
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tables, &other.tables)
    }
}

impl Eq for EnumType {}

impl std::fmt::Debug for EnumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumType")
            .field("name", &self.tables.name)
            .field("symbols", &self.tables.ordered)
            .finish()
    }
}

impl std::fmt::Display for EnumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tables.name)
    }
}

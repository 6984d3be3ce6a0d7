//! Column adapter: converts between a persistence layer's stored values and
//! enum values.
//!
//! A column stores either the symbol text or the ordinal integer of its enum.
//! The adapter never touches the database; it sits at the read/write boundary
//! and is handed raw values by whatever persistence layer owns the table.
//! Absent (`NULL`) values pass through unchanged in both directions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::enum_type::EnumType;
use crate::error::EnumError;
use crate::raw::RawValue;
use crate::registry::EnumRegistry;
use crate::value::EnumValue;

/// How a column stores its enum values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageMode {
    /// The symbol text is stored.
    #[default]
    Symbol,
    /// The ordinal integer is stored.
    Ordinal,
}

impl StorageMode {
    /// Map the `ordinal_storage` flag of a [`FieldDescriptor`] to a mode.
    pub const fn from_ordinal_storage(ordinal_storage: bool) -> Self {
        if ordinal_storage {
            Self::Ordinal
        } else {
            Self::Symbol
        }
    }
}

/// Static description of a persistence field.
///
/// Only fields that name an enum type are adapted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field (column) name.
    pub name: String,

    /// Registered name of the enum type this field holds.
    #[serde(default)]
    pub enum_type: Option<String>,

    /// Store ordinals instead of symbols.
    #[serde(default)]
    pub ordinal_storage: bool,
}

impl FieldDescriptor {
    /// A plain field with no enum attached.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enum_type: None,
            ordinal_storage: false,
        }
    }

    /// Attach the enum type registered as `enum_type`.
    pub fn with_enum(mut self, enum_type: impl Into<String>) -> Self {
        self.enum_type = Some(enum_type.into());
        self
    }

    /// Select ordinal storage.
    pub fn ordinal_storage(mut self, ordinal_storage: bool) -> Self {
        self.ordinal_storage = ordinal_storage;
        self
    }

    /// The storage mode implied by the descriptor.
    pub fn storage_mode(&self) -> StorageMode {
        StorageMode::from_ordinal_storage(self.ordinal_storage)
    }
}

/// Inflate/deflate hook a persistence layer calls at a column boundary.
pub trait ColumnCodec {
    /// The in-memory value type.
    type Value;

    /// Convert a stored value into an in-memory one.
    fn inflate(&self, raw: Option<RawValue>) -> Result<Option<Self::Value>, EnumError>;

    /// Convert an in-memory value into its stored form.
    fn deflate(&self, value: Option<&Self::Value>) -> Option<RawValue>;
}

/// One adapted column: a field, its enum type and its storage mode.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumColumn {
    field: String,
    enum_type: EnumType,
    mode: StorageMode,
}

impl EnumColumn {
    /// Adapt `field` to `enum_type`.
    pub fn new(field: impl Into<String>, enum_type: EnumType, mode: StorageMode) -> Self {
        Self {
            field: field.into(),
            enum_type,
            mode,
        }
    }

    /// The field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The enum type values are inflated into.
    pub fn enum_type(&self) -> &EnumType {
        &self.enum_type
    }

    /// How the column stores values.
    pub fn mode(&self) -> StorageMode {
        self.mode
    }
}

impl ColumnCodec for EnumColumn {
    type Value = EnumValue;

    fn inflate(&self, raw: Option<RawValue>) -> Result<Option<EnumValue>, EnumError> {
        raw.map(|raw| self.enum_type.inflate_raw(&raw, self.mode))
            .transpose()
    }

    /// Values whose ordinal lost its symbol deflate to `None` in symbol mode.
    fn deflate(&self, value: Option<&EnumValue>) -> Option<RawValue> {
        let value = value?;
        match self.mode {
            StorageMode::Ordinal => Some(RawValue::Int(value.numify())),
            StorageMode::Symbol => value.symbol().map(|s| RawValue::Text(s.to_owned())),
        }
    }
}

/// The adapted columns of one table.
#[derive(Debug, Clone, Default)]
pub struct ColumnAdapter {
    columns: HashMap<String, EnumColumn>,
}

impl ColumnAdapter {
    /// An adapter with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapt `field` if it names an enum type.
    ///
    /// Returns `Ok(false)` and leaves the field alone when no enum type is
    /// named. Fails with [`EnumError::Configuration`] when the name does not
    /// resolve to a registered enum type.
    pub fn register_field(
        &mut self,
        registry: &EnumRegistry,
        field: &FieldDescriptor,
    ) -> Result<bool, EnumError> {
        let Some(type_name) = field.enum_type.as_deref() else {
            return Ok(false);
        };

        let enum_type = registry.resolve(&field.name, type_name)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            field = %field.name,
            enum_type = %enum_type,
            mode = ?field.storage_mode(),
            "column.register"
        );

        self.attach(EnumColumn::new(
            field.name.clone(),
            enum_type,
            field.storage_mode(),
        ));
        Ok(true)
    }

    /// Register every descriptor, stopping at the first error.
    /// Returns the number of fields adapted.
    pub fn register_fields<'a, I>(
        &mut self,
        registry: &EnumRegistry,
        fields: I,
    ) -> Result<usize, EnumError>
    where
        I: IntoIterator<Item = &'a FieldDescriptor>,
    {
        let mut adapted = 0;
        for field in fields {
            if self.register_field(registry, field)? {
                adapted += 1;
            }
        }
        Ok(adapted)
    }

    /// Add an already-built column, replacing one with the same field name.
    pub fn attach(&mut self, column: EnumColumn) {
        self.columns.insert(column.field.clone(), column);
    }

    /// The column adapted for `field`.
    pub fn column(&self, field: &str) -> Option<&EnumColumn> {
        self.columns.get(field)
    }

    /// Check whether `field` has been adapted.
    pub fn is_adapted(&self, field: &str) -> bool {
        self.columns.contains_key(field)
    }

    /// Get the number of adapted columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if no column has been adapted.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Inflate a stored value read from `field`.
    pub fn inflate(&self, field: &str, raw: Option<RawValue>) -> Result<Option<EnumValue>, EnumError> {
        self.adapted(field)?.inflate(raw)
    }

    /// Deflate a value about to be written to `field`.
    pub fn deflate(
        &self,
        field: &str,
        value: Option<&EnumValue>,
    ) -> Result<Option<RawValue>, EnumError> {
        Ok(self.adapted(field)?.deflate(value))
    }

    fn adapted(&self, field: &str) -> Result<&EnumColumn, EnumError> {
        self.columns
            .get(field)
            .ok_or_else(|| EnumError::Configuration {
                field: field.to_owned(),
                reason: "field is not an enum column".into(),
            })
    }
}

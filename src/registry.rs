//! Name-based lookup of enum types.
//!
//! Column descriptors refer to their enum type by name; the registry is where
//! those names resolve. Types get in either by explicit registration or by
//! loading a JSON document of definitions.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde_json::Value;

use crate::definition::EnumDefinition;
use crate::enum_type::EnumType;
use crate::error::EnumError;

static GLOBAL: Lazy<EnumRegistry> = Lazy::new(EnumRegistry::new);

/// Thread-safe map from type name to [`EnumType`].
///
/// Uses `parking_lot::RwLock`; lookups vastly outnumber registrations.
#[derive(Debug, Default)]
pub struct EnumRegistry {
    types: RwLock<HashMap<Arc<str>, EnumType>>,
}

impl EnumRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            types: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static EnumRegistry {
        &GLOBAL
    }

    /// Register `enum_type` under its name, returning the type it replaced.
    pub fn register(&self, enum_type: EnumType) -> Option<EnumType> {
        #[cfg(feature = "tracing")]
        tracing::debug!(enum_type = %enum_type, "registry.register");

        self.types.write().insert(enum_type.name_arc(), enum_type)
    }

    /// Build a type from `definition` and register it.
    pub fn define(
        &self,
        name: impl Into<Arc<str>>,
        definition: EnumDefinition,
    ) -> Result<EnumType, EnumError> {
        let enum_type = EnumType::new(name, definition)?;
        self.register(enum_type.clone());
        Ok(enum_type)
    }

    /// Look up a type by name.
    pub fn get(&self, name: &str) -> Option<EnumType> {
        self.types.read().get(name).cloned()
    }

    /// Look up a type referenced by column `field`.
    pub fn resolve(&self, field: &str, name: &str) -> Result<EnumType, EnumError> {
        self.get(name).ok_or_else(|| EnumError::Configuration {
            field: field.to_owned(),
            reason: format!("{} is not a registered enum type", name),
        })
    }

    /// Check whether a type is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.types.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.read().keys().map(|n| n.to_string()).collect();
        names.sort();
        names
    }

    /// Get the number of registered types.
    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }

    /// Define every type in a JSON document of the form
    /// `{"Name": {"symbols": ...}, ...}`.
    ///
    /// Nothing is registered unless every definition is valid.
    pub fn load_json_str(&self, json: &str) -> Result<Vec<EnumType>, EnumError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| EnumError::Definition(format!("malformed JSON: {}", e)))?;
        self.load_json_value(&value)
    }

    /// Same as [`load_json_str`](Self::load_json_str) for a parsed document.
    pub fn load_json_value(&self, value: &Value) -> Result<Vec<EnumType>, EnumError> {
        let document = value.as_object().ok_or_else(|| {
            EnumError::Definition("expected an object of enum definitions".into())
        })?;

        let types = document
            .iter()
            .map(|(name, definition)| {
                EnumDefinition::from_json_value(definition)
                    .and_then(|definition| EnumType::new(name.as_str(), definition))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for enum_type in &types {
            self.register(enum_type.clone());
        }
        Ok(types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_and_get() {
        let registry = EnumRegistry::new();
        let defined = registry
            .define("Doneness", EnumDefinition::sequence(["bread", "toast"]))
            .expect("define should succeed");

        let found = registry.get("Doneness").expect("type should be registered");
        assert_eq!(found, defined);
        assert!(registry.contains("Doneness"));
        assert!(registry.get("Missing").is_none());
    }

    #[test]
    fn register_replaces_previous() {
        let registry = EnumRegistry::new();
        let first = EnumType::new("Flag", EnumDefinition::sequence(["off", "on"]))
            .expect("new should succeed");
        let second = EnumType::new("Flag", EnumDefinition::sequence(["no", "yes"]))
            .expect("new should succeed");

        assert!(registry.register(first.clone()).is_none());
        let replaced = registry.register(second.clone()).expect("should replace");
        assert_eq!(replaced, first);
        assert_eq!(registry.get("Flag"), Some(second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn resolve_unknown_is_configuration_error() {
        let registry = EnumRegistry::new();
        let result = registry.resolve("state", "Nope");
        assert!(matches!(
            result,
            Err(EnumError::Configuration { ref field, .. }) if field == "state"
        ));
    }

    #[test]
    fn load_json_registers_all() {
        let registry = EnumRegistry::new();
        let loaded = registry
            .load_json_str(
                r#"{
                    "Doneness": {"symbols": ["bread", "toasting", "toast", "burnt"]},
                    "Perm": {"symbols": {"READ": 1, "WRITE": 2, "EXECUTE": 4}}
                }"#,
            )
            .expect("load should succeed");

        assert_eq!(loaded.len(), 2);
        assert_eq!(registry.names(), vec!["Doneness", "Perm"]);
        let perm = registry.get("Perm").expect("Perm should be registered");
        assert_eq!(perm.symbol_of(4), Some("EXECUTE"));
    }

    #[test]
    fn load_json_is_all_or_nothing() {
        let registry = EnumRegistry::new();
        let result = registry.load_json_str(
            r#"{
                "Good": {"symbols": ["a"]},
                "Bad": {"values": ["b"]}
            }"#,
        );

        assert!(matches!(result, Err(EnumError::Definition(_))));
        assert!(registry.is_empty());
    }
}

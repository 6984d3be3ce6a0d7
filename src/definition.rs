//! Declarative enum definitions.
//!
//! A definition comes in one of two shapes:
//!
//! - a **sequence** of distinct symbols, numbered 0, 1, 2, … in order;
//! - a **mapping** from symbol to an explicit ordinal. Ordinals need not be
//!   contiguous or unique, which allows bitfield-style enums.
//!
//! The JSON form accepted by [`EnumDefinition::from_json_str`] is
//! `{"symbols": ["a", "b"]}` or `{"symbols": {"A": 1, "B": 2}}`.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::EnumError;

/// Input to [`EnumType::new`](crate::EnumType::new).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum EnumDefinition {
    /// Symbols with implicit ordinals 0, 1, 2, …
    Sequence(Vec<String>),
    /// Symbols with explicit ordinals, in definition order.
    Mapping(Vec<(String, i64)>),
}

impl EnumDefinition {
    /// Sequence form from any list of symbols.
    pub fn sequence<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sequence(symbols.into_iter().map(Into::into).collect())
    }

    /// Mapping form from `(symbol, ordinal)` pairs.
    pub fn mapping<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Self::Mapping(
            pairs
                .into_iter()
                .map(|(symbol, ordinal)| (symbol.into(), ordinal))
                .collect(),
        )
    }

    /// Parse the JSON configuration shape.
    pub fn from_json_str(json: &str) -> Result<Self, EnumError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| EnumError::Definition(format!("malformed JSON: {}", e)))?;
        Self::from_json_value(&value)
    }

    /// Interpret an already-parsed JSON document.
    pub fn from_json_value(value: &Value) -> Result<Self, EnumError> {
        let symbols = value
            .get("symbols")
            .ok_or_else(|| EnumError::Definition("missing `symbols`".into()))?;

        match symbols {
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(EnumError::Definition(format!(
                        "sequence items must be strings, got {}",
                        other
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Sequence),
            Value::Object(map) => map
                .iter()
                .map(|(symbol, ordinal)| {
                    ordinal
                        .as_i64()
                        .map(|o| (symbol.clone(), o))
                        .ok_or_else(|| {
                            EnumError::Definition(format!(
                                "ordinal for {:?} must be an integer, got {}",
                                symbol, ordinal
                            ))
                        })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Mapping),
            other => Err(EnumError::Definition(format!(
                "`symbols` must be a list or a mapping, got {}",
                other
            ))),
        }
    }

    /// Validate the definition and assign ordinals.
    ///
    /// Returns one entry per distinct symbol, in definition order. In the
    /// mapping form a repeated symbol keeps its first position but takes the
    /// last ordinal assigned to it.
    pub fn resolve(&self) -> Result<Vec<(Arc<str>, i64)>, EnumError> {
        let mut entries: Vec<(Arc<str>, i64)> = Vec::new();
        let mut positions: HashMap<Arc<str>, usize> = HashMap::new();

        match self {
            Self::Sequence(symbols) => {
                for (ordinal, symbol) in symbols.iter().enumerate() {
                    let symbol = checked_symbol(symbol)?;
                    if positions.contains_key(&symbol) {
                        return Err(EnumError::Definition(format!(
                            "duplicate symbol {:?}",
                            symbol
                        )));
                    }
                    positions.insert(symbol.clone(), entries.len());
                    entries.push((symbol, ordinal as i64));
                }
            }
            Self::Mapping(pairs) => {
                for (symbol, ordinal) in pairs {
                    let symbol = checked_symbol(symbol)?;
                    match positions.get(&symbol) {
                        Some(&at) => entries[at].1 = *ordinal,
                        None => {
                            positions.insert(symbol.clone(), entries.len());
                            entries.push((symbol, *ordinal));
                        }
                    }
                }
            }
        }

        Ok(entries)
    }
}

fn checked_symbol(symbol: &str) -> Result<Arc<str>, EnumError> {
    if symbol.is_empty() {
        return Err(EnumError::Definition("symbols must not be empty".into()));
    }
    Ok(Arc::from(symbol))
}

impl TryFrom<Value> for EnumDefinition {
    type Error = EnumError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordinals(def: &EnumDefinition) -> Vec<(String, i64)> {
        def.resolve()
            .expect("resolve should succeed")
            .into_iter()
            .map(|(s, o)| (s.to_string(), o))
            .collect()
    }

    #[test]
    fn sequence_numbers_from_zero() {
        let def = EnumDefinition::sequence(["bread", "toasting", "toast", "burnt"]);
        assert_eq!(
            ordinals(&def),
            vec![
                ("bread".into(), 0),
                ("toasting".into(), 1),
                ("toast".into(), 2),
                ("burnt".into(), 3),
            ]
        );
    }

    #[test]
    fn sequence_rejects_duplicates() {
        let def = EnumDefinition::sequence(["a", "b", "a"]);
        assert!(matches!(def.resolve(), Err(EnumError::Definition(_))));
    }

    #[test]
    fn empty_symbol_is_rejected() {
        let def = EnumDefinition::mapping([("", 1)]);
        assert!(matches!(def.resolve(), Err(EnumError::Definition(_))));
    }

    #[test]
    fn mapping_last_assignment_wins() {
        let def = EnumDefinition::mapping([("A", 1), ("B", 2), ("A", 5)]);
        assert_eq!(ordinals(&def), vec![("A".into(), 5), ("B".into(), 2)]);
    }

    #[test]
    fn mapping_allows_ordinal_collisions() {
        let def = EnumDefinition::mapping([("ON", 1), ("YES", 1)]);
        assert_eq!(ordinals(&def), vec![("ON".into(), 1), ("YES".into(), 1)]);
    }

    #[test]
    fn json_sequence_form() {
        let def = EnumDefinition::from_json_str(r#"{"symbols": ["x", "y"]}"#)
            .expect("parse should succeed");
        assert_eq!(def, EnumDefinition::sequence(["x", "y"]));
    }

    #[test]
    fn json_mapping_form_keeps_document_order() {
        let def = EnumDefinition::from_json_str(
            r#"{"symbols": {"WRITE": 2, "READ": 1, "EXECUTE": 4}}"#,
        )
        .expect("parse should succeed");
        assert_eq!(
            def,
            EnumDefinition::mapping([("WRITE", 2), ("READ", 1), ("EXECUTE", 4)])
        );
    }

    #[test]
    fn json_without_any_form_is_rejected() {
        for json in [
            r#"{}"#,
            r#"{"symbols": 3}"#,
            r#"{"symbols": [1, 2]}"#,
            r#"{"symbols": {"A": "one"}}"#,
            r#"not json"#,
        ] {
            let result = EnumDefinition::from_json_str(json);
            assert!(
                matches!(result, Err(EnumError::Definition(_))),
                "{} should be rejected",
                json
            );
        }
    }

    #[test]
    fn deserializes_through_serde() {
        let def: EnumDefinition =
            serde_json::from_str(r#"{"symbols": {"A": 1}}"#).expect("parse should succeed");
        assert_eq!(def, EnumDefinition::mapping([("A", 1)]));
    }
}

//! Search-box token resolution
//!
//! Customer and driver inputs show `"code | name"` labels. Resolution maps the
//! text the user ended up with back to a backend id using a snapshot of the
//! entity cache passed in on every call.

use crate::parser::{resolve_binding, value_to_string};
use crate::schema::{EntityId, EntityRecord, ResolutionResult};
use crate::{ComposeError, Result};
use serde::{Deserialize, Serialize};

/// Separator between label tokens
pub const SEPARATOR: char = '|';

/// Trim the input and put exactly one space on each side of every `|`
pub fn normalize_label(raw: &str) -> String {
    raw.trim()
        .split(SEPARATOR)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Matching key for a record: `"code | name"`, normalized
///
/// A code may itself hold several `|`-separated segments.
pub fn canonical_label(record: &EntityRecord) -> String {
    normalize_label(&format!("{} | {}", record.code, record.display_name()))
}

/// Resolve a search-box value against a cache snapshot.
///
/// The first record whose canonical label equals the normalized input wins.
/// An unmatched value is not an error: the id is absent and the text is left
/// as typed.
pub fn resolve(raw: &str, cache: &[EntityRecord]) -> ResolutionResult {
    let normalized = normalize_label(raw);

    let matched = (!normalized.is_empty())
        .then(|| {
            cache.iter().find_map(|record| {
                let label = canonical_label(record);
                (label == normalized).then_some((record, label))
            })
        })
        .flatten();

    match matched {
        Some((record, label)) => {
            tracing::debug!(id = %record.id, label = %label, "resolved entity token");
            ResolutionResult {
                resolved_id: Some(record.id.clone()),
                rewrite: label != raw,
                canonical_label: label,
            }
        }
        None => {
            tracing::trace!(input = raw, cached = cache.len(), "entity token unresolved");
            ResolutionResult {
                resolved_id: None,
                canonical_label: raw.to_string(),
                rewrite: false,
            }
        }
    }
}

/// First `|`-separated token of a label, trimmed
///
/// Driver search boxes bind the driver id this way.
pub fn leading_token(label: &str) -> Option<&str> {
    label
        .split(SEPARATOR)
        .next()
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Field layout of an entity listing returned by the backend
///
/// Field names are plain keys or `$.`-paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySchema {
    pub id: String,
    /// Label segments printed before the name, joined with `" | "`
    pub code: Vec<String>,
    /// Name candidates in fallback order; each joins its fields with a space
    pub names: Vec<Vec<String>>,
}

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl EntitySchema {
    /// Layout of the "all customers" listing: `personid | customer_name`
    pub fn customers() -> Self {
        Self {
            id: "idx".to_string(),
            code: fields(&["personid"]),
            names: vec![
                fields(&["customer_name"]),
                fields(&["fname"]),
                fields(&["name"]),
            ],
        }
    }

    /// Layout of the "all drivers" listing:
    /// `driver_id | citizen_id | prefix first_name last_name`
    pub fn drivers() -> Self {
        Self {
            id: "driver_id".to_string(),
            code: fields(&["driver_id", "citizen_id"]),
            names: vec![fields(&["prefix", "first_name", "last_name"])],
        }
    }

    /// Build a record from one listing entry; `None` when the id is missing
    pub fn record(&self, value: &serde_json::Value) -> Option<EntityRecord> {
        let id = field(&self.id, value).and_then(entity_id)?;
        let code = self
            .code
            .iter()
            .map(|name| text(name, value))
            .collect::<Vec<_>>()
            .join(" | ");

        let mut names = self.names.iter().map(|parts| {
            parts
                .iter()
                .map(|name| text(name, value))
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        });

        Some(EntityRecord {
            id,
            code,
            name: names.next().unwrap_or_default(),
            alt_names: names.collect(),
        })
    }

    /// Load a JSON array listing into cache records, skipping entries without an id
    pub fn load(&self, listing: &serde_json::Value) -> Result<Vec<EntityRecord>> {
        let entries = listing.as_array().ok_or_else(|| {
            ComposeError::ParseError("entity listing must be a JSON array".to_string())
        })?;

        let records: Vec<EntityRecord> = entries.iter().filter_map(|e| self.record(e)).collect();
        if records.len() < entries.len() {
            tracing::debug!(
                skipped = entries.len() - records.len(),
                field = %self.id,
                "skipped listing entries without an id"
            );
        }
        Ok(records)
    }

    /// Parse and load a JSON listing
    pub fn load_str(&self, json: &str) -> Result<Vec<EntityRecord>> {
        let listing: serde_json::Value = serde_json::from_str(json)?;
        self.load(&listing)
    }
}

fn field<'a>(name: &str, value: &'a serde_json::Value) -> Option<&'a serde_json::Value> {
    if name.starts_with("$.") {
        resolve_binding(name, value)
    } else {
        value.get(name)
    }
}

fn text(name: &str, value: &serde_json::Value) -> String {
    field(name, value).map(value_to_string).unwrap_or_default()
}

fn entity_id(value: &serde_json::Value) -> Option<EntityId> {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .map(EntityId::Number),
        serde_json::Value::String(s) if !s.trim().is_empty() => {
            Some(EntityId::Text(s.trim().to_string()))
        }
        _ => None,
    }
}

//! Operation object plus its vendor extension map.
//!
//! Only the fields this tool reads or rewrites are typed strictly (`tags` and
//! the `x-badges` extension). Everything else is carried as raw JSON so a
//! document survives load -> annotate -> serialize with its content intact.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Extension key holding the badge list rendered by the viewer.
pub const BADGES_KEY: &str = "x-badges";

/// A (label, color) marker displayed next to an operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Badge {
    pub label: String,
    pub color: String,
}

impl Badge {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

impl From<&Badge> for Value {
    fn from(badge: &Badge) -> Self {
        json!({ "label": badge.label, "color": badge.color })
    }
}

/// Ordered key/value store for `x-*` extensions (and any operation field the
/// model does not name).
///
/// Insertion order is kept; re-inserting an existing key keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extensions(pub IndexMap<String, Value>);

impl Extensions {
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Typed view of the `x-badges` entry. `None` when absent or not a badge list.
    pub fn badges(&self) -> Option<Vec<Badge>> {
        self.0
            .get(BADGES_KEY)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Store `badges` under `x-badges`, replacing any previous value in place.
    pub fn set_badges(&mut self, badges: &[Badge]) {
        let list = Value::Array(badges.iter().map(Value::from).collect());
        self.0.insert(BADGES_KEY.to_string(), list);
    }
}

/// One HTTP-method-bound endpoint definition.
///
/// Field order follows the Swagger 2.0 operation object, with the OpenAPI 3
/// additions after it; serialization emits fields in this order. List fields
/// stay `None` when absent or `null`, so `[]` and a missing key both survive
/// a round trip as they came in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,

    /// First tag is the one kept by `--first-tag-only` and used for grouping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Value>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Operation {
    /// Tags in declaration order; empty when the field is absent or `null`.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Truncate to the first tag. Returns whether anything was dropped.
    pub fn collapse_tags(&mut self) -> bool {
        match self.tags.as_mut() {
            Some(tags) if tags.len() > 1 => {
                tags.truncate(1);
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: Some(tags.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }
}

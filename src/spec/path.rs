//! Path item: the operations registered under one URL template.
//!
//! On the wire every method is its own optional field (`get`, `post`, ...).
//! In memory a path holds a map from `Method` to `Operation`, so callers walk
//! the defined operations without caring about fixed method slots.
//!
//! The paths object itself may carry `x-` vendor extensions next to the URL
//! templates; those are kept apart in `Paths::extensions`.

use crate::spec::operation::{Extensions, Operation};
use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// HTTP method slot of a path item.
///
/// Declaration order is the serialization order (and the `Ord` order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Put => "put",
            Method::Post => "post",
            Method::Delete => "delete",
            Method::Options => "options",
            Method::Head => "head",
            Method::Patch => "patch",
            Method::Trace => "trace",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPathItem", into = "RawPathItem")]
pub struct PathItem {
    pub reference: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub operations: BTreeMap<Method, Operation>,
    pub servers: Option<Value>,
    pub parameters: Option<Value>,
    pub extensions: Extensions,
}

impl PathItem {
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Paths object: URL template -> path item, plus `x-` extensions.
///
/// Path items keep their input order, as do the extensions; on output the
/// path items come first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths {
    pub items: IndexMap<String, PathItem>,
    pub extensions: Extensions,
}

impl Paths {
    pub fn is_extension_key(key: &str) -> bool {
        key.starts_with("x-")
    }
}

impl Serialize for Paths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len() + self.extensions.0.len()))?;
        for (path, item) in &self.items {
            map.serialize_entry(path, item)?;
        }
        for (key, value) in &self.extensions.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Paths {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;

        let mut paths = Paths::default();
        for (key, value) in raw {
            if Paths::is_extension_key(&key) {
                paths.extensions.insert(key, value);
                continue;
            }
            let item = PathItem::deserialize(value)
                .map_err(|e| de::Error::custom(format!("path {}: {}", key, e)))?;
            paths.items.insert(key, item);
        }
        Ok(paths)
    }
}

/// Raw path item shape as it appears in the JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawPathItem {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    get: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    put: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    post: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    delete: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    head: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    patch: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace: Option<Operation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    servers: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameters: Option<Value>,

    #[serde(flatten)]
    extensions: Extensions,
}

impl From<RawPathItem> for PathItem {
    fn from(raw: RawPathItem) -> Self {
        let slots = [
            (Method::Get, raw.get),
            (Method::Put, raw.put),
            (Method::Post, raw.post),
            (Method::Delete, raw.delete),
            (Method::Options, raw.options),
            (Method::Head, raw.head),
            (Method::Patch, raw.patch),
            (Method::Trace, raw.trace),
        ];

        let operations = slots
            .into_iter()
            .filter_map(|(method, op)| op.map(|op| (method, op)))
            .collect();

        PathItem {
            reference: raw.reference,
            summary: raw.summary,
            description: raw.description,
            operations,
            servers: raw.servers,
            parameters: raw.parameters,
            extensions: raw.extensions,
        }
    }
}

impl From<PathItem> for RawPathItem {
    fn from(mut item: PathItem) -> Self {
        let mut take = |m: Method| item.operations.remove(&m);

        RawPathItem {
            get: take(Method::Get),
            put: take(Method::Put),
            post: take(Method::Post),
            delete: take(Method::Delete),
            options: take(Method::Options),
            head: take(Method::Head),
            patch: take(Method::Patch),
            trace: take(Method::Trace),
            reference: item.reference,
            summary: item.summary,
            description: item.description,
            servers: item.servers,
            parameters: item.parameters,
            extensions: item.extensions,
        }
    }
}

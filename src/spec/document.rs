//! Top-level specification document (Swagger 2.0 or OpenAPI 3).
//!
//! JSON shape (abridged):
//! {
//!   "swagger": "2.0",
//!   "info": { "title": "...", "version": "..." },
//!   "basePath": "/api",
//!   "paths": {
//!     "/users/{id}": { "get": { "tags": ["users"], ... } }
//!   },
//!   "definitions": { ... }
//! }
//!
//! Paths keep their input order; fields not named here are kept in
//! `extensions` and written back after the named ones.

use crate::spec::operation::{Extensions, Operation};
use crate::spec::path::{Method, Paths};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swagger: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Value>,

    #[serde(default)]
    pub paths: Paths,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_definitions: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<Value>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Document {
    /// Iterate every defined operation with its path and method.
    pub fn operations(&self) -> impl Iterator<Item = (&str, Method, &Operation)> {
        self.paths.items.iter().flat_map(|(path, item)| {
            item.operations
                .iter()
                .map(move |(method, op)| (path.as_str(), *method, op))
        })
    }

    /// Mutable variant of [`Document::operations`].
    pub fn operations_mut(&mut self) -> impl Iterator<Item = (&str, Method, &mut Operation)> {
        self.paths.items.iter_mut().flat_map(|(path, item)| {
            item.operations
                .iter_mut()
                .map(move |(method, op)| (path.as_str(), *method, op))
        })
    }

    pub fn operation_count(&self) -> usize {
        self.paths.items.values().map(|item| item.operations.len()).sum()
    }
}

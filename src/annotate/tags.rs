//! Tag filter expression: `users,orders,!internal`.
//!
//! An operation is kept when none of its tags is excluded and either one of
//! its tags is included or the expression has no inclusions at all.

use crate::spec::{Document, Operation};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    include: BTreeSet<String>,
    exclude: BTreeSet<String>,
}

impl TagFilter {
    pub fn parse(expr: &str) -> Self {
        let mut filter = Self::default();
        for entry in expr.split(',') {
            let entry = entry.trim();
            match entry.strip_prefix('!') {
                Some(tag) => {
                    let tag = tag.trim();
                    if !tag.is_empty() {
                        filter.exclude.insert(tag.to_string());
                    }
                }
                None if !entry.is_empty() => {
                    filter.include.insert(entry.to_string());
                }
                None => {}
            }
        }
        filter
    }

    /// True when the expression contained no usable entries.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    pub fn matches(&self, op: &Operation) -> bool {
        if self.is_empty() {
            return true;
        }
        if op.tags().iter().any(|t| self.exclude.contains(t)) {
            return false;
        }
        self.include.is_empty() || op.tags().iter().any(|t| self.include.contains(t))
    }

    /// Drop non-matching operations, then paths left without operations.
    /// Returns the number of operations removed.
    pub fn apply(&self, doc: &mut Document) -> usize {
        if self.is_empty() {
            return 0;
        }

        let mut removed = 0usize;
        for (path, item) in doc.paths.items.iter_mut() {
            item.operations.retain(|method, op| {
                let keep = self.matches(op);
                if !keep {
                    tracing::debug!(%path, %method, tags = ?op.tags(), "filtered out operation");
                    removed += 1;
                }
                keep
            });
        }
        doc.paths.items.retain(|_, item| !item.is_empty());

        removed
    }
}

//! Operation annotation: badges from tags, optional tag collapsing.

use crate::annotate::badges::BadgeConfig;
use crate::spec::{Badge, Document, Operation};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateOptions {
    /// Keep only the first tag of every tagged operation.
    pub collapse_tags_to_first: bool,
}

/// Counters reported after annotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateSummary {
    pub visited: usize,
    pub badged: usize,
    pub collapsed: usize,
}

/// Annotate every tagged operation in `doc` in place.
///
/// Untagged operations are left alone. The `x-badges` entry is only written
/// when at least one tag has a configured color.
pub fn annotate(doc: &mut Document, badges: &BadgeConfig, opts: AnnotateOptions) -> AnnotateSummary {
    let mut summary = AnnotateSummary::default();

    for (path, method, op) in doc.operations_mut() {
        if op.tags().is_empty() {
            continue;
        }
        summary.visited += 1;
        tracing::debug!(%path, %method, tags = ?op.tags(), "processing operation");

        if attach_badges(op, badges) {
            summary.badged += 1;
        }
        if opts.collapse_tags_to_first && op.collapse_tags() {
            summary.collapsed += 1;
        }
    }

    summary
}

/// Badges for `op`'s tags, in tag order.
pub fn badges_for(op: &Operation, badges: &BadgeConfig) -> Vec<Badge> {
    op.tags()
        .iter()
        .filter_map(|tag| badges.color_for(tag).map(|color| Badge::new(tag.as_str(), color)))
        .collect()
}

fn attach_badges(op: &mut Operation, badges: &BadgeConfig) -> bool {
    if badges.is_empty() {
        return false;
    }
    let list = badges_for(op, badges);
    if list.is_empty() {
        return false;
    }
    if let Some(previous) = op.extensions.badges() {
        tracing::debug!(?previous, "replacing existing badges");
    }
    op.extensions.set_badges(&list);
    true
}

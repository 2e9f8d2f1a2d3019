//! Generation pipeline: load -> filter -> annotate -> write JSON + viewer page.

use crate::Result;
use crate::annotate::{self, AnnotateOptions, BadgeConfig, TagFilter};
use crate::diagnostics;
use crate::render::{self, ViewerPage};
use crate::spec::{self, Document};
use anyhow::Context;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Extractor output; `-` for stdin.
    pub input: String,
    pub output_dir: PathBuf,
    pub api_dir: String,
    pub base_name: String,
    /// Page title; defaults to `base_name`.
    pub title: Option<String>,
    pub server_url: Option<String>,
    pub embedded: bool,
    pub tags: Option<String>,
    pub first_tag_only: bool,
    pub generate_html: bool,
    pub badges: String,
}

impl GenerateOptions {
    pub fn target_dir(&self) -> PathBuf {
        self.output_dir.join(&self.api_dir)
    }

    pub fn title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => self.base_name.as_str(),
        }
    }
}

/// Files written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub spec_file: PathBuf,
    pub html_file: Option<PathBuf>,
}

pub fn generate(opts: &GenerateOptions) -> Result<Generated> {
    let dir = opts.target_dir();
    fs::create_dir_all(&dir).with_context(|| format!("create directory {}", dir.display()))?;

    let mut doc = spec::read_document(&opts.input)?;
    postprocess(&mut doc, opts);

    let json = render::render_document(&doc)?;
    let spec_file = dir.join(format!("{}.json", opts.base_name));
    fs::write(&spec_file, &json).with_context(|| format!("write {}", spec_file.display()))?;

    let html_file = if opts.generate_html {
        let page = ViewerPage {
            title: opts.title(),
            base_name: &opts.base_name,
            server_url: opts.server_url.as_deref().filter(|u| !u.is_empty()),
            embedded_spec: opts.embedded.then_some(json.as_str()),
        };
        let path = dir.join("index.html");
        fs::write(&path, render::render_viewer_page(&page))
            .with_context(|| format!("write {}", path.display()))?;
        Some(path)
    } else {
        None
    };

    Ok(Generated {
        spec_file,
        html_file,
    })
}

/// Tag filtering, badge injection and tag collapsing, in that order.
pub fn postprocess(doc: &mut Document, opts: &GenerateOptions) {
    if let Some(expr) = opts.tags.as_deref() {
        let before = doc.operation_count();
        let removed = TagFilter::parse(expr).apply(doc);
        tracing::info!(filter = expr, removed, kept = before - removed, "applied tag filter");
        if before > 0 && removed == before {
            diagnostics::warn(format!("tag filter {:?} removed every operation", expr));
        }
    }

    let badges = BadgeConfig::parse(&opts.badges);
    warn_unused_badges(doc, &badges);

    let summary = annotate::annotate(
        doc,
        &badges,
        AnnotateOptions {
            collapse_tags_to_first: opts.first_tag_only,
        },
    );
    tracing::info!(
        visited = summary.visited,
        badged = summary.badged,
        collapsed = summary.collapsed,
        "annotated operations"
    );
}

fn warn_unused_badges(doc: &Document, badges: &BadgeConfig) {
    if badges.is_empty() {
        return;
    }
    let used: BTreeSet<&str> = doc
        .operations()
        .flat_map(|(_, _, op)| op.tags().iter().map(String::as_str))
        .collect();
    for tag in badges.tags().filter(|t| !used.contains(t)) {
        diagnostics::warn(format!("badge tag '{}' does not match any operation", tag));
    }
}

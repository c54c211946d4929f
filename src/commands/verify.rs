use anyhow::Result;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::commands::CommandReport;
use crate::gallery::config::load_config;
use crate::gallery::index::{self, entry_str, entry_text};
use crate::gallery::merge::is_sorted_descending;
use crate::gallery::paths::{resolve_paths, resolve_root};
use crate::gallery::slug::is_slug;

#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    pub root: Option<PathBuf>,
}

fn label(pos: usize, item: &Value) -> String {
    match entry_str(item, "id") {
        Some(id) => format!("items[{pos}] ({id})"),
        None => format!("items[{pos}]"),
    }
}

fn check_ids(items: &[Value]) -> CommandReport {
    let mut report = CommandReport::new("verify.ids");
    let mut seen = BTreeSet::new();
    for (pos, item) in items.iter().enumerate() {
        let id = entry_text(item, "id");
        if id.is_empty() {
            report.issue(format!("{}: missing id", label(pos, item)));
            continue;
        }
        if !is_slug(&id) {
            report.issue(format!("{}: id is not url-safe", label(pos, item)));
        }
        if !seen.insert(id.clone()) {
            report.issue(format!("{}: duplicate id", label(pos, item)));
        }
    }
    report
}

fn string_list(value: Option<&Value>) -> Option<Vec<&str>> {
    value?.as_array()?.iter().map(Value::as_str).collect()
}

fn check_images(items: &[Value]) -> CommandReport {
    let mut report = CommandReport::new("verify.images");
    for (pos, item) in items.iter().enumerate() {
        let Some(images) = string_list(item.get("images")) else {
            report.issue(format!("{}: images missing or not a list of paths", label(pos, item)));
            continue;
        };
        if images.is_empty() {
            report.issue(format!("{}: images is empty", label(pos, item)));
            continue;
        }
        if !images.is_sorted() {
            report.issue(format!("{}: images are not sorted", label(pos, item)));
        }
        let src = entry_str(item, "src");
        if src != entry_str(item, "thumb") {
            report.issue(format!("{}: src and thumb differ", label(pos, item)));
        }
        if src != images.iter().min().copied() {
            report.issue(format!("{}: src is not the first image", label(pos, item)));
        }
    }
    report
}

pub fn run(opts: &VerifyOptions) -> Result<CommandReport> {
    let root = resolve_root(opts.root.as_deref())?;
    let cfg = load_config(&root)?;
    let paths = resolve_paths(&root, &cfg);
    let gallery = index::load(&paths.index_file)?;

    let mut report = CommandReport::new("verify");
    let mut per_category: BTreeMap<String, usize> = BTreeMap::new();
    for item in &gallery.items {
        *per_category.entry(entry_text(item, "category")).or_default() += 1;
    }

    report.detail(format!("index={}", paths.index_file.display()));
    report.detail(format!("items={}", gallery.items.len()));
    for (category, count) in &per_category {
        let name = if category.is_empty() { "(none)" } else { category.as_str() };
        report.detail(format!("category.{name}={count}"));
    }

    report.merge(check_ids(&gallery.items));
    report.merge(check_images(&gallery.items));
    if !is_sorted_descending(&gallery.items) {
        report.issue("items are not sorted newest first by (date, title)");
    }

    if report.ok {
        report.detail("verify: ok");
    }
    Ok(report)
}

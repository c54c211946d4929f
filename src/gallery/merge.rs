use anyhow::Result;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::gallery::article::build_article;
use crate::gallery::date::ymd_to_iso;
use crate::gallery::grouping::FileGroup;
use crate::gallery::index::{GalleryEntry, entry_str, entry_text};
use crate::gallery::slug::slugify;
use crate::gallery::translate::english_title_from_prompt;

/// Every id known during one run: the loaded index plus everything assigned
/// since. Ids of replaced entries stay reserved until the run ends.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    ids: BTreeSet<String>,
}

impl IdRegistry {
    pub fn from_items(items: &[Value]) -> Self {
        let ids = items
            .iter()
            .map(|item| entry_text(item, "id"))
            .filter(|id| !id.is_empty())
            .collect();
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Reserves `base`, or `base-2`, `base-3`, ... if taken.
    pub fn claim(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut n = 2u32;
        while self.ids.contains(&candidate) {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        if candidate != base {
            log::debug!("id {base} taken, using {candidate}");
        }
        self.ids.insert(candidate.clone());
        candidate
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    pub groups: usize,
    pub files: usize,
    pub removed: usize,
}

/// Drops every entry of `category`; returns how many went.
pub fn remove_category(items: &mut Vec<Value>, category: &str) -> usize {
    let before = items.len();
    items.retain(|item| entry_str(item, "category") != Some(category));
    before - items.len()
}

pub fn base_id(category: &str, ymd: &str, hm: &str, seq: usize) -> String {
    slugify(&format!("{}-{ymd}-{hm}-{seq:03}", slugify(category)))
}

pub fn build_entry(category: &str, group: &FileGroup, id: String) -> Option<GalleryEntry> {
    let first = group.images.first()?.clone();
    let title_part = english_title_from_prompt(&group.key.prompt, &group.key.hm);
    Some(GalleryEntry {
        id,
        title: format!("{category}: {title_part}"),
        category: category.to_string(),
        date: ymd_to_iso(&group.key.ymd),
        src: first.clone(),
        thumb: first,
        images: group.images.clone(),
        article: build_article(category, &title_part, &group.key.prompt),
    })
}

/// Replaces `category` in `items` with one entry per group, in group order.
pub fn rebuild_category(
    items: &mut Vec<Value>,
    registry: &mut IdRegistry,
    category: &str,
    groups: &[FileGroup],
    file_count: usize,
) -> Result<CategorySummary> {
    let removed = remove_category(items, category);

    let mut added = 0usize;
    for (idx, group) in groups.iter().enumerate() {
        if group.images.is_empty() {
            continue;
        }
        let base = base_id(category, &group.key.ymd, &group.key.hm, idx + 1);
        let id = registry.claim(&base);
        let Some(entry) = build_entry(category, group, id) else {
            continue;
        };
        log::debug!("{category}: {} <- {} image(s)", entry.id, entry.images.len());
        items.push(serde_json::to_value(&entry)?);
        added += 1;
    }

    Ok(CategorySummary {
        category: category.to_string(),
        groups: added,
        files: file_count,
        removed,
    })
}

fn compare_date_title(a: &Value, b: &Value) -> Ordering {
    let left = (entry_text(a, "date"), entry_text(a, "title"));
    let right = (entry_text(b, "date"), entry_text(b, "title"));
    left.cmp(&right)
}

/// Newest first by `(date, title)`; ties keep their current order.
pub fn sort_items(items: &mut [Value]) {
    items.sort_by(|a, b| compare_date_title(b, a));
}

pub fn is_sorted_descending(items: &[Value]) -> bool {
    items
        .windows(2)
        .all(|pair| compare_date_title(&pair[0], &pair[1]) != Ordering::Less)
}

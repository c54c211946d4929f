use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

const FALLBACK_YMD: &str = "00000000";
const FALLBACK_HM: &str = "0000";

static RE_GENERATED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<ymd>[0-9]{8})_(?P<hm>[0-9]{4})_(?P<prompt>.*?)_remix_.*\.(png|jpg|jpeg|webp)$",
    )
    .expect("Invalid regex")
});

/// Files sharing a key become one gallery entry. Ordering is (date, time, prompt).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub ymd: String,
    pub hm: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub key: GroupKey,
    /// Forward-slash relative paths, sorted ascending.
    pub images: Vec<String>,
}

pub fn is_image_file_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Parses `<ymd>_<hm>_<prompt>_remix_<rest>.<ext>`; anything else gets a
/// synthetic key built from the file stem.
pub fn group_key_for(file_name: &str) -> GroupKey {
    if let Some(caps) = RE_GENERATED_NAME.captures(file_name) {
        return GroupKey {
            ymd: caps["ymd"].to_string(),
            hm: caps["hm"].to_string(),
            prompt: caps["prompt"].to_string(),
        };
    }

    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    GroupKey {
        ymd: FALLBACK_YMD.to_string(),
        hm: FALLBACK_HM.to_string(),
        prompt: stem.to_string(),
    }
}

/// Groups `file_names` (already filtered to images) under `rel_prefix/category`.
pub fn group_files(rel_prefix: &str, category: &str, file_names: &[String]) -> Vec<FileGroup> {
    let mut groups: BTreeMap<GroupKey, Vec<String>> = BTreeMap::new();
    for name in file_names {
        let rel = format!("{}/{category}/{name}", rel_prefix.trim_end_matches('/'));
        groups.entry(group_key_for(name)).or_default().push(rel);
    }

    groups
        .into_iter()
        .map(|(key, mut images)| {
            images.sort();
            FileGroup { key, images }
        })
        .collect()
}

/// Image file names directly inside `folder`, sorted by name.
pub fn list_image_files(folder: &Path) -> Result<Vec<String>> {
    let read_dir =
        fs::read_dir(folder).with_context(|| format!("failed to read {}", folder.display()))?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            log::warn!("skipping non-UTF-8 file name in {}", folder.display());
            continue;
        };
        if is_image_file_name(name) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::GalleryError;

pub const ITEMS_FIELD: &str = "items";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub src: String,
    pub thumb: String,
    pub images: Vec<String>,
    pub article: String,
}

/// The on-disk gallery document.
///
/// Entries stay raw JSON so fields this tool does not know about survive a
/// rewrite; every other top-level field is kept in `rest` in original order.
#[derive(Debug, Clone)]
pub struct GalleryIndex {
    pub path: PathBuf,
    pub items: Vec<Value>,
    rest: Map<String, Value>,
}

impl GalleryIndex {
    pub fn from_document(path: &Path, doc: Value) -> Result<Self> {
        let Value::Object(mut rest) = doc else {
            return Err(GalleryError::IndexSchema(path.to_path_buf()).into());
        };
        let items = match rest.get_mut(ITEMS_FIELD).map(Value::take) {
            Some(Value::Array(items)) => items,
            _ => return Err(GalleryError::IndexSchema(path.to_path_buf()).into()),
        };
        Ok(Self {
            path: path.to_path_buf(),
            items,
            rest,
        })
    }

    pub fn to_document(&self) -> Value {
        let mut doc = self.rest.clone();
        doc.insert(ITEMS_FIELD.to_string(), Value::Array(self.items.clone()));
        Value::Object(doc)
    }
}

pub fn entry_str<'a>(item: &'a Value, field: &str) -> Option<&'a str> {
    item.get(field).and_then(Value::as_str)
}

/// Field rendered as text: strings as-is, other JSON values in their JSON form.
pub fn entry_text(item: &Value, field: &str) -> String {
    match item.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn load(path: &Path) -> Result<GalleryIndex> {
    if !path.exists() {
        return Err(GalleryError::IndexMissing(path.to_path_buf()).into());
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let doc: Value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    GalleryIndex::from_document(path, doc)
}

/// Pretty JSON with a trailing newline, swapped in through a sibling temp file.
pub fn save(index: &GalleryIndex) -> Result<()> {
    let path = &index.path;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let data = serde_json::to_string_pretty(&index.to_document())?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(data.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.flush()?;
    tmp.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::GalleryError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryLayoutConfig {
    pub index_file: String,
    pub assets_dir: String,
}

impl Default for GalleryLayoutConfig {
    fn default() -> Self {
        Self {
            index_file: "gallery.json".to_string(),
            assets_dir: "assets".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GalleryConfig {
    pub layout: GalleryLayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PartialLayoutConfig {
    index_file: Option<String>,
    assets_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PartialGalleryConfig {
    layout: Option<PartialLayoutConfig>,
}

fn env_or_string(var: &str, fallback: &str) -> String {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => fallback.to_string(),
    }
}

fn validate(cfg: &GalleryConfig) -> Result<()> {
    if cfg.layout.index_file.trim().is_empty() {
        return Err(GalleryError::InvalidConfig("layout.index_file cannot be empty".into()).into());
    }
    let assets = cfg.layout.assets_dir.trim();
    if assets.is_empty() {
        return Err(GalleryError::InvalidConfig("layout.assets_dir cannot be empty".into()).into());
    }
    let relative = Path::new(assets)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !relative {
        return Err(GalleryError::InvalidConfig(format!(
            "layout.assets_dir must be a relative path inside the gallery root: {assets}"
        ))
        .into());
    }
    Ok(())
}

fn resolve_config_path(root: &Path) -> PathBuf {
    if let Ok(custom) = env::var("GALLERY_CONFIG_PATH") {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    root.join("gallery.toml")
}

fn merge_file_config(base: &mut GalleryConfig, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let raw = fs::read_to_string(path).map_err(|err| {
        GalleryError::InvalidConfig(format!("failed to read {}: {err}", path.display()))
    })?;
    let parsed: PartialGalleryConfig = toml::from_str(&raw).map_err(|err| {
        GalleryError::InvalidConfig(format!("failed to parse {}: {err}", path.display()))
    })?;
    if let Some(layout) = parsed.layout {
        if let Some(index_file) = layout.index_file {
            base.layout.index_file = index_file;
        }
        if let Some(assets_dir) = layout.assets_dir {
            base.layout.assets_dir = assets_dir;
        }
    }
    Ok(())
}

/// Defaults, then `gallery.toml` (or `GALLERY_CONFIG_PATH`), then `GALLERY_*` env vars.
pub fn load_config(root: &Path) -> Result<GalleryConfig> {
    let mut cfg = GalleryConfig::default();
    merge_file_config(&mut cfg, &resolve_config_path(root))?;

    cfg.layout.index_file = env_or_string("GALLERY_INDEX_FILE", &cfg.layout.index_file);
    cfg.layout.assets_dir = env_or_string("GALLERY_ASSETS_DIR", &cfg.layout.assets_dir);

    validate(&cfg)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::{GalleryConfig, merge_file_config, validate};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_valid() {
        let cfg = GalleryConfig::default();
        assert_eq!(cfg.layout.index_file, "gallery.json");
        assert_eq!(cfg.layout.assets_dir, "assets");
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn file_values_override_defaults_field_by_field() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("gallery.toml");
        fs::write(&path, "[layout]\nassets_dir = \"static/assets\"\n").expect("write toml");

        let mut cfg = GalleryConfig::default();
        merge_file_config(&mut cfg, &path).expect("merge");
        assert_eq!(cfg.layout.assets_dir, "static/assets");
        assert_eq!(cfg.layout.index_file, "gallery.json");
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let tmp = tempdir().expect("tempdir");
        let mut cfg = GalleryConfig::default();
        merge_file_config(&mut cfg, &tmp.path().join("absent.toml")).expect("merge");
        assert_eq!(cfg.layout.assets_dir, "assets");
    }

    #[test]
    fn malformed_file_is_rejected() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("gallery.toml");
        fs::write(&path, "[layout\n").expect("write toml");
        let mut cfg = GalleryConfig::default();
        assert!(merge_file_config(&mut cfg, &path).is_err());
    }

    #[test]
    fn assets_dir_must_stay_inside_root() {
        let mut cfg = GalleryConfig::default();
        cfg.layout.assets_dir = "../elsewhere".to_string();
        assert!(validate(&cfg).is_err());
        cfg.layout.assets_dir = "/abs/assets".to_string();
        assert!(validate(&cfg).is_err());
        cfg.layout.assets_dir = "  ".to_string();
        assert!(validate(&cfg).is_err());
    }
}

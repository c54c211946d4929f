use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::commands::CommandReport;
use crate::error::GalleryError;
use crate::gallery::config::load_config;
use crate::gallery::grouping::{group_files, list_image_files};
use crate::gallery::index;
use crate::gallery::merge::{CategorySummary, IdRegistry, rebuild_category, sort_items};
use crate::gallery::paths::{
    GalleryPaths, resolve_folder_arg, resolve_paths, resolve_root, same_dir,
};

#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub root: Option<PathBuf>,
    pub folders: Vec<String>,
    pub dry_run: bool,
}

/// Checks one folder argument and returns `(folder, category)`.
fn resolve_category_folder(paths: &GalleryPaths, arg: &str) -> Result<(PathBuf, String)> {
    let folder = resolve_folder_arg(&paths.root, arg);
    if !folder.is_dir() {
        return Err(GalleryError::FolderNotFound(folder).into());
    }
    let folder = folder
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", folder.display()))?;

    let under_assets = folder
        .parent()
        .is_some_and(|parent| same_dir(parent, &paths.assets_dir));
    if !under_assets {
        return Err(GalleryError::FolderOutsideAssets(paths.assets_dir.clone()).into());
    }

    let category = folder
        .file_name()
        .and_then(|s| s.to_str())
        .map(ToOwned::to_owned)
        .ok_or_else(|| GalleryError::FolderNotFound(folder.clone()))?;
    Ok((folder, category))
}

pub fn run(opts: &UpdateOptions) -> Result<CommandReport> {
    let root = resolve_root(opts.root.as_deref())?;
    let cfg = load_config(&root)?;
    let paths = resolve_paths(&root, &cfg);
    let mut report = CommandReport::new("update");

    if !paths.index_file.exists() {
        return Err(GalleryError::IndexMissing(paths.index_file.clone()).into());
    }

    let folders: Vec<&str> = opts
        .folders
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect();
    if folders.is_empty() {
        log::info!("no folders given; {} left untouched", paths.index_file.display());
        return Ok(report);
    }

    let mut gallery = index::load(&paths.index_file)?;
    let mut registry = IdRegistry::from_items(&gallery.items);
    log::debug!("{} existing id(s) reserved", registry.len());
    let mut summaries: Vec<CategorySummary> = Vec::new();

    for arg in folders {
        let (folder, category) = resolve_category_folder(&paths, arg)?;
        let files = list_image_files(&folder)?;
        let groups = group_files(&paths.assets_rel, &category, &files);
        let summary =
            rebuild_category(&mut gallery.items, &mut registry, &category, &groups, files.len())?;
        log::info!(
            "{category}: replaced {} entr(ies) with {} from {} image(s)",
            summary.removed,
            summary.groups,
            summary.files
        );
        summaries.push(summary);
    }

    sort_items(&mut gallery.items);

    let index_name = paths
        .index_file
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| paths.index_file.display().to_string());
    if opts.dry_run {
        report.detail(format!("dry-run: {index_name} not written"));
    } else {
        index::save(&gallery)?;
        report.detail(format!("Updated {index_name}"));
    }

    for summary in &summaries {
        report.detail(format!(
            "{}: {} groups, {} images",
            summary.category, summary.groups, summary.files
        ));
    }
    report.detail(format!("Total items: {}", gallery.items.len()));

    Ok(report)
}

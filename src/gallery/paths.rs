use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::gallery::config::GalleryConfig;

#[derive(Debug, Clone)]
pub struct GalleryPaths {
    pub root: PathBuf,
    pub index_file: PathBuf,
    pub assets_dir: PathBuf,
    /// Prefix written into entry paths, always with forward slashes.
    pub assets_rel: String,
}

pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("failed to resolve current directory")?;
    let root = match explicit {
        Some(p) => expand_user(p),
        None => cwd.clone(),
    };
    let root = if root.is_absolute() { root } else { cwd.join(root) };
    Ok(root.canonicalize().unwrap_or(root))
}

pub fn resolve_paths(root: &Path, cfg: &GalleryConfig) -> GalleryPaths {
    let assets_rel = cfg
        .layout
        .assets_dir
        .trim()
        .replace('\\', "/")
        .trim_matches('/')
        .to_string();
    GalleryPaths {
        root: root.to_path_buf(),
        index_file: root.join(cfg.layout.index_file.trim()),
        assets_dir: root.join(&assets_rel),
        assets_rel,
    }
}

/// Expands a leading `~` to the home directory.
pub fn expand_user(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Absolute form of a folder argument; relative paths hang off `root`.
pub fn resolve_folder_arg(root: &Path, arg: &str) -> PathBuf {
    let path = expand_user(Path::new(arg.trim()));
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

/// Compares canonical forms, falling back to the paths as given.
pub fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::{expand_user, resolve_folder_arg, resolve_paths, same_dir};
    use crate::gallery::config::GalleryConfig;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    #[test]
    fn default_layout_hangs_off_root() {
        let paths = resolve_paths(Path::new("/site"), &GalleryConfig::default());
        assert_eq!(paths.index_file, PathBuf::from("/site/gallery.json"));
        assert_eq!(paths.assets_dir, PathBuf::from("/site/assets"));
        assert_eq!(paths.assets_rel, "assets");
    }

    #[test]
    fn nested_assets_dir_keeps_forward_slashes() {
        let mut cfg = GalleryConfig::default();
        cfg.layout.assets_dir = "static/assets/".to_string();
        let paths = resolve_paths(Path::new("/site"), &cfg);
        assert_eq!(paths.assets_rel, "static/assets");
    }

    #[test]
    fn relative_folder_args_resolve_against_root() {
        assert_eq!(
            resolve_folder_arg(Path::new("/site"), "assets/dragons"),
            PathBuf::from("/site/assets/dragons")
        );
        assert_eq!(
            resolve_folder_arg(Path::new("/site"), "/abs/assets/x"),
            PathBuf::from("/abs/assets/x")
        );
    }

    #[test]
    fn plain_paths_are_not_expanded() {
        assert_eq!(expand_user(Path::new("a/~b")), PathBuf::from("a/~b"));
    }

    #[test]
    fn same_dir_sees_through_dot_segments() {
        let tmp = tempdir().expect("tempdir");
        let assets = tmp.path().join("assets");
        fs::create_dir_all(assets.join("cat")).expect("mkdir");
        let via_dots = assets.join("cat").join("..");
        assert!(same_dir(&via_dots, &assets));
        assert!(!same_dir(&assets.join("cat"), &assets));
    }
}

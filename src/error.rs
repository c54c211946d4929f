use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("{} not found", .0.display())]
    IndexMissing(PathBuf),
    #[error("{}: items missing or not list", .0.display())]
    IndexSchema(PathBuf),
    #[error("Folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),
    #[error("Folder must be under assets: {}", .0.display())]
    FolderOutsideAssets(PathBuf),
    #[error("config file invalid or unreadable: {0}")]
    InvalidConfig(String),
}

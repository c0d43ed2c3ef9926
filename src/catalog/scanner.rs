//! File system scanner for installed template applications.
//!
//! Every immediate subdirectory of a template root is an application
//! (`<root>/<app>/templates/...`).

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::variants::{VariantConfigs, CONFIG_FILENAME};
use crate::error::{Result, SchemeError};

/// Directory inside an application holding its templates and config.
pub const TEMPLATES_DIRNAME: &str = "templates";

/// File suffix of template files.
pub const TEMPLATE_SUFFIX: &str = "mustache";

/// An installed application template collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateApp {
    /// Application name (the directory name).
    pub name: String,
    /// Application root directory.
    pub path: PathBuf,
}

impl TemplateApp {
    /// Create an application entry for a directory.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }

    /// Directory holding the variant templates and `config.yaml`.
    pub fn template_dir(&self) -> PathBuf {
        self.path.join(TEMPLATES_DIRNAME)
    }

    /// Path of the variant configuration document.
    pub fn config_path(&self) -> PathBuf {
        self.template_dir().join(CONFIG_FILENAME)
    }

    /// Path of the template file for a variant.
    pub fn template_path(&self, variant: &str) -> PathBuf {
        self.template_dir()
            .join(format!("{}.{}", variant, TEMPLATE_SUFFIX))
    }

    /// Load this application's variant configuration document.
    pub fn load_variants(&self) -> Result<VariantConfigs> {
        VariantConfigs::load(&self.config_path())
    }
}

/// Result of scanning one template root.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Applications found, sorted by name.
    pub apps: Vec<TemplateApp>,
    /// Entries that could not be read.
    pub errors: Vec<SchemeError>,
}

/// Scan a template root for application directories.
///
/// A missing root yields nothing; hidden directories are skipped. Entries
/// that cannot be read are collected in [`ScanResult::errors`].
pub fn scan_directory(root: &Path) -> ScanResult {
    let mut result = ScanResult::default();
    if !root.is_dir() {
        return result;
    }

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                result.errors.push(SchemeError::Io {
                    path: e.path().unwrap_or(root).to_path_buf(),
                    message: format!("Failed to scan: {}", e),
                });
                continue;
            }
        };
        if !entry.file_type().is_dir() || entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        result.apps.push(TemplateApp::new(entry.into_path()));
    }

    result
}

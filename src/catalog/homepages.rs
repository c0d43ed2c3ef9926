//! Homepage index: an optional `<root>.yaml` file next to a template root
//! mapping application names to project URLs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, SchemeError};

/// Location of the homepage index for a template root.
pub fn index_path(root: &Path) -> Option<PathBuf> {
    let name = root.file_name()?.to_string_lossy();
    let parent = root.parent().unwrap_or_else(|| Path::new(""));
    Some(parent.join(format!("{}.yaml", name)))
}

/// Load a homepage index. A missing file is an empty index.
pub fn load_index(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.is_file() {
        return Ok(BTreeMap::new());
    }

    let malformed = |message: String| SchemeError::MalformedCatalogDocument {
        path: path.to_path_buf(),
        message,
    };

    let content = std::fs::read_to_string(path).map_err(|e| malformed(format!("Failed to read: {}", e)))?;
    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| malformed(format!("Invalid YAML: {}", e)))?;

    match value {
        serde_yaml::Value::Null => Ok(BTreeMap::new()),
        value => serde_yaml::from_value(value)
            .map_err(|e| malformed(format!("Expected a mapping of application URLs: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_index_path() {
        assert_eq!(
            index_path(Path::new("/usr/share/termscheme/templates")),
            Some(PathBuf::from("/usr/share/termscheme/templates.yaml"))
        );
        assert_eq!(
            index_path(Path::new("plugin/templates/")),
            Some(PathBuf::from("plugin/templates.yaml"))
        );
    }

    #[test]
    fn test_load_index() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("templates.yaml");
        fs::write(&path, "kitty: https://example.org/kitty\nalacritty: https://example.org/alacritty\n").unwrap();

        let index = load_index(&path).unwrap();
        assert_eq!(index.get("kitty").map(String::as_str), Some("https://example.org/kitty"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_load_missing_index() {
        assert!(load_index(Path::new("/nonexistent/templates.yaml")).unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_index() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("templates.yaml");
        fs::write(&path, "- kitty\n- alacritty\n").unwrap();

        assert!(matches!(
            load_index(&path),
            Err(SchemeError::MalformedCatalogDocument { .. })
        ));
    }
}

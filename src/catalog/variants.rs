//! Variant configuration (`templates/config.yaml`) parsing.
//!
//! The document maps each variant id to the output settings for files
//! rendered from that variant:
//!
//! ```yaml
//! default:
//!   extension: .conf
//!   output: kitty-themes
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemeError};

/// File name of the per-application variant configuration document.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Output settings for one template variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Output file suffix, including the leading dot.
    pub extension: String,

    /// Suggested output directory.
    pub output: PathBuf,
}

/// All variants of an application, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantConfigs {
    variants: Vec<(String, VariantConfig)>,
}

impl VariantConfigs {
    /// Load a variant configuration document.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SchemeError::MalformedCatalogDocument {
                path: path.to_path_buf(),
                message: format!("Failed to read: {}", e),
            }
        })?;

        Self::parse(&content).map_err(|message| SchemeError::MalformedCatalogDocument {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse a variant configuration document from YAML.
    ///
    /// Errors are plain messages; [`VariantConfigs::load`] attaches the path.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| format!("Invalid YAML: {}", e))?;

        let mapping = match value {
            serde_yaml::Value::Mapping(map) => map,
            serde_yaml::Value::Null => serde_yaml::Mapping::new(),
            _ => return Err("Expected a mapping of variant names".to_string()),
        };

        let mut variants = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let name = match key {
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Number(n) => n.to_string(),
                other => return Err(format!("Invalid variant name: {:?}", other)),
            };
            let config: VariantConfig = serde_yaml::from_value(value)
                .map_err(|e| format!("Variant {:?}: {}", name, e))?;
            variants.push((name, config));
        }

        Ok(Self { variants })
    }

    /// Get a variant's configuration.
    pub fn get(&self, name: &str) -> Option<&VariantConfig> {
        self.variants
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    /// The first variant in the document, used when none is requested.
    pub fn default_variant(&self) -> Option<&str> {
        self.variants.first().map(|(n, _)| n.as_str())
    }

    /// Variant names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|(n, _)| n.as_str())
    }

    /// Get the number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Check if there are no variants.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants_in_order() {
        let yaml = r#"
light:
  extension: .conf
  output: kitty-themes
dark:
  extension: .conf
  output: ~/.config/kitty/themes
"#;
        let configs = VariantConfigs::parse(yaml).unwrap();

        assert_eq!(configs.names().collect::<Vec<_>>(), vec!["light", "dark"]);
        assert_eq!(configs.default_variant(), Some("light"));
        assert_eq!(
            configs.get("dark"),
            Some(&VariantConfig {
                extension: ".conf".to_string(),
                output: PathBuf::from("~/.config/kitty/themes"),
            })
        );
        assert!(configs.get("nonexistent").is_none());
    }

    #[test]
    fn test_parse_extra_fields_allowed() {
        let yaml = "default:\n  extension: .yml\n  output: alacritty\n  comment: ignored\n";
        let configs = VariantConfigs::parse(yaml).unwrap();
        assert_eq!(configs.len(), 1);
    }

    #[test]
    fn test_parse_missing_field() {
        let err = VariantConfigs::parse("default:\n  extension: .yml\n").unwrap_err();
        assert!(err.contains("default"));
        assert!(err.contains("output"));
    }

    #[test]
    fn test_parse_not_mapping() {
        assert!(VariantConfigs::parse("- default\n- light\n").is_err());
    }

    #[test]
    fn test_parse_empty() {
        let configs = VariantConfigs::parse("").unwrap();
        assert!(configs.is_empty());
        assert_eq!(configs.default_variant(), None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = VariantConfigs::load(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(matches!(err, SchemeError::MalformedCatalogDocument { .. }));
    }
}

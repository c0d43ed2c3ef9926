//! Template catalog: installed application collections and their variants.
//!
//! Template roots are scanned in order; an application found in a later
//! root shadows one of the same name in an earlier root, so user templates
//! can extend or replace the system ones.
//!
//! # Layout
//!
//! ```text
//! <root>/
//!   kitty/
//!     templates/
//!       config.yaml          # variant id -> { extension, output }
//!       default.mustache
//! <root>.yaml                # optional: app name -> homepage URL
//! ```
//!
//! # Example
//!
//! ```ignore
//! use termscheme::catalog::Catalog;
//!
//! let catalog = Catalog::scan(&search_dirs)?;
//! let descriptor = catalog.resolve("kitty", "default")?;
//! println!("{}", descriptor.template_path.display());
//! ```

mod homepages;
mod scanner;
mod variants;

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{available_help, Result, SchemeError};

pub use scanner::{scan_directory, ScanResult, TemplateApp, TEMPLATES_DIRNAME, TEMPLATE_SUFFIX};
pub use variants::{VariantConfig, VariantConfigs, CONFIG_FILENAME};

/// A resolved (application, variant) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub app: String,
    pub variant: String,
    /// Path of the `<variant>.mustache` template.
    pub template_path: PathBuf,
    pub config: VariantConfig,
}

impl TemplateDescriptor {
    /// File name for a rendered scheme: `<slug><extension>`.
    pub fn output_file_name(&self, slug: &str) -> String {
        format!("{}{}", slug, self.config.extension)
    }

    /// Suggested location for a rendered scheme: `<output>/<slug><extension>`.
    pub fn suggested_output_path(&self, slug: &str) -> PathBuf {
        self.config.output.join(self.output_file_name(slug))
    }
}

/// Installed applications discovered across the template roots.
#[derive(Debug, Default)]
pub struct Catalog {
    apps: BTreeMap<String, TemplateApp>,
    homepages: BTreeMap<String, String>,
    scan_errors: Vec<SchemeError>,
}

impl Catalog {
    /// Scan template roots in order. Missing roots are skipped; unreadable
    /// entries inside a root are kept in [`Catalog::scan_errors`].
    pub fn scan(search_dirs: &[PathBuf]) -> Result<Self> {
        let mut catalog = Self::default();

        for dir in search_dirs {
            let scanned = scan_directory(dir);
            for app in scanned.apps {
                catalog.apps.insert(app.name.clone(), app);
            }
            catalog.scan_errors.extend(scanned.errors);
            if let Some(index) = homepages::index_path(dir) {
                catalog.homepages.extend(homepages::load_index(&index)?);
            }
        }

        Ok(catalog)
    }

    /// Look up an installed application.
    pub fn app(&self, name: &str) -> Result<&TemplateApp> {
        self.apps
            .get(name)
            .ok_or_else(|| SchemeError::UnknownApplication {
                app: name.to_string(),
                help: available_help("applications", &self.app_names().collect::<Vec<_>>()),
            })
    }

    /// Application names, sorted.
    pub fn app_names(&self) -> impl Iterator<Item = &str> {
        self.apps.keys().map(|s| s.as_str())
    }

    /// Installed applications, sorted by name.
    pub fn apps(&self) -> impl Iterator<Item = &TemplateApp> {
        self.apps.values()
    }

    /// Number of installed applications.
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Check if no applications were found.
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Entries that could not be read while scanning.
    pub fn scan_errors(&self) -> &[SchemeError] {
        &self.scan_errors
    }

    /// Homepage URL for an application, if the index lists one.
    pub fn homepage(&self, app: &str) -> Option<&str> {
        self.homepages.get(app).map(|s| s.as_str())
    }

    /// Resolve an application and variant to a template descriptor.
    pub fn resolve(&self, app: &str, variant: &str) -> Result<TemplateDescriptor> {
        let template_app = self.app(app)?;
        let variants = template_app.load_variants()?;
        describe(template_app, &variants, variant)
    }

    /// Resolve an application using its first configured variant.
    pub fn resolve_default(&self, app: &str) -> Result<TemplateDescriptor> {
        let template_app = self.app(app)?;
        let variants = template_app.load_variants()?;
        let variant = variants
            .default_variant()
            .ok_or_else(|| SchemeError::MalformedCatalogDocument {
                path: template_app.config_path(),
                message: "No variants defined".to_string(),
            })?
            .to_string();
        describe(template_app, &variants, &variant)
    }
}

fn describe(app: &TemplateApp, variants: &VariantConfigs, variant: &str) -> Result<TemplateDescriptor> {
    let config = variants
        .get(variant)
        .ok_or_else(|| SchemeError::UnknownVariant {
            app: app.name.clone(),
            variant: variant.to_string(),
            help: available_help("variants", &variants.names().collect::<Vec<_>>()),
        })?;

    Ok(TemplateDescriptor {
        app: app.name.clone(),
        variant: variant.to_string(),
        template_path: app.template_path(variant),
        config: config.clone(),
    })
}

/// Scan `search_dirs` and resolve an application and variant in one step.
pub fn resolve(app: &str, variant: &str, search_dirs: &[PathBuf]) -> Result<TemplateDescriptor> {
    Catalog::scan(search_dirs)?.resolve(app, variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_app(root: &Path, app: &str, config: &str, variants: &[&str]) {
        let template_dir = root.join(app).join(TEMPLATES_DIRNAME);
        fs::create_dir_all(&template_dir).unwrap();
        fs::write(template_dir.join(CONFIG_FILENAME), config).unwrap();
        for variant in variants {
            fs::write(
                template_dir.join(format!("{}.{}", variant, TEMPLATE_SUFFIX)),
                "background #{{base0H-hex}}\n",
            )
            .unwrap();
        }
    }

    const KITTY_CONFIG: &str = "default:\n  extension: .conf\n  output: kitty-themes\n";

    #[test]
    fn test_resolve_kitty_default() {
        let dir = tempdir().unwrap();
        write_app(dir.path(), "kitty", KITTY_CONFIG, &["default"]);

        let descriptor = resolve("kitty", "default", &[dir.path().to_path_buf()]).unwrap();

        assert_eq!(descriptor.app, "kitty");
        assert_eq!(descriptor.variant, "default");
        assert!(descriptor.template_path.ends_with("kitty/templates/default.mustache"));
        assert_eq!(descriptor.config.extension, ".conf");
    }

    #[test]
    fn test_resolve_unknown_variant() {
        let dir = tempdir().unwrap();
        write_app(dir.path(), "kitty", KITTY_CONFIG, &["default"]);

        let err = resolve("kitty", "nonexistent", &[dir.path().to_path_buf()]).unwrap_err();
        match err {
            SchemeError::UnknownVariant { app, variant, help } => {
                assert_eq!(app, "kitty");
                assert_eq!(variant, "nonexistent");
                assert_eq!(help.as_deref(), Some("Available variants: default"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_unknown_application() {
        let dir = tempdir().unwrap();
        write_app(dir.path(), "kitty", KITTY_CONFIG, &["default"]);

        let err = resolve("wezterm", "default", &[dir.path().to_path_buf()]).unwrap_err();
        assert!(matches!(err, SchemeError::UnknownApplication { ref app, .. } if app == "wezterm"));
    }

    #[test]
    fn test_later_roots_shadow_earlier() {
        let system = tempdir().unwrap();
        let user = tempdir().unwrap();
        write_app(system.path(), "kitty", KITTY_CONFIG, &["default"]);
        write_app(system.path(), "alacritty", "default:\n  extension: .yml\n  output: alacritty\n", &["default"]);
        write_app(user.path(), "kitty", "light:\n  extension: .conf\n  output: mine\n", &["light"]);

        let catalog = Catalog::scan(&[system.path().to_path_buf(), user.path().to_path_buf()]).unwrap();

        assert_eq!(catalog.app_names().collect::<Vec<_>>(), vec!["alacritty", "kitty"]);
        assert!(catalog.resolve("kitty", "default").is_err());

        let descriptor = catalog.resolve("kitty", "light").unwrap();
        assert!(descriptor.template_path.starts_with(user.path()));
    }

    #[test]
    fn test_resolve_default_uses_first_variant() {
        let dir = tempdir().unwrap();
        write_app(
            dir.path(),
            "kitty",
            "dark:\n  extension: .conf\n  output: k\nlight:\n  extension: .conf\n  output: k\n",
            &["dark", "light"],
        );

        let catalog = Catalog::scan(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(catalog.resolve_default("kitty").unwrap().variant, "dark");
    }

    #[test]
    fn test_resolve_malformed_config() {
        let dir = tempdir().unwrap();
        write_app(dir.path(), "kitty", "default:\n  output: k\n", &["default"]);

        let err = resolve("kitty", "default", &[dir.path().to_path_buf()]).unwrap_err();
        assert!(matches!(err, SchemeError::MalformedCatalogDocument { .. }));
    }

    #[test]
    fn test_resolve_default_without_variants() {
        let dir = tempdir().unwrap();
        write_app(dir.path(), "kitty", "", &[]);

        let catalog = Catalog::scan(&[dir.path().to_path_buf()]).unwrap();
        assert!(matches!(
            catalog.resolve_default("kitty"),
            Err(SchemeError::MalformedCatalogDocument { .. })
        ));
    }

    #[test]
    fn test_homepages() {
        let parent = tempdir().unwrap();
        let root = parent.path().join("templates");
        write_app(&root, "kitty", KITTY_CONFIG, &["default"]);
        fs::write(parent.path().join("templates.yaml"), "kitty: https://example.org/kitty\n").unwrap();

        let catalog = Catalog::scan(&[root]).unwrap();
        assert_eq!(catalog.homepage("kitty"), Some("https://example.org/kitty"));
        assert_eq!(catalog.homepage("alacritty"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_keeps_unreadable_entries() {
        let dir = tempdir().unwrap();
        write_app(dir.path(), "kitty", KITTY_CONFIG, &["default"]);
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("wezterm")).unwrap();

        let catalog = Catalog::scan(&[dir.path().to_path_buf()]).unwrap();

        assert_eq!(catalog.app_names().collect::<Vec<_>>(), vec!["kitty"]);
        assert_eq!(catalog.scan_errors().len(), 1);
    }

    #[test]
    fn test_later_homepage_index_wins() {
        let system = tempdir().unwrap();
        let user = tempdir().unwrap();
        let system_root = system.path().join("templates");
        let user_root = user.path().join("templates");
        write_app(&system_root, "kitty", KITTY_CONFIG, &["default"]);
        write_app(&user_root, "kitty", KITTY_CONFIG, &["default"]);
        fs::write(
            system.path().join("templates.yaml"),
            "kitty: https://example.org/system/kitty\nalacritty: https://example.org/system/alacritty\n",
        )
        .unwrap();
        fs::write(user.path().join("templates.yaml"), "kitty: https://example.org/user/kitty\n").unwrap();

        let catalog = Catalog::scan(&[system_root, user_root]).unwrap();

        assert_eq!(catalog.homepage("kitty"), Some("https://example.org/user/kitty"));
        assert_eq!(catalog.homepage("alacritty"), Some("https://example.org/system/alacritty"));
    }

    #[test]
    fn test_suggested_output_path() {
        let descriptor = TemplateDescriptor {
            app: "kitty".to_string(),
            variant: "default".to_string(),
            template_path: PathBuf::from("kitty/templates/default.mustache"),
            config: VariantConfig {
                extension: ".conf".to_string(),
                output: PathBuf::from("kitty-themes"),
            },
        };

        assert_eq!(descriptor.output_file_name("mocha"), "mocha.conf");
        assert_eq!(
            descriptor.suggested_output_path("mocha"),
            PathBuf::from("kitty-themes/mocha.conf")
        );
    }
}

//! Export pipeline: translate a palette, expand it and render a template.

use std::path::PathBuf;

use crate::catalog::TemplateDescriptor;
use crate::error::Result;
use crate::template::{expand, render, Rendered};
use crate::types::{translate, Palette};

/// Result of exporting a palette through one template variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub rendered: Rendered,
    /// Slug of the exported scheme.
    pub slug: String,
    /// Where the variant suggests saving the result.
    pub output_path: PathBuf,
}

/// Run translate, expand and render for a resolved template.
///
/// Nothing is written; the caller decides what to do with the text.
pub fn export(theme_name: &str, palette: &Palette, descriptor: &TemplateDescriptor) -> Result<Export> {
    let scheme = translate(theme_name, palette);
    let data = expand(&scheme);
    let rendered = render(&descriptor.template_path, &data)?;

    Ok(Export {
        rendered,
        output_path: descriptor.suggested_output_path(&scheme.slug),
        slug: scheme.slug,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VariantConfig;
    use crate::error::SchemeError;
    use std::fs;
    use tempfile::tempdir;

    fn palette() -> Palette {
        let mut entries = vec![
            ("TERMINAL_BACKGROUND".to_string(), "282828".to_string()),
            ("TERMINAL_FOREGROUND".to_string(), "ebdbb2".to_string()),
        ];
        for n in 0..16 {
            entries.push((format!("TERMINAL_COLOR{}", n), format!("{:02x}{:02x}{:02x}", n, n, n)));
        }
        Palette::from_entries(entries).unwrap()
    }

    fn descriptor(template_path: PathBuf) -> TemplateDescriptor {
        TemplateDescriptor {
            app: "kitty".to_string(),
            variant: "default".to_string(),
            template_path,
            config: VariantConfig {
                extension: ".conf".to_string(),
                output: PathBuf::from("kitty-themes"),
            },
        }
    }

    #[test]
    fn test_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("default.mustache");
        fs::write(&path, "# {{scheme-name}}\nbackground #{{base0H-hex}}\ncolor1 #{{base01-hex}}\n").unwrap();

        let export = export("Retro/Gruvbox", &palette(), &descriptor(path)).unwrap();

        assert_eq!(
            export.rendered.text,
            "# Retro/Gruvbox\nbackground #282828\ncolor1 #010101\n"
        );
        assert!(export.rendered.unresolved.is_empty());
        assert_eq!(export.slug, "gruvbox");
        assert_eq!(export.output_path, PathBuf::from("kitty-themes/gruvbox.conf"));
    }

    #[test]
    fn test_export_missing_template() {
        let dir = tempdir().unwrap();
        let err = export("t", &palette(), &descriptor(dir.path().join("nope.mustache"))).unwrap_err();
        assert!(matches!(err, SchemeError::TemplateNotFound { .. }));
    }
}

//! Export command implementation.
//!
//! Renders a palette through one application template and prints the
//! result, or writes it to `--output`.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::catalog::Catalog;
use crate::error::{Result, SchemeError};
use crate::export::export;
use crate::output::{display_path, Printer};
use crate::types::Palette;

use super::{theme_name, TemplateArgs};

/// Render a palette through an application template
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Palette file (oomox theme file, or YAML with a .yaml/.yml extension)
    #[arg(required = true)]
    pub palette: PathBuf,

    /// Application to export for (e.g. kitty, alacritty)
    #[arg(long, short)]
    pub app: String,

    /// Template variant (default: the first variant in the app's config.yaml)
    #[arg(long, short)]
    pub variant: Option<String>,

    /// Theme name (default: palette file name without extension)
    #[arg(long, short)]
    pub name: Option<String>,

    /// Write the rendered scheme to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub templates: TemplateArgs,
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let palette = Palette::load(&args.palette)?;
    let name = theme_name(args.name.as_deref(), &args.palette);

    let catalog = Catalog::scan(&args.templates.search_dirs())?;
    for e in catalog.scan_errors() {
        printer.warning("Skipping", &e.to_string());
    }
    let descriptor = match &args.variant {
        Some(variant) => catalog.resolve(&args.app, variant)?,
        None => catalog.resolve_default(&args.app)?,
    };

    printer.status(
        "Rendering",
        &format!(
            "{}/{} {}",
            descriptor.app,
            descriptor.variant,
            printer.dim(&display_path(&descriptor.template_path))
        ),
    );

    let result = export(&name, &palette, &descriptor)?;

    for tag in &result.rendered.unresolved {
        printer.warning("Unresolved", &format!("{{{{{}}}}} rendered empty", tag));
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &result.rendered.text).map_err(|e| SchemeError::Io {
                path: path.clone(),
                message: format!("Failed to write output: {}", e),
            })?;
            printer.success("Wrote", &display_path(path));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(result.rendered.text.as_bytes())
                .map_err(|e| SchemeError::Io {
                    path: PathBuf::from("<stdout>"),
                    message: e.to_string(),
                })?;
        }
    }

    printer.info("Suggested", &display_path(&result.output_path));

    Ok(())
}

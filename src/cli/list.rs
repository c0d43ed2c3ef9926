//! List command implementation.
//!
//! Scans the template roots and prints an inventory of applications,
//! their variants and homepages.

use clap::Args;

use crate::catalog::{Catalog, TemplateApp};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

use super::TemplateArgs;

/// List installed template applications and their variants
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub templates: TemplateArgs,
}

/// One application in the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSummary {
    pub name: String,
    /// Variant ids in config document order.
    pub variants: Vec<String>,
    pub homepage: Option<String>,
}

impl AppSummary {
    /// Inventory line, e.g. `kitty -> default, light (https://...)`.
    pub fn line(&self, printer: &Printer) -> String {
        let mut line = format!("{} {} {}", self.name, printer.dim("->"), self.variants.join(", "));
        if let Some(url) = &self.homepage {
            line.push(' ');
            line.push_str(&printer.dim(&format!("({})", url)));
        }
        line
    }
}

/// Summarize one application. Fails when its variant config cannot be loaded.
pub fn summarize(catalog: &Catalog, app: &TemplateApp) -> Result<AppSummary> {
    let variants = app.load_variants()?;
    Ok(AppSummary {
        name: app.name.clone(),
        variants: variants.names().map(str::to_string).collect(),
        homepage: catalog.homepage(&app.name).map(str::to_string),
    })
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let search_dirs = args.templates.search_dirs();
    for dir in &search_dirs {
        printer.status("Scanning", &display_path(dir));
    }

    let catalog = Catalog::scan(&search_dirs)?;
    for e in catalog.scan_errors() {
        printer.warning("Skipping", &e.to_string());
    }
    if catalog.is_empty() {
        printer.warning("Empty", "no template applications found");
        return Ok(());
    }

    for app in catalog.apps() {
        match summarize(&catalog, app) {
            Ok(summary) => printer.info("App", &summary.line(printer)),
            Err(e) => printer.warning("Skipping", &format!("{}: {}", app.name, e)),
        }
    }

    printer.success("Found", &plural(catalog.len(), "application", "applications"));

    Ok(())
}

pub mod completions;
pub mod data;
pub mod export;
pub mod list;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{search_dirs, user_templates_dir, TEMPLATES_ENV};

/// termscheme - Export terminal palettes through base16-style templates
#[derive(Parser, Debug)]
#[command(name = "termscheme")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a palette through an application template
    Export(export::ExportArgs),

    /// List installed template applications and their variants
    List(list::ListArgs),

    /// Print the template variables a palette expands to
    Data(data::DataArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Template search path options shared by subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct TemplateArgs {
    /// Template root directory (repeatable, scanned before the user templates)
    #[arg(
        long = "templates",
        short = 't',
        value_name = "DIR",
        env = TEMPLATES_ENV,
        value_delimiter = ':'
    )]
    pub templates: Vec<PathBuf>,

    /// Do not scan the user template directory
    #[arg(long)]
    pub no_user_templates: bool,
}

impl TemplateArgs {
    /// The ordered template roots to scan.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        let user_dir = if self.no_user_templates {
            None
        } else {
            user_templates_dir()
        };
        search_dirs(&self.templates, user_dir.as_deref())
    }
}

/// Theme name for a palette file: the explicit name, or the file stem.
pub(crate) fn theme_name(explicit: Option<&str>, palette: &std::path::Path) -> String {
    explicit.map(str::to_string).unwrap_or_else(|| {
        palette
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    })
}

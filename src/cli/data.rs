//! Data command implementation.
//!
//! Prints the template variables a palette expands to, for template authors.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{Result, SchemeError};
use crate::output::{plural, Printer};
use crate::template::{expand, TemplateDataSet};
use crate::types::{translate, Palette};

use super::theme_name;

/// Output format for the data dump.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormat {
    #[default]
    Json,
    Yaml,
}

/// Print the template variables a palette expands to
#[derive(Args, Debug)]
pub struct DataArgs {
    /// Palette file (oomox theme file, or YAML with a .yaml/.yml extension)
    #[arg(required = true)]
    pub palette: PathBuf,

    /// Theme name (default: palette file name without extension)
    #[arg(long, short)]
    pub name: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = DataFormat::Json)]
    pub format: DataFormat,
}

pub fn run(args: DataArgs, printer: &Printer) -> Result<()> {
    let palette = Palette::load(&args.palette)?;
    let name = theme_name(args.name.as_deref(), &args.palette);
    let data = expand(&translate(&name, &palette));

    let text = format_data(&data, args.format)?;
    std::io::stdout()
        .lock()
        .write_all(text.as_bytes())
        .map_err(|e| SchemeError::Io {
            path: PathBuf::from("<stdout>"),
            message: e.to_string(),
        })?;

    printer.success("Expanded", &plural(data.len(), "variable", "variables"));
    Ok(())
}

/// Serialize a data set in the requested format.
pub fn format_data(data: &TemplateDataSet, format: DataFormat) -> Result<String> {
    let serialized = match format {
        DataFormat::Json => serde_json::to_string_pretty(data)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| e.to_string()),
        DataFormat::Yaml => serde_yaml::to_string(data).map_err(|e| e.to_string()),
    };

    serialized.map_err(|message| SchemeError::Parse {
        message: format!("Failed to serialize template data: {}", message),
        help: None,
    })
}

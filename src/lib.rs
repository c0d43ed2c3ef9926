//! termscheme - Terminal colour scheme exporter
//!
//! A library for translating oomox terminal palettes into base16-style
//! template data and rendering it through mustache templates for terminal
//! emulators such as Alacritty and Kitty.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod output;
pub mod template;
pub mod types;

pub use catalog::{resolve, Catalog, TemplateApp, TemplateDescriptor, VariantConfig, VariantConfigs};
pub use error::{Result, SchemeError};
pub use export::{export, Export};
pub use template::{expand, render, render_str, Rendered, TemplateDataSet, TemplateValue};
pub use types::{slug_for, translate, HexColor, Palette, SchemeKey, Slot, TargetScheme};

//! Template data expansion and mustache rendering.
//!
//! A [`TargetScheme`](crate::types::TargetScheme) is flattened by [`expand`]
//! into a [`TemplateDataSet`], which [`render`] substitutes into a template
//! file.

mod data;
mod render;

pub use data::{expand, TemplateDataSet, TemplateValue};
pub use render::{render, render_str, Rendered};

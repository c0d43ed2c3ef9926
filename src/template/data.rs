//! Template data: a target scheme flattened into mustache variables.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::types::TargetScheme;

/// A single value available to templates.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValue {
    /// Strings and hex colours, rendered as-is.
    Text(String),
    /// Integer channel in `0..=255`.
    Int(u8),
    /// Fractional channel in `0.0..=1.0`.
    Dec(f64),
}

impl TemplateValue {
    /// Whether the value counts as "truthy" for mustache sections.
    ///
    /// Empty text and zero channels are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            TemplateValue::Text(s) => !s.is_empty(),
            TemplateValue::Int(n) => *n != 0,
            TemplateValue::Dec(d) => *d != 0.0,
        }
    }
}

impl fmt::Display for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateValue::Text(s) => f.write_str(s),
            TemplateValue::Int(n) => write!(f, "{}", n),
            // Debug gives the shortest round-trip form and keeps ".0" on whole numbers
            TemplateValue::Dec(d) => write!(f, "{:?}", d),
        }
    }
}

impl Serialize for TemplateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TemplateValue::Text(s) => serializer.serialize_str(s),
            TemplateValue::Int(n) => serializer.serialize_u8(*n),
            TemplateValue::Dec(d) => serializer.serialize_f64(*d),
        }
    }
}

/// Flat key/value mapping handed to the template renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplateDataSet {
    values: BTreeMap<String, TemplateValue>,
}

impl TemplateDataSet {
    /// Create an empty data set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: TemplateValue) {
        self.values.insert(key.into(), value);
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&TemplateValue> {
        self.values.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the data set is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

const CHANNELS: [&str; 3] = ["r", "g", "b"];

/// Expand a target scheme into template data.
///
/// Metadata keys are copied through. Every colour key `K` produces `K-hex`
/// and the `K-hex-*`, `K-rgb-*` and `K-dec-*` channel groups.
pub fn expand(scheme: &TargetScheme) -> TemplateDataSet {
    let mut data = TemplateDataSet::new();

    for (key, value) in scheme.metadata() {
        data.insert(key, TemplateValue::Text(value.to_string()));
    }

    for (key, colour) in scheme.colours() {
        let key = key.name();
        data.insert(format!("{key}-hex"), TemplateValue::Text(colour.as_str().to_string()));

        let hex = colour.hex_channels();
        let rgb = colour.rgb();
        let dec = colour.dec();
        for (i, channel) in CHANNELS.iter().enumerate() {
            data.insert(
                format!("{key}-hex-{channel}"),
                TemplateValue::Text(hex[i].to_string()),
            );
            data.insert(format!("{key}-rgb-{channel}"), TemplateValue::Int(rgb[i]));
            data.insert(format!("{key}-dec-{channel}"), TemplateValue::Dec(dec[i]));
        }
    }

    data
}

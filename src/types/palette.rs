//! Palette type: the user's terminal colours keyed by oomox slot name.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{Result, SchemeError};

use super::HexColor;

/// One of the 18 palette slots an exported scheme is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Background,
    Foreground,
    /// Indexed terminal colour, `0..=15`.
    Color(u8),
}

impl Slot {
    /// Every slot, in the order they are checked and translated.
    pub const ALL: [Slot; 18] = [
        Slot::Background,
        Slot::Foreground,
        Slot::Color(0),
        Slot::Color(1),
        Slot::Color(2),
        Slot::Color(3),
        Slot::Color(4),
        Slot::Color(5),
        Slot::Color(6),
        Slot::Color(7),
        Slot::Color(8),
        Slot::Color(9),
        Slot::Color(10),
        Slot::Color(11),
        Slot::Color(12),
        Slot::Color(13),
        Slot::Color(14),
        Slot::Color(15),
    ];

    /// The oomox key for this slot, e.g. `TERMINAL_COLOR5`.
    pub fn key(self) -> String {
        match self {
            Slot::Background => "TERMINAL_BACKGROUND".to_string(),
            Slot::Foreground => "TERMINAL_FOREGROUND".to_string(),
            Slot::Color(n) => format!("TERMINAL_COLOR{}", n),
        }
    }

    /// Look up a slot from its oomox key.
    pub fn from_key(key: &str) -> Option<Slot> {
        match key {
            "TERMINAL_BACKGROUND" => Some(Slot::Background),
            "TERMINAL_FOREGROUND" => Some(Slot::Foreground),
            _ => {
                let n: u8 = key.strip_prefix("TERMINAL_COLOR")?.parse().ok()?;
                // Reject "TERMINAL_COLOR05" and friends
                (n <= 15 && key.len() == "TERMINAL_COLOR".len() + n.to_string().len())
                    .then_some(Slot::Color(n))
            }
        }
    }

    fn index(self) -> usize {
        match self {
            Slot::Background => 0,
            Slot::Foreground => 1,
            Slot::Color(n) => 2 + n as usize,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// A complete terminal palette: one colour for every [`Slot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<HexColor>,
}

impl Palette {
    /// Build a palette from an open key/value mapping.
    ///
    /// Keys that are not slots are ignored. Slots are checked in
    /// [`Slot::ALL`] order, so the first missing slot is the one reported.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut found: HashMap<Slot, HexColor> = HashMap::new();
        for (key, value) in entries {
            let key = key.as_ref();
            if let Some(slot) = Slot::from_key(key) {
                found.insert(slot, HexColor::parse(key, value.as_ref())?);
            }
        }

        let colours = Slot::ALL
            .iter()
            .map(|slot| {
                found
                    .remove(slot)
                    .ok_or_else(|| SchemeError::MissingSlot { slot: slot.key() })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { colours })
    }

    /// Parse a YAML mapping of slot names to hex strings.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| SchemeError::Parse {
            message: format!("Invalid palette YAML: {}", e),
            help: None,
        })?;

        let mapping = match value {
            serde_yaml::Value::Mapping(map) => map,
            serde_yaml::Value::Null => serde_yaml::Mapping::new(),
            _ => {
                return Err(SchemeError::Parse {
                    message: "Palette must be a YAML mapping".to_string(),
                    help: Some("Use TERMINAL_COLOR0: 1e1e2e format".to_string()),
                })
            }
        };

        let mut entries = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let Some(key) = key.as_str().map(str::to_string) else {
                continue;
            };
            let value = match value {
                serde_yaml::Value::String(s) => s,
                _ if Slot::from_key(&key).is_none() => continue,
                // Unquoted colours such as 000000 or 000e12 come back as numbers
                serde_yaml::Value::Number(_) => {
                    return Err(SchemeError::InvalidColorFormat {
                        help: Some(format!("Quote the colour so YAML keeps it as text, e.g. {}: \"000e12\"", key)),
                        key,
                        value: "unquoted number".to_string(),
                    })
                }
                other => {
                    return Err(SchemeError::InvalidColorFormat {
                        key,
                        value: yaml_kind(&other).to_string(),
                        help: Some("Colours are quoted 6-digit hex strings, e.g. \"1e1e2e\"".to_string()),
                    })
                }
            };
            entries.push((key, value));
        }

        Self::from_entries(entries)
    }

    /// Parse an oomox theme file (`KEY=VALUE` lines).
    ///
    /// Blank lines and `#` comments are skipped; values may be wrapped in
    /// single or double quotes.
    pub fn parse_oomox(content: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| SchemeError::Parse {
                message: format!("Line {}: expected KEY=VALUE, got {:?}", lineno + 1, line),
                help: None,
            })?;
            entries.push((key.trim().to_string(), unquote(value.trim()).to_string()));
        }
        Self::from_entries(entries)
    }

    /// Load a palette file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` files are read as YAML, anything else as an oomox
    /// theme file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SchemeError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read palette: {}", e),
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::parse_yaml(&content),
            _ => Self::parse_oomox(&content),
        }
    }

    /// Get the colour for a slot.
    pub fn get(&self, slot: Slot) -> &HexColor {
        &self.colours[slot.index()]
    }

    /// Iterate over every slot and its colour.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &HexColor)> {
        Slot::ALL.iter().copied().zip(self.colours.iter())
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

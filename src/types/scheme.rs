//! Target scheme: a palette translated into base16-style keys.

use std::fmt;

use super::{HexColor, Palette, Slot};

/// Metadata key holding the theme name.
pub const SCHEME_NAME: &str = "scheme-name";
/// Metadata key holding the theme author.
pub const SCHEME_AUTHOR: &str = "scheme-author";
/// Metadata key holding the slug derived from the theme name.
pub const SCHEME_SLUG: &str = "scheme-slug";

/// A colour key in the target scheme: `base00`..`base0F`, plus `base0G`
/// (terminal foreground) and `base0H` (terminal background).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemeKey(Slot);

impl SchemeKey {
    /// The key a palette slot is translated to.
    pub fn for_slot(slot: Slot) -> Self {
        Self(slot)
    }

    /// The palette slot this key is filled from.
    pub fn slot(self) -> Slot {
        self.0
    }

    /// Key name as it appears in templates, e.g. `base0A`.
    pub fn name(self) -> String {
        match self.0 {
            Slot::Background => "base0H".to_string(),
            Slot::Foreground => "base0G".to_string(),
            Slot::Color(n) => format!("base0{:X}", n),
        }
    }

    /// Parse a key name. Only the exact `base0X` spellings are accepted.
    pub fn parse(name: &str) -> Option<Self> {
        let suffix = name.strip_prefix("base0")?;
        let slot = match suffix {
            "G" => Slot::Foreground,
            "H" => Slot::Background,
            _ if suffix.len() == 1 && !suffix.chars().any(|c| c.is_ascii_lowercase()) => {
                Slot::Color(u8::from_str_radix(suffix, 16).ok()?)
            }
            _ => return None,
        };
        Some(Self(slot))
    }
}

impl fmt::Display for SchemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A palette translated into the vocabulary of base16-style templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetScheme {
    pub name: String,
    pub author: String,
    pub slug: String,
    colours: Vec<(SchemeKey, HexColor)>,
}

impl TargetScheme {
    /// Metadata entries as `(key, value)` pairs.
    pub fn metadata(&self) -> [(&'static str, &str); 3] {
        [
            (SCHEME_NAME, self.name.as_str()),
            (SCHEME_AUTHOR, self.author.as_str()),
            (SCHEME_SLUG, self.slug.as_str()),
        ]
    }

    /// Colour entries in slot order.
    pub fn colours(&self) -> impl Iterator<Item = (SchemeKey, &HexColor)> {
        self.colours.iter().map(|(k, c)| (*k, c))
    }

    /// Look up a colour by key.
    pub fn get(&self, key: SchemeKey) -> Option<&HexColor> {
        self.colours.iter().find(|(k, _)| *k == key).map(|(_, c)| c)
    }
}

/// Translate a palette into a target scheme.
///
/// `theme_name` is used verbatim for both the name and the author.
pub fn translate(theme_name: &str, palette: &Palette) -> TargetScheme {
    let colours = palette
        .iter()
        .map(|(slot, colour)| (SchemeKey::for_slot(slot), colour.clone()))
        .collect();

    TargetScheme {
        name: theme_name.to_string(),
        author: theme_name.to_string(),
        slug: slug_for(theme_name),
        colours,
    }
}

/// Last `/`-separated segment of a theme name, lowercased.
pub fn slug_for(theme_name: &str) -> String {
    theme_name
        .rsplit('/')
        .next()
        .unwrap_or(theme_name)
        .to_lowercase()
}

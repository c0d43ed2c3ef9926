//! Core domain types for termscheme.
//!
//! - `HexColor` - validated 6-digit hex colours
//! - `Palette` - the 18 terminal slots of an oomox colorscheme
//! - `TargetScheme` - the palette translated to base16-style keys

mod colour;
mod palette;
mod scheme;

pub use colour::HexColor;
pub use palette::{Palette, Slot};
pub use scheme::{slug_for, translate, SchemeKey, TargetScheme, SCHEME_AUTHOR, SCHEME_NAME, SCHEME_SLUG};

//! Color and font configuration for the rasterizer.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgb8;
use crate::foundation::error::{CodeshotError, CodeshotResult};
use crate::syntax::TokenClass;

/// Built-in theme selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeVariant {
    /// Dark text on a light page (tango palette).
    #[default]
    Light,
    /// Light text on a dark page (monokai palette).
    Dark,
}

impl ThemeVariant {
    /// The full configuration for this variant.
    pub fn theme(self) -> Theme {
        match self {
            Self::Light => Theme::light(),
            Self::Dark => Theme::dark(),
        }
    }
}

/// Rasterizer configuration.
///
/// Deserializing from JSON fills absent fields from [`Theme::light`]. A `token_colors` map in
/// the input replaces the built-in map as a whole.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Font family looked up in the system font database.
    pub font_family: String,
    /// Font file that takes precedence over the family lookup.
    pub font_path: Option<PathBuf>,
    /// Font size in pixels.
    pub font_size: f32,
    /// Padding around the whole canvas.
    pub image_pad: u32,
    /// Extra vertical space below each line.
    pub line_pad: u32,
    /// Horizontal padding on each side of the line numbers.
    pub line_number_pad: u32,
    /// Minimum number of line-number columns.
    pub line_number_chars: u32,
    /// Draw a 1px separator between gutter and code.
    pub line_number_separator: bool,
    /// Page color.
    pub background: Rgb8,
    /// Color for token classes without an entry in `token_colors`.
    pub foreground: Rgb8,
    /// Line-number text color (also the separator color).
    pub line_number_fg: Rgb8,
    /// Gutter band color.
    pub line_number_bg: Rgb8,
    /// Band color behind highlighted lines.
    pub highlight: Rgb8,
    /// Per-class text colors. Missing classes inherit from their parent class.
    pub token_colors: BTreeMap<TokenClass, Rgb8>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

const FONT_FAMILY: &str = "DejaVu Sans Mono";

fn rgb(hex: u32) -> Rgb8 {
    Rgb8::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

fn palette(entries: &[(TokenClass, u32)]) -> BTreeMap<TokenClass, Rgb8> {
    entries.iter().map(|&(class, hex)| (class, rgb(hex))).collect()
}

impl Theme {
    /// The light built-in (tango palette).
    pub fn light() -> Self {
        Self {
            font_family: FONT_FAMILY.to_owned(),
            font_path: None,
            font_size: 14.0,
            image_pad: 8,
            line_pad: 2,
            line_number_pad: 6,
            line_number_chars: 2,
            line_number_separator: true,
            background: rgb(0xf8f8f8),
            foreground: rgb(0x000000),
            line_number_fg: rgb(0x999999),
            line_number_bg: rgb(0xe0e0e0),
            highlight: rgb(0xffffcc),
            token_colors: palette(&[
                (TokenClass::Error, 0xa40000),
                (TokenClass::Keyword, 0x204a87),
                (TokenClass::NameBuiltin, 0x204a87),
                (TokenClass::NameDecorator, 0x5c35cc),
                (TokenClass::String, 0x4e9a06),
                (TokenClass::Number, 0x0000cf),
                (TokenClass::Comment, 0x8f5902),
                (TokenClass::Operator, 0xce5c00),
                (TokenClass::Punctuation, 0x000000),
            ]),
        }
    }

    /// The dark built-in (monokai palette).
    pub fn dark() -> Self {
        Self {
            background: rgb(0x272822),
            foreground: rgb(0xf8f8f2),
            line_number_fg: rgb(0x888888),
            line_number_bg: rgb(0x272822),
            highlight: rgb(0x49483e),
            token_colors: palette(&[
                (TokenClass::Error, 0xed007e),
                (TokenClass::Keyword, 0x66d9ef),
                (TokenClass::KeywordNamespace, 0xff4689),
                (TokenClass::NameClass, 0xa6e22e),
                (TokenClass::NameFunction, 0xa6e22e),
                (TokenClass::NameDecorator, 0xa6e22e),
                (TokenClass::String, 0xe6db74),
                (TokenClass::Number, 0xae81ff),
                (TokenClass::Comment, 0x959077),
                (TokenClass::Operator, 0xff4689),
            ]),
            ..Self::light()
        }
    }

    /// Text color for `class`, walking up the class hierarchy before falling back to
    /// [`Theme::foreground`].
    pub fn color_for(&self, class: TokenClass) -> Rgb8 {
        let mut cur = Some(class);
        while let Some(c) = cur {
            if let Some(color) = self.token_colors.get(&c) {
                return *color;
            }
            cur = c.parent();
        }
        self.foreground
    }

    /// Load a theme from a JSON file.
    pub fn from_json_path(path: &Path) -> CodeshotResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            CodeshotError::configuration(format!("read theme '{}': {e}", path.display()))
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            CodeshotError::configuration(format!("parse theme '{}': {e}", path.display()))
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/theme.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Opaque sRGB color with 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure white, the neutral element of multiply blending.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Construct a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `RRGGBB` or the CSS shorthand `#RGB`.
    pub fn from_hex(s: &str) -> Result<Self, String> {
        parse_hex(s)
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as an `[r, g, b]` array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr([r, g, b]) => Ok(Self::new(r, g, b)),
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgb8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match s.len() {
        6 => Ok(Rgb8::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        3 => {
            // #abc expands to #aabbcc
            let nibble = |i: usize| hex_byte(&s[i..i + 1]).map(|v| v * 17);
            Ok(Rgb8::new(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        _ => Err("hex color must be #RRGGBB or #RGB (case-insensitive)".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;

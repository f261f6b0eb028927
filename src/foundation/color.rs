use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) sRGB color.
///
/// Deserializes from `"#rrggbb"`, a small set of named colors (`"blue"`, `"black"`, ...),
/// an `{r,g,b}` object of 0..1 floats, or a `[r,g,b]` array of 0..1 floats. Serializes as hex.
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
    /// Pure blue, the default chart color.
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Light gray used for grid lines.
    pub const LIGHT_GRAY: Self = Self::new(0xb0, 0xb0, 0xb0);

    /// Build a color from 8-bit channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from 0..1 float channels (clamped).
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// RGBA8 array with alpha from a 0..1 opacity.
    pub fn with_alpha(self, alpha: f64) -> [u8; 4] {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        [self.r, self.g, self.b, a]
    }

    /// `#rrggbb` form, as used in SVG attributes and serialized configs.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb`, `rrggbb` or a named color.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if let Some(named) = named_color(s) {
            return Ok(named);
        }
        let hex = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> Result<u8, String> {
            u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
        }

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!(
                "color must be #RRGGBB or a named color, got \"{s}\""
            ));
        }
        Ok(Self::new(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
        ))
    }
}

fn named_color(name: &str) -> Option<Rgb8> {
    let c = match name.to_ascii_lowercase().as_str() {
        "blue" => Rgb8::BLUE,
        "black" => Rgb8::BLACK,
        "white" => Rgb8::WHITE,
        "red" => Rgb8::new(255, 0, 0),
        "green" => Rgb8::new(0, 128, 0),
        "orange" => Rgb8::new(255, 165, 0),
        "purple" => Rgb8::new(128, 0, 128),
        "gray" | "grey" => Rgb8::new(128, 128, 128),
        "lightgray" | "lightgrey" => Rgb8::LIGHT_GRAY,
        _ => return None,
    };
    Some(c)
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
            Text(String),
            RgbObj { r: f64, g: f64, b: f64 },
            Arr(Vec<f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => Rgb8::parse(&s).map_err(serde::de::Error::custom),
            Repr::RgbObj { r, g, b } => Ok(Rgb8::from_unit(r, g, b)),
            Repr::Arr(v) => {
                if v.len() == 3 {
                    Ok(Rgb8::from_unit(v[0], v[1], v[2]))
                } else {
                    Err(serde::de::Error::custom("rgb array must have len 3 ([r,g,b])"))
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;

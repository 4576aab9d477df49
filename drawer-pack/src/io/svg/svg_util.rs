use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::Path;
use svg::node::element::path::Data;

use crate::geometry::Rect;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Write the dimensions of every placed item inside its rectangle
    #[serde(default = "default_true")]
    pub labels: bool,
    ///Draw unplaced main items in a column next to the container
    #[serde(default)]
    pub unplaced: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            labels: true,
            unplaced: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub container_fill: Color,
    pub main_item_fill: Color,
    pub filler_item_fill: Color,
    pub unplaced_item_fill: Color,
    pub label_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        container_fill: Color(0xCC, 0x82, 0x4A),
        main_item_fill: Color(0xFF, 0xC8, 0x79),
        filler_item_fill: Color(0x8F, 0xBC, 0x8F),
        unplaced_item_fill: Color(0xD0, 0x00, 0x00),
        label_color: Color(0x2D, 0x2D, 0x2D),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        container_fill: Color(0xD3, 0xD3, 0xD3),
        main_item_fill: Color(0x7A, 0x7A, 0x7A),
        filler_item_fill: Color(0xA9, 0xA9, 0xA9),
        unplaced_item_fill: Color(0x63, 0x63, 0x63),
        label_color: Color(0x00, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .ok_or_else(|| format!("invalid color: {s}"))
        };
        if hex.len() != 6 {
            return Err(format!("invalid color: {s}"));
        }
        Ok(Color(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn rect_data(rect: Rect) -> Data {
    let (x_min, y_min) = (rect.x_min as f32, rect.y_min as f32);
    let (x_max, y_max) = (rect.x_max as f32, rect.y_max as f32);
    Data::new()
        .move_to((x_min, y_min))
        .line_to((x_max, y_min))
        .line_to((x_max, y_max))
        .line_to((x_min, y_max))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_and_prints_hex() {
        let c = Color::from_str("#FFC879").unwrap();
        assert_eq!(c, Color(0xFF, 0xC8, 0x79));
        assert_eq!(c.to_string(), "#FFC879");
        assert!(Color::from_str("#FFC8").is_err());
        assert!(Color::from_str("zzzzzz").is_err());
    }

    #[test]
    fn brightness_scales_channels() {
        assert_eq!(
            change_brightness(Color(200, 100, 50), 0.5),
            Color(100, 50, 25)
        );
    }
}

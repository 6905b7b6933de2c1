use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGB color as written in the config file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from hex string like "#FF0000" or "FF0000"
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Palettes for coloring chart series and their labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Spectrum,
    Rainbow,
    Fire,
    Ocean,
    Forest,
    Purple,
    Monochrome,
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spectrum" => Ok(Self::Spectrum),
            "rainbow" => Ok(Self::Rainbow),
            "fire" => Ok(Self::Fire),
            "ocean" => Ok(Self::Ocean),
            "forest" => Ok(Self::Forest),
            "purple" => Ok(Self::Purple),
            "mono" | "monochrome" => Ok(Self::Monochrome),
            _ => {
                let names: Vec<&str> = Self::all().iter().map(|c| c.name()).collect();
                Err(format!("Unknown color scheme: {} (expected one of {})", s, names.join(", ")))
            }
        }
    }
}

impl ColorScheme {
    /// Get color for a given position (0.0 to 1.0)
    pub fn get_color(&self, position: f32) -> RgbColor {
        let position = position.clamp(0.0, 1.0);
        let (h, s, l) = match self {
            // purple -> blue -> cyan -> green -> yellow -> red
            ColorScheme::Spectrum => (270.0 - position * 270.0, 0.9, 0.55),
            // 330 rather than 360 so the last series doesn't wrap back to red
            ColorScheme::Rainbow => (position * 330.0, 0.85, 0.6),
            // red -> orange -> yellow
            ColorScheme::Fire => (position * 60.0, 0.95, 0.5),
            // deep blue -> cyan -> teal
            ColorScheme::Ocean => (180.0 + position * 60.0, 0.8, 0.45),
            ColorScheme::Forest => (80.0 + position * 60.0, 0.75, 0.4),
            ColorScheme::Purple => (270.0 + position * 60.0, 0.8, 0.5),
            ColorScheme::Monochrome => (0.0, 0.0, 0.9 - position * 0.5),
        };

        let hsl = Hsl::new(h, s, l);
        let rgb: Srgb = hsl.into_color();

        RgbColor::new(
            (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
            (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
            (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
        )
    }

    /// Color of series `index` out of `count`, spread evenly over the scheme.
    pub fn series_color(&self, index: usize, count: usize) -> RgbColor {
        if count <= 1 {
            return self.get_color(0.0);
        }
        self.get_color(index.min(count - 1) as f32 / (count - 1) as f32)
    }

    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Spectrum,
            ColorScheme::Rainbow,
            ColorScheme::Fire,
            ColorScheme::Ocean,
            ColorScheme::Forest,
            ColorScheme::Purple,
            ColorScheme::Monochrome,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorScheme::Spectrum => "spectrum",
            ColorScheme::Rainbow => "rainbow",
            ColorScheme::Fire => "fire",
            ColorScheme::Ocean => "ocean",
            ColorScheme::Forest => "forest",
            ColorScheme::Purple => "purple",
            ColorScheme::Monochrome => "monochrome",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

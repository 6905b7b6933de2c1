use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::color::{ColorScheme, RgbColor};
use crate::error::ConfigError;
use crate::format::AxisValueFormatter;
use crate::renderer::{TextAlign, TextAttributes};

/// Keys accepted by [`Config::set_value`], as `section.field`.
pub const KNOWN_KEYS: &[&str] = &[
    "text.alignment",
    "text.scale",
    "text.color",
    "text.opacity",
    "canvas.width",
    "canvas.height",
    "canvas.background",
    "canvas.aspect_ratio",
    "labels.thousands_separator",
    "labels.digits",
    "labels.color_scheme",
    "labels.radius_fraction",
    "labels.rotation",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub labels: LabelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    pub alignment: TextAlign,
    /// Glyph scale for pixel output (1 = 8px glyphs)
    pub scale: usize,
    pub color: RgbColor,
    pub opacity: f32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            alignment: TextAlign::Center,
            scale: 2,
            color: RgbColor::WHITE,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
    pub background: Option<RgbColor>,
    /// Height/width of one drawing unit; 1.0 for pixels.
    pub aspect_ratio: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 320,
            background: Some(RgbColor::BLACK),
            aspect_ratio: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabelConfig {
    pub thousands_separator: bool,
    /// Fixed decimal places; derived from the tick interval when unset
    pub digits: Option<usize>,
    pub color_scheme: ColorScheme,
    /// Label distance from the center as a fraction of the fitted radius
    pub radius_fraction: f64,
    /// Angle of the first radial label in degrees
    pub rotation: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            thousands_separator: true,
            digits: None,
            color_scheme: ColorScheme::Spectrum,
            radius_fraction: 0.8,
            rotation: 270.0,
        }
    }
}

/// Command-line overrides applied on top of the loaded file.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigOverrides {
    /// Text alignment relative to the anchor point
    #[arg(long, value_enum)]
    pub align: Option<TextAlign>,

    /// Glyph scale for pixel output
    #[arg(long)]
    pub scale: Option<usize>,

    /// Text color as hex, e.g. "#FFCC00"
    #[arg(long)]
    pub color: Option<String>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<usize>,

    /// Color scheme: spectrum, rainbow, fire, ocean, forest, purple, monochrome
    #[arg(long)]
    pub colors: Option<String>,

    /// Fixed number of decimal places for values
    #[arg(long)]
    pub digits: Option<usize>,

    /// Disable thousands separators
    #[arg(long)]
    pub no_grouping: bool,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/chartkit/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("chartkit").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists.
    /// Returns None if the file doesn't exist, warns on parse errors.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return None;
        }
        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Failed to parse config at {}: {}. Using defaults.", path.display(), e);
                None
            }
        }
    }

    /// The explicit path if given, else the default XDG path.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path().ok_or(ConfigError::NoConfigDir),
        }
    }

    /// Write the commented template to `path`, creating parent directories.
    pub fn write_template(path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, Self::generate_config_template()).map_err(io_err)
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r#"# chartkit configuration
# This file is auto-generated. Edit as needed.

[text]
# Alignment relative to the anchor point: left, center, right
alignment = "center"
# Glyph scale for pixel output (1 = 8px glyphs)
scale = 2
# Text color
color = { r = 255, g = 255, b = 255 }
# Opacity (0.0-1.0)
opacity = 1.0

[canvas]
# Output size in pixels
width = 480
height = 320
# Background (omit for transparent)
background = { r = 0, g = 0, b = 0 }
# Height/width of one drawing unit (1.0 for pixels)
aspect_ratio = 1.0

[labels]
# Group thousands with commas
thousands_separator = true
# Fixed decimal places (omit to derive from the tick interval)
# digits = 2
# Color scheme: spectrum, rainbow, fire, ocean, forest, purple, monochrome
color_scheme = "spectrum"
# Radial label distance as a fraction of the fitted radius
radius_fraction = 0.8
# Angle of the first radial label in degrees (270 = top on a y-down canvas)
rotation = 270.0
"#
        .to_string()
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &ConfigOverrides) {
        if let Some(align) = args.align {
            self.text.alignment = align;
        }
        if let Some(scale) = args.scale {
            self.text.scale = scale.max(1);
        }
        if let Some(ref color) = args.color {
            match RgbColor::from_hex(color) {
                Some(c) => self.text.color = c,
                None => warn!("Ignoring invalid text color '{}'", color),
            }
        }
        if let Some(width) = args.width {
            self.canvas.width = width;
        }
        if let Some(height) = args.height {
            self.canvas.height = height;
        }
        if let Some(ref colors) = args.colors {
            match colors.parse() {
                Ok(scheme) => self.labels.color_scheme = scheme,
                Err(e) => warn!("{}", e),
            }
        }
        if let Some(digits) = args.digits {
            self.labels.digits = Some(digits);
        }
        if args.no_grouping {
            self.labels.thousands_separator = false;
        }
    }

    pub fn text_attributes(&self) -> TextAttributes {
        TextAttributes {
            color: self.text.color,
            opacity: self.text.opacity.clamp(0.0, 1.0),
            scale: self.text.scale.max(1),
        }
    }

    /// Formatter for values ticking `interval` apart, honoring fixed digits.
    pub fn formatter(&self, interval: f64) -> AxisValueFormatter {
        let formatter = match self.labels.digits {
            Some(digits) => AxisValueFormatter::with_digits(digits),
            None => AxisValueFormatter::from_interval(interval),
        };
        formatter.thousands_separator(self.labels.thousands_separator)
    }

    /// Set `section.field` in the file at `path`, keeping its comments.
    /// The file is created from the template if missing.
    pub fn set_value(path: &Path, key: &str, raw: &str) -> Result<(), ConfigError> {
        let (section, field) = key
            .split_once('.')
            .filter(|_| KNOWN_KEYS.contains(&key))
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        let content = if path.exists() {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            Self::generate_config_template()
        };

        let mut doc = content.parse::<toml_edit::DocumentMut>()?;
        if !doc.contains_table(section) {
            doc[section] = toml_edit::table();
        }
        doc[section][field] = parse_item(raw);

        let updated = doc.to_string();
        toml::from_str::<Config>(&updated).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            reason: e.message().to_string(),
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, updated).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Set {} = {} in {}", key, raw, path.display());
        Ok(())
    }
}

/// Interpret a command-line value as the most specific TOML type.
fn parse_item(raw: &str) -> toml_edit::Item {
    let raw = raw.trim();
    if let Some(color) = raw.starts_with('#').then(|| RgbColor::from_hex(raw)).flatten() {
        let mut table = toml_edit::InlineTable::new();
        table.insert("r", i64::from(color.r).into());
        table.insert("g", i64::from(color.g).into());
        table.insert("b", i64::from(color.b).into());
        return toml_edit::value(table);
    }
    if let Ok(b) = raw.parse::<bool>() {
        return toml_edit::value(b);
    }
    if let Ok(i) = raw.parse::<i64>() {
        return toml_edit::value(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return toml_edit::value(f);
    }
    toml_edit::value(raw)
}

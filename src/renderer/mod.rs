//! Text drawing on chart surfaces
//!
//! Chart code never talks to a concrete backend. It positions labels
//! through [`TextSurface`], which any drawing target can implement:
//! - [`Canvas`], an owned RGBA pixel buffer drawn with a bitmap font
//! - `ratatui::buffer::Buffer`, one terminal cell per character
//!
//! The free functions here do the alignment arithmetic and delegate the
//! actual drawing to the surface.

pub mod terminal;
pub mod text;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::RgbColor;
use crate::error::RenderError;
use crate::geometry::{Point, Rect, Size};

pub use text::wrap_lines;

/// Horizontal anchoring of text relative to the point it is drawn at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAttributes {
    pub color: RgbColor,
    pub opacity: f32,
    /// Glyph scale factor. Pixel surfaces multiply the 8px font by it;
    /// cell surfaces ignore it.
    pub scale: usize,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            color: RgbColor::WHITE,
            opacity: 1.0,
            scale: 1,
        }
    }
}

impl TextAttributes {
    pub fn with_color(mut self, color: RgbColor) -> Self {
        self.color = color;
        self
    }
}

/// Something text can be measured against and drawn onto.
pub trait TextSurface {
    /// Size of `text` laid out on a single line.
    fn measure_text(&self, text: &str, attrs: &TextAttributes) -> Size;

    /// Size of `text` laid out over multiple lines, wrapped to the width
    /// of `constrained_to`.
    fn bounding_size(&self, text: &str, attrs: &TextAttributes, constrained_to: Size) -> Size;

    /// Draw a single line with its top-left corner at `origin`.
    fn draw_text_at(&mut self, text: &str, origin: Point, attrs: &TextAttributes);

    /// Draw `text` wrapped to `rect`, starting at its top-left corner.
    /// Lines that would end below the rect are dropped.
    fn draw_text_in_rect(&mut self, text: &str, rect: Rect, attrs: &TextAttributes);
}

/// Top-left origin for text of `width` anchored at `point`.
pub fn aligned_origin(point: Point, width: f64, align: TextAlign) -> Point {
    let x = match align {
        TextAlign::Left => point.x,
        TextAlign::Center => point.x - width / 2.0,
        TextAlign::Right => point.x - width,
    };
    Point::new(x, point.y)
}

/// Draw a single line of text anchored at `point`.
pub fn draw_text<S: TextSurface + ?Sized>(
    surface: &mut S,
    text: &str,
    point: Point,
    align: TextAlign,
    attrs: &TextAttributes,
) {
    let origin = match align {
        TextAlign::Left => point,
        _ => aligned_origin(point, surface.measure_text(text, attrs).width, align),
    };
    surface.draw_text_at(text, origin, attrs);
}

/// Draw multi-line text whose laid-out size is already known.
pub fn draw_multiline_text_sized<S: TextSurface + ?Sized>(
    surface: &mut S,
    text: &str,
    known_size: Size,
    point: Point,
    align: TextAlign,
    attrs: &TextAttributes,
) {
    let origin = aligned_origin(point, known_size.width, align);
    surface.draw_text_in_rect(text, Rect::new(origin, known_size), attrs);
}

/// Measure `text` within `constrained_to`, then draw it anchored at `point`.
pub fn draw_multiline_text<S: TextSurface + ?Sized>(
    surface: &mut S,
    text: &str,
    point: Point,
    align: TextAlign,
    attrs: &TextAttributes,
    constrained_to: Size,
) {
    let size = surface.bounding_size(text, attrs, constrained_to);
    debug!(
        "Multiline text {:?}: {}x{} within {}x{}",
        text, size.width, size.height, constrained_to.width, constrained_to.height
    );
    draw_multiline_text_sized(surface, text, size, point, align, attrs);
}

/// Owned RGBA pixel buffer.
///
/// Internal format is 4 bytes per pixel in **RGBA** order with
/// pre-multiplied alpha.
pub struct Canvas {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0u8; width * height * 4],
            width,
            height,
        }
    }

    /// Fill every pixel with an opaque color.
    pub fn fill(&mut self, color: RgbColor) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }

    /// Blend a pixel at (x, y) over what is already there.
    #[inline]
    pub fn put_pixel(&mut self, x: usize, y: usize, color: RgbColor, opacity: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) * 4;
        let a = opacity.clamp(0.0, 1.0);
        let keep = 1.0 - a;
        let src = [color.r as f32 * a, color.g as f32 * a, color.b as f32 * a, 255.0 * a];
        for (channel, s) in self.data[idx..idx + 4].iter_mut().zip(src) {
            *channel = (s + *channel as f32 * keep).round().min(255.0) as u8;
        }
    }

    /// Read the RGBA values at (x, y). Returns (r, g, b, a) — pre-multiplied.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> (u8, u8, u8, u8) {
        let idx = (y * self.width + x) * 4;
        if x < self.width && idx + 3 < self.data.len() {
            (self.data[idx], self.data[idx + 1], self.data[idx + 2], self.data[idx + 3])
        } else {
            (0, 0, 0, 0)
        }
    }

    /// Write the canvas as a binary PPM, composited over black.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let rgb: Vec<u8> = self
            .data
            .chunks_exact(4)
            .take(self.width * self.height)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        out.write_all(&rgb)?;
        out.flush()?;
        Ok(())
    }

    pub fn save_ppm(&self, path: &Path) -> Result<(), RenderError> {
        let file = File::create(path)?;
        self.write_ppm(BufWriter::new(file))?;
        debug!("Wrote {}x{} canvas to {}", self.width, self.height, path.display());
        Ok(())
    }
}

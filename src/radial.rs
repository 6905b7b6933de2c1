//! Label placement around radial (pie/radar) charts.

use tracing::debug;

use crate::color::{ColorScheme, RgbColor};
use crate::format::AxisValueFormatter;
use crate::geometry::{fit_circle, normalized_angle, position, Point, Size};
use crate::renderer::{draw_text, TextAlign, TextAttributes, TextSurface};

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub text: String,
    pub point: Point,
    /// Normalized angle in degrees.
    pub angle: f64,
    pub color: RgbColor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialLayout {
    pub center: Point,
    pub radius: f64,
    /// Angle of the first label, in degrees.
    pub rotation: f64,
    /// Height/width of one surface unit; x offsets are stretched by it.
    pub aspect_ratio: f64,
}

impl RadialLayout {
    /// Layout centered in `area` with labels at `radius_fraction` of the
    /// largest circle that fits.
    pub fn fit(area: Size, aspect_ratio: f64, radius_fraction: f64, rotation: f64) -> Self {
        let (center, max_radius) = fit_circle(area, aspect_ratio);
        Self {
            center,
            radius: max_radius * radius_fraction.clamp(0.0, 1.0),
            rotation,
            aspect_ratio,
        }
    }

    /// Spread `values` evenly around the circle, starting at `rotation`.
    pub fn place(
        &self,
        values: &[f64],
        formatter: &AxisValueFormatter,
        scheme: ColorScheme,
    ) -> Vec<PlacedLabel> {
        let count = values.len();
        let step = if count == 0 { 0.0 } else { 360.0 / count as f64 };

        values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let angle = normalized_angle(self.rotation + step * i as f64);
                let mut point = position(self.center, self.radius, angle);
                point.x = self.center.x + (point.x - self.center.x) * self.aspect_ratio;
                PlacedLabel {
                    text: formatter.format(value),
                    point,
                    angle,
                    color: scheme.series_color(i, count),
                }
            })
            .collect()
    }
}

/// Draw every label at its point, each in its own color.
pub fn render_labels<S: TextSurface + ?Sized>(
    surface: &mut S,
    labels: &[PlacedLabel],
    align: TextAlign,
    attrs: &TextAttributes,
) {
    debug!("Rendering {} radial labels", labels.len());
    for label in labels {
        draw_text(surface, &label.text, label.point, align, &attrs.with_color(label.color));
    }
}

//! Helpers for rendering charts: axis-label number math, touch hit-testing
//! among plotted values, polar placement for radial charts, and text drawn
//! through a pluggable [`renderer::TextSurface`].

pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod math;
pub mod radial;
pub mod renderer;
pub mod selection;

pub use color::{ColorScheme, RgbColor};
pub use config::Config;
pub use error::{ConfigError, RenderError};
pub use format::AxisValueFormatter;
pub use geometry::{angle_for_point, normalized_angle, position, Point, Rect, Size};
pub use math::{decimals, next_up, round_to_next_significant};
pub use renderer::{
    draw_multiline_text, draw_multiline_text_sized, draw_text, Canvas, TextAlign, TextAttributes,
    TextSurface,
};
pub use selection::{closest_data_set_index, minimum_distance, AxisDependency, SelectionDetail};

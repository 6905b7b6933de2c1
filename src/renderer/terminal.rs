//! Terminal cell surface: one character per cell, rows are lines.

use ratatui::buffer::Buffer;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::geometry::{Point, Rect, Size};
use super::{wrap_lines, TextAttributes, TextSurface};

fn style_for(attrs: &TextAttributes) -> Style {
    let c = attrs.color;
    Style::default().fg(Color::Rgb(c.r, c.g, c.b))
}

fn columns_in(width: f64) -> usize {
    if width.is_finite() {
        width.max(1.0) as usize
    } else {
        usize::MAX
    }
}

fn rows_in(height: f64) -> usize {
    if height.is_finite() {
        height.max(1.0) as usize
    } else {
        usize::MAX
    }
}

fn cell_width(c: char) -> usize {
    let mut utf8 = [0u8; 4];
    Span::raw(&*c.encode_utf8(&mut utf8)).width()
}

/// Drop the cells of `text` (drawn from column `x`) that fall left of
/// `left`. A wide glyph cut by the edge leaves blanks for its visible half.
fn clip_left(text: &str, x: i64, left: i64) -> String {
    if x >= left {
        return text.to_string();
    }
    let mut visible = String::with_capacity(text.len());
    let mut col = x;
    for c in text.chars() {
        let width = cell_width(c) as i64;
        if col >= left {
            visible.push(c);
        } else if col + width > left {
            visible.extend(std::iter::repeat(' ').take((col + width - left) as usize));
        }
        col += width;
    }
    visible
}

impl TextSurface for Buffer {
    fn measure_text(&self, text: &str, _attrs: &TextAttributes) -> Size {
        Size::new(Span::raw(text).width() as f64, 1.0)
    }

    fn bounding_size(&self, text: &str, _attrs: &TextAttributes, constrained_to: Size) -> Size {
        let lines = wrap_lines(text, columns_in(constrained_to.width));
        let widest = lines.iter().map(|l| Span::raw(l.as_str()).width()).max().unwrap_or(0);
        let rows = lines.len().min(rows_in(constrained_to.height));
        Size::new(widest as f64, rows as f64)
    }

    fn draw_text_at(&mut self, text: &str, origin: Point, attrs: &TextAttributes) {
        let area = self.area;
        let x = origin.x.round() as i64;
        let y = origin.y.round() as i64;
        if y < i64::from(area.top()) || y >= i64::from(area.bottom()) {
            return;
        }

        let left = i64::from(area.left());
        let visible = clip_left(text, x, left);
        let start = x.max(left);
        if visible.is_empty() || start >= i64::from(area.right()) {
            return;
        }

        let max_width = (i64::from(area.right()) - start) as usize;
        self.set_stringn(start as u16, y as u16, visible, max_width, style_for(attrs));
    }

    fn draw_text_in_rect(&mut self, text: &str, rect: Rect, attrs: &TextAttributes) {
        let lines = wrap_lines(text, columns_in(rect.size.width));
        for (row, line) in lines.iter().take(rows_in(rect.size.height)).enumerate() {
            let origin = Point::new(rect.origin.x, rect.origin.y + row as f64);
            self.draw_text_at(line, origin, attrs);
        }
    }
}

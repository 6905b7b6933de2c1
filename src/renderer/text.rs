//! Bitmap font text rendering for the pixel canvas.
//!
//! Glyphs are 8×8 bitmaps scaled by [`TextAttributes::scale`], with one
//! scaled pixel of spacing between characters and two between lines.

use crate::geometry::{Point, Rect, Size};
use super::{Canvas, TextAttributes, TextSurface};

const GLYPH_SIZE: usize = 8;

/// Break `text` into lines of at most `max_columns` characters.
///
/// `\n` always breaks. Words are kept whole when they fit on a line of
/// their own; longer words are split. Always returns at least one line.
pub fn wrap_lines(text: &str, max_columns: usize) -> Vec<String> {
    let max_columns = max_columns.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let mut word: Vec<char> = word.chars().collect();

            // Split words that can never fit.
            while word.len() > max_columns {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(max_columns);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            if word.is_empty() {
                continue;
            }

            let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
            if needed > max_columns {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }

        lines.push(current);
    }

    lines
}

struct Metrics {
    glyph: usize,
    spacing: usize,
    line_gap: usize,
}

impl Metrics {
    fn new(attrs: &TextAttributes) -> Self {
        let scale = attrs.scale.max(1);
        Self {
            glyph: GLYPH_SIZE * scale,
            spacing: scale,
            line_gap: 2 * scale,
        }
    }

    fn advance(&self) -> usize {
        self.glyph + self.spacing
    }

    fn line_width(&self, chars: usize) -> usize {
        if chars == 0 {
            0
        } else {
            chars * self.advance() - self.spacing
        }
    }

    fn line_height(&self) -> usize {
        self.glyph + self.line_gap
    }

    fn block_height(&self, lines: usize) -> usize {
        if lines == 0 {
            0
        } else {
            lines * self.line_height() - self.line_gap
        }
    }

    fn columns_in(&self, width: f64) -> usize {
        if !width.is_finite() {
            return usize::MAX;
        }
        ((width.max(0.0) as usize).saturating_add(self.spacing) / self.advance()).max(1)
    }

    fn rows_in(&self, height: f64) -> usize {
        if !height.is_finite() {
            return usize::MAX;
        }
        (height.max(0.0) as usize).saturating_add(self.line_gap) / self.line_height()
    }
}

impl TextSurface for Canvas {
    fn measure_text(&self, text: &str, attrs: &TextAttributes) -> Size {
        let m = Metrics::new(attrs);
        Size::new(m.line_width(text.chars().count()) as f64, m.glyph as f64)
    }

    fn bounding_size(&self, text: &str, attrs: &TextAttributes, constrained_to: Size) -> Size {
        let m = Metrics::new(attrs);
        let lines = wrap_lines(text, m.columns_in(constrained_to.width));
        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let rows = lines.len().min(m.rows_in(constrained_to.height).max(1));
        Size::new(m.line_width(widest) as f64, m.block_height(rows) as f64)
    }

    fn draw_text_at(&mut self, text: &str, origin: Point, attrs: &TextAttributes) {
        let m = Metrics::new(attrs);
        let x0 = origin.x.round() as isize;
        let y = origin.y.round() as isize;
        for (i, ch) in text.chars().enumerate() {
            let x = x0 + (i * m.advance()) as isize;
            if x >= self.width as isize {
                break;
            }
            render_char(self, x, y, ch, attrs);
        }
    }

    fn draw_text_in_rect(&mut self, text: &str, rect: Rect, attrs: &TextAttributes) {
        let m = Metrics::new(attrs);
        let lines = wrap_lines(text, m.columns_in(rect.size.width));
        let rows = m.rows_in(rect.size.height).max(1);
        for (row, line) in lines.iter().take(rows).enumerate() {
            let origin = Point::new(rect.origin.x, rect.origin.y + (row * m.line_height()) as f64);
            self.draw_text_at(line, origin, attrs);
        }
    }
}

/// Simple 8x8 bitmap font for basic text rendering.
/// Each character is represented as 8 bytes, one per row.
fn get_char_bitmap(ch: char) -> Option<[u8; 8]> {
    let ch = ch.to_ascii_uppercase();
    Some(match ch {
        'A' => [0x18, 0x24, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00],
        'B' => [0x7C, 0x42, 0x7C, 0x42, 0x42, 0x42, 0x7C, 0x00],
        'C' => [0x3C, 0x42, 0x40, 0x40, 0x40, 0x42, 0x3C, 0x00],
        'D' => [0x78, 0x44, 0x42, 0x42, 0x42, 0x44, 0x78, 0x00],
        'E' => [0x7E, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x7E, 0x00],
        'F' => [0x7E, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x40, 0x00],
        'G' => [0x3C, 0x42, 0x40, 0x4E, 0x42, 0x42, 0x3C, 0x00],
        'H' => [0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x42, 0x00],
        'I' => [0x3E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x3E, 0x00],
        'J' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x44, 0x38, 0x00],
        'K' => [0x42, 0x44, 0x78, 0x48, 0x44, 0x42, 0x42, 0x00],
        'L' => [0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7E, 0x00],
        'M' => [0x42, 0x66, 0x5A, 0x42, 0x42, 0x42, 0x42, 0x00],
        'N' => [0x42, 0x62, 0x52, 0x4A, 0x46, 0x42, 0x42, 0x00],
        'O' => [0x3C, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00],
        'P' => [0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x40, 0x00],
        'Q' => [0x3C, 0x42, 0x42, 0x42, 0x4A, 0x44, 0x3A, 0x00],
        'R' => [0x7C, 0x42, 0x42, 0x7C, 0x48, 0x44, 0x42, 0x00],
        'S' => [0x3C, 0x42, 0x30, 0x0C, 0x02, 0x42, 0x3C, 0x00],
        'T' => [0x7F, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00],
        'U' => [0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00],
        'V' => [0x42, 0x42, 0x42, 0x42, 0x24, 0x24, 0x18, 0x00],
        'W' => [0x42, 0x42, 0x42, 0x5A, 0x5A, 0x66, 0x42, 0x00],
        'X' => [0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x42, 0x00],
        'Y' => [0x41, 0x22, 0x14, 0x08, 0x08, 0x08, 0x08, 0x00],
        'Z' => [0x7E, 0x04, 0x08, 0x10, 0x20, 0x40, 0x7E, 0x00],
        '0' => [0x3C, 0x42, 0x46, 0x5A, 0x62, 0x42, 0x3C, 0x00],
        '1' => [0x08, 0x18, 0x28, 0x08, 0x08, 0x08, 0x3E, 0x00],
        '2' => [0x3C, 0x42, 0x02, 0x0C, 0x30, 0x40, 0x7E, 0x00],
        '3' => [0x3C, 0x42, 0x02, 0x1C, 0x02, 0x42, 0x3C, 0x00],
        '4' => [0x04, 0x0C, 0x14, 0x24, 0x7E, 0x04, 0x04, 0x00],
        '5' => [0x7E, 0x40, 0x7C, 0x02, 0x02, 0x42, 0x3C, 0x00],
        '6' => [0x1C, 0x20, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00],
        '7' => [0x7E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x10, 0x00],
        '8' => [0x3C, 0x42, 0x42, 0x3C, 0x42, 0x42, 0x3C, 0x00],
        '9' => [0x3C, 0x42, 0x42, 0x3E, 0x02, 0x04, 0x38, 0x00],
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00],
        '+' => [0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00, 0x00],
        '=' => [0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00, 0x00],
        '/' => [0x02, 0x04, 0x04, 0x08, 0x10, 0x10, 0x20, 0x00],
        '%' => [0x62, 0x64, 0x08, 0x10, 0x26, 0x46, 0x00, 0x00],
        '°' => [0x18, 0x24, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x08, 0x10],
        '!' => [0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x08, 0x00],
        '?' => [0x3C, 0x42, 0x02, 0x0C, 0x10, 0x00, 0x10, 0x00],
        ':' => [0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x00],
        '\'' => [0x08, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00],
        '"' => [0x24, 0x24, 0x48, 0x00, 0x00, 0x00, 0x00, 0x00],
        '(' => [0x04, 0x08, 0x10, 0x10, 0x10, 0x08, 0x04, 0x00],
        ')' => [0x20, 0x10, 0x08, 0x08, 0x08, 0x10, 0x20, 0x00],
        '&' => [0x30, 0x48, 0x30, 0x50, 0x4A, 0x44, 0x3A, 0x00],
        _ => return None,
    })
}

/// Draw one glyph with its top-left corner at (x, y), clipping at the edges.
fn render_char(canvas: &mut Canvas, x: isize, y: isize, ch: char, attrs: &TextAttributes) {
    let bitmap = match get_char_bitmap(ch) {
        Some(b) => b,
        None => return,
    };
    let scale = attrs.scale.max(1) as isize;

    for (row_idx, &row) in bitmap.iter().enumerate() {
        for col in 0..8isize {
            if (row >> (7 - col)) & 1 == 1 {
                for sy in 0..scale {
                    for sx in 0..scale {
                        let px = x + col * scale + sx;
                        let py = y + row_idx as isize * scale + sy;
                        if px >= 0 && py >= 0 {
                            canvas.put_pixel(px as usize, py as usize, attrs.color, attrs.opacity);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap_lines("min max avg", 7), vec!["min max", "avg"]);
        assert_eq!(wrap_lines("a\nb c", 10), vec!["a", "b c"]);
    }

    #[test]
    fn splits_words_longer_than_a_line() {
        assert_eq!(wrap_lines("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap_lines("", 5), vec![String::new()]);
    }

    #[test]
    fn glyph_lookup_is_case_insensitive() {
        assert_eq!(get_char_bitmap('a'), get_char_bitmap('A'));
        assert!(get_char_bitmap('~').is_none());
    }
}

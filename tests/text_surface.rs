use chartkit::renderer::{
    aligned_origin, draw_multiline_text, draw_multiline_text_sized, draw_text, Canvas, TextAlign,
    TextAttributes, TextSurface,
};
use chartkit::{Point, RgbColor, Size};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

fn symbol(buf: &Buffer, x: u16, y: u16) -> String {
    buf.cell((x, y)).map(|c| c.symbol().to_string()).unwrap_or_default()
}

fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| symbol(buf, x, y)).collect::<String>().trim_end().to_string()
}

#[test]
fn alignment_shifts_origin() {
    let p = Point::new(100.0, 7.0);
    assert_eq!(aligned_origin(p, 40.0, TextAlign::Left), Point::new(100.0, 7.0));
    assert_eq!(aligned_origin(p, 40.0, TextAlign::Center), Point::new(80.0, 7.0));
    assert_eq!(aligned_origin(p, 40.0, TextAlign::Right), Point::new(60.0, 7.0));
}

#[test]
fn canvas_measures_bitmap_glyphs() {
    let canvas = Canvas::new(1, 1);
    let attrs = TextAttributes::default();
    assert_eq!(canvas.measure_text("AB", &attrs), Size::new(17.0, 8.0));
    assert_eq!(canvas.measure_text("", &attrs), Size::new(0.0, 8.0));

    let big = TextAttributes { scale: 2, ..attrs };
    assert_eq!(canvas.measure_text("AB", &big), Size::new(34.0, 16.0));
}

#[test]
fn canvas_centers_text_on_point() {
    let mut canvas = Canvas::new(40, 10);
    let attrs = TextAttributes::default();
    // "I" is 8px wide, so its cell starts at x = 16; the top bar spans columns 2..=6.
    draw_text(&mut canvas, "I", Point::new(20.0, 0.0), TextAlign::Center, &attrs);
    assert_eq!(canvas.get_pixel(18, 0), (255, 255, 255, 255));
    assert_eq!(canvas.get_pixel(22, 0), (255, 255, 255, 255));
    assert_eq!(canvas.get_pixel(17, 0).3, 0);
    assert_eq!(canvas.get_pixel(23, 0).3, 0);
}

#[test]
fn canvas_right_aligns_text() {
    let mut canvas = Canvas::new(40, 10);
    let attrs = TextAttributes::default().with_color(RgbColor::new(255, 0, 0));
    draw_text(&mut canvas, "I", Point::new(40.0, 0.0), TextAlign::Right, &attrs);
    assert_eq!(canvas.get_pixel(34, 0), (255, 0, 0, 255));
    assert_eq!(canvas.get_pixel(33, 0).3, 0);
}

#[test]
fn canvas_clips_text_off_the_edges() {
    let mut canvas = Canvas::new(10, 10);
    let attrs = TextAttributes::default();
    draw_text(&mut canvas, "WIDE TEXT", Point::new(-30.0, -3.0), TextAlign::Left, &attrs);
    draw_text(&mut canvas, "X", Point::new(500.0, 500.0), TextAlign::Left, &attrs);
    draw_text(&mut canvas, "TAIL", Point::new(5.0, 5.0), TextAlign::Left, &attrs);
    assert_eq!(canvas.data.len(), 10 * 10 * 4);
}

#[test]
fn canvas_bounding_size_wraps_words() {
    let canvas = Canvas::new(1, 1);
    let attrs = TextAttributes::default();
    // Seven columns fit in 62px: 7 * 9 - 1.
    let size = canvas.bounding_size("min max avg", &attrs, Size::new(62.0, f64::INFINITY));
    assert_eq!(size, Size::new(62.0, 18.0));

    let one_row = canvas.bounding_size("min max avg", &attrs, Size::new(62.0, 8.0));
    assert_eq!(one_row, Size::new(62.0, 8.0));
}

#[test]
fn canvas_blends_translucent_text() {
    let mut canvas = Canvas::new(2, 1);
    canvas.fill(RgbColor::BLACK);
    canvas.put_pixel(0, 0, RgbColor::WHITE, 0.5);
    assert_eq!(canvas.get_pixel(0, 0), (128, 128, 128, 255));
    assert_eq!(canvas.get_pixel(1, 0), (0, 0, 0, 255));
}

#[test]
fn canvas_exports_ppm() {
    let mut canvas = Canvas::new(2, 1);
    canvas.fill(RgbColor::new(1, 2, 3));
    let mut out = Vec::new();
    canvas.write_ppm(&mut out).unwrap();
    assert_eq!(&out[..11], b"P6\n2 1\n255\n");
    assert_eq!(&out[11..], &[1, 2, 3, 1, 2, 3]);

    assert!(Canvas::new(0, 5).write_ppm(Vec::new()).is_err());
}

#[test]
fn buffer_centers_text_in_cells() {
    let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));
    let attrs = TextAttributes::default().with_color(RgbColor::new(10, 20, 30));
    draw_text(&mut buf, "abcd", Point::new(10.0, 1.0), TextAlign::Center, &attrs);
    assert_eq!(symbol(&buf, 7, 1), " ");
    assert_eq!(symbol(&buf, 8, 1), "a");
    assert_eq!(symbol(&buf, 11, 1), "d");
    assert_eq!(buf.cell((8, 1)).map(|c| c.fg), Some(Color::Rgb(10, 20, 30)));
}

#[test]
fn buffer_clips_at_left_edge() {
    let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
    draw_text(&mut buf, "hello", Point::new(2.0, 0.0), TextAlign::Right, &TextAttributes::default());
    assert_eq!(row(&buf, 0), "lo");
}

#[test]
fn buffer_clips_wide_glyphs_by_cell() {
    let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
    draw_text(&mut buf, "日本ab", Point::new(-1.0, 0.0), TextAlign::Left, &TextAttributes::default());
    assert_eq!(symbol(&buf, 0, 0), " ");
    assert_eq!(symbol(&buf, 1, 0), "本");
    assert_eq!(symbol(&buf, 3, 0), "a");
    assert_eq!(symbol(&buf, 4, 0), "b");

    let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
    draw_text(&mut buf, "日本ab", Point::new(-2.0, 0.0), TextAlign::Left, &TextAttributes::default());
    assert_eq!(symbol(&buf, 0, 0), "本");
    assert_eq!(symbol(&buf, 2, 0), "a");
}

#[test]
fn buffer_ignores_rows_outside_area() {
    let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
    let attrs = TextAttributes::default();
    draw_text(&mut buf, "x", Point::new(0.0, 5.0), TextAlign::Left, &attrs);
    draw_text(&mut buf, "x", Point::new(0.0, -1.0), TextAlign::Left, &attrs);
    draw_text(&mut buf, "x", Point::new(12.0, 0.0), TextAlign::Left, &attrs);
    assert_eq!(row(&buf, 0), "");
    assert_eq!(row(&buf, 1), "");
}

#[test]
fn buffer_multiline_measures_then_draws() {
    let mut buf = Buffer::empty(Rect::new(0, 0, 20, 4));
    draw_multiline_text(
        &mut buf,
        "alpha beta gamma",
        Point::new(0.0, 0.0),
        TextAlign::Left,
        &TextAttributes::default(),
        Size::new(10.0, f64::INFINITY),
    );
    assert_eq!(row(&buf, 0), "alpha beta");
    assert_eq!(row(&buf, 1), "gamma");
    assert_eq!(row(&buf, 2), "");
}

#[test]
fn buffer_multiline_right_aligns_block() {
    let mut buf = Buffer::empty(Rect::new(0, 0, 20, 2));
    draw_multiline_text(
        &mut buf,
        "ab\ncdef",
        Point::new(20.0, 0.0),
        TextAlign::Right,
        &TextAttributes::default(),
        Size::new(20.0, 2.0),
    );
    // The block is as wide as its widest line; lines start at its left edge.
    assert_eq!(symbol(&buf, 16, 0), "a");
    assert_eq!(symbol(&buf, 16, 1), "c");
    assert_eq!(symbol(&buf, 19, 1), "f");
}

#[test]
fn sized_multiline_respects_known_size() {
    let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));
    draw_multiline_text_sized(
        &mut buf,
        "ab cd",
        Size::new(2.0, 1.0),
        Point::new(5.0, 0.0),
        TextAlign::Center,
        &TextAttributes::default(),
    );
    assert_eq!(symbol(&buf, 4, 0), "a");
    assert_eq!(symbol(&buf, 5, 0), "b");
    assert_eq!(row(&buf, 1), "");
}

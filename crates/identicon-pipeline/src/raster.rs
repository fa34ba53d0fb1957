//! Canvas rendering and PNG encoding.
//!
//! Paints each pixel-map rectangle onto a white square canvas using
//! [`imageproc::drawing::draw_filled_rect_mut`], then encodes the
//! result as an RGB8 PNG.

use image::{ExtendedColorType, ImageEncoder, Rgb, codecs::png::PngEncoder};
use imageproc::drawing::draw_filled_rect_mut;

use crate::types::{Color, PipelineError, PixelMap, Point, Rect, RgbImage};

/// Color of unfilled cells.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Paint `pixel_map` in `color` on a `canvas_size` square white canvas.
///
/// Rectangles cover `[top_left, bottom_right)`, so neighbouring cells
/// share an edge without overlapping. Rectangles reaching past the
/// canvas are clipped; rectangles starting outside it are skipped.
#[must_use = "returns the rendered canvas"]
pub fn render(color: Color, pixel_map: &PixelMap, canvas_size: u32) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(canvas_size, canvas_size, BACKGROUND);
    let fill = color.to_rgb();
    for rect in pixel_map.rects() {
        if let Some(area) = clip_to_canvas(rect, canvas_size) {
            draw_filled_rect_mut(&mut canvas, area, fill);
        }
    }
    canvas
}

/// The part of `rect` inside a `canvas_size` square, or `None` when
/// nothing is left to paint.
fn clip_to_canvas(rect: &Rect, canvas_size: u32) -> Option<imageproc::rect::Rect> {
    let Point { x, y } = rect.top_left;
    let width = rect.width().min(canvas_size.saturating_sub(x));
    let height = rect.height().min(canvas_size.saturating_sub(y));
    if width == 0 || height == 0 {
        return None;
    }
    let left = i32::try_from(x).ok()?;
    let top = i32::try_from(y).ok()?;
    Some(imageproc::rect::Rect::at(left, top).of_size(width, height))
}

/// Encode a rendered canvas as PNG bytes.
///
/// # Errors
///
/// Returns [`PipelineError::ImageEncode`] if the PNG encoder fails.
pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, PipelineError> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder.write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(png)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::pixel_map::build_pixel_map;
    use crate::types::FilledCells;

    const RED: Color = Color::new(200, 10, 10);

    #[test]
    fn empty_map_renders_blank_canvas() {
        let canvas = render(RED, &PixelMap::default(), 250);
        assert_eq!(canvas.dimensions(), (250, 250));
        assert!(canvas.pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn filled_cell_is_painted_edge_to_edge() {
        let map = build_pixel_map(&FilledCells::new(vec![12]), 50);
        let canvas = render(RED, &map, 250);
        // Inclusive top-left, exclusive bottom-right.
        assert_eq!(*canvas.get_pixel(100, 100), RED.to_rgb());
        assert_eq!(*canvas.get_pixel(149, 149), RED.to_rgb());
        assert_eq!(*canvas.get_pixel(150, 150), BACKGROUND);
        assert_eq!(*canvas.get_pixel(99, 100), BACKGROUND);
    }

    #[test]
    fn painted_area_matches_cell_count() {
        let map = build_pixel_map(&FilledCells::new(vec![0, 1, 5, 24]), 10);
        let canvas = render(RED, &map, 50);
        let painted = canvas.pixels().filter(|p| **p == RED.to_rgb()).count();
        assert_eq!(painted, 4 * 10 * 10);
    }

    #[test]
    fn adjacent_cells_leave_no_gap() {
        let map = build_pixel_map(&FilledCells::new(vec![0, 1]), 10);
        let canvas = render(RED, &map, 50);
        for x in 0..20 {
            assert_eq!(*canvas.get_pixel(x, 5), RED.to_rgb(), "gap at x={x}");
        }
        assert_eq!(*canvas.get_pixel(20, 5), BACKGROUND);
    }

    #[test]
    fn oversized_map_is_clipped_to_canvas() {
        let map = build_pixel_map(&FilledCells::new(vec![0, 6, 24]), u32::MAX);
        let canvas = render(RED, &map, 20);
        assert_eq!(canvas.dimensions(), (20, 20));
        // Only cell 0 starts on the canvas, and it covers all of it.
        assert!(canvas.pixels().all(|p| *p == RED.to_rgb()));
    }

    #[test]
    fn inverted_rect_paints_nothing() {
        let map = PixelMap::new(vec![Rect::new(Point::new(50, 50), Point::new(0, 0))]);
        let canvas = render(RED, &map, 250);
        assert!(canvas.pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn rect_outside_canvas_is_skipped() {
        let map = build_pixel_map(&FilledCells::new(vec![24]), 1 << 30);
        let canvas = render(RED, &map, 250);
        assert!(canvas.pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn encoded_png_decodes_to_same_pixels() {
        let map = build_pixel_map(&FilledCells::new(vec![0, 6, 12]), 50);
        let canvas = render(RED, &map, 250);
        let png = encode_png(&canvas).unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));

        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (250, 250));
        assert_eq!(decoded.as_raw(), canvas.as_raw());
    }

    #[test]
    fn encoding_is_deterministic() {
        let map = build_pixel_map(&FilledCells::new(vec![3, 7]), 50);
        let a = encode_png(&render(RED, &map, 250)).unwrap();
        let b = encode_png(&render(RED, &map, 250)).unwrap();
        assert_eq!(a, b);
    }
}

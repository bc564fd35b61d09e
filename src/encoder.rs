//! Renders a byte buffer as a single row of glyph cells. Each byte becomes two
//! cells, high nibble first, and each cell draws the segments of its digit in
//! white on a black background.

use crate::canvas::{Canvas, Rect, BLACK, WHITE};
use crate::cell::{digit_to_bits, Glyph, Segment};
use crate::error::{Error, Result};
use crate::utils::nibbles;
use crate::Context;

pub struct GlyphEncoder<'a> {
    /// The bytes to render.
    input: &'a [u8],
    /// Cell geometry.
    ctx: Context,
}

impl<'a> GlyphEncoder<'a> {
    pub fn new(input: &'a [u8], ctx: Context) -> Self {
        Self { input, ctx }
    }

    /// The hex digits that will be drawn, one per cell.
    pub fn digits(&self) -> Vec<u8> {
        nibbles::split(self.input)
    }

    /// The number of cells in the image. An empty input still gets one blank
    /// cell so the output is always a valid image.
    pub fn cell_count(&self) -> usize {
        (self.input.len() * 2).max(1)
    }

    /// The (width, height) of the image in pixels. Fails if the image would
    /// not fit in a pixel buffer.
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        let cell = self.ctx.cell_size();
        let too_large = || {
            Error::InvalidGeometry(format!(
                "{} cells of {} pixels do not fit in one image",
                self.cell_count(),
                cell
            ))
        };

        let cells = u32::try_from(self.cell_count()).map_err(|_| too_large())?;
        let width = cells.checked_mul(cell).ok_or_else(too_large)?;
        // The buffer holds three bytes per pixel.
        (width as usize)
            .checked_mul(cell as usize)
            .and_then(|pixels| pixels.checked_mul(3))
            .ok_or_else(too_large)?;
        Ok((width, cell))
    }

    /// Render the whole input.
    pub fn encode(&self) -> Result<Canvas> {
        let (width, height) = self.dimensions()?;
        let mut canvas = Canvas::new(width, height, BLACK);
        let digits = self.digits();

        log::debug!(
            "Rendering {} digits into a {}x{} image: {}",
            digits.len(),
            width,
            height,
            nibbles::to_hex(&digits)
        );

        let cell = self.ctx.cell_size() as i64;
        for (i, digit) in digits.iter().enumerate() {
            self.draw_glyph(&mut canvas, (i as i64 * cell, 0), digit_to_bits(*digit));
        }
        Ok(canvas)
    }

    /// Draw the segments of 'glyph' into the cell whose top-left corner is
    /// 'origin'. Nothing is painted outside the cell.
    fn draw_glyph(&self, canvas: &mut Canvas, origin: (i64, i64), glyph: Glyph) {
        let size = self.ctx.cell_size();
        let width = self.ctx.line_width();
        let (x0, y0) = origin;
        let last = size as i64 - 1;
        let clip = Rect::new(x0, y0, size, size);

        for seg in glyph.segments() {
            match seg {
                Segment::Backslash => canvas.draw_line(
                    (x0, y0),
                    (x0 + last, y0 + last),
                    WHITE,
                    width,
                    clip,
                ),
                Segment::Slash => canvas.draw_line(
                    (x0 + last, y0),
                    (x0, y0 + last),
                    WHITE,
                    width,
                    clip,
                ),
                // The edges stop one pixel short of the far corner. That
                // pixel row/column holds the slash probes, which must stay
                // dark when both edges are drawn.
                Segment::Vertical => {
                    canvas.fill_rect(Rect::new(x0, y0, width, size - 1), WHITE)
                }
                Segment::Horizontal => {
                    canvas.fill_rect(Rect::new(x0, y0, size - 1, width), WHITE)
                }
            }
        }
    }
}

#[test]
fn test_empty_input_is_one_blank_cell() {
    let ctx = Context::default();
    let encoder = GlyphEncoder::new(&[], ctx);
    assert_eq!(encoder.cell_count(), 1);
    let canvas = encoder.encode().unwrap();
    assert_eq!((canvas.width(), canvas.height()), (20, 20));
    assert!(canvas.as_image().pixels().all(|p| *p == BLACK));
}

#[test]
fn test_only_black_and_white() {
    let ctx = Context::default();
    let canvas = GlyphEncoder::new(b"\x01\x23\x45\x67\x89\xab\xcd\xef", ctx)
        .encode()
        .unwrap();
    assert!(canvas
        .as_image()
        .pixels()
        .all(|p| *p == BLACK || *p == WHITE));
}

#[test]
fn test_oversized_image_is_rejected() {
    let ctx = Context::new(1 << 30, 2).unwrap();
    let encoder = GlyphEncoder::new(b"Hi", ctx);
    assert!(matches!(encoder.dimensions(), Err(Error::InvalidGeometry(_))));
    assert!(matches!(encoder.encode(), Err(Error::InvalidGeometry(_))));
}

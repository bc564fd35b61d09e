//! Recovers bytes and text from a glyph image. The image is split into cells
//! in raster order and each cell is read by sampling six probe pixels, inset
//! one pixel from the cell border:
//!
//! ```text
//!   (1,1) ........ (s-1,1)       backslash: (1,1) and (s-1,s-1)
//!     .    (s/2,1)    .          slash:     (s-1,1) and (1,s-1)
//!   (1,s/2)           .          vertical:  (1,s/2)
//!     .               .          horizontal: (s/2,1)
//!   (1,s-1) ...... (s-1,s-1)
//! ```
//!
//! A probe outside the image is dark, so images that are slightly smaller
//! than the nominal grid still decode.

use crate::canvas::Canvas;
use crate::cell::{bits_to_digit, Glyph};
use crate::charset::Charset;
use crate::error::Result;
use crate::utils::nibbles;
use crate::Context;

/// A pixel is lit when its red channel is strictly above this value.
pub const LIT_THRESHOLD: u8 = 200;

/// The result of a best-effort decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered text.
    pub text: String,
    /// The bytes the text was decoded from.
    pub bytes: Vec<u8>,
    /// The number of cells that were scanned.
    pub cells: usize,
    /// A trailing unpaired digit was dropped.
    pub truncated: bool,
    /// The number of invalid byte sequences skipped during text decoding.
    pub skipped: usize,
}

impl Decoded {
    /// Return True if nothing was dropped on the way to the text.
    pub fn is_clean(&self) -> bool {
        !self.truncated && self.skipped == 0
    }
}

/// Return True if the pixel at (x, y) counts as part of a segment.
pub fn is_lit(canvas: &Canvas, x: i64, y: i64) -> bool {
    canvas
        .get_pixel(x, y)
        .map_or(false, |px| px[0] > LIT_THRESHOLD)
}

pub struct GlyphDecoder<'a> {
    /// The image to scan.
    input: &'a Canvas,
    /// Cell geometry. Must match the one used for encoding.
    ctx: Context,
}

impl<'a> GlyphDecoder<'a> {
    pub fn new(input: &'a Canvas, ctx: Context) -> Self {
        Self { input, ctx }
    }

    /// The number of (columns, rows) in the grid. Partial cells at the right
    /// and bottom borders are counted.
    pub fn grid(&self) -> (u32, u32) {
        let cell = self.ctx.cell_size();
        (
            self.input.width().div_ceil(cell),
            self.input.height().div_ceil(cell),
        )
    }

    /// Probe the cell at ('col', 'row') and return its segments.
    pub fn read_glyph(&self, col: u32, row: u32) -> Glyph {
        let size = self.ctx.cell_size() as i64;
        let x0 = col as i64 * size;
        let y0 = row as i64 * size;
        let lit = |dx: i64, dy: i64| is_lit(self.input, x0 + dx, y0 + dy);

        let far = size - 1;
        let mid = size / 2;
        Glyph {
            backslash: lit(1, 1) && lit(far, far),
            slash: lit(far, 1) && lit(1, far),
            vertical: lit(1, mid),
            horizontal: lit(mid, 1),
        }
    }

    /// Scan the grid in raster order and return one digit per cell.
    pub fn scan(&self) -> Vec<u8> {
        let (cols, rows) = self.grid();
        let mut digits = Vec::with_capacity(cols as usize * rows as usize);
        for row in 0..rows {
            for col in 0..cols {
                digits.push(bits_to_digit(self.read_glyph(col, row)));
            }
        }
        digits
    }

    /// Scan the image and decode the bytes with 'charset'.
    pub fn decode(&self, charset: Charset) -> Result<Decoded> {
        let digits = self.scan();
        log::debug!(
            "Scanned {} cells: {}",
            digits.len(),
            nibbles::to_hex(&digits)
        );

        // A single blank cell is what the encoder draws for empty input.
        let blank = digits == [0];
        let (bytes, truncated) = if blank {
            (Vec::new(), false)
        } else {
            nibbles::join(&digits)?
        };
        if truncated {
            log::warn!("Dropped the unpaired digit of cell {}", digits.len() - 1);
        }

        let (text, skipped) = charset.decode_lossy(&bytes);
        if skipped > 0 {
            log::warn!(
                "Skipped {} invalid {} sequences",
                skipped,
                charset.name()
            );
        }

        Ok(Decoded {
            text,
            bytes,
            cells: digits.len(),
            truncated,
            skipped,
        })
    }
}

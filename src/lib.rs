pub mod canvas;
pub mod cell;
pub mod charset;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod utils;

use crate::canvas::Canvas;
use crate::charset::Charset;
use crate::decoder::{Decoded, GlyphDecoder};
use crate::encoder::GlyphEncoder;
use crate::error::{Error, Result};
use std::path::Path;

/// The smallest cell that still keeps every probe apart.
pub const MIN_CELL_SIZE: u32 = 8;
/// Edge strokes must reach the probes one pixel into the cell.
pub const MIN_LINE_WIDTH: u32 = 2;

/// Stores the geometry shared by the encoder and the decoder. The image does
/// not record it, so both sides must agree on the same values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Context {
    /// Specifies the width and height of each cell, in pixels.
    cell_size: u32,
    /// Specifies the thickness of the drawn segments, in pixels.
    line_width: u32,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            cell_size: 20,
            line_width: 2,
        }
    }
}

impl Context {
    /// Create a context, rejecting geometry where strokes could light a probe
    /// that belongs to a different segment.
    pub fn new(cell_size: u32, line_width: u32) -> Result<Self> {
        if cell_size < MIN_CELL_SIZE {
            return Err(Error::InvalidGeometry(format!(
                "cell size {} is below the minimum of {}",
                cell_size, MIN_CELL_SIZE
            )));
        }
        if line_width < MIN_LINE_WIDTH {
            return Err(Error::InvalidGeometry(format!(
                "line width {} is below the minimum of {}",
                line_width, MIN_LINE_WIDTH
            )));
        }
        if line_width > cell_size / 4 {
            return Err(Error::InvalidGeometry(format!(
                "line width {} is too thick for {} pixel cells",
                line_width, cell_size
            )));
        }
        Ok(Self {
            cell_size,
            line_width,
        })
    }

    /// Create a context for reading images only. Any positive cell size is
    /// accepted; the line width is not used by the decoder.
    pub fn for_decoding(cell_size: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(Error::InvalidGeometry(String::from(
                "cell size must be positive",
            )));
        }
        Ok(Self {
            cell_size,
            line_width: MIN_LINE_WIDTH,
        })
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn line_width(&self) -> u32 {
        self.line_width
    }
}

/// Encode 'text' with the encoding named 'encoding' and render it.
pub fn encode_text(text: &str, encoding: &str, ctx: Context) -> Result<Canvas> {
    let charset = Charset::for_label(encoding)?;
    let bytes = charset.encode(text)?;
    log::debug!(
        "Encoded {} chars into {} bytes of {}",
        text.chars().count(),
        bytes.len(),
        charset.name()
    );
    GlyphEncoder::new(&bytes, ctx).encode()
}

/// Scan 'canvas' and decode the recovered bytes with the encoding named
/// 'encoding'.
pub fn decode_image(
    canvas: &Canvas,
    encoding: &str,
    ctx: Context,
) -> Result<Decoded> {
    let charset = Charset::for_label(encoding)?;
    GlyphDecoder::new(canvas, ctx).decode(charset)
}

/// Load the image at 'path' and decode it. See 'decode_image'.
pub fn decode_file(path: &Path, encoding: &str, ctx: Context) -> Result<Decoded> {
    let canvas = Canvas::load(path)?;
    decode_image(&canvas, encoding, ctx)
}

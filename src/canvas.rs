//! An RGB pixel buffer with the handful of drawing primitives that the glyph
//! encoder needs, and PNG load/save helpers.
//!
//! Coordinates are signed so callers can probe or draw past the borders;
//! anything outside the buffer is ignored on write and reads as `None`.

use crate::error::{Error, Result};
use image::{ImageFormat, Rgb, RgbImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// An axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Return True if the pixel (x, y) is inside the rectangle.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x + self.width as i64
            && y < self.y + self.height as i64
    }

    /// The overlap of two rectangles (possibly empty).
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.width as i64).min(other.x + other.width as i64);
        let y1 = (self.y + self.height as i64).min(other.y + other.height as i64);
        Rect::new(x0, y0, (x1 - x0).max(0) as u32, (y1 - y0).max(0) as u32)
    }
}

/// Owned RGB image.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a 'width' x 'height' canvas filled with 'background'.
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The rectangle covering the whole canvas.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width(), self.height())
    }

    /// Read a pixel. Returns None outside the canvas.
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<Rgb<u8>> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        Some(*self.image.get_pixel(x as u32, y as u32))
    }

    /// Write a pixel. Returns False if the pixel is outside the canvas.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgb<u8>) -> bool {
        if !self.bounds().contains(x, y) {
            return false;
        }
        self.image.put_pixel(x as u32, y as u32, color);
        true
    }

    /// Paint every pixel of 'rect' that falls on the canvas.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb<u8>) {
        let area = rect.intersect(&self.bounds());
        for y in area.y..area.y + area.height as i64 {
            for x in area.x..area.x + area.width as i64 {
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }
    }

    /// Draw a line from 'from' to 'to' (both ends included) with a square
    /// brush of 'width' pixels. Only pixels inside 'clip' are painted.
    /// Even widths put the extra pixel on the right/bottom side.
    pub fn draw_line(
        &mut self,
        from: (i64, i64),
        to: (i64, i64),
        color: Rgb<u8>,
        width: u32,
        clip: Rect,
    ) {
        let clip = clip.intersect(&self.bounds());
        let hi = (width.max(1) / 2) as i64;
        let lo = hi - (width.max(1) as i64 - 1);

        // Bresenham, stamping the brush at every step.
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            for by in y + lo..=y + hi {
                for bx in x + lo..=x + hi {
                    if clip.contains(bx, by) {
                        self.image.put_pixel(bx as u32, by as u32, color);
                    }
                }
            }

            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Load an image from disk and convert it to RGB.
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|e| Error::ImageNotFound {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_image(image.into_rgb8()))
    }

    /// Save the canvas as a PNG file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Decode a PNG held in memory.
    pub fn from_png_bytes(data: &[u8]) -> Result<Self> {
        let image = image::load_from_memory_with_format(data, ImageFormat::Png)?;
        Ok(Self::from_image(image.into_rgb8()))
    }

    /// Encode the canvas as a PNG in memory.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut png = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }
}

#[test]
fn test_rect_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, -3, 10, 5);
    assert_eq!(a.intersect(&b), Rect::new(5, 0, 5, 2));
    let c = Rect::new(20, 20, 3, 3);
    assert_eq!(a.intersect(&c).width, 0);
}

#[test]
fn test_line_brush_and_clip() {
    let mut canvas = Canvas::new(8, 8, BLACK);
    let clip = Rect::new(0, 0, 4, 8);
    canvas.draw_line((0, 0), (7, 0), WHITE, 2, clip);
    // Width two covers rows 0 and 1, clipped at column 4.
    assert_eq!(canvas.get_pixel(3, 1), Some(WHITE));
    assert_eq!(canvas.get_pixel(4, 0), Some(BLACK));
    assert_eq!(canvas.get_pixel(0, 2), Some(BLACK));
    assert_eq!(canvas.get_pixel(-1, 0), None);
}

//! Maps a single hex digit to the four line segments that draw it, and back.
//! Bit 3 (the most significant) is the backslash, bit 0 is the horizontal
//! edge:
//!
//! ```text
//!   8 -> \     4 -> /     2 -> |     1 -> -
//! ```

use std::fmt;

/// The kinds of line segments a cell may contain, in bit order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Top-left corner to bottom-right corner.
    Backslash,
    /// Top-right corner to bottom-left corner.
    Slash,
    /// The left edge.
    Vertical,
    /// The top edge.
    Horizontal,
}

impl Segment {
    /// All segments, most significant first.
    pub const ALL: [Segment; 4] = [
        Segment::Backslash,
        Segment::Slash,
        Segment::Vertical,
        Segment::Horizontal,
    ];

    /// The bit that this segment sets in a digit.
    pub fn mask(self) -> u8 {
        match self {
            Segment::Backslash => 0b1000,
            Segment::Slash => 0b0100,
            Segment::Vertical => 0b0010,
            Segment::Horizontal => 0b0001,
        }
    }
}

/// The line-presence flags of one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub backslash: bool,
    pub slash: bool,
    pub vertical: bool,
    pub horizontal: bool,
}

impl Glyph {
    /// A cell with no segments (digit zero).
    pub const EMPTY: Glyph = Glyph {
        backslash: false,
        slash: false,
        vertical: false,
        horizontal: false,
    };

    /// Return True if the segment 'seg' is drawn in this glyph.
    pub fn has(&self, seg: Segment) -> bool {
        match seg {
            Segment::Backslash => self.backslash,
            Segment::Slash => self.slash,
            Segment::Vertical => self.vertical,
            Segment::Horizontal => self.horizontal,
        }
    }

    /// Iterate over the segments that are set, most significant first.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        Segment::ALL.into_iter().filter(move |seg| self.has(*seg))
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marks = ['\\', '/', '|', '-'];
        for (seg, mark) in Segment::ALL.iter().zip(marks) {
            let c = if self.has(*seg) { mark } else { '.' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Expand the digit 'd' into its four flags. Only the low nibble of 'd' is
/// used.
pub fn digit_to_bits(d: u8) -> Glyph {
    let d = d & 0xf;
    Glyph {
        backslash: d & Segment::Backslash.mask() != 0,
        slash: d & Segment::Slash.mask() != 0,
        vertical: d & Segment::Vertical.mask() != 0,
        horizontal: d & Segment::Horizontal.mask() != 0,
    }
}

/// Pack the four flags back into a digit in the range 0..16.
pub fn bits_to_digit(glyph: Glyph) -> u8 {
    glyph
        .segments()
        .fold(0, |digit, seg| digit | seg.mask())
}

#[test]
fn test_glyph_display() {
    assert_eq!(digit_to_bits(0).to_string(), "....");
    assert_eq!(digit_to_bits(0xf).to_string(), "\\/|-");
    assert_eq!(digit_to_bits(0x9).to_string(), "\\..-");
}

#[test]
fn test_masks_are_disjoint() {
    let all = Segment::ALL.iter().fold(0, |acc, seg| {
        assert_eq!(acc & seg.mask(), 0);
        acc | seg.mask()
    });
    assert_eq!(all, 0xf);
}

use hexglyph::cell::{bits_to_digit, digit_to_bits, Glyph, Segment};

#[test]
fn test_cell_codec_is_total() {
    for d in 0..16 {
        assert_eq!(bits_to_digit(digit_to_bits(d)), d);
    }
}

#[test]
fn test_bit_order() {
    let backslash = digit_to_bits(0b1000);
    assert!(backslash.backslash);
    assert!(!backslash.slash && !backslash.vertical && !backslash.horizontal);

    let horizontal = digit_to_bits(0b0001);
    assert!(horizontal.horizontal);
    assert!(!horizontal.backslash && !horizontal.slash && !horizontal.vertical);

    assert_eq!(digit_to_bits(0), Glyph::EMPTY);
    assert_eq!(
        digit_to_bits(0xf),
        Glyph {
            backslash: true,
            slash: true,
            vertical: true,
            horizontal: true,
        }
    );
}

#[test]
fn test_every_glyph_maps_to_one_digit() {
    let mut seen = [false; 16];
    for bits in 0..16u8 {
        let glyph = Glyph {
            backslash: bits & 8 != 0,
            slash: bits & 4 != 0,
            vertical: bits & 2 != 0,
            horizontal: bits & 1 != 0,
        };
        let d = bits_to_digit(glyph) as usize;
        assert!(!seen[d]);
        seen[d] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn test_high_bits_are_ignored() {
    assert_eq!(digit_to_bits(0x3a), digit_to_bits(0xa));
}

#[test]
fn test_segments_in_bit_order() {
    let segs: Vec<Segment> = digit_to_bits(0b1011).segments().collect();
    assert_eq!(
        segs,
        vec![Segment::Backslash, Segment::Vertical, Segment::Horizontal]
    );
    assert_eq!(Glyph::EMPTY.segments().count(), 0);
}

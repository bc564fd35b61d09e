use hexglyph::canvas::{BLACK, WHITE};
use hexglyph::encoder::GlyphEncoder;
use hexglyph::error::Error;
use hexglyph::utils::nibbles;
use hexglyph::{encode_text, Context};

#[test]
fn test_hi_scenario() {
    let ctx = Context::new(20, 2).unwrap();
    let encoder = GlyphEncoder::new(b"Hi", ctx);
    assert_eq!(nibbles::to_hex(&encoder.digits()), "4869");
    assert_eq!(encoder.cell_count(), 4);
    assert_eq!(encoder.dimensions().unwrap(), (80, 20));

    let canvas = encode_text("Hi", "ascii", ctx).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (80, 20));
    assert_eq!(canvas, encoder.encode().unwrap());
}

#[test]
fn test_cell_count_matches_bytes() {
    let ctx = Context::default();
    for (text, encoding, bytes) in [
        ("Hello, world!", "ascii", 13),
        ("Привіт", "utf-8", 12),
        ("Привіт", "koi8-u", 6),
        ("Привіт", "windows-1251", 6),
    ] {
        let canvas = encode_text(text, encoding, ctx).unwrap();
        assert_eq!(canvas.width() / ctx.cell_size(), 2 * bytes);
        assert_eq!(canvas.height() / ctx.cell_size(), 1);
    }
}

#[test]
fn test_empty_text() {
    let ctx = Context::new(12, 3).unwrap();
    let canvas = encode_text("", "utf-8", ctx).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (12, 12));
    assert!(canvas.as_image().pixels().all(|p| *p == BLACK));
}

#[test]
fn test_deterministic() {
    let ctx = Context::default();
    let a = encode_text("determinism", "utf-8", ctx).unwrap();
    let b = encode_text("determinism", "utf-8", ctx).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_png_bytes().unwrap(), b.to_png_bytes().unwrap());
}

#[test]
fn test_segment_placement() {
    let ctx = Context::default();
    // 0x8f: a lone backslash, then all four segments.
    let canvas = GlyphEncoder::new(&[0x8f], ctx).encode().unwrap();

    // Cell 0 only has the diagonal.
    assert_eq!(canvas.get_pixel(0, 0), Some(WHITE));
    assert_eq!(canvas.get_pixel(10, 10), Some(WHITE));
    assert_eq!(canvas.get_pixel(19, 19), Some(WHITE));
    assert_eq!(canvas.get_pixel(19, 0), Some(BLACK));
    assert_eq!(canvas.get_pixel(0, 19), Some(BLACK));
    assert_eq!(canvas.get_pixel(1, 10), Some(BLACK));

    // Cell 1 has both edges, stopping short of the far corners.
    assert_eq!(canvas.get_pixel(20 + 10, 0), Some(WHITE));
    assert_eq!(canvas.get_pixel(20 + 10, 1), Some(WHITE));
    assert_eq!(canvas.get_pixel(20, 10), Some(WHITE));
    assert_eq!(canvas.get_pixel(21, 10), Some(WHITE));
    assert_eq!(canvas.get_pixel(20 + 18, 1), Some(WHITE));
    assert_eq!(canvas.get_pixel(20 + 19, 0), Some(WHITE));
    assert_eq!(canvas.get_pixel(20 + 2, 10), Some(BLACK));
    assert_eq!(canvas.get_pixel(20 + 10, 2), Some(BLACK));
}

#[test]
fn test_strokes_stay_in_their_cell() {
    let ctx = Context::default();
    // A full cell followed by an empty one.
    let canvas = GlyphEncoder::new(&[0xf0], ctx).encode().unwrap();
    for y in 0..20 {
        for x in 20..40 {
            assert_eq!(canvas.get_pixel(x, y), Some(BLACK), "({}, {})", x, y);
        }
    }
}

#[test]
fn test_encode_errors() {
    let ctx = Context::default();
    assert!(matches!(
        encode_text("текст", "ascii", ctx),
        Err(Error::Encoding { .. })
    ));
    assert!(matches!(
        encode_text("text", "no-such-encoding", ctx),
        Err(Error::UnknownEncoding(_))
    ));
}

#[test]
fn test_context_validation() {
    assert_eq!(Context::default(), Context::new(20, 2).unwrap());
    assert!(Context::new(8, 2).is_ok());
    assert!(matches!(
        Context::new(7, 1),
        Err(Error::InvalidGeometry(_))
    ));
    assert!(Context::new(20, 1).is_err());
    assert!(Context::new(20, 6).is_err());
    assert!(Context::new(24, 6).is_ok());
    // Thick lines must not wrap around and pass the check.
    assert!(matches!(
        Context::new(20, u32::MAX),
        Err(Error::InvalidGeometry(_))
    ));
    assert!(Context::new(20, 0x4000_0001).is_err());
}

#[test]
fn test_oversized_image() {
    let ctx = Context::new(1 << 30, 2).unwrap();
    assert!(matches!(
        encode_text("Hi", "ascii", ctx),
        Err(Error::InvalidGeometry(_))
    ));
    let wide = Context::new(u32::MAX, 2).unwrap();
    assert!(GlyphEncoder::new(b"x", wide).dimensions().is_err());
}

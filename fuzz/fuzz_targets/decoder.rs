#![no_main]

use hexglyph::canvas::Canvas;
use hexglyph::charset::Charset;
use hexglyph::decoder::GlyphDecoder;
use hexglyph::Context;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary PNG bytes must never make the decoder panic.
    if let Ok(canvas) = Canvas::from_png_bytes(data) {
        // Skip images that would take too long to scan.
        if canvas.width() as u64 * canvas.height() as u64 > 1 << 22 {
            return;
        }
        let ctx = Context::new(8, 2).unwrap();
        let decoded = GlyphDecoder::new(&canvas, ctx)
            .decode(Charset::for_label("utf-8").unwrap())
            .unwrap();
        assert_eq!(decoded.bytes.len(), decoded.cells / 2);
    }
});

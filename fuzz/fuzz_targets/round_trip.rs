#![no_main]

use hexglyph::decoder::GlyphDecoder;
use hexglyph::encoder::GlyphEncoder;
use hexglyph::utils::nibbles;
use hexglyph::Context;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let ctx = Context::new(8, 2).unwrap();
    let canvas = GlyphEncoder::new(data, ctx).encode().unwrap();

    let digits = GlyphDecoder::new(&canvas, ctx).scan();
    assert_eq!(digits.len(), (data.len() * 2).max(1));

    let (bytes, truncated) = nibbles::join(&digits).unwrap();
    if data.is_empty() {
        // The blank cell reads back as a single unpaired zero.
        assert!(truncated);
        assert!(bytes.is_empty());
    } else {
        assert!(!truncated);
        assert_eq!(bytes, data);
    }
});

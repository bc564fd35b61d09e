//! Converts text to bytes and back under a named encoding. The WHATWG
//! encodings come from `encoding_rs`. Plain 7-bit ASCII is handled here
//! because the WHATWG label "ascii" resolves to windows-1252, which would
//! accept characters that ASCII can't represent.

use crate::error::{Error, Result};
use encoding_rs::{DecoderResult, Encoding};

/// A byte encoding selected by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Charset {
    /// Strict 7-bit ASCII.
    Ascii,
    /// Any encoding that `encoding_rs` can both encode and decode.
    Standard(&'static Encoding),
}

impl Charset {
    /// Look up an encoding by its label. Labels are case-insensitive and may
    /// be surrounded by whitespace.
    pub fn for_label(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("ascii")
            || trimmed.eq_ignore_ascii_case("us-ascii")
        {
            return Ok(Charset::Ascii);
        }

        let encoding = Encoding::for_label(trimmed.as_bytes())
            .ok_or_else(|| Error::UnknownEncoding(label.to_string()))?;

        // UTF-16 and the replacement encoding can only be decoded. Their
        // encoders silently produce UTF-8.
        if encoding.output_encoding() != encoding {
            return Err(Error::UnknownEncoding(label.to_string()));
        }
        Ok(Charset::Standard(encoding))
    }

    /// The canonical name of the encoding.
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Ascii => "us-ascii",
            Charset::Standard(encoding) => encoding.name(),
        }
    }

    /// Encode 'text'. Fails on the first character that the encoding can't
    /// represent; no partial output is produced.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            Charset::Ascii => {
                if let Some((position, character)) =
                    text.char_indices().find(|(_, c)| !c.is_ascii())
                {
                    return Err(self.unmappable(character, position));
                }
                Ok(text.as_bytes().to_vec())
            }
            Charset::Standard(encoding) => {
                let (bytes, _, had_unmappable) = encoding.encode(text);
                if had_unmappable {
                    return Err(self.find_unmappable(encoding, text));
                }
                Ok(bytes.into_owned())
            }
        }
    }

    /// Decode 'bytes', skipping any sequence that is not valid in this
    /// encoding. Returns the text and the number of skipped sequences.
    pub fn decode_lossy(&self, bytes: &[u8]) -> (String, usize) {
        match self {
            Charset::Ascii => {
                let text: String = bytes
                    .iter()
                    .filter(|b| b.is_ascii())
                    .map(|b| *b as char)
                    .collect();
                let skipped = bytes.len() - text.len();
                (text, skipped)
            }
            Charset::Standard(encoding) => decode_skipping(encoding, bytes),
        }
    }

    /// Locate the character that 'encoding' failed to map, for reporting.
    fn find_unmappable(&self, encoding: &'static Encoding, text: &str) -> Error {
        let mut buf = [0u8; 4];
        for (position, character) in text.char_indices() {
            let (_, _, bad) = encoding.encode(character.encode_utf8(&mut buf));
            if bad {
                return self.unmappable(character, position);
            }
        }
        // The whole string failed but no single character did, which only
        // happens with stateful encoders. Report the start of the text.
        let first = text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        self.unmappable(first, 0)
    }

    fn unmappable(&self, character: char, position: usize) -> Error {
        Error::Encoding {
            encoding: self.name(),
            character,
            position,
        }
    }
}

/// Run the `encoding_rs` decoder without replacement characters. Malformed
/// sequences are counted and dropped.
fn decode_skipping(encoding: &'static Encoding, bytes: &[u8]) -> (String, usize) {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut text = String::new();
    let mut skipped = 0;
    let mut src = bytes;

    loop {
        let needed = decoder
            .max_utf8_buffer_length_without_replacement(src.len())
            .unwrap_or(src.len() * 3 + 4);
        text.reserve(needed);

        let (result, read) =
            decoder.decode_to_string_without_replacement(src, &mut text, true);
        src = &src[read..];

        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::OutputFull => continue,
            DecoderResult::Malformed(_, _) => skipped += 1,
        }
    }
    (text, skipped)
}

#[test]
fn test_labels() {
    assert_eq!(Charset::for_label("UTF-8").unwrap().name(), "UTF-8");
    assert_eq!(Charset::for_label(" koi8-u ").unwrap().name(), "KOI8-U");
    assert_eq!(Charset::for_label("cp1251").unwrap().name(), "windows-1251");
    assert_eq!(Charset::for_label("ASCII").unwrap(), Charset::Ascii);
    assert!(matches!(
        Charset::for_label("utf-16le"),
        Err(Error::UnknownEncoding(_))
    ));
    assert!(matches!(
        Charset::for_label("klingon"),
        Err(Error::UnknownEncoding(_))
    ));
}

#[test]
fn test_decode_skips_malformed() {
    let utf8 = Charset::for_label("utf-8").unwrap();
    // A lone continuation byte in the middle and a cut sequence at the end.
    let (text, skipped) = utf8.decode_lossy(b"ab\x80cd\xd0");
    assert_eq!(text, "abcd");
    assert_eq!(skipped, 2);

    let (text, skipped) = Charset::Ascii.decode_lossy(b"h\xffi");
    assert_eq!(text, "hi");
    assert_eq!(skipped, 1);
}

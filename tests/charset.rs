use hexglyph::charset::Charset;
use hexglyph::error::Error;

const GREETING: &str = "Привіт, світе! Це тест візуалізації.";

#[test]
fn test_cyrillic_single_byte_encodings() {
    for label in ["koi8-u", "windows-1251"] {
        let charset = Charset::for_label(label).unwrap();
        let bytes = charset.encode(GREETING).unwrap();
        // One byte per character.
        assert_eq!(bytes.len(), GREETING.chars().count());
        let (text, skipped) = charset.decode_lossy(&bytes);
        assert_eq!(text, GREETING);
        assert_eq!(skipped, 0);
    }
}

#[test]
fn test_known_bytes() {
    let cp1251 = Charset::for_label("windows-1251").unwrap();
    assert_eq!(cp1251.encode("Пі").unwrap(), vec![0xcf, 0xb3]);

    let koi8u = Charset::for_label("koi8-u").unwrap();
    assert_eq!(koi8u.encode("Пі").unwrap(), vec![0xf0, 0xa6]);

    let utf8 = Charset::for_label("utf-8").unwrap();
    assert_eq!(utf8.encode("П").unwrap(), vec![0xd0, 0x9f]);
    assert_eq!(Charset::Ascii.encode("Hi").unwrap(), vec![0x48, 0x69]);
}

#[test]
fn test_unencodable_text() {
    match Charset::Ascii.encode("Hi, світе") {
        Err(Error::Encoding {
            character,
            position,
            ..
        }) => {
            assert_eq!(character, 'с');
            assert_eq!(position, 4);
        }
        other => panic!("unexpected result {:?}", other),
    }

    let koi8u = Charset::for_label("koi8-u").unwrap();
    match koi8u.encode("ok ☃") {
        Err(Error::Encoding {
            encoding,
            character,
            position,
        }) => {
            assert_eq!(encoding, "KOI8-U");
            assert_eq!(character, '☃');
            assert_eq!(position, 3);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_unknown_encoding() {
    match Charset::for_label("utf-9") {
        Err(Error::UnknownEncoding(name)) => assert_eq!(name, "utf-9"),
        other => panic!("unexpected result {:?}", other),
    }
    assert!(Charset::for_label("").is_err());
}

#[test]
fn test_empty_text() {
    for label in ["ascii", "utf-8", "koi8-u"] {
        let charset = Charset::for_label(label).unwrap();
        assert!(charset.encode("").unwrap().is_empty());
        assert_eq!(charset.decode_lossy(&[]), (String::new(), 0));
    }
}

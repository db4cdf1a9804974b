use picker_engine::{decode_text, DecodeError};

#[test]
fn defaults_to_utf8() {
    let decoded = decode_text("Café,Crêpes".as_bytes(), None).unwrap();
    assert_eq!(decoded.text, "Café,Crêpes");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn strips_utf8_bom() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"name,photo");
    let decoded = decode_text(&bytes, None).unwrap();
    assert_eq!(decoded.text, "name,photo");
}

#[test]
fn honours_content_type_charset() {
    // 0xE9 is 'é' in windows-1252.
    let decoded = decode_text(b"Caf\xE9", Some("text/csv; Charset=\"windows-1252\"")).unwrap();
    assert_eq!(decoded.text, "Café");
    assert_eq!(decoded.encoding_label, "windows-1252");
}

#[test]
fn malformed_utf8_is_an_error() {
    let err = decode_text(b"Caf\xE9", Some("text/csv")).unwrap_err();
    assert!(matches!(err, DecodeError::DecodeFailure { ref encoding, .. } if encoding == "UTF-8"));
}

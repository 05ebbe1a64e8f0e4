use terms_core::document::{Document, DocumentError, Lexicon};

#[test]
fn invariant_utf8_rejection() {
    // Invalid UTF-8 sequence
    let invalid_bytes = vec![0, 159, 146, 150];
    let result = Document::ingest("2020-01-01", "doc", invalid_bytes);
    assert!(matches!(result, Err(DocumentError::InvalidUtf8(_))));
}

#[test]
fn invariant_no_body_normalization() {
    let unix = Document::ingest("2020-01-01", "doc", "line\n".as_bytes().to_vec()).unwrap();
    let windows = Document::ingest("2020-01-01", "doc", "line\r\n".as_bytes().to_vec()).unwrap();

    // Bodies must be preserved byte-for-byte
    assert_eq!(unix.body, "line\n");
    assert_eq!(windows.body, "line\r\n");
    assert_ne!(unix.body, windows.body);
}

#[test]
fn invariant_date_kept_raw_until_ranking() {
    // Construction must not parse or trim the date string
    let doc = Document::new(" 2020-01-01 ", "doc", "body");
    assert_eq!(doc.date, " 2020-01-01 ");
}

#[test]
fn document_serialization_roundtrip() {
    let doc = Document::new("2020-01-01", "Quiet open", "markets open flat");

    let json = serde_json::to_string(&doc).unwrap();
    let parsed: Document = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, doc);
}

#[test]
fn lexicon_canonical_lookup() {
    let mut lexicon = Lexicon::new();
    lexicon.insert("runs", "run");
    lexicon.insert("run", "run");

    assert_eq!(lexicon.canonical("runs"), Some("run"));
    assert_eq!(lexicon.canonical("run"), Some("run"));
    assert_eq!(lexicon.canonical("jumped"), None);
    assert!(lexicon.contains("runs"));
    assert!(!lexicon.contains("jumped"));
    assert_eq!(lexicon.len(), 2);
}

#[test]
fn lexicon_merge_overrides_common_surfaces() {
    let mut base = Lexicon::new();
    base.insert("rates", "rate");
    base.insert("rally", "rally");

    let mut overlay = Lexicon::new();
    overlay.insert("rates", "interest-rate");

    base.merge(overlay);

    assert_eq!(base.canonical("rates"), Some("interest-rate"));
    assert_eq!(base.canonical("rally"), Some("rally"));
}

#[test]
fn lexicon_from_iterator() {
    let lexicon: Lexicon = [("runs", "run"), ("jumped", "jump")].into_iter().collect();

    assert_eq!(lexicon.canonical("runs"), Some("run"));
    assert_eq!(lexicon.canonical("jumped"), Some("jump"));
}

#[test]
fn lexicon_transparent_serialization() {
    let lexicon: Lexicon = [("runs", "run"), ("jumped", "jump")].into_iter().collect();

    let json = serde_json::to_string(&lexicon).unwrap();
    // Transparent newtype: serializes as the bare map, keys sorted
    assert_eq!(json, r#"{"jumped":"jump","runs":"run"}"#);

    let parsed: Lexicon = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, lexicon);
}

#[test]
fn lexicon_may_be_empty() {
    let lexicon = Lexicon::new();
    assert!(lexicon.is_empty());
    assert_eq!(lexicon.canonical("anything"), None);
}

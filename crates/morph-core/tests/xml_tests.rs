use morph_core::{xml, ConvertError, Value};

// ============================================================================
// Canonicalization
// ============================================================================

#[test]
fn canonical_form_of_plain_document_is_unchanged() {
    let doc = "<root><x>1</x></root>";
    assert_eq!(xml::canonicalize(doc).unwrap(), doc);
}

#[test]
fn canonicalize_preserves_attributes_and_nesting() {
    let doc = r#"<catalog version="2"><item id="a1" kind="book">Title</item><item id="a2"/></catalog>"#;
    assert_eq!(xml::canonicalize(doc).unwrap(), doc);
}

#[test]
fn canonicalize_preserves_whitespace_text() {
    let doc = "<root>\n  <x>1</x>\n  <y> spaced </y>\n</root>";
    assert_eq!(xml::canonicalize(doc).unwrap(), doc);
}

#[test]
fn canonicalize_drops_declaration() {
    let doc = "<?xml version=\"1.0\" encoding=\"utf-8\"?><root><x>1</x></root>";
    assert_eq!(xml::canonicalize(doc).unwrap(), "<root><x>1</x></root>");
}

#[test]
fn canonicalize_drops_comments_and_pis() {
    let doc = "<!-- header --><root><!-- inner --><x>1</x><?pi data?></root>";
    assert_eq!(xml::canonicalize(doc).unwrap(), "<root><x>1</x></root>");
}

#[test]
fn canonicalize_preserves_entities_and_cdata() {
    let doc = "<root><a>x &amp; y</a><b><![CDATA[5 < 6]]></b></root>";
    assert_eq!(xml::canonicalize(doc).unwrap(), doc);
}

#[test]
fn canonicalization_is_idempotent() {
    let doc = "<?xml version=\"1.0\"?>\n<root>\n  <x a=\"1\">one</x>\n  <!-- note -->\n  <y/>\n</root>\n";
    let once = xml::canonicalize(doc).unwrap();
    let twice = xml::canonicalize(&once).unwrap();
    assert_eq!(once, twice);
}

// ============================================================================
// Well-formedness checks
// ============================================================================

#[test]
fn rejects_empty_input() {
    let err = xml::canonicalize("").unwrap_err();
    assert!(matches!(err, ConvertError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("no root element"));
}

#[test]
fn rejects_unclosed_element() {
    let err = xml::canonicalize("<root><x>1</x>").unwrap_err();
    assert!(matches!(err, ConvertError::Parse { .. }), "got: {err}");
}

#[test]
fn rejects_mismatched_tags() {
    let err = xml::canonicalize("<root><x>1</y></root>").unwrap_err();
    assert!(matches!(err, ConvertError::Parse { .. }), "got: {err}");
}

#[test]
fn rejects_second_root_element() {
    let err = xml::canonicalize("<a/><b/>").unwrap_err();
    assert!(matches!(err, ConvertError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("junk after document element"));
}

#[test]
fn rejects_text_outside_root() {
    let err = xml::canonicalize("stray<root/>").unwrap_err();
    assert!(matches!(err, ConvertError::Parse { .. }), "got: {err}");
}

// ============================================================================
// Reader and writer
// ============================================================================

#[test]
fn read_returns_canonical_string_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.xml");
    std::fs::write(&path, "<?xml version=\"1.0\"?><root><x>1</x></root>").unwrap();
    let value = xml::read(&path).unwrap();
    assert_eq!(value, Value::String("<root><x>1</x></root>".to_string()));
}

#[test]
fn write_accepts_only_document_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xml");
    let err = xml::write(&Value::Sequence(vec![Value::from(1i64)]), &path).unwrap_err();
    assert!(
        matches!(err, ConvertError::Serialize { .. }),
        "expected Serialize, got: {err}"
    );
    assert!(!path.exists(), "rejected write must not create the file");
}

#[test]
fn write_rejects_malformed_document_string() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xml");
    let err = xml::write(&Value::from("<root>"), &path).unwrap_err();
    assert!(matches!(err, ConvertError::Parse { .. }), "got: {err}");
    assert!(!path.exists());
}

#[test]
fn read_write_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.xml");
    let output = dir.path().join("out.xml");
    std::fs::write(&input, "<root><x>1</x></root>").unwrap();

    let value = xml::read(&input).unwrap();
    xml::write(&value, &output).unwrap();
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "<root><x>1</x></root>"
    );
}

#[test]
fn read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = xml::read(&dir.path().join("absent.xml")).unwrap_err();
    assert!(matches!(err, ConvertError::Io(_)), "expected Io, got: {err}");
}

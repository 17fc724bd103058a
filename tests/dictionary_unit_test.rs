use qengine::storage::indexing::dictionary::Dictionary;
use qengine::StoreError;

#[test]
fn test_encode_new_string() {
    let mut dict = Dictionary::new();
    let id = dict.encode("http://example.org/person/Alice").unwrap();

    assert_eq!(id, 0);
    assert_eq!(dict.decode(id).unwrap(), "http://example.org/person/Alice");
    assert_eq!(dict.len(), 1);
}

#[test]
fn test_encode_same_string() {
    let mut dict = Dictionary::new();
    let first = dict.encode("http://example.org/knows").unwrap();
    let second = dict.encode("http://example.org/knows").unwrap();

    assert_eq!(first, second);
    assert_eq!(dict.len(), 1);
}

#[test]
fn test_encode_multiple_unique_strings() {
    let mut dict = Dictionary::new();
    let values = ["<Bob>", "<knows>", "<Alice>", "\"42\"", "_:b0"];

    for (k, value) in values.iter().enumerate() {
        assert_eq!(dict.encode(value).unwrap() as usize, k);
    }
    for (k, value) in values.iter().enumerate() {
        assert_eq!(dict.decode(k as u32).unwrap(), *value);
        assert_eq!(dict.lookup(value), Some(k as u32));
    }
    assert_eq!(dict.len(), values.len());
}

#[test]
fn test_encode_empty_is_rejected() {
    let mut dict = Dictionary::new();
    let err = dict.encode("").unwrap_err();
    assert!(matches!(err, StoreError::InvalidInput(_)));
    assert!(dict.is_empty());
}

#[test]
fn test_encode_after_reuse() {
    let mut dict = Dictionary::new();
    dict.encode("<a>").unwrap();
    dict.encode("<b>").unwrap();
    dict.encode("<a>").unwrap();

    // reuse of "<a>" must not consume an id
    assert_eq!(dict.encode("<c>").unwrap(), 2);
}

#[test]
fn test_decode_never_issued() {
    let mut dict = Dictionary::new();
    dict.encode("<a>").unwrap();
    assert!(matches!(dict.decode(1), Err(StoreError::NotFound(_))));
}

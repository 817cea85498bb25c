#![cfg(feature = "serde")]

//! Integration tests for serde support in monadic.
//!
//! `Maybe` uses the same JSON shape as `Option`, `Sequence` is a plain array
//! and a `Directory` is an array of string maps.

use monadic::control::{Maybe, Sequence};
use monadic::lookup::{Directory, FieldSelector, Record};
use rstest::rstest;

// =============================================================================
// Maybe Tests
// =============================================================================

#[rstest]
#[case(Maybe::Present(42), "42")]
#[case(Maybe::Absent, "null")]
fn test_maybe_json_shape(#[case] maybe: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&maybe).unwrap(), expected);
}

#[rstest]
fn test_maybe_json_roundtrip() {
    let present: Maybe<String> = Maybe::Present("00000000".to_string());
    let absent: Maybe<String> = Maybe::Absent;

    let restored_present: Maybe<String> =
        serde_json::from_str(&serde_json::to_string(&present).unwrap()).unwrap();
    let restored_absent: Maybe<String> =
        serde_json::from_str(&serde_json::to_string(&absent).unwrap()).unwrap();

    assert_eq!(present, restored_present);
    assert_eq!(absent, restored_absent);
}

#[rstest]
fn test_maybe_as_struct_field() {
    #[derive(serde::Deserialize)]
    struct Person {
        glid: String,
        ufid: Maybe<String>,
    }

    let person: Person = serde_json::from_str(r#"{"glid":"albert","ufid":null}"#).unwrap();
    assert_eq!(person.glid, "albert");
    assert_eq!(person.ufid, Maybe::Absent);
}

// =============================================================================
// Sequence Tests
// =============================================================================

#[rstest]
fn test_sequence_json_shape() {
    let sequence = Sequence::from(vec![1, 10, 2, 20]);
    assert_eq!(serde_json::to_string(&sequence).unwrap(), "[1,10,2,20]");
}

#[rstest]
fn test_sequence_json_roundtrip() {
    let sequence: Sequence<Maybe<i32>> = Sequence::from(vec![Maybe::Present(1), Maybe::Absent]);
    let json = serde_json::to_string(&sequence).unwrap();
    let restored: Sequence<Maybe<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(sequence, restored);
}

// =============================================================================
// Record and Directory Tests
// =============================================================================

#[rstest]
fn test_record_json_roundtrip() {
    let record = Record::try_from_fields([("glid", "albert"), ("ufid", "00000000")]).unwrap();
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"glid":"albert","ufid":"00000000"}"#);

    let restored: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(record, restored);
}

#[rstest]
fn test_record_rejects_duplicate_fields() {
    let result: Result<Record, _> = serde_json::from_str(r#"{"glid":"albert","glid":"alberta"}"#);
    let error = result.unwrap_err();
    assert!(error.to_string().contains("duplicate field `glid`"));
}

#[rstest]
fn test_record_rejects_non_string_values() {
    let result: Result<Record, _> = serde_json::from_str(r#"{"glid":1}"#);
    assert!(result.is_err());
}

#[rstest]
fn test_directory_loaded_from_json_supports_lookup() {
    let json = r#"[
        {"glid": "albert", "ufid": "00000000"},
        {"glid": "alberta", "ufid": "11111111"}
    ]"#;
    let directory: Directory = serde_json::from_str(json).unwrap();

    assert_eq!(directory.len(), 2);
    assert_eq!(
        directory.find(&FieldSelector::new("glid", "ufid"), "alberta"),
        Maybe::Present("11111111")
    );
}

#[rstest]
fn test_directory_json_roundtrip_keeps_order() {
    let directory = Directory::new(vec![
        Record::try_from_fields([("glid", "zed")]).unwrap(),
        Record::try_from_fields([("glid", "amy")]).unwrap(),
    ]);
    let json = serde_json::to_string(&directory).unwrap();
    let restored: Directory = serde_json::from_str(&json).unwrap();
    assert_eq!(directory, restored);
}

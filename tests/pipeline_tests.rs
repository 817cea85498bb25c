//! Integration tests for lookup pipelines.
//!
//! A pipeline produces an optional starting value, cleans it with `map`, and
//! resolves it through one or more curried lookups chained with `bind`.

#![cfg(all(feature = "lookup", feature = "compose"))]

use monadic::control::{Maybe, Sequence};
use monadic::lookup::{Directory, FieldSelector, Record, lookup_by};
use monadic::{maybe, pipeline};
use rstest::{fixture, rstest};
use std::cell::Cell;

#[fixture]
fn directory() -> Directory {
    Directory::new(vec![
        Record::try_from_fields([("glid", "albert"), ("ufid", "00000000"), ("name", "Albert Alligator")])
            .unwrap(),
        Record::try_from_fields([("glid", "alberta"), ("ufid", "11111111"), ("name", "Alberta Alligator")])
            .unwrap(),
    ])
}

fn current_user_glid() -> Maybe<String> {
    Maybe::unit("ALBERT".to_string())
}

fn always_fail<T>(_: T) -> Maybe<T> {
    Maybe::Absent
}

// =============================================================================
// End-to-end Scenarios
// =============================================================================

#[rstest]
fn lookup_finds_second_record(directory: Directory) {
    let lookup = lookup_by(&directory, FieldSelector::new("glid", "ufid"));
    assert_eq!(lookup("alberta"), Maybe::Present("11111111".to_string()));
}

#[rstest]
fn lookup_of_unknown_key_is_absent(directory: Directory) {
    let lookup = lookup_by(&directory, FieldSelector::new("glid", "ufid"));
    assert_eq!(lookup("nonexistent"), Maybe::Absent);
}

#[rstest]
fn bind_feeds_present_value_to_lookup(directory: Directory) {
    let lookup = lookup_by(&directory, FieldSelector::new("glid", "ufid"));
    assert_eq!(Maybe::unit("albert").bind(&lookup), Maybe::Present("00000000".to_string()));
}

#[rstest]
fn bind_on_absent_never_calls_lookup(directory: Directory) {
    let calls = Cell::new(0);
    let lookup = lookup_by(&directory, FieldSelector::new("glid", "ufid"));
    let counted = |key: String| {
        calls.set(calls.get() + 1);
        lookup(key)
    };

    let result = Maybe::<String>::Absent.bind(counted);

    assert_eq!(result, Maybe::Absent);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn chained_lookups_are_associative(directory: Directory) {
    let ufid_of = lookup_by(&directory, FieldSelector::new("glid", "ufid"));
    let name_of = lookup_by(&directory, FieldSelector::new("ufid", "name"));

    let left = Maybe::unit("albert".to_string()).bind(&ufid_of).bind(&name_of);
    let right = Maybe::unit("albert".to_string()).bind(|x| ufid_of(x).bind(&name_of));

    assert_eq!(left, right);
    assert_eq!(left, Maybe::Present("Albert Alligator".to_string()));
}

#[rstest]
fn sequence_bind_expands_each_element() {
    let result = Sequence::from(vec![1, 2, 3]).bind(|x| Sequence::from(vec![x, x * 10]));
    assert_eq!(result.to_string(), "[1, 10, 2, 20, 3, 30]");
}

// =============================================================================
// Full Pipeline
// =============================================================================

#[rstest]
fn producer_clean_and_two_lookups(directory: Directory) {
    let ufid_of = lookup_by(&directory, FieldSelector::new("glid", "ufid"));
    let name_of = lookup_by(&directory, FieldSelector::new("ufid", "name"));

    let name = current_user_glid()
        .map(|glid| glid.to_lowercase())
        .bind(&ufid_of)
        .bind(&name_of);

    assert_eq!(name.to_string(), "Present(Albert Alligator)");
}

#[rstest]
fn uncleaned_key_misses(directory: Directory) {
    let ufid_of = lookup_by(&directory, FieldSelector::new("glid", "ufid"));
    assert_eq!(current_user_glid().bind(&ufid_of), Maybe::Absent);
}

#[rstest]
fn map_with_lookup_nests_the_result(directory: Directory) {
    let ufid_of = lookup_by(&directory, FieldSelector::new("glid", "ufid"));

    let nested: Maybe<Maybe<String>> = current_user_glid()
        .map(|glid| glid.to_lowercase())
        .map(&ufid_of);

    assert_eq!(nested.to_string(), "Present(Present(00000000))");
    assert_eq!(nested.flatten().to_string(), "Present(00000000)");
}

#[rstest]
fn always_fail_stops_every_later_stage(directory: Directory) {
    let calls = Cell::new(0);
    let ufid_of = lookup_by(&directory, FieldSelector::new("glid", "ufid"));
    let counted = |glid: String| {
        calls.set(calls.get() + 1);
        ufid_of(glid)
    };

    let result = current_user_glid()
        .map(|glid| glid.to_lowercase())
        .bind(always_fail)
        .bind(counted);

    assert_eq!(result.to_string(), "Absent");
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn absence_at_any_stage_skips_the_rest() {
    let calls = Cell::new(Vec::new());
    let stage = |label: &'static str, pass: bool| {
        let calls = &calls;
        move |value: i32| {
            let mut seen = calls.take();
            seen.push(label);
            calls.set(seen);
            if pass { Maybe::Present(value + 1) } else { Maybe::Absent }
        }
    };

    let result = Maybe::Present(0)
        .bind(stage("first", true))
        .bind(stage("second", false))
        .bind(stage("third", true));

    assert_eq!(result, Maybe::Absent);
    assert_eq!(calls.take(), vec!["first", "second"]);
}

// =============================================================================
// Macro Forms
// =============================================================================

#[rstest]
fn pipeline_macro_matches_bind_chain(directory: Directory) {
    let ufid_of = lookup_by(&directory, FieldSelector::new("glid", "ufid"));
    let name_of = lookup_by(&directory, FieldSelector::new("ufid", "name"));

    let start = || Maybe::unit("alberta".to_string());
    let chained = pipeline!(start(), &ufid_of, &name_of);

    assert_eq!(chained, start().bind(&ufid_of).bind(&name_of));
    assert_eq!(chained, Maybe::Present("Alberta Alligator".to_string()));
}

#[rstest]
fn maybe_macro_keeps_intermediate_values(directory: Directory) {
    let ufid_of = lookup_by(&directory, FieldSelector::new("glid", "ufid"));
    let name_of = lookup_by(&directory, FieldSelector::new("ufid", "name"));

    let summary = maybe! {
        glid <= current_user_glid().map(|glid| glid.to_lowercase());
        ufid <= ufid_of(glid.clone());
        name <= name_of(ufid.clone());
        Maybe::unit(format!("{glid} {ufid} {name}"))
    };

    assert_eq!(summary, Maybe::Present("albert 00000000 Albert Alligator".to_string()));
}

//! An ordered, read-only table of records and the curried lookup builder.
//!
//! The two-argument lookup "find `result_field` of the record whose
//! `key_field` equals `key`" is [`Directory::find`]. [`lookup_by`] fixes the
//! directory and field pair, leaving a one-argument function
//! `key -> Maybe<String>` that slots straight into [`Maybe::bind`].
//!
//! # First match wins
//!
//! Records are scanned in table order and the first record whose key field
//! equals the key decides the result. Later records with the same key are
//! never consulted, even if the first one lacks the result field.

use super::Record;
use crate::control::Maybe;

/// Names the field to match on and the field to return.
///
/// # Examples
///
/// ```rust
/// use monadic::lookup::FieldSelector;
///
/// let selector = FieldSelector::new("glid", "ufid");
/// assert_eq!(selector.key_field(), "glid");
/// assert_eq!(selector.result_field(), "ufid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSelector {
    key_field: String,
    result_field: String,
}

impl FieldSelector {
    /// Creates a selector matching on `key_field` and returning `result_field`.
    pub fn new(key_field: impl Into<String>, result_field: impl Into<String>) -> Self {
        Self {
            key_field: key_field.into(),
            result_field: result_field.into(),
        }
    }

    /// The field compared against the lookup key.
    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    /// The field returned for the matching record.
    pub fn result_field(&self) -> &str {
        &self.result_field
    }
}

/// An ordered sequence of records.
///
/// The directory is passed explicitly to every lookup; nothing reads it from
/// global state, so tests can hand in a fake directory.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::lookup::{Directory, FieldSelector, Record};
///
/// let directory = Directory::new(vec![
///     Record::try_from_fields([("glid", "albert"), ("ufid", "00000000")])?,
///     Record::try_from_fields([("glid", "alberta"), ("ufid", "11111111")])?,
/// ]);
///
/// let selector = FieldSelector::new("glid", "ufid");
/// assert_eq!(directory.find(&selector, "alberta"), Maybe::Present("11111111"));
/// assert_eq!(directory.find(&selector, "nobody"), Maybe::Absent);
/// # Ok::<(), monadic::lookup::LookupError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directory {
    records: Vec<Record>,
}

impl Directory {
    /// Creates a directory from records, keeping their order.
    pub const fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Returns the records in table order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the directory has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the first record satisfying `predicate`, in table order.
    pub fn find_record<P>(&self, mut predicate: P) -> Maybe<&Record>
    where
        P: FnMut(&Record) -> bool,
    {
        self.records.iter().find(|record| predicate(record)).into()
    }

    /// Looks up `selector.result_field` of the first record whose
    /// `selector.key_field` equals `key`.
    ///
    /// Returns `Absent` if no record matches, or if the first matching record
    /// has no result field.
    pub fn find(&self, selector: &FieldSelector, key: &str) -> Maybe<&str> {
        self.find_record(|record| record.field(selector.key_field()) == Maybe::Present(key))
            .bind(|record| record.field(selector.result_field()))
    }

    /// Consumes the directory and returns an owning lookup function.
    ///
    /// Use this when the lookup has to outlive the scope that built the
    /// directory.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::lookup::{Directory, FieldSelector, Record};
    ///
    /// fn ufid_lookup() -> impl Fn(String) -> Maybe<String> {
    ///     let directory = Directory::new(vec![
    ///         Record::try_from_fields([("glid", "albert"), ("ufid", "00000000")]).unwrap(),
    ///     ]);
    ///     directory.into_lookup(FieldSelector::new("glid", "ufid"))
    /// }
    ///
    /// let ufid_of = ufid_lookup();
    /// assert_eq!(ufid_of("albert".to_string()), Maybe::Present("00000000".to_string()));
    /// ```
    pub fn into_lookup<K>(self, selector: FieldSelector) -> impl Fn(K) -> Maybe<String>
    where
        K: AsRef<str>,
    {
        move |key: K| self.find(&selector, key.as_ref()).map(str::to_owned)
    }
}

impl FromIterator<Record> for Directory {
    fn from_iter<I: IntoIterator<Item = Record>>(iterator: I) -> Self {
        Self::new(iterator.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Directory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.records, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Directory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<Record> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::new)
    }
}

/// Partially applies [`Directory::find`] to a directory and field pair.
///
/// The returned function borrows the directory, scans it in order on every
/// call, and returns an owned copy of the result field. It has the shape
/// `key -> Maybe<String>` required by [`Maybe::bind`].
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::lookup::{lookup_by, Directory, FieldSelector, Record};
///
/// let directory = Directory::new(vec![
///     Record::try_from_fields([("glid", "albert"), ("ufid", "00000000")])?,
///     Record::try_from_fields([("glid", "alberta"), ("ufid", "11111111")])?,
/// ]);
///
/// let ufid_of = lookup_by(&directory, FieldSelector::new("glid", "ufid"));
///
/// assert_eq!(ufid_of("alberta"), Maybe::Present("11111111".to_string()));
/// assert_eq!(Maybe::unit("albert").bind(&ufid_of), Maybe::Present("00000000".to_string()));
/// # Ok::<(), monadic::lookup::LookupError>(())
/// ```
pub fn lookup_by<K>(directory: &Directory, selector: FieldSelector) -> impl Fn(K) -> Maybe<String>
where
    K: AsRef<str>,
{
    move |key: K| directory.find(&selector, key.as_ref()).map(str::to_owned)
}

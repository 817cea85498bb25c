//! A single row of a lookup table.

use std::collections::BTreeMap;

use super::LookupError;
use crate::control::Maybe;

/// A fixed mapping of field names to string values.
///
/// Field names are unique within a record; values may repeat across records.
/// Records are immutable once built.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::lookup::Record;
///
/// let person = Record::try_from_fields([
///     ("glid", "albert"),
///     ("ufid", "00000000"),
///     ("name", "Albert Alligator"),
/// ])?;
///
/// assert_eq!(person.field("ufid"), Maybe::Present("00000000"));
/// assert_eq!(person.field("email"), Maybe::Absent);
/// # Ok::<(), monadic::lookup::LookupError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Builds a record from `(name, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::DuplicateField`] if a name appears twice and
    /// [`LookupError::EmptyFieldName`] if a name is empty.
    pub fn try_from_fields<I, N, V>(fields: I) -> Result<Self, LookupError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::default();
        for (name, value) in fields {
            record.insert_unique(name.into(), value.into())?;
        }
        Ok(record)
    }

    fn insert_unique(&mut self, name: String, value: String) -> Result<(), LookupError> {
        if name.is_empty() {
            return Err(LookupError::EmptyFieldName);
        }
        if self.fields.contains_key(&name) {
            return Err(LookupError::DuplicateField { field: name });
        }
        self.fields.insert(name, value);
        Ok(())
    }

    /// Returns the value of `name`, or `Absent` if the record has no such field.
    pub fn field(&self, name: &str) -> Maybe<&str> {
        self.fields.get(name).map(String::as_str).into()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.fields, serializer)
    }
}

#[cfg(feature = "serde")]
struct RecordVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map of field names to string values")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut record = Record::default();
        while let Some((name, value)) = map.next_entry::<String, String>()? {
            record
                .insert_unique(name, value)
                .map_err(serde::de::Error::custom)?;
        }
        Ok(record)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

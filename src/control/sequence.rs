//! Sequence type - the zero-or-many container.
//!
//! `Sequence<T>` is the list monad: an ordered run of values where `bind`
//! lets each input produce any number of replacements (including none), and
//! the results are concatenated in order. It mirrors [`Maybe`](super::Maybe)
//! with "at most one replacement" generalized to "any number".
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Sequence;
//!
//! let numbers = Sequence::from(vec![1, 2, 3]);
//! let expanded = numbers.bind(|n| Sequence::from(vec![n, n * 10]));
//! assert_eq!(expanded, Sequence::from(vec![1, 10, 2, 20, 3, 30]));
//! ```

use std::fmt;

/// An ordered sequence of zero or more values.
///
/// Operations consume the sequence and return a new one; there are no
/// in-place mutators.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Sequence;
///
/// let words: Sequence<&str> = ["a", "b"].into_iter().collect();
/// assert_eq!(words.map(str::to_uppercase).to_string(), "[A, B]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    /// Returns an empty sequence.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Lifts a bare value into a single-element sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Sequence;
    ///
    /// assert_eq!(Sequence::unit(5).into_vec(), vec![5]);
    /// ```
    #[inline]
    pub fn unit(value: T) -> Self {
        Self {
            elements: vec![value],
        }
    }

    /// Applies `function` to every element, preserving order and length.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Sequence<U>
    where
        F: FnMut(T) -> U,
    {
        Sequence {
            elements: self.elements.into_iter().map(function).collect(),
        }
    }

    /// Applies `function` to every element and concatenates the results.
    ///
    /// Exactly one level is flattened: if `function` returns sequences of
    /// sequences, those inner sequences are kept intact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Sequence;
    ///
    /// let pairs = Sequence::from(vec![1, 2])
    ///     .bind(|n| Sequence::from(vec![(n, 'a'), (n, 'b')]));
    /// assert_eq!(pairs.into_vec(), vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, mut function: F) -> Sequence<U>
    where
        F: FnMut(T) -> Sequence<U>,
    {
        let mut elements = Vec::with_capacity(self.elements.len());
        for element in self.elements {
            elements.extend(function(element).elements);
        }
        Sequence { elements }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements by reference.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the sequence, returning its elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Sequence<Sequence<T>> {
    /// Concatenates the inner sequences, one level deep.
    #[inline]
    pub fn flatten(self) -> Sequence<T> {
        self.bind(|inner| inner)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Conversions and Iteration
// =============================================================================

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    #[inline]
    fn from(sequence: Sequence<T>) -> Self {
        sequence.elements
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self {
            elements: iterator.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    /// Renders `[]` for an empty sequence and `[a, b, c]` otherwise.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.elements, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
    }
}

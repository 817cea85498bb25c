//! Maybe type - a value that may or may not be present.
//!
//! This module provides the `Maybe<T>` type, the zero-or-one container.
//! A `Maybe` is either `Present(value)` or `Absent`, and absence is the only
//! failure signal: there is no reason code and no error payload.
//!
//! The two operations that make `Maybe` a monad are:
//!
//! - [`Maybe::map`]: apply a plain function to the value, re-wrapping the result
//! - [`Maybe::bind`]: apply a function that already returns a `Maybe`, without nesting
//!
//! [`Maybe::unit`] lifts a bare value into the context.
//!
//! # Laws
//!
//! ```text
//! Maybe::unit(x).bind(f)          == f(x)                          (left identity)
//! m.bind(Maybe::unit)             == m                             (right identity)
//! m.bind(f).bind(g)               == m.bind(|x| f(x).bind(g))      (associativity)
//! m.map(f)                        == m.bind(|x| Maybe::unit(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//!
//! fn parse_positive(input: &str) -> Maybe<u32> {
//!     match input.parse::<u32>() {
//!         Ok(number) if number > 0 => Maybe::Present(number),
//!         _ => Maybe::Absent,
//!     }
//! }
//!
//! let doubled = Maybe::unit("21").bind(parse_positive).map(|n| n * 2);
//! assert_eq!(doubled, Maybe::Present(42));
//!
//! let failed = Maybe::unit("zero").bind(parse_positive).map(|n| n * 2);
//! assert_eq!(failed, Maybe::Absent);
//! ```

use std::fmt;

/// A value that is either present or absent.
///
/// `Maybe<T>` is a closed sum type. Every consumption site has to handle both
/// variants, so "forgot to handle absence" is a compile error rather than a
/// runtime surprise. There is no panicking `unwrap`: extracting
/// the value always requires saying what happens when it is missing.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
///
/// let present: Maybe<i32> = Maybe::Present(5);
/// let absent: Maybe<i32> = Maybe::Absent;
///
/// assert_eq!(present.map(|n| n + 1), Maybe::Present(6));
/// assert_eq!(absent.map(|n| n + 1), Maybe::Absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Maybe<T> {
    /// No value. This is the failure signal.
    #[default]
    Absent,
    /// Exactly one value.
    Present(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Lifts a bare value into the context. Always returns `Present(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::unit(5), Maybe::Present(5));
    /// ```
    #[inline]
    pub const fn unit(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns `Absent`.
    ///
    /// Handy as a point-free stage: `m.bind(|_| Maybe::absent())`.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Monad Operations
    // =========================================================================

    /// Applies a total function to the contained value.
    ///
    /// `Present(x)` becomes `Present(function(x))`. `Absent` stays `Absent`
    /// and `function` is never invoked.
    ///
    /// If `function` can itself fail, use [`Maybe::bind`] with a function
    /// returning `Maybe<U>`; mapping such a function produces a nested
    /// `Maybe<Maybe<U>>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let name = Maybe::unit("ALBERT").map(str::to_lowercase);
    /// assert_eq!(name, Maybe::Present("albert".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Sequences a computation that itself returns a `Maybe`.
    ///
    /// `Present(x)` returns `function(x)` verbatim, so the result is never
    /// nested. `Absent` returns `Absent` and `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::Present(n / 2) } else { Maybe::Absent };
    ///
    /// assert_eq!(Maybe::unit(8).bind(half).bind(half), Maybe::Present(2));
    /// assert_eq!(Maybe::unit(6).bind(half).bind(half), Maybe::Absent);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `Present`.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let glid = Maybe::unit(String::from("albert"));
    /// let length = glid.as_ref().map(|text| text.len());
    /// assert_eq!(length, Maybe::Present(6));
    /// assert!(glid.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Converts into an `Option<T>`, consuming the `Maybe`.
    ///
    /// This is the bridge to the standard library; the caller then handles
    /// `None` explicitly.
    #[inline]
    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Collapses both variants into one result.
    ///
    /// `on_absent` is called for `Absent`, `on_present` for `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.fold(
    ///     || "nothing".to_string(),
    ///     |n| format!("got {n}"),
    /// );
    ///
    /// assert_eq!(describe(Maybe::Present(3)), "got 3");
    /// assert_eq!(describe(Maybe::Absent), "nothing");
    /// ```
    #[inline]
    pub fn fold<U, A, P>(self, on_absent: A, on_present: P) -> U
    where
        A: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value or computes one from `default`.
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Keeps the value only if `predicate` holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::unit(4).filter(|n| n % 2 == 0), Maybe::Present(4));
    /// assert_eq!(Maybe::unit(3).filter(|n| n % 2 == 0), Maybe::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.bind(|value| {
            if predicate(&value) {
                Self::Present(value)
            } else {
                Self::Absent
            }
        })
    }

    /// Returns `self` if present, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => alternative,
        }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    ///
    /// `alternative` is only invoked when `self` is `Absent`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => alternative(),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// `m.map(f).flatten()` is the same as `m.bind(f)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let nested = Maybe::Present(Maybe::Present(1));
    /// assert_eq!(nested.flatten(), Maybe::Present(1));
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    /// Renders `Present(<value>)` or `Absent`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => write!(formatter, "Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.present()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
    }
}

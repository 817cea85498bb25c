//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! `flat_map` (bind): the result of one computation decides the next one,
//! and the context is never nested.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! No runtime check can prove a universal law. The implementations satisfy
//! them by construction, and the tests below and in `tests/*_laws.rs`
//! spot-check them, including the absent and empty cases.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     Maybe::from(s.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Maybe::Present("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::Present(n * 2));
//! assert_eq!(result, Maybe::Present(84));
//! ```

use super::applicative::{Applicative, ApplicativeMut};
use crate::control::{Maybe, Sequence};

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::typeclass::Monad;
///
/// let halve = |n: i32| if n % 2 == 0 { Maybe::Present(n / 2) } else { Maybe::Absent };
/// assert_eq!(Maybe::Present(20).flat_map(halve).flat_map(halve), Maybe::Present(5));
/// assert_eq!(Maybe::Present(10).flat_map(halve).flat_map(halve), Maybe::Absent);
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is a failure, the failure propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Present(5).then(Maybe::Present("hello")), Maybe::Present("hello"));
    /// assert_eq!(Maybe::<i32>::Absent.then(Maybe::Present("hello")), Maybe::Absent);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

/// Monad operations for multi-element containers.
///
/// The bind function runs once per element, so it must be `FnMut`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Sequence;
/// use monadic::typeclass::MonadMut;
///
/// let result = Sequence::from(vec![1, 2, 3]).flat_map_mut(|n| Sequence::from(vec![n, n * 10]));
/// assert_eq!(result.into_vec(), vec![1, 10, 2, 20, 3, 30]);
/// ```
pub trait MonadMut: ApplicativeMut {
    /// Applies a function to each element and concatenates the results.
    fn flat_map_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first results.
    ///
    /// Every element of `self` contributes a full copy of `next`.
    #[inline]
    fn then_mut<B: Clone>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone,
    {
        self.flat_map_mut(|_| next.clone())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

// =============================================================================
// Sequence<A> Implementation
// =============================================================================

impl<A> MonadMut for Sequence<A> {
    #[inline]
    fn flat_map_mut<B, F>(self, function: F) -> Sequence<B>
    where
        F: FnMut(A) -> Sequence<B>,
    {
        self.bind(function)
    }
}

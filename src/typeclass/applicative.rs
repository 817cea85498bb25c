//! Applicative type class - lifting values and combining contexts.
//!
//! `pure` is the type-class spelling of `unit`: it lifts a bare value into
//! the context. `map2` combines two independent computations.
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v)       == v                      (identity)
//! pure(f).apply(pure(x))     == pure(f(x))             (homomorphism)
//! u.apply(pure(y))           == pure(|f| f(y)).apply(u) (interchange)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::Present(42));
//!
//! let sum = Maybe::Present(1).map2(Maybe::Present(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::Present(3));
//! ```

use super::functor::{Functor, FunctorMut};
use crate::control::{Maybe, Sequence};

/// A type class for types that support lifting values and combining contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Applicative;
    ///
    /// assert_eq!(<Maybe<()>>::pure("albert"), Maybe::Present("albert"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side is a failure, the result is a failure.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::Present(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::Present(5)), Maybe::Present(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

/// Applicative operations for multi-element containers.
///
/// Combining two sequences produces every combination (cartesian product),
/// so the element types must be `Clone`.
pub trait ApplicativeMut: FunctorMut {
    /// Lifts a pure value into a singleton container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers using a binary function over every pair.
    fn map2<B: Clone, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self::Inner: Clone,
        F: FnMut(Self::Inner, B) -> C;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::unit(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

// =============================================================================
// Sequence<A> Implementation
// =============================================================================

impl<A> ApplicativeMut for Sequence<A> {
    #[inline]
    fn pure<B>(value: B) -> Sequence<B> {
        Sequence::unit(value)
    }

    fn map2<B: Clone, C, F>(self, other: Sequence<B>, mut function: F) -> Sequence<C>
    where
        A: Clone,
        F: FnMut(A, B) -> C,
    {
        let capacity = self.len().saturating_mul(other.len());
        let mut result = Vec::with_capacity(capacity);
        for a in &self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        Sequence::from(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_pure_is_unit() {
        assert_eq!(<Maybe<()>>::pure(5), Maybe::unit(5));
    }

    #[rstest]
    #[case(Maybe::Present(1), Maybe::Present(2), Maybe::Present(3))]
    #[case(Maybe::Present(1), Maybe::Absent, Maybe::Absent)]
    #[case(Maybe::Absent, Maybe::Present(2), Maybe::Absent)]
    #[case(Maybe::Absent, Maybe::Absent, Maybe::Absent)]
    fn maybe_map2_requires_both(
        #[case] left: Maybe<i32>,
        #[case] right: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(left.map2(right, |a, b| a + b), expected);
    }

    #[rstest]
    fn maybe_product_pairs_values() {
        let pair = Maybe::Present("albert").product(Maybe::Present("00000000"));
        assert_eq!(pair, Maybe::Present(("albert", "00000000")));
    }

    #[rstest]
    fn maybe_apply_homomorphism() {
        let function = |n: i32| n * 3;
        let left = <Maybe<()>>::pure(function).apply(<Maybe<()>>::pure(4));
        let right = <Maybe<()>>::pure(function(4));
        assert_eq!(left, right);
    }

    #[rstest]
    fn sequence_pure_is_unit() {
        let lifted: Sequence<i32> = <Sequence<()>>::pure(5);
        assert_eq!(lifted, Sequence::unit(5));
    }

    #[rstest]
    fn sequence_map2_is_cartesian_in_order() {
        let result = Sequence::from(vec![1, 2]).map2(Sequence::from(vec![10, 20]), |a, b| a + b);
        assert_eq!(result.into_vec(), vec![11, 21, 12, 22]);
    }

    #[rstest]
    fn sequence_map2_with_empty_is_empty() {
        let result = Sequence::from(vec![1, 2]).map2(Sequence::<i32>::empty(), |a, b| a + b);
        assert!(result.is_empty());
    }
}

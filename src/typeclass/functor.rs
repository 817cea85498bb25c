//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Functor;
//!
//! let length: Maybe<usize> = Maybe::unit("albert").fmap(str::len);
//! assert_eq!(length, Maybe::Present(6));
//! ```

use super::higher::TypeConstructor;
use crate::control::{Maybe, Sequence};

/// A type class for types that can have a function mapped over their contents.
///
/// `fmap` takes an `FnOnce`, which fits containers holding at most one value.
/// Multi-element containers implement [`FunctorMut`] instead.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::typeclass::Functor;
///
/// let x: Maybe<i32> = Maybe::Present(5);
/// assert_eq!(x.fmap(|n| n.to_string()), Maybe::Present("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor itself is left untouched.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Present(5).replace("replaced"), Maybe::Present("replaced"));
    /// assert_eq!(Maybe::<i32>::Absent.replace("replaced"), Maybe::Absent);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// Mapping for containers with many elements.
///
/// `FnOnce` cannot be called for every element of a sequence, so this trait
/// takes an `FnMut`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Sequence;
/// use monadic::typeclass::FunctorMut;
///
/// let doubled = Sequence::from(vec![1, 2, 3]).fmap_mut(|n| n * 2);
/// assert_eq!(doubled.into_vec(), vec![2, 4, 6]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies a mutable function to each element in the functor.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a mutable function to references of each element.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Sequence<A> Implementation
// =============================================================================

impl<A> FunctorMut for Sequence<A> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Sequence<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Sequence<B>
    where
        F: FnMut(&A) -> B,
    {
        self.iter().map(function).collect()
    }
}

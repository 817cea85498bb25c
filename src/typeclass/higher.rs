//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` and `Sequence<_>` as type
//! constructors directly. [`TypeConstructor`] uses a GAT to name "the same
//! container, holding a different type", which is what the `Functor` and
//! `Monad` signatures need.
//!
//! # Example
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Maybe<String> = emptied(Maybe::Present(42));
//! assert_eq!(absent, Maybe::Absent);
//! ```

use crate::control::{Maybe, Sequence};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter this constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> TypeConstructor for Sequence<A> {
    type Inner = A;
    type WithType<B> = Sequence<B>;
}

//! Type class traits for the monadic containers.
//!
//! The inherent `unit`/`map`/`bind` methods on [`Maybe`](crate::control::Maybe)
//! and [`Sequence`](crate::control::Sequence) are enough to use either
//! container. This module adds the type-class view, so code can be written
//! once against the abstraction:
//!
//! - [`Functor`] / [`FunctorMut`]: mapping over contents
//! - [`Applicative`] / [`ApplicativeMut`]: lifting values and combining contexts
//! - [`Monad`] / [`MonadMut`]: sequencing with dependency
//!
//! The `*Mut` variants take `FnMut` because a sequence calls the function
//! once per element; `Maybe` calls it at most once and takes `FnOnce`.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native higher-kinded types. [`TypeConstructor`] uses
//! Generic Associated Types to name "the same container over another type".
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::{Applicative, Monad};
//!
//! fn double_if_even<M>(monad: M) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     monad.flat_map(|n| {
//!         if n % 2 == 0 { M::pure(n * 2) } else { M::pure(n) }
//!     })
//! }
//!
//! assert_eq!(double_if_even(Maybe::Present(4)), Maybe::Present(8));
//! assert_eq!(double_if_even(Maybe::<i32>::Absent), Maybe::Absent);
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::{Applicative, ApplicativeMut};
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::{Monad, MonadMut};

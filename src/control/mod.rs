//! The monadic containers.
//!
//! - [`Maybe`]: zero-or-one value; `Absent` is the failure signal
//! - [`Sequence`]: zero-or-many values in order (the list monad)
//!
//! Both expose the same three operations, `unit`, `map` and `bind`, and
//! both satisfy the monad laws.
//!
//! # Examples
//!
//! ## Short-circuiting on absence
//!
//! ```rust
//! use monadic::control::Maybe;
//!
//! fn first_char(text: String) -> Maybe<char> {
//!     text.chars().next().into()
//! }
//!
//! assert_eq!(Maybe::unit(String::from("abc")).bind(first_char), Maybe::Present('a'));
//! assert_eq!(Maybe::unit(String::new()).bind(first_char), Maybe::Absent);
//! ```
//!
//! ## Non-deterministic expansion
//!
//! ```rust
//! use monadic::control::Sequence;
//!
//! let rolls: Sequence<(u8, u8)> = Sequence::from(vec![1, 2])
//!     .bind(|a| Sequence::from(vec![1, 2]).map(move |b| (a, b)));
//! assert_eq!(rolls.len(), 4);
//! ```

mod maybe;
mod sequence;

pub use maybe::Maybe;
pub use sequence::Sequence;

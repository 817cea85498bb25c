//! Composition macros for monadic pipelines.
//!
//! # Overview
//!
//! - [`pipeline!`]: chain stages left to right with `bind`
//! - [`maybe!`]: do-notation for [`Maybe`](crate::control::Maybe)
//! - [`sequence!`]: comprehensions over [`Sequence`](crate::control::Sequence)
//!
//! All three expand to plain `bind` calls on the containers' inherent
//! methods, so they need no trait imports.
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use monadic::control::Maybe;
//! use monadic::pipeline;
//!
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::Present(n / 2) } else { Maybe::Absent }
//! }
//!
//! // pipeline!(m, f, g) = m.bind(f).bind(g)
//! assert_eq!(pipeline!(Maybe::Present(12), half, half), Maybe::Present(3));
//! assert_eq!(pipeline!(Maybe::Present(6), half, half), Maybe::Absent);
//! ```
//!
//! ## Do-notation
//!
//! ```
//! use monadic::control::Maybe;
//! use monadic::maybe;
//!
//! let total = maybe! {
//!     x <= Maybe::Present(2);
//!     y <= Maybe::Present(3);
//!     Maybe::unit(x * y)
//! };
//! assert_eq!(total, Maybe::Present(6));
//! ```

mod maybe_macro;
mod pipeline_macro;
mod sequence_macro;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::maybe;
pub use crate::pipeline;
pub use crate::sequence;

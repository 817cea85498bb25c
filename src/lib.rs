//! # monadic
//!
//! Failure-aware computation chains built on two monads.
//!
//! ## Overview
//!
//! - **Containers**: [`Maybe`](control::Maybe) (a value or its absence) and
//!   [`Sequence`](control::Sequence) (zero or more values), each with
//!   `unit`, `map` and `bind`
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` and their `*Mut`
//!   variants over both containers
//! - **Lookups**: record tables and curried `key -> Maybe<String>` lookups
//! - **Composition**: `pipeline!`, `maybe!` and `sequence!` macros
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: Composition macros
//! - `lookup`: Record tables and the lookup builder
//! - `serde`: `Serialize`/`Deserialize` for containers and tables
//! - `full`: Enable all features
//!
//! The `control` module is always available.
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! let directory = Directory::new(vec![
//!     Record::try_from_fields([("glid", "albert"), ("ufid", "00000000")])?,
//!     Record::try_from_fields([("glid", "alberta"), ("ufid", "11111111")])?,
//! ]);
//! let ufid_of = lookup_by(&directory, FieldSelector::new("glid", "ufid"));
//!
//! let ufid = Maybe::unit("ALBERT").map(str::to_lowercase).bind(&ufid_of);
//! assert_eq!(ufid.to_string(), "Present(00000000)");
//!
//! let nested = Maybe::unit("albert".to_string()).map(&ufid_of);
//! assert_eq!(nested.to_string(), "Present(Present(00000000))");
//! # Ok::<(), LookupError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "lookup")]
    pub use crate::lookup::*;
}

pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "lookup")]
pub mod lookup;

//! Record tables and curried lookup functions.
//!
//! A [`Directory`] is an ordered list of [`Record`]s. Looking a value up
//! takes four inputs: the directory, the field to match on, the field to
//! return and the key. [`lookup_by`] fixes the first three, so the result is
//! a plain `key -> Maybe<String>` function that chains with
//! [`Maybe::bind`](crate::control::Maybe::bind).
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::lookup::{lookup_by, Directory, FieldSelector, Record};
//!
//! let directory = Directory::new(vec![
//!     Record::try_from_fields([
//!         ("glid", "albert"),
//!         ("ufid", "00000000"),
//!         ("name", "Albert Alligator"),
//!     ])?,
//! ]);
//!
//! let ufid_of = lookup_by(&directory, FieldSelector::new("glid", "ufid"));
//! let name_of = lookup_by(&directory, FieldSelector::new("ufid", "name"));
//!
//! let name = Maybe::unit("ALBERT")
//!     .map(str::to_lowercase)
//!     .bind(&ufid_of)
//!     .bind(&name_of);
//! assert_eq!(name, Maybe::Present("Albert Alligator".to_string()));
//! # Ok::<(), monadic::lookup::LookupError>(())
//! ```

mod directory;
mod error;
mod record;

pub use directory::{Directory, FieldSelector, lookup_by};
pub use error::LookupError;
pub use record::Record;

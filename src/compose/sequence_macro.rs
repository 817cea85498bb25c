//! Comprehension syntax for [`Sequence`](crate::control::Sequence).
//!
//! The [`sequence!`] macro writes nested `Sequence::bind` calls as a flat
//! list of generators, much like a list comprehension. Results appear in the
//! order a nested loop would produce them.
//!
//! # Syntax
//!
//! ```text
//! sequence! {
//!     pattern <= collection;    // Generator: one branch per element
//!     let pattern = expression; // Pure let binding
//!     yield expression          // Final element (wrapped with Sequence::unit)
//! }
//! ```
//!
//! A generator accepts anything that implements `IntoIterator`, including
//! `Sequence` itself and `Vec`.
//!
//! # Implementation Details
//!
//! `pattern <= collection; rest` expands to
//! `Sequence::from_iter(collection).bind(|pattern| rest)` and the terminal
//! `yield expression` expands to `Sequence::unit(expression)`.
//!
//! The generator closures borrow their environment. An outer collection used
//! inside an inner generator has to be cloned explicitly:
//!
//! ```rust
//! use monadic::control::Sequence;
//! use monadic::sequence;
//!
//! let xs = Sequence::from(vec![1, 2]);
//! let ys = Sequence::from(vec![10, 20]);
//!
//! let sums = sequence! {
//!     x <= xs;
//!     y <= ys.clone();
//!     yield x + y
//! };
//! assert_eq!(sums.into_vec(), vec![11, 21, 12, 22]);
//! ```

/// Builds a [`Sequence`](crate::control::Sequence) from nested generators.
///
/// # Examples
///
/// ## Expanding each element
///
/// ```rust
/// use monadic::control::Sequence;
/// use monadic::sequence;
///
/// let result = sequence! {
///     x <= Sequence::from(vec![1, 2, 3]);
///     y <= vec![x, x * 10];
///     yield y
/// };
/// assert_eq!(result.into_vec(), vec![1, 10, 2, 20, 3, 30]);
/// ```
///
/// ## Tuple pattern
///
/// ```rust
/// use monadic::sequence;
///
/// let pairs = vec![(1, "a"), (2, "b")];
/// let result = sequence! {
///     (number, letter) <= pairs;
///     yield format!("{number}{letter}")
/// };
/// assert_eq!(result.into_vec(), vec!["1a", "2b"]);
/// ```
///
/// ## An empty generator empties the result
///
/// ```rust
/// use monadic::control::Sequence;
/// use monadic::sequence;
///
/// let result = sequence! {
///     x <= vec![1, 2, 3];
///     _ <= Sequence::<()>::empty();
///     yield x
/// };
/// assert!(result.is_empty());
/// ```
#[macro_export]
macro_rules! sequence {
    // Terminal case: yield wraps the element with Sequence::unit
    (yield $result:expr) => {
        $crate::control::Sequence::unit($result)
    };

    // Generator with identifier pattern
    ($pattern:ident <= $collection:expr ; $($rest:tt)+) => {
        <$crate::control::Sequence<_> as ::core::iter::FromIterator<_>>::from_iter($collection)
            .bind(|$pattern| {
                $crate::sequence!($($rest)+)
            })
    };

    // Generator with tuple pattern
    (($($pattern:tt)*) <= $collection:expr ; $($rest:tt)+) => {
        <$crate::control::Sequence<_> as ::core::iter::FromIterator<_>>::from_iter($collection)
            .bind(|($($pattern)*)| {
                $crate::sequence!($($rest)+)
            })
    };

    // Generator with wildcard pattern
    (_ <= $collection:expr ; $($rest:tt)+) => {
        <$crate::control::Sequence<_> as ::core::iter::FromIterator<_>>::from_iter($collection)
            .bind(|_| {
                $crate::sequence!($($rest)+)
            })
    };

    // Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {{
        let $pattern = $expr;
        $crate::sequence!($($rest)+)
    }};

    // Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expr;
        $crate::sequence!($($rest)+)
    }};
}

//! Do-notation for [`Maybe`](crate::control::Maybe).
//!
//! The [`maybe!`] macro writes a chain of dependent `bind` calls as a flat
//! list of steps. Each `pattern <= expression;` step binds the present value
//! of a `Maybe`; the first `Absent` ends the block and becomes its result.
//!
//! # Syntax
//!
//! ```text
//! maybe! {
//!     pattern <= maybe_expression;  // Bind: unwrap the present value
//!     let pattern = expression;     // Pure let binding
//!     maybe_expression              // Final expression (must be a Maybe)
//! }
//! ```
//!
//! # Implementation Details
//!
//! `pattern <= m; rest` expands to `m.bind(move |pattern| rest)`, so the
//! block is exactly the nested form of a bind chain and satisfies the monad
//! laws for the same reason `bind` does.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::maybe;
//!
//! fn ufid_of(glid: &str) -> Maybe<&'static str> {
//!     match glid {
//!         "albert" => Maybe::Present("00000000"),
//!         _ => Maybe::Absent,
//!     }
//! }
//!
//! let greeting = maybe! {
//!     glid <= Maybe::unit("ALBERT".to_lowercase());
//!     ufid <= ufid_of(&glid);
//!     let label = format!("{glid}:{ufid}");
//!     Maybe::unit(label)
//! };
//! assert_eq!(greeting, Maybe::Present("albert:00000000".to_string()));
//! ```

/// Writes dependent [`Maybe`](crate::control::Maybe) computations as a flat
/// block of steps.
///
/// # Examples
///
/// ## Adding two optional numbers
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::maybe;
///
/// let sum = maybe! {
///     x <= Maybe::Present(5);
///     y <= Maybe::Present(10);
///     Maybe::unit(x + y)
/// };
/// assert_eq!(sum, Maybe::Present(15));
/// ```
///
/// ## Absence ends the block
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::maybe;
///
/// let sum = maybe! {
///     x <= Maybe::Present(5);
///     y <= Maybe::<i32>::Absent;
///     Maybe::unit(x + y)
/// };
/// assert_eq!(sum, Maybe::Absent);
/// ```
///
/// ## Tuple pattern
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::maybe;
///
/// let product = maybe! {
///     (a, b) <= Maybe::Present((6, 7));
///     Maybe::unit(a * b)
/// };
/// assert_eq!(product, Maybe::Present(42));
/// ```
#[macro_export]
macro_rules! maybe {
    // Bind with identifier pattern
    ($pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        ($monad).bind(move |$pattern| {
            $crate::maybe!($($rest)+)
        })
    };

    // Bind with tuple pattern
    (($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        ($monad).bind(move |($($pattern)*)| {
            $crate::maybe!($($rest)+)
        })
    };

    // Bind with wildcard pattern
    (_ <= $monad:expr ; $($rest:tt)+) => {
        ($monad).bind(move |_| {
            $crate::maybe!($($rest)+)
        })
    };

    // Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::maybe!($($rest)+)
        }
    };

    // Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::maybe!($($rest)+)
        }
    };

    // Final expression: returned as is
    ($result:expr) => {
        $result
    };
}

#[cfg(test)]
mod tests {
    use crate::control::Maybe;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn final_expression_only() {
        let result: Maybe<i32> = maybe! { Maybe::Present(1) };
        assert_eq!(result, Maybe::Present(1));
    }

    #[rstest]
    fn binds_in_order() {
        let result = maybe! {
            x <= Maybe::Present(5);
            y <= Maybe::Present(x * 2);
            Maybe::unit(x + y)
        };
        assert_eq!(result, Maybe::Present(15));
    }

    #[rstest]
    fn let_bindings() {
        let result = maybe! {
            x <= Maybe::Present(5);
            let doubled = x * 2;
            let (low, high) = (doubled - 1, doubled + 1);
            Maybe::unit(low + high)
        };
        assert_eq!(result, Maybe::Present(20));
    }

    #[rstest]
    fn wildcard_pattern_still_short_circuits() {
        let result = maybe! {
            _ <= Maybe::<()>::Absent;
            Maybe::Present("unreachable")
        };
        assert_eq!(result, Maybe::Absent);
    }

    #[rstest]
    fn steps_after_absent_are_not_evaluated() {
        let calls = Cell::new(0);
        let counted = |n: i32| {
            calls.set(calls.get() + 1);
            Maybe::Present(n)
        };

        let result = maybe! {
            x <= Maybe::<i32>::Absent;
            y <= counted(x);
            Maybe::unit(y)
        };

        assert_eq!(result, Maybe::Absent);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Maybe::Present(3))]
    #[case(Maybe::Absent)]
    fn block_matches_nested_bind(#[case] start: Maybe<i32>) {
        let step = |n: i32| if n > 1 { Maybe::Present(n - 1) } else { Maybe::Absent };

        let block = maybe! {
            x <= start;
            y <= step(x);
            step(y)
        };

        assert_eq!(block, start.bind(|x| step(x).bind(step)));
    }
}

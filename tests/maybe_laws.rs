//! Property-based tests for the Maybe monad laws.
//!
//! - **Left Identity**: `Maybe::unit(a).bind(f) == f(a)`
//! - **Right Identity**: `m.bind(Maybe::unit) == m`
//! - **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//! - **Map/Bind Equivalence**: `m.map(f) == m.bind(|x| Maybe::unit(f(x)))`
//! - **Functor Identity/Composition** for `map`
//!
//! The stage functions below return `Absent` for part of their domain, so
//! every property also exercises the failure path.

use monadic::control::Maybe;
use monadic::typeclass::{Applicative, Functor, Monad};
use proptest::prelude::*;

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn halve(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::Present(n / 2) } else { Maybe::Absent }
}

fn describe(n: i32) -> Maybe<String> {
    if n % 3 == 0 { Maybe::Absent } else { Maybe::Present(n.to_string()) }
}

// =============================================================================
// Monad Laws (inherent methods)
// =============================================================================

proptest! {
    /// Left Identity Law: unit(a).bind(f) == f(a)
    #[test]
    fn prop_left_identity_law(value in any::<i32>()) {
        prop_assert_eq!(Maybe::unit(value).bind(halve), halve(value));
        prop_assert_eq!(Maybe::unit(value).bind(describe), describe(value));
    }

    /// Right Identity Law: m.bind(unit) == m
    #[test]
    fn prop_right_identity_law(monad in any_maybe()) {
        prop_assert_eq!(monad.bind(Maybe::unit), monad);
    }

    /// Associativity Law: m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
    #[test]
    fn prop_associativity_law(monad in any_maybe()) {
        let left = monad.bind(halve).bind(describe);
        let right = monad.bind(|x| halve(x).bind(describe));
        prop_assert_eq!(left, right);
    }

    /// map(m, f) == bind(m, |x| unit(f(x)))
    #[test]
    fn prop_map_is_bind_then_unit(monad in any_maybe()) {
        let function = |n: i32| n.wrapping_mul(3);
        prop_assert_eq!(monad.map(function), monad.bind(|x| Maybe::unit(function(x))));
    }

    /// bind(m, f) == flatten(map(m, f))
    #[test]
    fn prop_bind_is_map_then_flatten(monad in any_maybe()) {
        prop_assert_eq!(monad.bind(describe), monad.map(describe).flatten());
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity Law: m.map(|x| x) == m
    #[test]
    fn prop_functor_identity_law(monad in any_maybe()) {
        prop_assert_eq!(monad.map(|x| x), monad);
    }

    /// Composition Law: m.map(f).map(g) == m.map(|x| g(f(x)))
    #[test]
    fn prop_functor_composition_law(monad in any_maybe()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.to_string();

        let left = monad.map(function1).map(function2);
        let right = monad.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Type Class View
// =============================================================================

proptest! {
    /// Trait methods agree with the inherent methods
    #[test]
    fn prop_typeclass_matches_inherent(monad in any_maybe()) {
        prop_assert_eq!(monad.fmap(|n| n.wrapping_sub(1)), monad.map(|n| n.wrapping_sub(1)));
        prop_assert_eq!(monad.flat_map(halve), monad.bind(halve));
        prop_assert_eq!(<Maybe<()>>::pure(7), Maybe::unit(7));
    }

    /// Left Identity Law through the Monad trait
    #[test]
    fn prop_typeclass_left_identity_law(value in any::<i32>()) {
        prop_assert_eq!(<Maybe<()>>::pure(value).flat_map(halve), halve(value));
    }
}

// =============================================================================
// Absent is absorbing
// =============================================================================

proptest! {
    /// Any chain starting from Absent is Absent
    #[test]
    fn prop_absent_absorbs_every_stage(stage_count in 0usize..16) {
        let mut current: Maybe<i32> = Maybe::Absent;
        for _ in 0..stage_count {
            current = current.bind(|n| Maybe::Present(n.wrapping_add(1)));
        }
        prop_assert_eq!(current, Maybe::Absent);
    }
}

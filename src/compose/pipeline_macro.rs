/// Chains monadic stages from left to right with `bind`.
///
/// `pipeline!(m, f, g, h)` is equivalent to `m.bind(f).bind(g).bind(h)`.
///
/// Every stage has the shape `T -> M<U>`, where `M` is the container of the
/// starting value ([`Maybe`](crate::control::Maybe) or
/// [`Sequence`](crate::control::Sequence)). With `Maybe`, the first stage
/// that returns `Absent` ends the pipeline: the remaining stages are never
/// called and the whole expression is `Absent`.
///
/// # Syntax
///
/// - `pipeline!(m)` - Returns `m` unchanged
/// - `pipeline!(m, f)` - Returns `m.bind(f)`
/// - `pipeline!(m, f, g, ...)` - Returns `m.bind(f).bind(g)...`
///
/// # Examples
///
/// ## Short-circuiting lookup chain
///
/// ```
/// use monadic::control::Maybe;
/// use monadic::pipeline;
///
/// fn ufid_of(glid: String) -> Maybe<String> {
///     if glid == "albert" { Maybe::Present("00000000".to_string()) } else { Maybe::Absent }
/// }
///
/// fn lowercase(glid: String) -> Maybe<String> {
///     Maybe::unit(glid.to_lowercase())
/// }
///
/// let found = pipeline!(Maybe::unit("ALBERT".to_string()), lowercase, ufid_of);
/// assert_eq!(found, Maybe::Present("00000000".to_string()));
///
/// let missing = pipeline!(Maybe::unit("BOB".to_string()), lowercase, ufid_of);
/// assert_eq!(missing, Maybe::Absent);
/// ```
///
/// ## Sequences
///
/// ```
/// use monadic::control::Sequence;
/// use monadic::pipeline;
///
/// let result = pipeline!(
///     Sequence::from(vec![1, 2]),
///     |n| Sequence::from(vec![n, n * 10]),
///     |n| Sequence::unit(n + 1),
/// );
/// assert_eq!(result.into_vec(), vec![2, 11, 3, 21]);
/// ```
#[macro_export]
macro_rules! pipeline {
    // Starting value only: return as is
    ($monad:expr $(,)?) => {
        $monad
    };

    // Single stage: bind it
    ($monad:expr, $stage:expr $(,)?) => {
        ($monad).bind($stage)
    };

    // Multiple stages: bind left to right recursively
    ($monad:expr, $stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::pipeline!(($monad).bind($stage), $($remaining_stages),+)
    };
}

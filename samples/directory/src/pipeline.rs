//! The directory lookup pipeline.
//!
//! The pipeline starts from the signed-in user's glid, normalizes it, and
//! resolves it to a ufid and then to a display name:
//!
//! ```text
//! current_user_glid ──map(to_lowercase)──> bind(ufid_of) ──> bind(name_of)
//! ```
//!
//! Every stage can come up empty. Once a stage returns `Absent`, the later
//! stages are skipped and the result is `Absent`.

use std::fs;

use monadic::control::{Maybe, Sequence};
use monadic::lookup::{Directory, FieldSelector, LookupError, Record, lookup_by};

use crate::config::AppConfig;
use crate::error::AppError;

/// Field holding the user's login id.
pub const GLID_FIELD: &str = "glid";
/// Field holding the user's numeric id.
pub const UFID_FIELD: &str = "ufid";
/// Field holding the user's display name.
pub const NAME_FIELD: &str = "name";

/// The two-person directory used when no directory file is configured.
///
/// # Errors
///
/// Returns [`LookupError`] if a built-in record is malformed.
pub fn builtin_directory() -> Result<Directory, LookupError> {
    Ok(Directory::new(vec![
        Record::try_from_fields([
            (GLID_FIELD, "albert"),
            (UFID_FIELD, "00000000"),
            (NAME_FIELD, "Albert Alligator"),
        ])?,
        Record::try_from_fields([
            (GLID_FIELD, "alberta"),
            (UFID_FIELD, "11111111"),
            (NAME_FIELD, "Alberta Alligator"),
        ])?,
    ]))
}

/// Loads the configured directory file, or the built-in directory.
///
/// # Errors
///
/// Returns [`AppError::ReadDirectory`] or [`AppError::ParseDirectory`] if the
/// configured file cannot be used.
pub fn load_directory(config: &AppConfig) -> Result<Directory, AppError> {
    let Some(path) = &config.directory_path else {
        tracing::debug!("no directory file configured, using built-in directory");
        return builtin_directory().map_err(AppError::from);
    };

    let contents = fs::read_to_string(path).map_err(|source| AppError::ReadDirectory {
        path: path.clone(),
        source,
    })?;
    let directory: Directory =
        serde_json::from_str(&contents).map_err(|source| AppError::ParseDirectory {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(path = %path.display(), records = directory.len(), "loaded directory file");
    Ok(directory)
}

/// Returns the signed-in user's glid as reported, or `Absent` if nobody is
/// signed in.
pub fn current_user_glid(config: &AppConfig) -> Maybe<String> {
    Maybe::unit(config.user.trim())
        .filter(|glid| !glid.is_empty())
        .map(str::to_owned)
}

/// Normalizes a glid. Directory glids are lowercase.
pub fn to_lowercase(glid: String) -> String {
    glid.to_lowercase()
}

/// The producer followed by normalization.
pub fn clean_user_glid(config: &AppConfig) -> Maybe<String> {
    current_user_glid(config).map(to_lowercase)
}

/// A stage that rejects every input.
pub fn always_fail<T>(_: T) -> Maybe<T> {
    Maybe::Absent
}

/// `glid -> Maybe<ufid>` over `directory`.
pub fn ufid_lookup(directory: &Directory) -> impl Fn(String) -> Maybe<String> {
    lookup_by::<String>(directory, FieldSelector::new(GLID_FIELD, UFID_FIELD))
}

/// `ufid -> Maybe<name>` over `directory`.
pub fn name_lookup(directory: &Directory) -> impl Fn(String) -> Maybe<String> {
    lookup_by::<String>(directory, FieldSelector::new(UFID_FIELD, NAME_FIELD))
}

/// Resolves the current user's display name.
pub fn resolve_user_name(config: &AppConfig, directory: &Directory) -> Maybe<String> {
    clean_user_glid(config)
        .bind(ufid_lookup(directory))
        .bind(name_lookup(directory))
}

/// One labelled pipeline result, rendered with `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// What the step computes.
    pub label: &'static str,
    /// The result's `Display` form.
    pub rendered: String,
}

impl Step {
    fn new(label: &'static str, value: &impl std::fmt::Display) -> Self {
        Self {
            label,
            rendered: value.to_string(),
        }
    }
}

/// Runs each stage of the pipeline on its own and in combination.
pub fn demonstrate(config: &AppConfig, directory: &Directory) -> Vec<Step> {
    let ufid_of = ufid_lookup(directory);
    let name_of = name_lookup(directory);

    vec![
        Step::new("current user glid", &current_user_glid(config)),
        Step::new("cleaned glid", &clean_user_glid(config)),
        Step::new("cleaning nobody", &Maybe::<String>::Absent.map(to_lowercase)),
        Step::new("ufid of alberta", &ufid_of("alberta".to_string())),
        Step::new("map with lookup", &clean_user_glid(config).map(&ufid_of)),
        Step::new("bind with lookup", &clean_user_glid(config).bind(&ufid_of)),
        Step::new("name of 00000000", &name_of("00000000".to_string())),
        Step::new(
            "glid to name",
            &clean_user_glid(config).bind(&ufid_of).bind(&name_of),
        ),
        Step::new(
            "nobody to name",
            &Maybe::<String>::Absent.bind(&ufid_of).bind(&name_of),
        ),
        Step::new(
            "through always_fail",
            &clean_user_glid(config).bind(always_fail).bind(&name_of),
        ),
        Step::new("unit for Maybe", &Maybe::unit(5)),
        Step::new("unit for Sequence", &Sequence::unit(5)),
        Step::new(
            "sequence bind",
            &Sequence::from(vec![1, 2, 3]).bind(|x| Sequence::from(vec![x, x * 10])),
        ),
    ]
}

/// The outcome of checking one monad law on concrete values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawCheck {
    /// Name of the law.
    pub law: &'static str,
    /// Rendered left-hand side.
    pub left: String,
    /// Rendered right-hand side.
    pub right: String,
    /// Whether both sides are equal.
    pub holds: bool,
}

impl LawCheck {
    fn compare<T>(law: &'static str, left: &T, right: &T) -> Self
    where
        T: PartialEq + std::fmt::Display,
    {
        Self {
            law,
            left: left.to_string(),
            right: right.to_string(),
            holds: left == right,
        }
    }
}

/// Checks the three monad laws using the directory lookups as stages.
pub fn check_laws(config: &AppConfig, directory: &Directory) -> Vec<LawCheck> {
    let ufid_of = ufid_lookup(directory);
    let name_of = name_lookup(directory);
    let expand = |x: i32| Sequence::from(vec![x, x * 10]);

    vec![
        LawCheck::compare(
            "left identity (Maybe)",
            &Maybe::unit("albert".to_string()).bind(&ufid_of),
            &ufid_of("albert".to_string()),
        ),
        LawCheck::compare(
            "right identity (Maybe)",
            &clean_user_glid(config).bind(Maybe::unit),
            &clean_user_glid(config),
        ),
        LawCheck::compare(
            "associativity (Maybe)",
            &clean_user_glid(config).bind(&ufid_of).bind(&name_of),
            &clean_user_glid(config).bind(|x| ufid_of(x).bind(&name_of)),
        ),
        LawCheck::compare(
            "left identity (Sequence)",
            &Sequence::unit(5).bind(expand),
            &expand(5),
        ),
        LawCheck::compare(
            "right identity (Sequence)",
            &Sequence::from(vec![1, 2, 3]).bind(Sequence::unit),
            &Sequence::from(vec![1, 2, 3]),
        ),
    ]
}

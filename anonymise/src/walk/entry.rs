//! Application layer: the anonymisation entrypoints.
//!
//! Every entrypoint starts the walk at the root with an empty tag, so
//! anonymisation only ever begins at a tagged field inside the value.

use super::value::Anonymise;
use crate::error::{AnonError, CopyError, MarshalError};

/// Tag passed to the root of every walk.
const ROOT_TAG: &str = "";

/// Returns an anonymised copy of `value`.
///
/// The copy is made with `Clone`, which for owned data shares no mutable
/// storage with `value`; `value` itself is never modified. On error no copy is
/// returned.
///
/// ```rust
/// use anonymise::Anonymise;
///
/// #[derive(Clone, Anonymise)]
/// #[anon(skip_debug)]
/// struct Login {
///     user: String,
///     #[anon("stars")]
///     password: String,
/// }
///
/// let login = Login { user: "ada".into(), password: "hunter2".into() };
/// let anonymised = anonymise::anonymise(&login)?;
/// assert_eq!(anonymised.password, "****");
/// assert_eq!(login.password, "hunter2");
/// # Ok::<(), anonymise::AnonError>(())
/// ```
pub fn anonymise<T>(value: &T) -> Result<T, AnonError>
where
    T: Anonymise + Clone,
{
    let mut copy = value.clone();
    copy.walk(ROOT_TAG)?;
    Ok(copy)
}

/// Returns an anonymised copy of `value`, made by a caller-supplied copier.
///
/// `copy` must return a value sharing no mutable storage with its input. If
/// it fails, its error is returned as [`CopyError::Copy`] and nothing is
/// walked.
pub fn anonymise_copied<T, F, E>(value: &T, copy: F) -> Result<T, CopyError<E>>
where
    T: Anonymise,
    F: FnOnce(&T) -> Result<T, E>,
{
    let mut copy = copy(value).map_err(CopyError::Copy)?;
    copy.walk(ROOT_TAG)?;
    Ok(copy)
}

/// Anonymises `value` in place.
///
/// Only a mutable reference is accepted, so passing a value by copy does not
/// compile:
///
/// ```compile_fail
/// let value = String::from("a");
/// anonymise::anonymise_by_ref(value).unwrap();
/// ```
///
/// This is not transactional. Fields are visited in declaration order and the
/// walk stops at the first error; fields rewritten before the failing one stay
/// rewritten.
pub fn anonymise_by_ref<T>(value: &mut T) -> Result<(), AnonError>
where
    T: Anonymise + ?Sized,
{
    value.walk(ROOT_TAG)
}

/// Anonymises a copy of `value` and hands it to `serialize`.
///
/// `serialize` is only called once anonymisation succeeded; its output is
/// returned as-is and its error as [`MarshalError::Serialize`].
///
/// ```rust
/// use anonymise::Anonymise;
///
/// #[derive(Clone, Anonymise, serde::Serialize)]
/// #[anon(skip_debug)]
/// struct Note {
///     #[anon("stars_with_len")]
///     secret: String,
/// }
///
/// let note = Note { secret: "swear".into() };
/// let bytes = anonymise::marshal(&note, serde_json::to_vec).unwrap();
/// assert_eq!(bytes, br#"{"secret":"*****"}"#);
/// ```
pub fn marshal<T, F, B, E>(value: &T, serialize: F) -> Result<B, MarshalError<E>>
where
    T: Anonymise + Clone,
    F: FnOnce(&T) -> Result<B, E>,
{
    let anonymised = anonymise(value)?;
    serialize(&anonymised).map_err(MarshalError::Serialize)
}

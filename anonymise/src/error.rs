//! Error types returned by the anonymisation entry points.
//!
//! [`AnonError`] covers failures of the walk itself. The entry points that
//! call into a caller-supplied collaborator (a copier or a serializer) wrap it
//! in [`CopyError`] or [`MarshalError`] so the collaborator's own error is
//! surfaced unchanged and can never be confused with an anonymisation error.

use std::error::Error as StdError;

/// Boxed error carried by [`AnonError::Walk`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A failure while walking a value.
///
/// Any error aborts the walk that produced it: no further fields are visited.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AnonError {
    /// A field tag names no anonymiser and is neither `""` nor `"-"`.
    #[error("anon: no anonymiser registered for tag `{tag}`")]
    UnknownTag {
        /// The offending tag, verbatim.
        tag: String,
    },
    /// A hand-written [`Anonymise`](crate::Anonymise) impl could not inspect
    /// its value.
    #[error("anon: {context}")]
    Walk {
        /// What the walker was doing when it failed.
        context: String,
        /// The underlying failure.
        #[source]
        source: BoxError,
    },
}

impl AnonError {
    /// Builds [`AnonError::UnknownTag`].
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        Self::UnknownTag { tag: tag.into() }
    }

    /// Builds [`AnonError::Walk`], for use in hand-written walkers.
    pub fn walk<E>(context: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Walk {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Returns the unknown tag, if this is [`AnonError::UnknownTag`].
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::UnknownTag { tag } => Some(tag),
            Self::Walk { .. } => None,
        }
    }
}

/// Failure of [`anonymise_copied`](crate::anonymise_copied).
#[derive(Debug, thiserror::Error)]
pub enum CopyError<E> {
    /// The copier failed. Nothing was walked.
    #[error(transparent)]
    Copy(E),
    /// The copy was made but could not be anonymised.
    #[error(transparent)]
    Anonymise(#[from] AnonError),
}

/// Failure of [`marshal`](crate::marshal).
#[derive(Debug, thiserror::Error)]
pub enum MarshalError<E> {
    /// Anonymisation failed. The serializer was never called.
    #[error(transparent)]
    Anonymise(#[from] AnonError),
    /// The serializer failed on the anonymised value.
    #[error(transparent)]
    Serialize(E),
}

impl<E> MarshalError<E> {
    /// Returns the serializer's error, if that is what failed.
    pub fn into_serialize_error(self) -> Option<E> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Anonymise(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error as _, fmt};

    use super::{AnonError, CopyError, MarshalError};

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("boom")
        }
    }

    impl std::error::Error for Boom {}

    #[test]
    fn unknown_tag_names_the_tag() {
        let err = AnonError::unknown_tag("bogus");
        assert_eq!(err.to_string(), "anon: no anonymiser registered for tag `bogus`");
        assert_eq!(err.tag(), Some("bogus"));
    }

    #[test]
    fn walk_error_keeps_source() {
        let err = AnonError::walk("reading lock", Boom);
        assert_eq!(err.to_string(), "anon: reading lock");
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("boom"));
        assert_eq!(err.tag(), None);
    }

    #[test]
    fn collaborator_errors_are_transparent() {
        let err: CopyError<Boom> = CopyError::Copy(Boom);
        assert_eq!(err.to_string(), "boom");

        let err: MarshalError<Boom> = MarshalError::Serialize(Boom);
        assert_eq!(err.to_string(), "boom");
        assert!(err.into_serialize_error().is_some());

        let err: MarshalError<Boom> = AnonError::unknown_tag("x").into();
        assert_eq!(err.to_string(), "anon: no anonymiser registered for tag `x`");
        assert!(err.into_serialize_error().is_none());
    }
}

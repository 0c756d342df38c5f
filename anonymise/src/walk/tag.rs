//! Resolution of `#[anon("...")]` tag strings.

use crate::{anonymiser::Anonymiser, error::AnonError};

/// Tag that explicitly opts a field out of anonymisation.
pub const TAG_SKIP: &str = "-";

/// What to do with a string leaf under a given tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Leave the value unchanged.
    Skip,
    /// Replace the value with the anonymiser's output.
    Apply(Anonymiser),
}

/// Resolves a field tag.
///
/// `""` and `"-"` skip. A registry name applies that anonymiser. Anything else
/// is [`AnonError::UnknownTag`], which aborts the whole walk rather than
/// skipping the one field.
pub fn resolve_tag(tag: &str) -> Result<Action, AnonError> {
    if tag.is_empty() || tag == TAG_SKIP {
        return Ok(Action::Skip);
    }
    Anonymiser::from_tag(tag)
        .map(Action::Apply)
        .ok_or_else(|| AnonError::unknown_tag(tag))
}

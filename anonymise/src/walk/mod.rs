//! Traversal, tag resolution, and entrypoints.
//!
//! - **`tag`**: what a field tag means (`Action`, `resolve_tag`)
//! - **`value`**: how each value shape is walked (`Anonymise`, `Anonymisable`)
//! - **`entry`**: copy, in-place, and serialize entrypoints
//!
//! Anonymisers themselves live in `crate::anonymiser`.

mod entry;
mod tag;
mod value;

pub use entry::{anonymise, anonymise_by_ref, anonymise_copied, marshal};
pub use tag::{resolve_tag, Action, TAG_SKIP};
pub use value::{Anonymisable, Anonymise};

//! Annotation-driven anonymisation of sensitive fields.
//!
//! Tag the fields of your types with `#[anon("...")]`, derive [`Anonymise`],
//! and call [`anonymise`] (or [`marshal`]) at the output boundary. The value
//! is copied, the copy is walked, and every string under a tagged field is
//! replaced by the output of the anonymiser the tag names.
//!
//! Key rules:
//! - A tag applies to the string leaves of its own field: `String`,
//!   `Option<String>`, `Vec<String>`, `Box<String>` and any nesting of those.
//! - Nested records never inherit a tag; their own field tags apply.
//! - `""` (no attribute) and `"-"` leave a field unchanged.
//! - An unknown tag fails the whole call with [`AnonError::UnknownTag`] when
//!   the walk reaches a string under it.
//! - Non-string leaves (numbers, booleans, ...) are never changed.
//!
//! Registered tags:
//!
//! | Tag | Output |
//! |-----|--------|
//! | `stars` | `****` |
//! | `empty` | the empty string |
//! | `stars_with_len` | one `*` per UTF-8 byte |
//! | `with_info` | `len:<bytes>,is_ascii:<bool>` |
//! | `sha512` | the raw SHA-512 digest, one char per byte |
//!
//! ```rust
//! use anonymise::Anonymise;
//!
//! #[derive(Clone, Anonymise)]
//! struct Inner {
//!     #[anon("stars")]
//!     inner_string: String,
//! }
//!
//! #[derive(Clone, Anonymise)]
//! struct Event {
//!     #[anon("stars_with_len")]
//!     slice: Vec<String>,
//!     inner: Inner,
//!     count: u32,
//! }
//!
//! let event = Event {
//!     slice: vec!["123".into(), "á2".into()],
//!     inner: Inner { inner_string: "aa".into() },
//!     count: 4,
//! };
//! let anonymised = anonymise::anonymise(&event)?;
//! assert_eq!(anonymised.slice, ["***", "***"]);
//! assert_eq!(anonymised.inner.inner_string, "****");
//! assert_eq!(anonymised.count, 4);
//! # Ok::<(), anonymise::AnonError>(())
//! ```
//!
//! What this crate does not do:
//! - perform I/O or logging on its own
//! - walk maps or foreign types (mark them `#[anon(opaque)]`)
//!
//! The `Anonymise` derive macro lives in `anonymise-derive` and is re-exported
//! here. The `json` feature adds serde_json helpers and the `slog` feature adds
//! `slog::Value` adapters that log the anonymised form of a value.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use anonymise_derive::Anonymise;

#[allow(unused_extern_crates)]
extern crate self as anonymise;

// Module declarations
mod anonymiser;
mod error;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "slog")]
pub mod slog;
mod walk;

// Re-exports
pub use anonymiser::{
    empty, sha512, sha512_digest, stars, stars_with_len, with_info, Anonymiser, STARS, TAG_EMPTY,
    TAG_SHA512, TAG_STARS, TAG_STARS_WITH_LEN, TAG_WITH_INFO,
};
pub use error::{AnonError, BoxError, CopyError, MarshalError};
#[cfg(feature = "json")]
pub use json::{marshal_json, to_anonymised_json_value};
pub use walk::{
    anonymise, anonymise_by_ref, anonymise_copied, marshal, resolve_tag, Action, Anonymisable,
    Anonymise, TAG_SKIP,
};

//! Derive macro for `anonymise`.
//!
//! This crate generates the traversal code behind `#[derive(Anonymise)]`. It:
//! - reads `#[anon(...)]` field attributes
//! - emits an `Anonymise` implementation that walks each field with its tag
//! - emits a `Debug` implementation that hides tagged fields
//!
//! It does **not** define anonymisers or resolve tags. Those live in the main
//! `anonymise` crate and are applied at runtime.

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

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::{add_debug_bounds, add_walk_bounds};
use strategy::parse_skip_debug;

/// Derives `anonymise::Anonymise` (and `Debug`) for structs and enums.
///
/// # Container Attributes
///
/// - `#[anon(skip_debug)]` - Opt out of `Debug` impl generation. Use this when you need a
///   custom `Debug` implementation or the type already derives `Debug` elsewhere.
///
/// # Field Attributes
///
/// - **No annotation**: the field is walked with the empty tag. Strings are left unchanged;
///   nested records still apply their own field tags.
///
/// - `#[anon("tag")]`: the field is walked with `tag`. Every string reachable through the
///   field's `Option`s, `Box`es and sequences is replaced by the named anonymiser. Records
///   inside the field ignore the tag. `"-"` and `""` leave strings unchanged. Tags are
///   resolved at runtime: an unknown tag makes the walk fail with `AnonError::UnknownTag`
///   when it reaches a string under that tag.
///
/// - `#[anon(opaque)]`: the field is left out of the walk. Use this for foreign types that do
///   not implement `Anonymise`, and for maps.
///
/// Unions are rejected at compile time.
///
/// # Additional Generated Impls
///
/// - `Debug`: fields with a tag other than `""` or `"-"` are formatted as the string
///   `"[ANONYMISED]"` rather than their values. Use `#[anon(skip_debug)]` on the container to
///   opt out.
#[proc_macro_derive(Anonymise, attributes(anon))]
pub fn derive_anonymise(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the anonymise crate root.
///
/// Handles crate renaming (e.g., `anon = { package = "anonymise", ... }`). Inside the
/// `anonymise` crate itself the root is still `::anonymise`, which resolves through its
/// `extern crate self as anonymise`; this keeps doctests and unit tests working alike.
fn crate_root() -> TokenStream {
    match crate_name("anonymise") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::anonymise },
    }
}

struct DeriveOutput {
    walk_body: TokenStream,
    walked_generics: Vec<proc_macro2::Ident>,
    debug_body: TokenStream,
    debug_generics: Vec<proc_macro2::Ident>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let skip_debug = parse_skip_debug(&attrs)?;

    let root = crate_root();

    let output = match data {
        Data::Struct(data) => {
            let output = derive_struct(&ident, data, &generics, &root)?;
            DeriveOutput {
                walk_body: output.walk_body,
                walked_generics: output.walked_generics,
                debug_body: output.debug_body,
                debug_generics: output.debug_generics,
            }
        }
        Data::Enum(data) => {
            let output = derive_enum(data, &generics, &root)?;
            DeriveOutput {
                walk_body: output.walk_body,
                walked_generics: output.walked_generics,
                debug_body: output.debug_body,
                debug_generics: output.debug_generics,
            }
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Anonymise` cannot be derived for unions",
            ));
        }
    };

    let walk_generics = add_walk_bounds(generics.clone(), &output.walked_generics, &root);
    let (impl_generics, ty_generics, where_clause) = walk_generics.split_for_impl();
    let walk_body = &output.walk_body;

    let debug_impl = if skip_debug {
        quote! {}
    } else {
        let debug_generics = add_debug_bounds(generics.clone(), &output.debug_generics);
        let (debug_impl_generics, debug_ty_generics, debug_where_clause) =
            debug_generics.split_for_impl();
        let debug_body = &output.debug_body;
        quote! {
            #[allow(unused_variables)]
            impl #debug_impl_generics ::core::fmt::Debug for #ident #debug_ty_generics #debug_where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #debug_body
                }
            }
        }
    };

    Ok(quote! {
        impl #impl_generics #root::Anonymise for #ident #ty_generics #where_clause {
            fn walk(&mut self, _tag: &str) -> ::core::result::Result<(), #root::AnonError> {
                #walk_body
            }
        }

        #debug_impl
    })
}

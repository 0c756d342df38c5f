//! Shared per-field code generation for struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote_spanned;
use syn::{ext::IdentExt, LitStr};

use crate::{generics::collect_generics_from_type, strategy::Strategy};

/// Placeholder printed by the generated `Debug` for tagged fields.
pub(crate) const MASKED_DEBUG: &str = "[ANONYMISED]";

/// Name printed by the generated `Debug`, without any `r#` prefix.
pub(crate) fn debug_name(ident: &Ident) -> LitStr {
    LitStr::new(&ident.unraw().to_string(), ident.span())
}

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) root: &'a TokenStream,
    pub(crate) walked_generics: &'a mut Vec<Ident>,
    pub(crate) debug_generics: &'a mut Vec<Ident>,
}

/// Generated code for one field.
pub(crate) struct FieldOutput {
    /// The walk statement, or `None` for opaque fields.
    pub(crate) walk: Option<TokenStream>,
    /// The value handed to the `Debug` builder.
    pub(crate) debug_value: TokenStream,
}

/// Generates the walk statement and `Debug` value for a single field.
///
/// ## Field Rules
///
/// | Annotation | Walk | Debug |
/// |------------|------|-------|
/// | None | `walk(field, "")` | value |
/// | `#[anon("-")]` | `walk(field, "-")` | value |
/// | `#[anon("tag")]` | `walk(field, "tag")` | `"[ANONYMISED]"` |
/// | `#[anon(opaque)]` | none | value |
pub(crate) fn generate_field(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    span: Span,
    strategy: &Strategy,
) -> FieldOutput {
    let root = ctx.root;

    let walk = if strategy.is_walked() {
        collect_generics_from_type(ty, ctx.generics, ctx.walked_generics);
        let tag = strategy.tag();
        Some(quote_spanned! { span =>
            #root::Anonymise::walk(#binding, #tag)?;
        })
    } else {
        None
    };

    let debug_value = if strategy.is_masked() {
        quote_spanned! { span => &#MASKED_DEBUG }
    } else {
        collect_generics_from_type(ty, ctx.generics, ctx.debug_generics);
        quote_spanned! { span => #binding }
    };

    FieldOutput { walk, debug_value }
}

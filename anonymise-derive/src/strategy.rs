//! Parsing of `#[anon(...)]` attributes.
//!
//! On fields the attribute carries a tag or `opaque`. On the container it
//! only carries `skip_debug`. Invalid forms produce structured errors.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, LitStr, Meta, Result};

/// Field traversal strategy based on `#[anon(...)]` attributes.
///
/// ## Strategy Mapping
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `Untagged` | Walked with the empty tag |
/// | `#[anon("tag")]` | `Tagged(tag)` | Walked with `tag` |
/// | `#[anon(opaque)]` | `Opaque` | Not walked at all |
///
/// Tag strings are not checked here. An unknown tag is carried verbatim into
/// the generated code and reported when the walk reaches a string under it.
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    /// No annotation: walk with `""`.
    ///
    /// String leaves are left unchanged, but nested records still apply
    /// their own field tags.
    Untagged,
    /// `#[anon("tag")]`: walk with the given tag.
    Tagged(LitStr),
    /// `#[anon(opaque)]`: leave the field out of the walk.
    ///
    /// For foreign types that do not implement `Anonymise`, and for maps.
    Opaque,
}

impl Strategy {
    /// Whether the field takes part in the walk.
    pub(crate) fn is_walked(&self) -> bool {
        !matches!(self, Strategy::Opaque)
    }

    /// Whether the generated `Debug` hides the field's value.
    ///
    /// Every tag other than `""` and `"-"` hides it, including unknown ones.
    pub(crate) fn is_masked(&self) -> bool {
        match self {
            Strategy::Tagged(tag) => {
                let tag = tag.value();
                !tag.is_empty() && tag != "-"
            }
            Strategy::Untagged | Strategy::Opaque => false,
        }
    }

    /// The tag literal passed to `Anonymise::walk`.
    pub(crate) fn tag(&self) -> LitStr {
        match self {
            Strategy::Tagged(tag) => tag.clone(),
            Strategy::Untagged | Strategy::Opaque => LitStr::new("", Span::call_site()),
        }
    }
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[anon] attributes specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("anon") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected a tag (e.g., #[anon(\"stars\")]) or #[anon(opaque)]",
                ));
            }
            Meta::List(list) => {
                if let Ok(tag) = syn::parse2::<LitStr>(list.tokens.clone()) {
                    set_strategy(&mut strategy, Strategy::Tagged(tag), attr.span())?;
                } else if let Ok(ident) = syn::parse2::<syn::Ident>(list.tokens.clone()) {
                    if ident != "opaque" {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!(
                                "unknown field option `{ident}`; expected a string tag or `opaque`"
                            ),
                        ));
                    }
                    set_strategy(&mut strategy, Strategy::Opaque, attr.span())?;
                } else {
                    return Err(syn::Error::new(
                        attr.span(),
                        "expected a tag (e.g., #[anon(\"stars\")]) or #[anon(opaque)]",
                    ));
                }
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[anon]; use #[anon(\"tag\")]",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::Untagged))
}

/// Returns whether the container carries `#[anon(skip_debug)]`.
///
/// `skip_debug` is the only container option and may appear once. Tags are
/// rejected here: a record ignores the tag it is walked with, so a tag on the
/// container would never apply.
pub(crate) fn parse_skip_debug(attrs: &[Attribute]) -> Result<bool> {
    let mut skip_debug = false;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("anon")) {
        let Meta::List(list) = &attr.meta else {
            return Err(syn::Error::new(
                attr.span(),
                "expected #[anon(skip_debug)] on the container",
            ));
        };

        if syn::parse2::<LitStr>(list.tokens.clone()).is_ok() {
            return Err(syn::Error::new(
                attr.span(),
                "tags go on fields, not on the container",
            ));
        }

        match syn::parse2::<syn::Ident>(list.tokens.clone()) {
            Ok(ident) if ident == "skip_debug" => {
                if skip_debug {
                    return Err(syn::Error::new(
                        attr.span(),
                        "`skip_debug` specified more than once",
                    ));
                }
                skip_debug = true;
            }
            Ok(ident) => {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("unknown container option `{ident}`; expected `skip_debug`"),
                ));
            }
            Err(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected #[anon(skip_debug)] on the container",
                ));
            }
        }
    }

    Ok(skip_debug)
}

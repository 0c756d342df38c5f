//! Enum-specific `Anonymise` derivation.
//!
//! The fields of the active variant are walked the same way as struct fields.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{spanned::Spanned, DataEnum, Fields, Result};

use crate::{
    strategy::parse_field_strategy,
    transform::{debug_name, generate_field, DeriveContext},
};

pub(crate) struct EnumDeriveOutput {
    pub(crate) walk_body: TokenStream,
    pub(crate) walked_generics: Vec<Ident>,
    pub(crate) debug_body: TokenStream,
    pub(crate) debug_generics: Vec<Ident>,
}

/// Match arms accumulated across variants.
#[derive(Default)]
struct Arms {
    walk: Vec<TokenStream>,
    debug: Vec<TokenStream>,
}

pub(crate) fn derive_enum(
    data: DataEnum,
    generics: &syn::Generics,
    root: &TokenStream,
) -> Result<EnumDeriveOutput> {
    let mut walked_generics = Vec::new();
    let mut debug_generics = Vec::new();
    let mut arms = Arms::default();

    if data.variants.is_empty() {
        return Ok(EnumDeriveOutput {
            walk_body: quote! { match *self {} },
            walked_generics,
            debug_body: quote! { match *self {} },
            debug_generics,
        });
    }

    for variant in data.variants {
        let variant_ident = &variant.ident;
        let mut ctx = DeriveContext {
            generics,
            root,
            walked_generics: &mut walked_generics,
            debug_generics: &mut debug_generics,
        };

        match variant.fields {
            Fields::Unit => {
                let variant_name = debug_name(variant_ident);
                arms.walk.push(quote! { Self::#variant_ident => {} });
                arms.debug.push(quote! {
                    Self::#variant_ident => f.write_str(#variant_name)
                });
            }
            Fields::Named(fields) => {
                derive_named_variant(&mut arms, &mut ctx, variant_ident, fields)?;
            }
            Fields::Unnamed(fields) => {
                derive_unnamed_variant(&mut arms, &mut ctx, variant_ident, fields)?;
            }
        }
    }

    let walk_arms = &arms.walk;
    let debug_arms = &arms.debug;

    Ok(EnumDeriveOutput {
        walk_body: quote! {
            match self {
                #(#walk_arms,)*
            }
            ::core::result::Result::Ok(())
        },
        walked_generics,
        debug_body: quote! {
            match self {
                #(#debug_arms,)*
            }
        },
        debug_generics,
    })
}

fn derive_named_variant(
    arms: &mut Arms,
    ctx: &mut DeriveContext<'_>,
    variant_ident: &Ident,
    fields: syn::FieldsNamed,
) -> Result<()> {
    let mut bindings = Vec::new();
    let mut walked_bindings = Vec::new();
    let mut walks = Vec::new();
    let mut debug_fields = Vec::new();

    for field in fields.named {
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        // Bind to a prefixed local so fields named `f` or `debug` cannot
        // shadow the formatter.
        let binding = format_ident!("__anon_{}", ident);
        let output = generate_field(ctx, &field.ty, &binding, span, &strategy);

        if let Some(walk) = output.walk {
            walked_bindings.push(quote! { #ident: #binding });
            walks.push(walk);
        }
        let debug_value = output.debug_value;
        let field_name = debug_name(&ident);
        debug_fields.push(quote_spanned! { span =>
            debug.field(#field_name, #debug_value);
        });
        bindings.push(quote! { #ident: #binding });
    }

    let variant_name = debug_name(variant_ident);
    arms.walk.push(quote! {
        Self::#variant_ident { #(#walked_bindings,)* .. } => {
            #(#walks)*
        }
    });
    arms.debug.push(quote! {
        Self::#variant_ident { #(#bindings),* } => {
            let mut debug = f.debug_struct(#variant_name);
            #(#debug_fields)*
            debug.finish()
        }
    });
    Ok(())
}

fn derive_unnamed_variant(
    arms: &mut Arms,
    ctx: &mut DeriveContext<'_>,
    variant_ident: &Ident,
    fields: syn::FieldsUnnamed,
) -> Result<()> {
    let mut bindings = Vec::new();
    let mut walk_patterns = Vec::new();
    let mut walks = Vec::new();
    let mut debug_fields = Vec::new();

    for (index, field) in fields.unnamed.into_iter().enumerate() {
        let span = field.span();
        let binding = format_ident!("__anon_field_{index}");
        let strategy = parse_field_strategy(&field.attrs)?;
        let output = generate_field(ctx, &field.ty, &binding, span, &strategy);

        if let Some(walk) = output.walk {
            walk_patterns.push(quote! { #binding });
            walks.push(walk);
        } else {
            walk_patterns.push(quote! { _ });
        }
        let debug_value = output.debug_value;
        debug_fields.push(quote_spanned! { span =>
            debug.field(#debug_value);
        });
        bindings.push(binding);
    }

    let variant_name = debug_name(variant_ident);
    arms.walk.push(quote! {
        Self::#variant_ident ( #(#walk_patterns),* ) => {
            #(#walks)*
        }
    });
    arms.debug.push(quote! {
        Self::#variant_ident ( #(#bindings),* ) => {
            let mut debug = f.debug_tuple(#variant_name);
            #(#debug_fields)*
            debug.finish()
        }
    });
    Ok(())
}

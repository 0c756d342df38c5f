//! Struct-specific `Anonymise` derivation.
//!
//! A struct is a record: each field is walked with its own tag and the tag
//! handed to the struct itself is ignored.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    strategy::parse_field_strategy,
    transform::{debug_name, generate_field, DeriveContext},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) walk_body: TokenStream,
    pub(crate) walked_generics: Vec<Ident>,
    pub(crate) debug_body: TokenStream,
    pub(crate) debug_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(
    name: &Ident,
    data: DataStruct,
    generics: &syn::Generics,
    root: &TokenStream,
) -> Result<StructDeriveOutput> {
    let mut walked_generics = Vec::new();
    let mut debug_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        root,
        walked_generics: &mut walked_generics,
        debug_generics: &mut debug_generics,
    };

    let type_name = debug_name(name);
    let (walk_body, debug_body) = match data.fields {
        Fields::Named(fields) => derive_named_struct(name, fields, &mut ctx)?,
        Fields::Unnamed(fields) => derive_unnamed_struct(name, fields, &mut ctx)?,
        Fields::Unit => (
            quote! { ::core::result::Result::Ok(()) },
            quote! { f.write_str(#type_name) },
        ),
    };

    Ok(StructDeriveOutput {
        walk_body,
        walked_generics,
        debug_body,
        debug_generics,
    })
}

fn derive_named_struct(
    name: &Ident,
    fields: syn::FieldsNamed,
    ctx: &mut DeriveContext<'_>,
) -> Result<(TokenStream, TokenStream)> {
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

    let type_name = debug_name(name);
    let walk_body = quote! {
        let Self { #(#walked_bindings,)* .. } = self;
        #(#walks)*
        ::core::result::Result::Ok(())
    };
    let debug_body = quote! {
        match self {
            Self { #(#bindings),* } => {
                let mut debug = f.debug_struct(#type_name);
                #(#debug_fields)*
                debug.finish()
            }
        }
    };
    Ok((walk_body, debug_body))
}

fn derive_unnamed_struct(
    name: &Ident,
    fields: syn::FieldsUnnamed,
    ctx: &mut DeriveContext<'_>,
) -> Result<(TokenStream, TokenStream)> {
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

    let type_name = debug_name(name);
    let walk_body = quote! {
        let Self ( #(#walk_patterns),* ) = self;
        #(#walks)*
        ::core::result::Result::Ok(())
    };
    let debug_body = quote! {
        match self {
            Self ( #(#bindings),* ) => {
                let mut debug = f.debug_tuple(#type_name);
                #(#debug_fields)*
                debug.finish()
            }
        }
    };
    Ok((walk_body, debug_body))
}

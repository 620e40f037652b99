/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */
use proc_macro2::{Span, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use proc_macro_error::abort;
use quote::quote;
use syn::spanned::Spanned;

use crate::comm::{FieldExtra, FieldInformation};

/// Path to the `sqlprint_core` items, as seen from the deriving crate.
pub fn core_path() -> TokenStream {
    match crate_name("sqlprint") {
        Ok(FoundCrate::Name(name)) => {
            let ident = syn::Ident::new(&name, Span::call_site());
            quote!(::#ident::core)
        }
        // `sqlprint` declares `extern crate self as sqlprint`.
        Ok(FoundCrate::Itself) => quote!(::sqlprint::core),
        Err(_) => match crate_name("sqlprint_core") {
            Ok(FoundCrate::Name(name)) => {
                let ident = syn::Ident::new(&name, Span::call_site());
                quote!(::#ident)
            }
            Ok(FoundCrate::Itself) => quote!(crate),
            Err(_) => quote!(::sqlprint::core),
        },
    }
}

pub fn collect_fields(ast: &syn::DeriveInput) -> Vec<syn::Field> {
    match ast.data {
        syn::Data::Struct(syn::DataStruct { ref fields, .. }) => {
            if fields.iter().any(|field| field.ident.is_none()) {
                abort!(
                    fields.span(),
                    "struct has unnamed fields";
                    help = "#[derive(ToValue)] can only be used on structs with named fields";
                );
            }
            fields.iter().cloned().collect::<Vec<_>>()
        }
        _ => abort!(ast.span(), "#[derive(ToValue)] can only be used with structs"),
    }
}

pub fn lit_to_string(lit: &syn::Lit) -> Option<String> {
    match *lit {
        syn::Lit::Str(ref s) => Some(s.value()),
        _ => None,
    }
}

pub fn lit_to_bool(lit: &syn::Lit) -> Option<bool> {
    match *lit {
        syn::Lit::Bool(ref b) => Some(b.value),
        // `exist = "false"` is accepted as well
        syn::Lit::Str(ref s) => s.value().parse::<bool>().ok(),
        _ => None,
    }
}

/// Find everything we need to know about a field
pub fn find_extra_for_field(field: &syn::Field) -> FieldInformation {
    let ident = match field.ident {
        Some(ref ident) => ident.clone(),
        None => abort!(field.span(), "#[derive(ToValue)] requires named fields"),
    };

    let error = |span: Span, msg: &str| -> ! {
        abort!(span, "Invalid attribute #[field] on field `{}`: {}", ident, msg);
    };

    let mut extras = vec![];
    for attr in &field.attrs {
        if !attr.path.is_ident("field") {
            continue;
        }
        match attr.parse_meta() {
            Ok(syn::Meta::List(syn::MetaList { ref nested, .. })) => {
                for meta_item in nested {
                    match *meta_item {
                        syn::NestedMeta::Meta(syn::Meta::NameValue(syn::MetaNameValue {
                            ref path,
                            ref lit,
                            ..
                        })) => {
                            let key = path.get_ident().map(ToString::to_string).unwrap_or_default();
                            match key.as_ref() {
                                "name" => match lit_to_string(lit) {
                                    Some(s) if !s.is_empty() => extras.push(FieldExtra::Name(s)),
                                    _ => error(lit.span(), "invalid argument for `name` annotion: only non-empty strings are allowed"),
                                },
                                "exist" => match lit_to_bool(lit) {
                                    Some(b) => extras.push(FieldExtra::Exist(b)),
                                    None => error(lit.span(), "invalid argument for `exist` annotion: only boolean are allowed"),
                                },
                                v => abort!(path.span(), "unexpected name value annotion: {:?}", v),
                            }
                        }
                        _ => error(meta_item.span(), "expected `name = \"...\"` or `exist = false`"),
                    }
                }
            }
            Ok(syn::Meta::NameValue(syn::MetaNameValue { ref lit, .. })) => match lit_to_string(lit) {
                // #[field = "name"]
                Some(s) if !s.is_empty() => extras.push(FieldExtra::Name(s)),
                _ => error(lit.span(), "invalid argument for `field` annotion: only non-empty strings are allowed"),
            },
            Ok(syn::Meta::Path(_)) => {}
            Err(e) => abort!(
                attr.span(),
                "Unable to parse this attribute for the field `{}` with the error: {:?}",
                ident, e
            ),
        }
    }

    FieldInformation::new(ident, extras)
}

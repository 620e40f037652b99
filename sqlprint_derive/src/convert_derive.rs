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
use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::util::{collect_fields, core_path, find_extra_for_field};

pub fn impl_to_value(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as DeriveInput);
    let name = &derive_input.ident;
    let (impl_generics, ty_generics, where_clause) = derive_input.generics.split_for_impl();
    let core = core_path();

    let inserts: Vec<proc_macro2::TokenStream> = collect_fields(&derive_input)
        .iter()
        .map(find_extra_for_field)
        .filter(|info| info.exist)
        .map(|info| {
            let ident = &info.ident;
            let key = &info.name;
            quote!(data.insert(#key.to_string(), #core::IntoSqlValue::into_value(&self.#ident));)
        })
        .collect();

    quote!(
        impl #impl_generics #core::IntoSqlValue for #name #ty_generics #where_clause {
            fn into_value(&self) -> #core::SqlValue {
                #[allow(unused_mut)]
                let mut data = #core::indexmap::IndexMap::new();
                #(#inserts)*
                #core::SqlValue::Object(data)
            }
        }
    ).into()
}

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

/// Field annotations understood by `#[derive(ToValue)]`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldExtra {
    /// Property name used instead of the rust identifier
    Name(String),
    /// `false` leaves the field out of the generated object
    Exist(bool),
}

#[derive(Debug)]
pub struct FieldInformation {
    pub ident: syn::Ident,
    pub name: String,
    pub exist: bool,
}

impl FieldInformation {
    pub fn new(ident: syn::Ident, extras: Vec<FieldExtra>) -> Self {
        let mut name = ident.to_string().trim_start_matches("r#").to_string();
        let mut exist = true;
        for extra in extras {
            match extra {
                FieldExtra::Name(n) => name = n,
                FieldExtra::Exist(e) => exist = e,
            }
        }
        FieldInformation { ident, name, exist }
    }
}

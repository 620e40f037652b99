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

//!
//! Generate parameter object conversions.
//!
use proc_macro::TokenStream;
use proc_macro_error::proc_macro_error;

mod comm;
mod convert_derive;
mod util;

/// Turn a struct into a `SqlValue::Object` so that its fields can be read
/// by property path when it is used as a statement parameter.
///
/// ```ignore
/// #[derive(ToValue)]
/// struct User {
///     id: i64,
///     #[field(name = "user_name")]
///     name: String,
///     #[field(exist = false)]
///     password: String,
///     address: Address,
/// }
/// ```
#[proc_macro_derive(ToValue, attributes(field))]
#[proc_macro_error]
pub fn to_value(input: TokenStream) -> TokenStream {
    convert_derive::impl_to_value(input)
}

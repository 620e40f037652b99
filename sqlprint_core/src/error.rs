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
//! Common Errors.
//!

/// Errors raised while reading parameter values or parsing settings.
///
/// None of these ever escape the formatter: a failed property read is
/// printed as `null` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SqlPrintError {
    #[error("There is no property named '{property}' in '{path}'")]
    NoSuchProperty {
        property: String,
        path: String,
    },
    #[error("Cannot read property '{property}' from a {found} value")]
    NotAnObject {
        property: String,
        found: &'static str,
    },
    #[error("IndexOutOfBoundsException: Index: {index}, Size: {size}")]
    IndexOutOfBounds {
        index: usize,
        size: usize,
    },
    #[error("Invalid property path: `{0}`")]
    InvalidPropertyPath(String),
    #[error("Invalid log level: `{0}`")]
    InvalidLogLevel(String),
}

impl SqlPrintError {
    pub fn no_such_property<P: Into<String>, T: Into<String>>(property: P, path: T) -> Self {
        Self::NoSuchProperty {
            property: property.into(),
            path: path.into(),
        }
    }

    pub fn not_an_object<P: Into<String>>(property: P, found: &'static str) -> Self {
        Self::NotAnObject {
            property: property.into(),
            found,
        }
    }

    pub fn invalid_path<P: Into<String>>(path: P) -> Self {
        Self::InvalidPropertyPath(path.into())
    }
}

pub type SqlPrintResult<T> = std::result::Result<T, SqlPrintError>;

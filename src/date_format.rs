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
use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;

/// `yyyy-MM-dd HH:mm:ss.SSS`
pub const DATE_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.3f";

thread_local! {
    // Parsed once per thread on first use, never shared across threads.
    static DATE_FORMAT: Vec<Item<'static>> = StrftimeItems::new(DATE_PATTERN).collect();
}

/// Formats a wall-clock time with millisecond precision using the calling
/// thread's formatter.
pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    DATE_FORMAT.with(|items| {
        let mut out = String::with_capacity(23);
        if write!(out, "{}", datetime.format_with_items(items.iter())).is_err() {
            out.clear();
        }
        out
    })
}

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

use serde::Deserialize;

use crate::formatter::{SqlParameterFormatter, GENERATED_PARAMETER_TOKEN};
use crate::interceptor::{LogLevel, SqlPrintInterceptor, TracingSink};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SqlPrintConfig {
    print: bool,
    log_level: LogLevel,
    slow_query_threshold_ms: u64,
    comment_parameters: bool,
    generated_parameter_token: String,
}

impl Default for SqlPrintConfig {
    fn default() -> Self {
        SqlPrintConfig {
            print: true,
            log_level: LogLevel::Info,
            slow_query_threshold_ms: 1000,
            comment_parameters: true,
            generated_parameter_token: GENERATED_PARAMETER_TOKEN.to_string(),
        }
    }
}

impl SqlPrintConfig {

    pub fn new() -> Self {
        SqlPrintConfig::default()
    }

    pub fn set_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    pub fn print(&self) -> bool {
        self.print
    }

    pub fn set_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_slow_query_threshold_ms(mut self, threshold_ms: u64) -> Self {
        self.slow_query_threshold_ms = threshold_ms;
        self
    }

    pub fn slow_query_threshold_ms(&self) -> u64 {
        self.slow_query_threshold_ms
    }

    pub fn set_comment_parameters(mut self, comment_parameters: bool) -> Self {
        self.comment_parameters = comment_parameters;
        self
    }

    pub fn comment_parameters(&self) -> bool {
        self.comment_parameters
    }

    pub fn set_generated_parameter_token<S: Into<String>>(mut self, token: S) -> Self {
        self.generated_parameter_token = token.into();
        self
    }

    pub fn generated_parameter_token(&self) -> &str {
        &self.generated_parameter_token
    }

    pub fn formatter(&self) -> SqlParameterFormatter {
        SqlParameterFormatter::new()
            .with_comment_parameters(self.comment_parameters)
            .with_generated_parameter_token(self.generated_parameter_token.as_str())
    }

    /// The interceptor to install, or `None` when printing is switched off.
    pub fn interceptor(&self) -> Option<SqlPrintInterceptor> {
        if !self.print {
            return None;
        }
        let sink = TracingSink::new()
            .with_log_level(self.log_level)
            .with_slow_query_threshold(self.slow_query_threshold_ms);
        Some(SqlPrintInterceptor::new().with_formatter(self.formatter()).with_sink(sink))
    }
}

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
use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::interceptor::LogLevel;

/// What gets printed for one execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlPrintRecord {
    pub statement_id: String,
    pub sql: String,
    pub elapsed_ms: u64,
}

impl fmt::Display for SqlPrintRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[SQL] {}  elapsed={}ms", self.sql, self.elapsed_ms)
    }
}

/// Receives the formatted SQL of every intercepted execution.
pub trait SqlSink: Send + Sync {
    fn record(&self, record: &SqlPrintRecord);
}

impl<F> SqlSink for F
where
    F: Fn(&SqlPrintRecord) + Send + Sync,
{
    fn record(&self, record: &SqlPrintRecord) {
        self(record)
    }
}

/// Emits records through `tracing`.
#[derive(Debug, Clone)]
pub struct TracingSink {
    pub log_level: LogLevel,
    pub slow_query_threshold_ms: u64,
}

impl TracingSink {
    pub fn new() -> Self {
        Self {
            log_level: LogLevel::Info,
            slow_query_threshold_ms: 1000,
        }
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_slow_query_threshold(mut self, threshold_ms: u64) -> Self {
        self.slow_query_threshold_ms = threshold_ms;
        self
    }

    pub fn is_slow(&self, record: &SqlPrintRecord) -> bool {
        record.elapsed_ms > self.slow_query_threshold_ms
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlSink for TracingSink {
    fn record(&self, record: &SqlPrintRecord) {
        if self.log_level.should_log(LogLevel::Debug) {
            debug!("[SQL] MapperId={}", record.statement_id);
        }

        if self.is_slow(record) && self.log_level.should_log(LogLevel::Warn) {
            warn!(
                "[SQL] Slow Query! Cost: {} ms, Threshold: {} ms, MapperId={}",
                record.elapsed_ms, self.slow_query_threshold_ms, record.statement_id
            );
        }

        if self.log_level.should_log(LogLevel::Info) {
            info!("{}", record);
        }
    }
}

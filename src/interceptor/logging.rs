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
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use crate::configuration::MappedStatement;
use crate::formatter::SqlParameterFormatter;
use crate::interceptor::sink::{SqlPrintRecord, SqlSink, TracingSink};

/// Times a statement execution and prints its SQL with the parameters
/// inlined once it has finished.
pub struct SqlPrintInterceptor {
    formatter: SqlParameterFormatter,
    sink: Arc<dyn SqlSink>,
}

impl SqlPrintInterceptor {
    pub fn new() -> Self {
        Self {
            formatter: SqlParameterFormatter::new(),
            sink: Arc::new(TracingSink::new()),
        }
    }

    pub fn with_formatter(mut self, formatter: SqlParameterFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_sink<S: SqlSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    pub fn with_shared_sink(mut self, sink: Arc<dyn SqlSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn formatter(&self) -> &SqlParameterFormatter {
        &self.formatter
    }

    /// Runs `proceed` and prints the statement afterwards, also when
    /// `proceed` unwinds. The result is handed back untouched.
    pub fn intercept<R, F>(&self, statement: &MappedStatement, proceed: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = PrintGuard::start(self, statement);
        proceed()
    }

    /// Same as [`intercept`](Self::intercept) for a non-blocking execution.
    /// A future dropped before completion is printed as well.
    pub async fn intercept_async<R, Fut>(&self, statement: &MappedStatement, proceed: Fut) -> R
    where
        Fut: Future<Output = R>,
    {
        let _guard = PrintGuard::start(self, statement);
        proceed.await
    }

    /// Format the statement and hand it to the sink.
    ///
    /// A panicking collaborator yields an empty SQL text instead of
    /// escaping into the intercepted execution.
    pub fn print(&self, statement: &MappedStatement, elapsed_ms: u64) {
        let sql = panic::catch_unwind(AssertUnwindSafe(|| {
            self.formatter.format(statement.bound_sql(), statement)
        }))
        .unwrap_or_else(|_| {
            tracing::debug!("failed to format sql of {}", statement.id());
            String::new()
        });
        let record = SqlPrintRecord {
            statement_id: statement.id().to_string(),
            sql,
            elapsed_ms,
        };
        self.sink.record(&record);
    }
}

impl Default for SqlPrintInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SqlPrintInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlPrintInterceptor")
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

struct PrintGuard<'a> {
    interceptor: &'a SqlPrintInterceptor,
    statement: &'a MappedStatement,
    start: Instant,
}

impl<'a> PrintGuard<'a> {
    fn start(interceptor: &'a SqlPrintInterceptor, statement: &'a MappedStatement) -> Self {
        Self {
            interceptor,
            statement,
            start: Instant::now(),
        }
    }
}

impl Drop for PrintGuard<'_> {
    fn drop(&mut self) {
        let elapsed_ms = u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.interceptor.print(self.statement, elapsed_ms);
    }
}

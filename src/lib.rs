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
//! Put the desired version of the crate into the `dependencies` section of your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sqlprint = "0.1.0"
//! ```
//!
//! Prints the executed SQL of a mini ORM with the bound parameters inlined,
//! on one line, together with the execution time.
//!
//! ## Annotions.
//! * ToValue - make a struct readable as a parameter object by property path.
//! * name - work with field, rename the property. default struct' field name.
//! * exist - leave the field out of the parameter object. default true.
//!
//! ## Example
//!
//! ```rust
//! use sqlprint::*;
//!
//! #[derive(ToValue)]
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//!     #[field(exist = "false")]
//!     pub password: String,
//! }
//!
//! let user = User { id: 1, name: "Jack".to_string(), password: "***".to_string() };
//! let bound = BoundSql::new("select *\n  from t_user\n where id = ? and name = ?")
//!     .with_parameter_mappings(["id", "name"])
//!     .with_parameter_object(user);
//! let statement = MappedStatement::new("UserMapper.selectOne", bound);
//!
//! let sql = SqlParameterFormatter::new().format(statement.bound_sql(), &statement);
//! assert_eq!(sql, "select * from t_user where id = /*id*/1 and name = /*name*/'Jack'");
//!
//! // Install around the real execution.
//! if let Some(interceptor) = SqlPrintConfig::new().set_log_level(LogLevel::Debug).interceptor() {
//!     let rows: usize = interceptor.intercept(&statement, || 1);
//!     assert_eq!(rows, 1);
//! }
//! ```
//!
extern crate self as sqlprint;

mod config;
mod configuration;
mod date_format;
mod formatter;
mod interceptor;

#[doc(inline)]
pub use config::SqlPrintConfig;
#[doc(inline)]
pub use configuration::{CollaboratorResolver, Configuration, MappedStatement};
#[doc(inline)]
pub use date_format::{format_datetime, DATE_PATTERN};
#[doc(inline)]
pub use formatter::{beautify_sql, render_value, SqlParameterFormatter, GENERATED_PARAMETER_TOKEN};
#[doc(inline)]
pub use interceptor::{LogLevel, SqlPrintInterceptor, SqlPrintRecord, SqlSink, TracingSink};

#[doc(hidden)]
pub use sqlprint_derive::*;
pub use sqlprint_core as core;
#[doc(inline)]
pub use sqlprint_core::*;
#[doc(inline)]
pub use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

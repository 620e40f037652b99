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

use bigdecimal::BigDecimal;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

mod to_value;

pub use to_value::*;

/// A dynamically typed parameter value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SqlValue {
    // ========== Scalar types ==========
    #[default]
    Null,
    Bool(bool),
    Tinyint(i8),
    Smallint(i16),
    Int(i32),
    Bigint(i64),
    Float(f32),
    Double(f64),
    BigDecimal(BigDecimal),
    Char(char),
    Text(String),
    Json(JsonValue),
    Uuid(Uuid),
    Blob(Vec<u8>),

    // ========== Temporal types ==========
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<Utc>),

    // ========== Container types ==========
    List(Vec<SqlValue>),
    Object(IndexMap<String, SqlValue>),
}

impl<T> From<T> for SqlValue
where
    T: IntoSqlValue,
{
    fn from(v: T) -> SqlValue {
        v.into_value()
    }
}

impl SqlValue {

    // ========== Type check method ==========

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, SqlValue::Text(_) | SqlValue::Char(_))
    }

    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            SqlValue::Date(_) | SqlValue::Time(_) | SqlValue::DateTime(_) | SqlValue::Timestamp(_)
        )
    }

    pub fn is_number(&self) -> bool {
        matches!(
            *self,
            SqlValue::Tinyint(_)
            | SqlValue::Smallint(_)
            | SqlValue::Int(_)
            | SqlValue::Bigint(_)
            | SqlValue::Float(_)
            | SqlValue::Double(_)
            | SqlValue::BigDecimal(_)
        )
    }

    /// Lists, objects and json containers carry named or indexed members.
    pub fn is_structured(&self) -> bool {
        match self {
            SqlValue::List(_) | SqlValue::Object(_) => true,
            SqlValue::Json(json) => json.is_object() || json.is_array(),
            _ => false,
        }
    }

    /// Short type name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bool",
            SqlValue::Tinyint(_) => "tinyint",
            SqlValue::Smallint(_) => "smallint",
            SqlValue::Int(_) => "int",
            SqlValue::Bigint(_) => "bigint",
            SqlValue::Float(_) => "float",
            SqlValue::Double(_) => "double",
            SqlValue::BigDecimal(_) => "decimal",
            SqlValue::Char(_) => "char",
            SqlValue::Text(_) => "text",
            SqlValue::Json(_) => "json",
            SqlValue::Uuid(_) => "uuid",
            SqlValue::Blob(_) => "blob",
            SqlValue::Date(_) => "date",
            SqlValue::Time(_) => "time",
            SqlValue::DateTime(_) => "datetime",
            SqlValue::Timestamp(_) => "timestamp",
            SqlValue::List(_) => "list",
            SqlValue::Object(_) => "object",
        }
    }

    // ========== Type conversion method ==========

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, SqlValue>> {
        match self {
            SqlValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<SqlValue>> {
        match self {
            SqlValue::List(list) => Some(list),
            _ => None,
        }
    }

    /// The wall-clock date and time of a temporal value.
    ///
    /// Dates are taken at midnight, bare times on 1970-01-01, and UTC
    /// timestamps are shifted into the local time zone. Returns `None` for
    /// non-temporal values.
    pub fn to_local_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            SqlValue::Date(date) => date.and_hms_opt(0, 0, 0),
            SqlValue::Time(time) => NaiveDate::from_ymd_opt(1970, 1, 1).map(|epoch| epoch.and_time(*time)),
            SqlValue::DateTime(datetime) => Some(*datetime),
            SqlValue::Timestamp(ts) => Some(ts.with_timezone(&Local).naive_local()),
            _ => None,
        }
    }

    /// Converts a json document into the equivalent value tree.
    pub fn from_json(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => SqlValue::Null,
            JsonValue::Bool(b) => SqlValue::Bool(*b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SqlValue::Bigint(i)
                } else if let Some(f) = n.as_f64() {
                    SqlValue::Double(f)
                } else {
                    SqlValue::Text(n.to_string())
                }
            }
            JsonValue::String(s) => SqlValue::Text(s.clone()),
            JsonValue::Array(items) => SqlValue::List(items.iter().map(SqlValue::from_json).collect()),
            JsonValue::Object(map) => SqlValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), SqlValue::from_json(v)))
                    .collect(),
            ),
        }
    }

    // ========== Object manipulation method ==========

    pub fn new_object() -> Self {
        SqlValue::Object(IndexMap::new())
    }

    pub fn insert_obj<K, V>(&mut self, k: K, v: V)
    where
        K: ToString,
        V: IntoSqlValue,
    {
        if let SqlValue::Object(data) = self {
            data.insert(k.to_string().replace("r#", ""), v.into_value());
        }
    }

    pub fn get_obj_value(&self, s: &str) -> Option<&SqlValue> {
        match self {
            SqlValue::Object(data) => data.get(s),
            _ => None,
        }
    }
}

/// Writes the plain textual form of a value: strings unquoted, lists as
/// `[a, b]` and objects as `{k=v, ...}`.
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "null"),
            SqlValue::Bool(v) => write!(f, "{}", v),
            SqlValue::Tinyint(v) => write!(f, "{}", v),
            SqlValue::Smallint(v) => write!(f, "{}", v),
            SqlValue::Int(v) => write!(f, "{}", v),
            SqlValue::Bigint(v) => write!(f, "{}", v),
            SqlValue::Float(v) => write!(f, "{}", v),
            SqlValue::Double(v) => write!(f, "{}", v),
            SqlValue::BigDecimal(v) => write!(f, "{}", v),
            SqlValue::Char(v) => write!(f, "{}", v),
            SqlValue::Text(v) => write!(f, "{}", v),
            SqlValue::Json(v) => write!(f, "{}", v),
            SqlValue::Uuid(v) => write!(f, "{}", v),
            SqlValue::Blob(v) => write!(f, "BLOB({} bytes)", v.len()),
            SqlValue::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            SqlValue::Time(v) => write!(f, "{}", v.format("%H:%M:%S%.3f")),
            SqlValue::DateTime(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S%.3f")),
            SqlValue::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
            SqlValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            SqlValue::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

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
use crate::SqlValue;
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Conversion of a rust value into a [`SqlValue`].
///
/// Structs get an implementation from `#[derive(ToValue)]`, which turns
/// every field into an entry of a [`SqlValue::Object`].
pub trait IntoSqlValue {
    fn into_value(&self) -> SqlValue;
}

// Implement conversion for base types
macro_rules! impl_into_sql_value {
    ($($ty:ty => $variant:ident),*) => {
        $(
            impl IntoSqlValue for $ty {
                fn into_value(&self) -> SqlValue {
                    SqlValue::$variant(self.to_owned())
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_to_value {
    ($ty:ty, $variant:ident, $target_variant:ident) => {
        impl IntoSqlValue for $ty {
            fn into_value(&self) -> SqlValue {
                SqlValue::$variant(*self as $target_variant)
            }
        }
    };
}

impl_unsigned_to_value!(u8, Smallint, i16);
impl_unsigned_to_value!(u16, Int, i32);
impl_unsigned_to_value!(u32, Bigint, i64);
impl_unsigned_to_value!(isize, Bigint, i64);

impl_into_sql_value! {
    i8 => Tinyint,
    bool => Bool,
    i16 => Smallint,
    i32 => Int,
    i64 => Bigint,
    String => Text,
    f32 => Float,
    f64 => Double,
    BigDecimal => BigDecimal,
    char => Char,
    JsonValue => Json,
    Uuid => Uuid,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => DateTime,
    DateTime<Utc> => Timestamp
}

// Values that do not fit an i64 keep their exact digits.
macro_rules! impl_wide_to_value {
    ($($ty:ty),*) => {
        $(
            impl IntoSqlValue for $ty {
                fn into_value(&self) -> SqlValue {
                    match i64::try_from(*self) {
                        Ok(v) => SqlValue::Bigint(v),
                        Err(_) => self
                            .to_string()
                            .parse::<BigDecimal>()
                            .map(SqlValue::BigDecimal)
                            .unwrap_or_else(|_| SqlValue::Text(self.to_string())),
                    }
                }
            }
        )*
    };
}

impl_wide_to_value!(u64, usize, i128, u128);

impl IntoSqlValue for &str {
    fn into_value(&self) -> SqlValue {
        SqlValue::Text(self.to_string())
    }
}

impl IntoSqlValue for () {
    fn into_value(&self) -> SqlValue {
        SqlValue::Null
    }
}

// Option Type support
impl<T: IntoSqlValue> IntoSqlValue for Option<T> {
    fn into_value(&self) -> SqlValue {
        match self {
            Some(val) => val.into_value(),
            None => SqlValue::Null,
        }
    }
}

impl<T: IntoSqlValue> IntoSqlValue for Vec<T> {
    fn into_value(&self) -> SqlValue {
        SqlValue::List(self.iter().map(IntoSqlValue::into_value).collect())
    }
}

impl<T: IntoSqlValue> IntoSqlValue for Box<T> {
    fn into_value(&self) -> SqlValue {
        self.as_ref().into_value()
    }
}

impl<K, V> IntoSqlValue for IndexMap<K, V>
where
    K: ToString,
    V: IntoSqlValue,
{
    fn into_value(&self) -> SqlValue {
        SqlValue::Object(self.iter().map(|(k, v)| (k.to_string(), v.into_value())).collect())
    }
}

impl<K, V> IntoSqlValue for HashMap<K, V>
where
    K: ToString,
    V: IntoSqlValue,
{
    fn into_value(&self) -> SqlValue {
        SqlValue::Object(self.iter().map(|(k, v)| (k.to_string(), v.into_value())).collect())
    }
}

impl<K, V> IntoSqlValue for BTreeMap<K, V>
where
    K: ToString,
    V: IntoSqlValue,
{
    fn into_value(&self) -> SqlValue {
        SqlValue::Object(self.iter().map(|(k, v)| (k.to_string(), v.into_value())).collect())
    }
}

impl<T: IntoSqlValue> IntoSqlValue for &T {
    fn into_value(&self) -> SqlValue {
        (*self).into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversion() {
        assert_eq!(5_i32.into_value(), SqlValue::Int(5));
        assert_eq!(255_u8.into_value(), SqlValue::Smallint(255));
        assert_eq!("x".into_value(), SqlValue::Text("x".to_string()));
        assert_eq!(Option::<i32>::None.into_value(), SqlValue::Null);
        assert_eq!(Some(true).into_value(), SqlValue::Bool(true));
        assert_eq!(u64::MAX.into_value(), SqlValue::BigDecimal("18446744073709551615".parse().unwrap()));
        assert_eq!(42_u64.into_value(), SqlValue::Bigint(42));
    }

    #[test]
    fn test_container_conversion() {
        assert_eq!(
            vec![1_i64, 2].into_value(),
            SqlValue::List(vec![SqlValue::Bigint(1), SqlValue::Bigint(2)])
        );

        let mut map = IndexMap::new();
        map.insert("b", 2_i32);
        map.insert("a", 1_i32);
        let value = map.into_value();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}

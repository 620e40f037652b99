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

//! Capabilities the formatter needs from the host to turn a parameter
//! object into the value bound to one placeholder.

use std::borrow::Cow;
use crate::{SqlPrintError, SqlPrintResult, SqlValue};

/// Answers whether a value is bound as a whole (it has a direct value
/// handler) or must be taken apart property by property.
pub trait TypeClassifier: Send + Sync {
    fn has_type_handler(&self, value: &SqlValue) -> bool;
}

impl<F> TypeClassifier for F
where
    F: Fn(&SqlValue) -> bool + Send + Sync,
{
    fn has_type_handler(&self, value: &SqlValue) -> bool {
        self(value)
    }
}

/// Reads a named, possibly nested, property off a structured value.
pub trait PropertyReader: Send + Sync {
    fn read(&self, value: &SqlValue, property: &str) -> SqlPrintResult<SqlValue>;
}

/// Everything except lists, objects and json containers is bound directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTypeClassifier;

impl TypeClassifier for DefaultTypeClassifier {
    fn has_type_handler(&self, value: &SqlValue) -> bool {
        !value.is_structured()
    }
}

/// Walks property paths such as `user.address.city`, `ids[0]` or
/// `criteria[0].value` through objects, lists and json documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuePropertyReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathToken<'a> {
    Property(&'a str),
    Index(&'a str),
}

fn tokenize(path: &str) -> SqlPrintResult<Vec<PathToken<'_>>> {
    if path.is_empty() {
        return Err(SqlPrintError::invalid_path(path));
    }
    let mut tokens = Vec::new();
    for segment in path.split('.') {
        let (name, mut rest) = match segment.find('[') {
            Some(i) => (&segment[..i], &segment[i..]),
            None => (segment, ""),
        };
        if name.is_empty() && rest.is_empty() {
            return Err(SqlPrintError::invalid_path(path));
        }
        if !name.is_empty() {
            tokens.push(PathToken::Property(name));
        }
        while !rest.is_empty() {
            let close = rest.find(']').ok_or_else(|| SqlPrintError::invalid_path(path))?;
            if !rest.starts_with('[') || close < 2 {
                return Err(SqlPrintError::invalid_path(path));
            }
            tokens.push(PathToken::Index(&rest[1..close]));
            rest = &rest[close + 1..];
        }
    }
    Ok(tokens)
}

fn step<'a>(current: &'a SqlValue, token: PathToken<'_>, path: &str) -> SqlPrintResult<Cow<'a, SqlValue>> {
    match (current, token) {
        (SqlValue::Object(map), PathToken::Property(key) | PathToken::Index(key)) => map
            .get(key)
            .map(Cow::Borrowed)
            .ok_or_else(|| SqlPrintError::no_such_property(key, path)),
        (SqlValue::List(items), PathToken::Index(index)) => {
            let index = index
                .parse::<usize>()
                .map_err(|_| SqlPrintError::invalid_path(path))?;
            items.get(index).map(Cow::Borrowed).ok_or(SqlPrintError::IndexOutOfBounds {
                index,
                size: items.len(),
            })
        }
        (SqlValue::Json(json), PathToken::Property(key) | PathToken::Index(key)) => {
            let child = match (json.as_array(), key.parse::<usize>()) {
                (Some(items), Ok(index)) => items.get(index),
                _ => json.get(key),
            };
            child
                .map(|child| Cow::Owned(SqlValue::from_json(child)))
                .ok_or_else(|| SqlPrintError::no_such_property(key, path))
        }
        (other, PathToken::Property(key) | PathToken::Index(key)) => {
            Err(SqlPrintError::not_an_object(key, other.kind()))
        }
    }
}

impl PropertyReader for ValuePropertyReader {
    fn read(&self, value: &SqlValue, property: &str) -> SqlPrintResult<SqlValue> {
        let mut current = Cow::Borrowed(value);
        for token in tokenize(property)? {
            current = match current {
                Cow::Borrowed(v) => step(v, token, property)?,
                Cow::Owned(v) => Cow::Owned(step(&v, token, property)?.into_owned()),
            };
        }
        Ok(current.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntoSqlValue;
    use indexmap::IndexMap;

    fn user() -> SqlValue {
        let mut address = SqlValue::new_object();
        address.insert_obj("city", "Hangzhou");

        let mut user = SqlValue::new_object();
        user.insert_obj("id", 1_i64);
        user.insert_obj("name", "Jack");
        user.insert_obj("ids", vec![10_i32, 20, 30]);
        if let SqlValue::Object(map) = &mut user {
            map.insert("address".to_string(), address);
        }
        user
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("a").unwrap(), vec![PathToken::Property("a")]);
        assert_eq!(
            tokenize("a.b[0][key].c").unwrap(),
            vec![
                PathToken::Property("a"),
                PathToken::Property("b"),
                PathToken::Index("0"),
                PathToken::Index("key"),
                PathToken::Property("c"),
            ]
        );
        assert!(tokenize("").is_err());
        assert!(tokenize("a..b").is_err());
        assert!(tokenize("a[0").is_err());
        assert!(tokenize("a[]").is_err());
        assert!(tokenize("a[0]x").is_err());
    }

    #[test]
    fn test_read_nested_properties() {
        let reader = ValuePropertyReader;
        let user = user();
        assert_eq!(reader.read(&user, "name").unwrap(), SqlValue::Text("Jack".to_string()));
        assert_eq!(reader.read(&user, "address.city").unwrap(), SqlValue::Text("Hangzhou".to_string()));
        assert_eq!(reader.read(&user, "ids[1]").unwrap(), SqlValue::Int(20));
        assert_eq!(reader.read(&user, "address[city]").unwrap(), SqlValue::Text("Hangzhou".to_string()));
    }

    #[test]
    fn test_read_errors() {
        let reader = ValuePropertyReader;
        let user = user();
        assert_eq!(
            reader.read(&user, "age"),
            Err(SqlPrintError::no_such_property("age", "age"))
        );
        assert_eq!(
            reader.read(&user, "ids[3]"),
            Err(SqlPrintError::IndexOutOfBounds { index: 3, size: 3 })
        );
        assert_eq!(
            reader.read(&user, "name.first"),
            Err(SqlPrintError::not_an_object("first", "text"))
        );
        assert_eq!(
            reader.read(&user, "ids[x]"),
            Err(SqlPrintError::invalid_path("ids[x]"))
        );
    }

    #[test]
    fn test_read_json_documents() {
        let reader = ValuePropertyReader;
        let doc = SqlValue::Json(serde_json::json!({
            "user": {"name": "Rose", "tags": ["a", "b"]}
        }));
        assert_eq!(reader.read(&doc, "user.name").unwrap(), SqlValue::Text("Rose".to_string()));
        assert_eq!(reader.read(&doc, "user.tags[1]").unwrap(), SqlValue::Text("b".to_string()));
        assert!(reader.read(&doc, "user.age").is_err());
    }

    #[test]
    fn test_default_type_classifier() {
        let classifier = DefaultTypeClassifier;
        assert!(classifier.has_type_handler(&5_i32.into_value()));
        assert!(classifier.has_type_handler(&"x".into_value()));
        assert!(classifier.has_type_handler(&SqlValue::Null));
        assert!(!classifier.has_type_handler(&user()));
        assert!(!classifier.has_type_handler(&IndexMap::<String, i32>::new().into_value()));

        let everything_scalar = |_: &SqlValue| true;
        assert!(everything_scalar.has_type_handler(&user()));
    }
}

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

//! Rebuilds the executed SQL with every `?` replaced by the value bound
//! to it.
//!
//! ```text
//! SELECT * FROM t WHERE a=? AND b=?
//!   => SELECT * FROM t WHERE a=/*a*/5 AND b=/*b*/'x'
//! ```

use std::borrow::Cow;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use sqlprint_core::{BoundSql, ParameterMapping, PropertyReader, SqlValue, TypeClassifier};

use crate::configuration::{CollaboratorResolver, Configuration};
use crate::date_format::format_datetime;

/// Parameters generated for expanded criteria carry this token and are
/// printed without their name.
pub const GENERATED_PARAMETER_TOKEN: &str = "frch_criterion";

const PLACEHOLDER: char = '?';

// ASCII only: spaces inside literals such as U+3000 or NBSP are data.
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\n\r\x0B\x0C]+").expect("valid whitespace pattern"));

/// Collapse every run of ASCII whitespace into a single space.
pub fn beautify_sql(sql: &str) -> Cow<'_, str> {
    WHITESPACE.replace_all(sql, " ")
}

/// Renders one value as it would appear in SQL text.
pub fn render_value(value: &SqlValue) -> String {
    match value {
        SqlValue::Null => "null".to_string(),
        // Embedded quotes are kept as they are.
        SqlValue::Text(s) => format!("'{}'", s),
        SqlValue::Char(c) => format!("'{}'", c),
        SqlValue::Json(json) => match json.as_str() {
            Some(s) => format!("'{}'", s),
            None => json.to_string(),
        },
        temporal if temporal.is_temporal() => match temporal.to_local_datetime() {
            Some(datetime) => format!("'{}'", format_datetime(&datetime)),
            None => temporal.to_string(),
        },
        other => other.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct SqlParameterFormatter {
    comment_parameters: bool,
    generated_parameter_token: String,
}

impl Default for SqlParameterFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlParameterFormatter {
    pub fn new() -> Self {
        Self {
            comment_parameters: true,
            generated_parameter_token: GENERATED_PARAMETER_TOKEN.to_string(),
        }
    }

    /// Prefix each value with a `/*property*/` comment.
    pub fn with_comment_parameters(mut self, comment_parameters: bool) -> Self {
        self.comment_parameters = comment_parameters;
        self
    }

    pub fn with_generated_parameter_token<T: Into<String>>(mut self, token: T) -> Self {
        self.generated_parameter_token = token.into();
        self
    }

    /// Format the bound SQL with the collaborators found by `resolver`.
    pub fn format<R>(&self, bound_sql: &BoundSql, resolver: &R) -> String
    where
        R: CollaboratorResolver + ?Sized,
    {
        self.format_with(
            bound_sql.sql(),
            bound_sql.parameter_mappings(),
            bound_sql.parameter_object(),
            bound_sql.additional_parameters(),
            resolver.resolve(),
        )
    }

    /// Format a template against explicit parameter sources.
    ///
    /// Returns an empty string for an empty template or when no
    /// configuration is available. Never fails: anything that cannot be
    /// resolved is printed as `null`.
    pub fn format_with(
        &self,
        sql: &str,
        parameter_mappings: &[ParameterMapping],
        parameter_object: Option<&SqlValue>,
        additional_parameters: &IndexMap<String, SqlValue>,
        configuration: Option<&Configuration>,
    ) -> String {
        if sql.is_empty() {
            return String::new();
        }
        let Some(configuration) = configuration else {
            tracing::trace!("no configuration available, skip printing sql");
            return String::new();
        };
        let classifier = configuration.type_classifier();
        let reader = configuration.property_reader();

        let sql = beautify_sql(sql);
        let rendered = parameter_mappings
            .iter()
            .filter(|mapping| !mapping.mode().is_output_only())
            .map(|mapping| {
                let value = resolve_value(mapping.property(), parameter_object, additional_parameters, classifier, reader);
                self.decorate(mapping.property(), render_value(&value))
            })
            .collect::<Vec<_>>();

        substitute(&sql, rendered)
    }

    fn decorate(&self, property: &str, rendered: String) -> String {
        if !self.comment_parameters
            || (!self.generated_parameter_token.is_empty() && property.contains(&self.generated_parameter_token))
        {
            rendered
        } else {
            format!("/*{}*/{}", property, rendered)
        }
    }
}

/// Looks a property up in the additional parameters, then in the
/// parameter object.
fn resolve_value(
    property: &str,
    parameter_object: Option<&SqlValue>,
    additional_parameters: &IndexMap<String, SqlValue>,
    classifier: &dyn TypeClassifier,
    reader: &dyn PropertyReader,
) -> SqlValue {
    if let Some(value) = additional_parameters.get(property) {
        return value.clone();
    }
    // `__frch_item_0.name` reads `name` off the generated `__frch_item_0`
    if let Some((root, rest)) = split_root(property) {
        if let Some(base) = additional_parameters.get(root) {
            return read_or_null(reader, base, rest, property);
        }
    }
    match parameter_object {
        None => SqlValue::Null,
        Some(object) if classifier.has_type_handler(object) => object.clone(),
        Some(object) => read_or_null(reader, object, property, property),
    }
}

fn read_or_null(reader: &dyn PropertyReader, value: &SqlValue, path: &str, property: &str) -> SqlValue {
    reader.read(value, path).unwrap_or_else(|err| {
        tracing::trace!("unable to read parameter `{}`: {}", property, err);
        SqlValue::Null
    })
}

/// Splits `root.rest` or `root[rest]` at the first separator.
fn split_root(property: &str) -> Option<(&str, &str)> {
    let pos = property.find(|c| c == '.' || c == '[')?;
    let (root, rest) = property.split_at(pos);
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    if root.is_empty() || rest.is_empty() {
        None
    } else {
        Some((root, rest))
    }
}

/// Replaces the markers of `sql` left to right with `values`.
///
/// Marker positions are taken from `sql` alone, so a value that itself
/// contains `?` never shifts the substitution of the values after it.
fn substitute(sql: &str, values: Vec<String>) -> String {
    let capacity = sql.len() + values.iter().map(String::len).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    let mut values = values.into_iter();
    let mut last = 0;
    for (pos, _) in sql.match_indices(PLACEHOLDER) {
        let Some(value) = values.next() else {
            break;
        };
        out.push_str(&sql[last..pos]);
        out.push_str(&value);
        last = pos + PLACEHOLDER.len_utf8();
    }
    out.push_str(&sql[last..]);

    let surplus = values.as_slice();
    if !surplus.is_empty() {
        tracing::debug!("{} parameter(s) have no matching placeholder in: {}", surplus.len(), sql);
    }
    out
}

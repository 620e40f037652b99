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

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::{IntoSqlValue, SqlValue};

/// Direction of a statement parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParameterMode {
    #[default]
    In,
    Out,
    InOut,
}

impl ParameterMode {
    /// Output-only parameters are bound by the driver, not by the caller.
    pub fn is_output_only(&self) -> bool {
        matches!(self, ParameterMode::Out)
    }
}

/// Describes the value bound to one `?` of a statement, in marker order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterMapping {
    property: String,
    #[serde(default)]
    mode: ParameterMode,
}

impl ParameterMapping {
    pub fn new<P: Into<String>>(property: P) -> Self {
        Self {
            property: property.into(),
            mode: ParameterMode::In,
        }
    }

    pub fn with_mode(mut self, mode: ParameterMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn mode(&self) -> ParameterMode {
        self.mode
    }
}

impl From<&str> for ParameterMapping {
    fn from(property: &str) -> Self {
        ParameterMapping::new(property)
    }
}

impl From<String> for ParameterMapping {
    fn from(property: String) -> Self {
        ParameterMapping::new(property)
    }
}

/// The SQL of one execution together with everything needed to bind it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundSql {
    /// SQL with anonymous `?` markers
    sql: String,
    /// One mapping per marker, left to right
    parameter_mappings: Vec<ParameterMapping>,
    /// The primary parameter passed by the caller
    parameter_object: Option<SqlValue>,
    /// Values generated while building the SQL (loop items, bind variables)
    additional_parameters: IndexMap<String, SqlValue>,
}

impl BoundSql {
    pub fn new<S: Into<String>>(sql: S) -> Self {
        Self {
            sql: sql.into(),
            ..Default::default()
        }
    }

    pub fn with_parameter_mappings<I, M>(mut self, mappings: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<ParameterMapping>,
    {
        self.parameter_mappings = mappings.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parameter_mapping<M: Into<ParameterMapping>>(mut self, mapping: M) -> Self {
        self.parameter_mappings.push(mapping.into());
        self
    }

    pub fn with_parameter_object<V: IntoSqlValue>(mut self, parameter: V) -> Self {
        self.parameter_object = Some(parameter.into_value());
        self
    }

    pub fn with_additional_parameter<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: IntoSqlValue,
    {
        self.set_additional_parameter(name, value);
        self
    }

    pub fn set_additional_parameter<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: IntoSqlValue,
    {
        self.additional_parameters.insert(name.into(), value.into_value());
    }

    pub fn has_additional_parameter(&self, name: &str) -> bool {
        self.additional_parameters.contains_key(name)
    }

    pub fn additional_parameter(&self, name: &str) -> Option<&SqlValue> {
        self.additional_parameters.get(name)
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn parameter_mappings(&self) -> &[ParameterMapping] {
        &self.parameter_mappings
    }

    pub fn parameter_object(&self) -> Option<&SqlValue> {
        self.parameter_object.as_ref()
    }

    pub fn additional_parameters(&self) -> &IndexMap<String, SqlValue> {
        &self.additional_parameters
    }
}

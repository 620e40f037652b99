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
use std::sync::Arc;

use sqlprint_core::{BoundSql, DefaultTypeClassifier, PropertyReader, TypeClassifier, ValuePropertyReader};

/// The collaborators the formatter needs for one execution.
#[derive(Clone)]
pub struct Configuration {
    type_classifier: Arc<dyn TypeClassifier>,
    property_reader: Arc<dyn PropertyReader>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            type_classifier: Arc::new(DefaultTypeClassifier),
            property_reader: Arc::new(ValuePropertyReader),
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration").finish_non_exhaustive()
    }
}

impl Configuration {
    pub fn new(type_classifier: Arc<dyn TypeClassifier>, property_reader: Arc<dyn PropertyReader>) -> Self {
        Self {
            type_classifier,
            property_reader,
        }
    }

    pub fn with_type_classifier<C: TypeClassifier + 'static>(mut self, classifier: C) -> Self {
        self.type_classifier = Arc::new(classifier);
        self
    }

    pub fn with_property_reader<R: PropertyReader + 'static>(mut self, reader: R) -> Self {
        self.property_reader = Arc::new(reader);
        self
    }

    pub fn type_classifier(&self) -> &dyn TypeClassifier {
        self.type_classifier.as_ref()
    }

    pub fn property_reader(&self) -> &dyn PropertyReader {
        self.property_reader.as_ref()
    }
}

/// Locates the [`Configuration`] active for the current execution.
///
/// `None` means no execution context is available; the formatter then
/// prints nothing.
pub trait CollaboratorResolver {
    fn resolve(&self) -> Option<&Configuration>;
}

impl CollaboratorResolver for Configuration {
    fn resolve(&self) -> Option<&Configuration> {
        Some(self)
    }
}

impl CollaboratorResolver for Option<Configuration> {
    fn resolve(&self) -> Option<&Configuration> {
        self.as_ref()
    }
}

/// One statement as handed over by the ORM: its id, the bound SQL and the
/// configuration it runs under.
#[derive(Debug, Clone)]
pub struct MappedStatement {
    id: String,
    bound_sql: BoundSql,
    configuration: Option<Configuration>,
}

impl MappedStatement {
    pub fn new<S: Into<String>>(id: S, bound_sql: BoundSql) -> Self {
        Self {
            id: id.into(),
            bound_sql,
            configuration: Some(Configuration::default()),
        }
    }

    pub fn with_configuration(mut self, configuration: Option<Configuration>) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn bound_sql(&self) -> &BoundSql {
        &self.bound_sql
    }

    pub fn configuration(&self) -> Option<&Configuration> {
        self.configuration.as_ref()
    }
}

impl CollaboratorResolver for MappedStatement {
    fn resolve(&self) -> Option<&Configuration> {
        self.configuration.as_ref()
    }
}

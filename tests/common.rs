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
#![allow(dead_code)]
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};

use sqlprint::*;

#[derive(ToValue, Clone, Debug)]
pub struct Address {
    pub city: String,
    pub zip: Option<String>,
}

#[derive(ToValue, Clone, Debug)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: Option<u8>,
    pub birthday: Option<NaiveDate>,
    pub headline: Option<NaiveDateTime>,
    #[field(name = "token")]
    pub url_token: String,
    #[field(exist = false)]
    pub password: String,
    pub address: Address,
    pub tags: Vec<String>,
}

pub fn create_test_user() -> User {
    User {
        id: 1,
        name: "Jack".to_string(),
        age: Some(18),
        birthday: NaiveDate::from_ymd_opt(2001, 3, 9),
        headline: NaiveDate::from_ymd_opt(2024, 1, 2).and_then(|d| d.and_hms_milli_opt(3, 4, 5, 6)),
        url_token: "abc".to_string(),
        password: "secret".to_string(),
        address: Address {
            city: "Hangzhou".to_string(),
            zip: None,
        },
        tags: vec!["admin".to_string(), "dev".to_string()],
    }
}

/// Keeps every record handed to it.
#[derive(Clone, Default)]
pub struct CollectingSink {
    records: Arc<Mutex<Vec<SqlPrintRecord>>>,
}

impl CollectingSink {
    pub fn records(&self) -> Vec<SqlPrintRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl SqlSink for CollectingSink {
    fn record(&self, record: &SqlPrintRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}

pub fn format(bound_sql: &BoundSql) -> String {
    SqlParameterFormatter::new().format(bound_sql, &Configuration::default())
}

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
//! Formatter tests.
//!
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use regex::Regex;

use sqlprint::*;

mod common;
use common::*;

#[derive(ToValue)]
pub struct Criteria {
    pub a: i32,
    pub b: String,
    pub c: Option<i32>,
}

#[test]
fn test_inline_parameters() {
    let bound = BoundSql::new("SELECT * FROM t WHERE a=? AND b=?\n  AND c=?")
        .with_parameter_mappings(["a", "b", "c"])
        .with_parameter_object(Criteria { a: 5, b: "x".to_string(), c: None });
    assert_eq!(format(&bound), "SELECT * FROM t WHERE a=/*a*/5 AND b=/*b*/'x' AND c=/*c*/null");
}

#[test]
fn test_derived_struct_paths() {
    let bound = BoundSql::new("update t_user set name = ?, token = ?, city = ?, tag = ?, age = ? where id = ?")
        .with_parameter_mappings(["name", "token", "address.city", "tags[1]", "age", "id"])
        .with_parameter_object(create_test_user());
    assert_eq!(
        format(&bound),
        "update t_user set name = /*name*/'Jack', token = /*token*/'abc', city = /*address.city*/'Hangzhou', \
         tag = /*tags[1]*/'dev', age = /*age*/18 where id = /*id*/1"
    );
}

#[test]
fn test_skipped_and_unknown_fields_print_null() {
    let bound = BoundSql::new("select * from t_user where password = ? and url_token = ? and address.zip = ?")
        .with_parameter_mappings(["password", "url_token", "address.zip"])
        .with_parameter_object(create_test_user());
    assert_eq!(
        format(&bound),
        "select * from t_user where password = /*password*/null and url_token = /*url_token*/null \
         and address.zip = /*address.zip*/null"
    );
}

#[test]
fn test_scalar_parameter_object_binds_every_marker() {
    let bound = BoundSql::new("select * from t_user where id = ? or parent_id = ?")
        .with_parameter_mappings(["id", "parentId"])
        .with_parameter_object(42_i64);
    assert_eq!(format(&bound), "select * from t_user where id = /*id*/42 or parent_id = /*parentId*/42");
}

#[test]
fn test_missing_parameter_object() {
    let bound = BoundSql::new("select * from t_user where id = ?").with_parameter_mapping("id");
    assert_eq!(format(&bound), "select * from t_user where id = /*id*/null");
}

#[test]
fn test_additional_parameter_wins() {
    let bound = BoundSql::new("select * from t_user where name = ? and id = ?")
        .with_parameter_mappings(["name", "id"])
        .with_parameter_object(create_test_user())
        .with_additional_parameter("name", "Rose");
    assert_eq!(format(&bound), "select * from t_user where name = /*name*/'Rose' and id = /*id*/1");
}

#[test]
fn test_generated_parameters_have_no_comment() {
    let bound = BoundSql::new("select * from t_user where id in (?, ?)")
        .with_parameter_mappings(["__frch_criterion_0", "__frch_criterion_1"])
        .with_additional_parameter("__frch_criterion_0", 3_i64)
        .with_additional_parameter("__frch_criterion_1", 4_i64);
    assert_eq!(format(&bound), "select * from t_user where id in (3, 4)");
}

#[test]
fn test_foreach_item_properties() {
    let bound = BoundSql::new("insert into t_user (name, city) values (?, ?)")
        .with_parameter_mappings(["__frch_item_0.name", "__frch_item_0.address.city"])
        .with_additional_parameter("__frch_item_0", create_test_user());
    assert_eq!(
        format(&bound),
        "insert into t_user (name, city) values (/*__frch_item_0.name*/'Jack', /*__frch_item_0.address.city*/'Hangzhou')"
    );
}

#[test]
fn test_output_parameters_are_skipped() {
    let bound = BoundSql::new("{call next_id(?)}")
        .with_parameter_mapping(ParameterMapping::new("result").with_mode(ParameterMode::Out))
        .with_parameter_mapping("seq")
        .with_additional_parameter("seq", "t_user");
    assert_eq!(format(&bound), "{call next_id(/*seq*/'t_user')}");
}

#[test]
fn test_empty_template() {
    let bound = BoundSql::new("")
        .with_parameter_mappings(["id"])
        .with_parameter_object(1_i32);
    assert_eq!(format(&bound), "");
}

#[test]
fn test_no_configuration() {
    let bound = BoundSql::new("select 1");
    let none: Option<Configuration> = None;
    assert_eq!(SqlParameterFormatter::new().format(&bound, &none), "");

    let statement = MappedStatement::new("Mapper.ping", bound).with_configuration(None);
    assert_eq!(SqlParameterFormatter::new().format(statement.bound_sql(), &statement), "");
}

#[test]
fn test_zero_placeholders() {
    for sql in ["select now()", "select\n\t1\n  from   dual", "  delete from t_log  "] {
        let bound = BoundSql::new(sql);
        assert_eq!(format(&bound), beautify_sql(sql));
    }
}

#[test]
fn test_whitespace_normalization_is_idempotent() {
    for sql in ["select *\r\n  from t\twhere a = ?", " a  b ", "x", ""] {
        let once = beautify_sql(sql).into_owned();
        assert_eq!(beautify_sql(&once), once);
    }
}

#[test]
fn test_text_round_trip() {
    let re = Regex::new(r"^/\*name\*/'(.*)'$").unwrap();
    for name in ["Jack", "a b  c", "50% off?", "中文"] {
        let bound = BoundSql::new("?")
            .with_parameter_mapping("name")
            .with_additional_parameter("name", name);
        let out = format(&bound);
        let caps = re.captures(&out).unwrap();
        assert_eq!(&caps[1], name);
    }
}

#[test]
fn test_value_with_marker_is_not_rescanned() {
    let bound = BoundSql::new("select * from t where q = ? and id = ?")
        .with_parameter_mappings(["q", "id"])
        .with_additional_parameter("q", "who?")
        .with_additional_parameter("id", 9_i32);
    assert_eq!(format(&bound), "select * from t where q = /*q*/'who?' and id = /*id*/9");
}

#[test]
fn test_mismatched_counts() {
    let surplus_mapping = BoundSql::new("select * from t where a = ?")
        .with_parameter_mappings(["a", "b"])
        .with_additional_parameter("a", 1_i32)
        .with_additional_parameter("b", 2_i32);
    assert_eq!(format(&surplus_mapping), "select * from t where a = /*a*/1");

    let surplus_marker = BoundSql::new("select * from t where a = ? and b = ?")
        .with_parameter_mapping("a")
        .with_additional_parameter("a", 1_i32);
    assert_eq!(format(&surplus_marker), "select * from t where a = /*a*/1 and b = ?");
}

#[test]
fn test_temporal_values() {
    let pattern = Regex::new(r"^'\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}'$").unwrap();
    let timestamp: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
    let bound = BoundSql::new("? ? ? ?")
        .with_parameter_mappings(["d", "t", "dt", "ts"])
        .with_additional_parameter("d", NaiveDate::from_ymd_opt(2001, 3, 9).unwrap())
        .with_additional_parameter("t", NaiveTime::from_hms_milli_opt(13, 14, 15, 7).unwrap())
        .with_additional_parameter("dt", create_test_user().headline)
        .with_additional_parameter("ts", timestamp);
    let sql = SqlParameterFormatter::new()
        .with_comment_parameters(false)
        .format(&bound, &Configuration::default());

    let parts: Vec<&str> = sql.split(' ').collect();
    let rendered: Vec<String> = parts.chunks(2).map(|c| c.join(" ")).collect();
    assert_eq!(rendered.len(), 4);
    for value in &rendered {
        assert!(pattern.is_match(value), "{}", value);
    }
    assert_eq!(rendered[0], "'2001-03-09 00:00:00.000'");
    assert_eq!(rendered[1], "'1970-01-01 13:14:15.007'");
    assert_eq!(rendered[2], "'2024-01-02 03:04:05.006'");
    let local = timestamp.with_timezone(&Local).format("'%Y-%m-%d %H:%M:%S%.3f'").to_string();
    assert_eq!(rendered[3], local);
}

#[test]
fn test_other_values_render_unquoted() {
    let bound = BoundSql::new("? ? ? ?")
        .with_parameter_mappings(["flag", "ratio", "ids", "json"])
        .with_additional_parameter("flag", true)
        .with_additional_parameter("ratio", 0.5_f64)
        .with_additional_parameter("ids", vec![1_i32, 2, 3])
        .with_additional_parameter("json", serde_json::json!({"k": 1}));
    let sql = SqlParameterFormatter::new()
        .with_comment_parameters(false)
        .format(&bound, &Configuration::default());
    assert_eq!(sql, r#"true 0.5 [1, 2, 3] {"k":1}"#);
}

#[test]
fn test_custom_collaborators() {
    let configuration = Configuration::default()
        .with_type_classifier(|_: &SqlValue| false)
        .with_property_reader(ValuePropertyReader);
    let bound = BoundSql::new("select * from t where id = ?")
        .with_parameter_mapping("id")
        .with_parameter_object(7_i32);
    let statement = MappedStatement::new("Mapper.byId", bound).with_configuration(Some(configuration));
    assert_eq!(
        SqlParameterFormatter::new().format(statement.bound_sql(), &statement),
        "select * from t where id = /*id*/null"
    );
}

#[test]
fn test_concurrent_formatting() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let bound = BoundSql::new("select * from t where d = ?")
                    .with_parameter_mapping("d")
                    .with_additional_parameter("d", NaiveDate::from_ymd_opt(2020, 1, i + 1).unwrap());
                format(&bound)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let expected = format!("select * from t where d = /*d*/'2020-01-{:02} 00:00:00.000'", i + 1);
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_uuid_renders_unquoted() {
    let id = uuid::Uuid::new_v4();
    let bound = BoundSql::new("delete from t_session where id = ?")
        .with_parameter_mapping("id")
        .with_additional_parameter("id", id);
    assert_eq!(format(&bound), format!("delete from t_session where id = /*id*/{}", id));
}

// src/application/dsl/tests.rs
use super::*;
use crate::domain::{DocEnum, Descriptor};
use std::fmt;

#[derive(Debug, Clone, Copy)]
enum Sort {
    Latest,
    Popular,
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sort::Latest => f.write_str("LATEST"),
            Sort::Popular => f.write_str("POPULAR"),
        }
    }
}

impl DocEnum for Sort {
    fn variants() -> &'static [Self] {
        &[Sort::Latest, Sort::Popular]
    }
}

#[test]
fn new_field_carries_empty_placeholders() {
    let field = "data.name".of_type(FieldType::String);
    let attrs = field.descriptor().attributes();
    assert_eq!(attrs.get("default").map(String::as_str), Some(""));
    assert_eq!(attrs.get("format").map(String::as_str), Some(""));
    assert_eq!(attrs.get("sample").map(String::as_str), Some(""));
    assert_eq!(field.descriptor().description(), "");
    assert_eq!(field.descriptor().field_type(), JsonFieldType::String);
    assert!(!field.is_optional());
    assert!(!field.is_ignored());
}

#[test]
fn date_types_prefill_format() {
    assert_eq!("createdAt".of_type(FieldType::Date).format(), "yyyy-MM-dd");
    assert_eq!(
        "createdAt".of_type(FieldType::DateTime).format(),
        "yyyy-MM-dd hh:mm:ss.SSS"
    );
}

#[test]
fn explicit_format_overrides_date_default() {
    let field = "createdAt"
        .of_type(FieldType::Date)
        .formatted_as("dd/MM/yyyy");
    assert_eq!(field.format(), "dd/MM/yyyy");
}

#[test]
fn enum_field_is_string_with_pipe_joined_format() {
    let field = "sort".of_type(FieldType::enum_of::<Sort>());
    assert_eq!(field.descriptor().field_type(), JsonFieldType::String);
    assert_eq!(field.format(), "LATEST|POPULAR");

    let overridden = "sort"
        .of_type(FieldType::enumeration(["A", "B"]))
        .formatted_as("custom");
    assert_eq!(overridden.format(), "custom");
}

#[test]
fn last_write_wins_for_every_attribute() {
    let field = "id"
        .of_type(FieldType::Number)
        .with_default_value("0")
        .with_default_value("1")
        .example("10")
        .example("11")
        .formatted_as("int32")
        .formatted_as("int64")
        .means("first")
        .means("identifier");
    assert_eq!(field.default_value(), "1");
    assert_eq!(field.sample(), "11");
    assert_eq!(field.format(), "int64");
    assert_eq!(field.descriptor().description(), "identifier");

    let param = "page"
        .parameter_type(ParamType::Int)
        .typed_as("long")
        .typed_as("double");
    assert_eq!(param.param_type(), "double");
}

#[test]
fn optional_and_ignored_are_one_way() {
    let field = "nickname"
        .of_type(FieldType::String)
        .mark_optional(true)
        .mark_optional(true)
        .mark_optional(false);
    assert!(field.is_optional());

    let field = field.mark_ignored(false);
    assert!(!field.is_ignored());
    let field = field.mark_ignored(true).mark_ignored(false);
    assert!(field.is_ignored());
}

#[test]
fn attributes_block_groups_settings() {
    let param = "size".parameter_type(ParamType::Int).attributes(|p| {
        p.means("page size")
            .with_default_value("20")
            .example("50")
            .mark_optional(true)
    });
    assert_eq!(param.descriptor().description(), "page size");
    assert_eq!(param.default_value(), "20");
    assert_eq!(param.sample(), "50");
    assert!(param.is_optional());
}

#[test]
fn parameter_type_sets_synthetic_type() {
    assert_eq!("file".parameter_type(ParamType::File).param_type(), "file");
    assert_eq!("q".parameter_type(ParamType::Text).param_type(), "string");
    assert_eq!("lat".parameter_type(ParamType::Double).param_type(), "double");
    assert_eq!("id".parameter_type(ParamType::Long).param_type(), "long");
    assert_eq!("n".parameter_type(ParamType::Int).param_type(), "integer");
    assert_eq!("on".parameter_type(ParamType::Bool).param_type(), "boolean");
}

#[test]
fn enum_parameter_sets_type_and_format() {
    let param = "sort".parameter_type(ParamType::enum_of::<Sort>());
    assert_eq!(param.param_type(), "string");
    assert_eq!(param.format(), "LATEST|POPULAR");

    let param = param.formatted_as("LATEST");
    assert_eq!(param.format(), "LATEST");
}

#[test]
fn header_type_sets_tag_and_example() {
    let header = "Authorization"
        .header_type(HeaderType::Authorization)
        .example("Bearer token")
        .means("access token");
    assert_eq!(header.param_type(), "Authorization");
    assert_eq!(header.sample(), "Bearer token");
    assert_eq!(header.descriptor().name(), "Authorization");
    assert_eq!(header.descriptor().description(), "access token");
    assert!(header.clone().mark_optional(true).is_optional());
    assert!(!header.is_optional());
}

#[test]
fn header_setters_last_write_wins() {
    let header = "X-Request-Id"
        .header_type(HeaderType::Authorization)
        .typed_as("string")
        .typed_as("uuid")
        .example("first")
        .example("7f1c")
        .formatted_as("hex")
        .formatted_as("uuid-v4")
        .with_default_value("none")
        .with_default_value("generated");
    assert_eq!(header.param_type(), "uuid");
    assert_eq!(header.sample(), "7f1c");
    assert_eq!(header.format(), "uuid-v4");
    assert_eq!(header.default_value(), "generated");

    let fresh = "X-Trace".header_type(HeaderType::Authorization);
    assert_eq!(fresh.format(), "");
    assert_eq!(fresh.default_value(), "");
}

#[test]
fn owned_names_work_too() {
    let name = String::from("items[].id");
    let field = name.of_type(FieldType::Array);
    assert_eq!(field.descriptor().path(), "items[].id");
}

// src/domain/attributes.rs
//! Attribute keys used to tag descriptors with documentation metadata that the
//! descriptor model does not carry natively.
use std::fmt;

pub const KEY_DEFAULT_VALUE: &str = "default";
pub const KEY_FORMAT: &str = "format";
pub const KEY_SAMPLE: &str = "sample";
pub const KEY_PARAM_TYPE: &str = "paramType";
pub const KEY_PART_TYPE: &str = "partType";

/// Format applied to `DATE` fields unless overridden.
pub const DATE_FORMAT: &str = "yyyy-MM-dd";
/// Format applied to `DATETIME` fields unless overridden.
pub const DATETIME_FORMAT: &str = "yyyy-MM-dd hh:mm:ss.SSS";

const ALL_KEYS: [&str; 5] = [
    KEY_DEFAULT_VALUE,
    KEY_FORMAT,
    KEY_SAMPLE,
    KEY_PARAM_TYPE,
    KEY_PART_TYPE,
];

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn keys_are_distinct(keys: &[&str]) -> bool {
    let mut i = 0;
    while i < keys.len() {
        let mut j = i + 1;
        while j < keys.len() {
            if str_eq(keys[i], keys[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(keys_are_distinct(&ALL_KEYS), "attribute keys must be distinct");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    DefaultValue,
    Format,
    Sample,
    ParamType,
    PartType,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 5] = [
        AttributeKey::DefaultValue,
        AttributeKey::Format,
        AttributeKey::Sample,
        AttributeKey::ParamType,
        AttributeKey::PartType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::DefaultValue => KEY_DEFAULT_VALUE,
            AttributeKey::Format => KEY_FORMAT,
            AttributeKey::Sample => KEY_SAMPLE,
            AttributeKey::ParamType => KEY_PARAM_TYPE,
            AttributeKey::PartType => KEY_PART_TYPE,
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

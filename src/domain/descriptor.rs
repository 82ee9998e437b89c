// src/domain/descriptor.rs
//! Raw descriptor records: one per documented field, header or parameter.
//!
//! These are the objects consumed by snippet rendering and by the resource
//! model; the DSL wrappers in `application::dsl` are the only code that
//! mutates them after creation.
use crate::domain::attributes::AttributeKey;
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Open-ended attribute map, keyed by the registry keys.
pub type Attributes = BTreeMap<String, String>;

/// Primitive JSON type a payload field is documented with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JsonFieldType {
    Array,
    Boolean,
    Object,
    Number,
    Null,
    String,
    Varies,
}

impl JsonFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonFieldType::Array => "Array",
            JsonFieldType::Boolean => "Boolean",
            JsonFieldType::Object => "Object",
            JsonFieldType::Number => "Number",
            JsonFieldType::Null => "Null",
            JsonFieldType::String => "String",
            JsonFieldType::Varies => "Varies",
        }
    }
}

impl fmt::Display for JsonFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JsonFieldType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ARRAY" => Ok(JsonFieldType::Array),
            "BOOLEAN" => Ok(JsonFieldType::Boolean),
            "OBJECT" => Ok(JsonFieldType::Object),
            "NUMBER" => Ok(JsonFieldType::Number),
            "NULL" => Ok(JsonFieldType::Null),
            "STRING" => Ok(JsonFieldType::String),
            "VARIES" => Ok(JsonFieldType::Varies),
            _ => Err(DomainError::unsupported("json field", s)),
        }
    }
}

/// Shared access to the description, flags and attribute map of a descriptor.
pub trait Descriptor {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn is_optional(&self) -> bool;
    fn is_ignored(&self) -> bool;
    fn attributes(&self) -> &Attributes;
    fn attributes_mut(&mut self) -> &mut Attributes;
    fn set_description(&mut self, description: String);

    /// Value stored under `key`, or an empty string when absent.
    fn attribute(&self, key: AttributeKey) -> &str {
        self.attributes()
            .get(key.as_str())
            .map(String::as_str)
            .unwrap_or("")
    }

    fn set_attribute(&mut self, key: AttributeKey, value: impl Into<String>)
    where
        Self: Sized,
    {
        self.attributes_mut()
            .insert(key.as_str().to_string(), value.into());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    path: String,
    #[serde(rename = "type")]
    field_type: JsonFieldType,
    optional: bool,
    ignored: bool,
    description: String,
    attributes: Attributes,
}

impl FieldDescriptor {
    pub fn new(path: impl Into<String>, field_type: JsonFieldType) -> Self {
        Self {
            path: path.into(),
            field_type,
            optional: false,
            ignored: false,
            description: String::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn field_type(&self) -> JsonFieldType {
        self.field_type
    }

    pub fn optional(&mut self) {
        self.optional = true;
    }

    pub fn ignored(&mut self) {
        self.ignored = true;
    }
}

impl Descriptor for FieldDescriptor {
    fn name(&self) -> &str {
        &self.path
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn is_ignored(&self) -> bool {
        self.ignored
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn set_description(&mut self, description: String) {
        self.description = description;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderDescriptor {
    name: String,
    optional: bool,
    description: String,
    attributes: Attributes,
}

impl HeaderDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
            description: String::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn optional(&mut self) {
        self.optional = true;
    }
}

impl Descriptor for HeaderDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    // Header snippets have no notion of an ignored header.
    fn is_ignored(&self) -> bool {
        false
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn set_description(&mut self, description: String) {
        self.description = description;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    name: String,
    optional: bool,
    ignored: bool,
    description: String,
    attributes: Attributes,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
            ignored: false,
            description: String::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn optional(&mut self) {
        self.optional = true;
    }

    pub fn ignored(&mut self) {
        self.ignored = true;
    }
}

impl Descriptor for ParameterDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn is_ignored(&self) -> bool {
        self.ignored
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn set_description(&mut self, description: String) {
        self.description = description;
    }
}

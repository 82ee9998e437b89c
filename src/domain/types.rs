// src/domain/types.rs
//! Closed sets of semantic type tags used by the documentation DSL.
use crate::domain::descriptor::JsonFieldType;
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

/// Rust enums whose variants can be listed as the allowed values of a field
/// or parameter.
pub trait DocEnum: fmt::Display + Sized + 'static {
    fn variants() -> &'static [Self];
}

fn labels<T: fmt::Display>(values: impl IntoIterator<Item = T>) -> Vec<String> {
    values.into_iter().map(|value| value.to_string()).collect()
}

/// Semantic type of a payload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Array,
    Boolean,
    Object,
    Number,
    Null,
    String,
    /// Documented as `VARIES`: the value can take several JSON types.
    Any,
    Date,
    DateTime,
    /// String field restricted to the listed labels.
    Enum(Vec<String>),
}

impl FieldType {
    pub fn enumeration<T: fmt::Display>(values: impl IntoIterator<Item = T>) -> Self {
        FieldType::Enum(labels(values))
    }

    pub fn enum_of<T: DocEnum>() -> Self {
        Self::enumeration(T::variants())
    }

    pub fn json_type(&self) -> JsonFieldType {
        match self {
            FieldType::Array => JsonFieldType::Array,
            FieldType::Boolean => JsonFieldType::Boolean,
            FieldType::Object => JsonFieldType::Object,
            FieldType::Number => JsonFieldType::Number,
            FieldType::Null => JsonFieldType::Null,
            FieldType::Any => JsonFieldType::Varies,
            FieldType::String | FieldType::Date | FieldType::DateTime | FieldType::Enum(_) => {
                JsonFieldType::String
            }
        }
    }
}

impl FromStr for FieldType {
    type Err = DomainError;

    /// Parses the plain tag names; enum tags carry values and cannot be
    /// spelled as a bare name.
    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ARRAY" => Ok(FieldType::Array),
            "BOOLEAN" => Ok(FieldType::Boolean),
            "OBJECT" => Ok(FieldType::Object),
            "NUMBER" => Ok(FieldType::Number),
            "NULL" => Ok(FieldType::Null),
            "STRING" => Ok(FieldType::String),
            "ANY" => Ok(FieldType::Any),
            "DATE" => Ok(FieldType::Date),
            "DATETIME" => Ok(FieldType::DateTime),
            _ => Err(DomainError::unsupported("field", s)),
        }
    }
}

/// Type classification of a path variable or query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    File,
    Text,
    Double,
    Long,
    Int,
    Bool,
    Enum(Vec<String>),
}

impl ParamType {
    pub fn enumeration<T: fmt::Display>(values: impl IntoIterator<Item = T>) -> Self {
        ParamType::Enum(labels(values))
    }

    pub fn enum_of<T: DocEnum>() -> Self {
        Self::enumeration(T::variants())
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ParamType::File => "file",
            ParamType::Text | ParamType::Enum(_) => "string",
            ParamType::Double => "double",
            ParamType::Long => "long",
            ParamType::Int => "integer",
            ParamType::Bool => "boolean",
        }
    }
}

impl FromStr for ParamType {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "file" => Ok(ParamType::File),
            "string" => Ok(ParamType::Text),
            "double" => Ok(ParamType::Double),
            "long" => Ok(ParamType::Long),
            "integer" => Ok(ParamType::Int),
            "boolean" => Ok(ParamType::Bool),
            _ => Err(DomainError::unsupported("parameter", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderType {
    Authorization,
}

impl HeaderType {
    pub fn tag(&self) -> &'static str {
        match self {
            HeaderType::Authorization => "Authorization",
        }
    }
}

impl FromStr for HeaderType {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "Authorization" => Ok(HeaderType::Authorization),
            _ => Err(DomainError::unsupported("header", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum Status {
        Active,
        Dormant,
    }

    impl fmt::Display for Status {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Status::Active => f.write_str("ACTIVE"),
                Status::Dormant => f.write_str("DORMANT"),
            }
        }
    }

    impl DocEnum for Status {
        fn variants() -> &'static [Self] {
            &[Status::Active, Status::Dormant]
        }
    }

    #[test]
    fn every_field_type_maps_to_one_primitive() {
        assert_eq!(FieldType::Any.json_type(), JsonFieldType::Varies);
        assert_eq!(FieldType::Date.json_type(), JsonFieldType::String);
        assert_eq!(FieldType::DateTime.json_type(), JsonFieldType::String);
        assert_eq!(FieldType::Number.json_type(), JsonFieldType::Number);
        assert_eq!(FieldType::enum_of::<Status>().json_type(), JsonFieldType::String);
    }

    #[test]
    fn enum_of_lists_variants_in_declaration_order() {
        assert_eq!(
            ParamType::enum_of::<Status>(),
            ParamType::Enum(vec!["ACTIVE".into(), "DORMANT".into()])
        );
        assert_eq!(ParamType::enum_of::<Status>().tag(), "string");
    }

    #[test]
    fn unknown_tag_names_fail_at_declaration() {
        assert!("datetime".parse::<FieldType>().is_ok());
        assert_eq!(
            "uuid".parse::<FieldType>(),
            Err(DomainError::unsupported("field", "uuid"))
        );
        assert!("float".parse::<ParamType>().is_err());
        assert!("Cookie".parse::<HeaderType>().is_err());
    }

    #[test]
    fn param_tags_round_trip_through_parse() {
        for ty in [
            ParamType::File,
            ParamType::Text,
            ParamType::Double,
            ParamType::Long,
            ParamType::Int,
            ParamType::Bool,
        ] {
            assert_eq!(ty.tag().parse::<ParamType>(), Ok(ty));
        }
    }
}

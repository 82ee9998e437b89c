// src/application/dsl/mod.rs
//! Declaration vocabulary: `"data.id".of_type(FieldType::Number).means("...")`.
mod field;
mod header;
mod parameter;

#[cfg(test)]
mod tests;

pub use field::Field;
pub use header::Header;
pub use parameter::Parameter;

use crate::application::enum_format::enum_format;
use crate::domain::attributes::{DATE_FORMAT, DATETIME_FORMAT};
use crate::domain::{
    AttributeKey, Descriptor, FieldDescriptor, FieldType, HeaderDescriptor, HeaderType,
    JsonFieldType, ParamType, ParameterDescriptor,
};

/// Descriptor factories available on any field, header or parameter name.
pub trait DocsDsl {
    /// Payload field of the given type. Date types pre-fill the format and
    /// enum types pre-fill the allowed values; a later `formatted_as` wins.
    fn of_type(self, field_type: FieldType) -> Field;

    /// Path variable or query parameter with the given documented type.
    fn parameter_type(self, param_type: ParamType) -> Parameter;

    fn header_type(self, header_type: HeaderType) -> Header;
}

impl<S: Into<String>> DocsDsl for S {
    fn of_type(self, field_type: FieldType) -> Field {
        let field = create_field(self.into(), field_type.json_type());
        match field_type {
            FieldType::Date => field.formatted_as(DATE_FORMAT),
            FieldType::DateTime => field.formatted_as(DATETIME_FORMAT),
            FieldType::Enum(labels) => field.formatted_as(enum_format(labels)),
            _ => field,
        }
    }

    fn parameter_type(self, param_type: ParamType) -> Parameter {
        let parameter = create_parameter(self.into()).typed_as(param_type.tag());
        match param_type {
            ParamType::Enum(labels) => parameter.formatted_as(enum_format(labels)),
            _ => parameter,
        }
    }

    fn header_type(self, header_type: HeaderType) -> Header {
        create_header(self.into()).typed_as(header_type.tag())
    }
}

fn with_placeholders<D: Descriptor>(mut descriptor: D) -> D {
    descriptor.set_attribute(AttributeKey::Sample, "");
    descriptor.set_attribute(AttributeKey::Format, "");
    descriptor.set_attribute(AttributeKey::DefaultValue, "");
    descriptor.set_description(String::new());
    descriptor
}

fn create_field(path: String, json_type: JsonFieldType) -> Field {
    Field::new(with_placeholders(FieldDescriptor::new(path, json_type)))
}

fn create_parameter(name: String) -> Parameter {
    Parameter::new(with_placeholders(ParameterDescriptor::new(name)))
}

fn create_header(name: String) -> Header {
    Header::new(with_placeholders(HeaderDescriptor::new(name)))
}

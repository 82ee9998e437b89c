// src/domain/mod.rs
pub mod attributes;
pub mod descriptor;
pub mod errors;
pub mod types;

pub use attributes::AttributeKey;
pub use descriptor::{
    Attributes, Descriptor, FieldDescriptor, HeaderDescriptor, JsonFieldType, ParameterDescriptor,
};
pub use errors::{DomainError, DomainResult};
pub use types::{DocEnum, FieldType, HeaderType, ParamType};

// src/application/dsl/header.rs
use crate::domain::{AttributeKey, Descriptor, HeaderDescriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    descriptor: HeaderDescriptor,
}

impl Header {
    pub fn new(descriptor: HeaderDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &HeaderDescriptor {
        &self.descriptor
    }

    pub fn into_descriptor(self) -> HeaderDescriptor {
        self.descriptor
    }

    pub fn is_optional(&self) -> bool {
        self.descriptor.is_optional()
    }

    pub fn sample(&self) -> &str {
        self.descriptor.attribute(AttributeKey::Sample)
    }

    pub fn param_type(&self) -> &str {
        self.descriptor.attribute(AttributeKey::ParamType)
    }

    pub fn default_value(&self) -> &str {
        self.descriptor.attribute(AttributeKey::DefaultValue)
    }

    pub fn format(&self) -> &str {
        self.descriptor.attribute(AttributeKey::Format)
    }

    pub fn typed_as(mut self, value: impl Into<String>) -> Self {
        self.descriptor.set_attribute(AttributeKey::ParamType, value);
        self
    }

    pub fn means(mut self, description: impl Into<String>) -> Self {
        self.descriptor.set_description(description.into());
        self
    }

    pub fn attributes(self, block: impl FnOnce(Self) -> Self) -> Self {
        block(self)
    }

    pub fn example(mut self, value: impl Into<String>) -> Self {
        self.descriptor.set_attribute(AttributeKey::Sample, value);
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.descriptor.set_attribute(AttributeKey::DefaultValue, value);
        self
    }

    pub fn formatted_as(mut self, format: impl Into<String>) -> Self {
        self.descriptor.set_attribute(AttributeKey::Format, format);
        self
    }

    pub fn mark_optional(mut self, flag: bool) -> Self {
        if flag {
            self.descriptor.optional();
        }
        self
    }
}

impl From<Header> for HeaderDescriptor {
    fn from(header: Header) -> Self {
        header.into_descriptor()
    }
}

// src/application/dsl/parameter.rs
use crate::domain::{AttributeKey, Descriptor, ParameterDescriptor};

/// Fluent wrapper around a path variable or query [`ParameterDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    descriptor: ParameterDescriptor,
}

impl Parameter {
    pub fn new(descriptor: ParameterDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &ParameterDescriptor {
        &self.descriptor
    }

    pub fn into_descriptor(self) -> ParameterDescriptor {
        self.descriptor
    }

    pub fn is_optional(&self) -> bool {
        self.descriptor.is_optional()
    }

    pub fn is_ignored(&self) -> bool {
        self.descriptor.is_ignored()
    }

    pub fn default_value(&self) -> &str {
        self.descriptor.attribute(AttributeKey::DefaultValue)
    }

    pub fn format(&self) -> &str {
        self.descriptor.attribute(AttributeKey::Format)
    }

    pub fn sample(&self) -> &str {
        self.descriptor.attribute(AttributeKey::Sample)
    }

    pub fn param_type(&self) -> &str {
        self.descriptor.attribute(AttributeKey::ParamType)
    }

    /// Sets the documented type ("string", "integer", ...). Never checked
    /// against request data.
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

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.descriptor
            .set_attribute(AttributeKey::DefaultValue, value);
        self
    }

    pub fn formatted_as(mut self, value: impl Into<String>) -> Self {
        self.descriptor.set_attribute(AttributeKey::Format, value);
        self
    }

    pub fn example(mut self, value: impl Into<String>) -> Self {
        self.descriptor.set_attribute(AttributeKey::Sample, value);
        self
    }

    pub fn mark_optional(mut self, flag: bool) -> Self {
        if flag {
            self.descriptor.optional();
        }
        self
    }

    pub fn mark_ignored(mut self, flag: bool) -> Self {
        if flag {
            self.descriptor.ignored();
        }
        self
    }
}

impl From<Parameter> for ParameterDescriptor {
    fn from(parameter: Parameter) -> Self {
        parameter.into_descriptor()
    }
}

// src/application/dsl/field.rs
use crate::domain::{AttributeKey, Descriptor, FieldDescriptor};

/// Fluent wrapper around a payload [`FieldDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    descriptor: FieldDescriptor,
}

impl Field {
    pub fn new(descriptor: FieldDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    pub fn into_descriptor(self) -> FieldDescriptor {
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

    pub fn means(mut self, description: impl Into<String>) -> Self {
        self.descriptor.set_description(description.into());
        self
    }

    /// Apply a group of further settings to this field.
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

    /// Marks the field optional when `flag` is true. There is no way back.
    pub fn mark_optional(mut self, flag: bool) -> Self {
        if flag {
            self.descriptor.optional();
        }
        self
    }

    /// Marks the field ignored when `flag` is true. There is no way back.
    pub fn mark_ignored(mut self, flag: bool) -> Self {
        if flag {
            self.descriptor.ignored();
        }
        self
    }
}

impl From<Field> for FieldDescriptor {
    fn from(field: Field) -> Self {
        field.into_descriptor()
    }
}

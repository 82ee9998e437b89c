// src/application/dto/resource.rs
//! Schema contribution of a documented operation, and the resource model
//! written next to the snippets for the OpenAPI aggregation step.
use crate::domain::{
    AttributeKey, Attributes, Descriptor, FieldDescriptor, HeaderDescriptor, ParameterDescriptor,
};
use serde::{Deserialize, Serialize};

/// Primitive type of a header or parameter in the generated schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SimpleType {
    #[default]
    String,
    Integer,
    Number,
    Boolean,
    File,
}

impl SimpleType {
    /// Maps the synthetic `paramType` attribute; anything unknown documents
    /// as a string.
    pub fn from_param_type(tag: &str) -> Self {
        match tag {
            "integer" | "long" => SimpleType::Integer,
            "double" => SimpleType::Number,
            "boolean" => SimpleType::Boolean,
            "file" => SimpleType::File,
            _ => SimpleType::String,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptorWithType {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub simple_type: SimpleType,
    pub optional: bool,
    pub ignored: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
}

impl From<&ParameterDescriptor> for ParameterDescriptorWithType {
    fn from(descriptor: &ParameterDescriptor) -> Self {
        Self {
            name: descriptor.name().to_string(),
            description: descriptor.description().to_string(),
            simple_type: SimpleType::from_param_type(descriptor.attribute(AttributeKey::ParamType)),
            optional: descriptor.is_optional(),
            ignored: descriptor.is_ignored(),
            default_value: non_empty(descriptor.attribute(AttributeKey::DefaultValue)),
            attributes: descriptor.attributes().clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderDescriptorWithType {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub simple_type: SimpleType,
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
}

impl From<&HeaderDescriptor> for HeaderDescriptorWithType {
    fn from(descriptor: &HeaderDescriptor) -> Self {
        // Header tags ("Authorization") are names, not primitive types.
        Self {
            name: descriptor.name().to_string(),
            description: descriptor.description().to_string(),
            simple_type: SimpleType::String,
            optional: descriptor.is_optional(),
            default_value: non_empty(descriptor.attribute(AttributeKey::DefaultValue)),
            attributes: descriptor.attributes().clone(),
        }
    }
}

/// Per-operation input of the schema generator. A category that was not
/// declared is `None`, never an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSnippetParameters {
    pub tags: Vec<String>,
    pub summary: String,
    pub request_schema: String,
    pub response_schema: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_parameters: Option<Vec<ParameterDescriptorWithType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<Vec<HeaderDescriptorWithType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_parameters: Option<Vec<ParameterDescriptorWithType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_fields: Option<Vec<FieldDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_fields: Option<Vec<FieldDescriptor>>,
}

impl ResourceSnippetParameters {
    /// Number of descriptor categories present.
    pub fn populated_categories(&self) -> usize {
        [
            self.path_parameters.is_some(),
            self.request_headers.is_some(),
            self.query_parameters.is_some(),
            self.request_fields.is_some(),
            self.response_fields.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

/// Content of `resource.json`: everything the aggregation step needs to
/// build one OpenAPI operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceModel {
    pub operation_id: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub request: RequestModel,
    pub response: ResponseModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestModel {
    pub path: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_parameters: Option<Vec<ParameterDescriptorWithType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<HeaderDescriptorWithType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_parameters: Option<Vec<ParameterDescriptorWithType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_fields: Option<Vec<FieldDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseModel {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_fields: Option<Vec<FieldDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl ResourceModel {
    /// Combine the schema contribution with the (already preprocessed)
    /// exchange it documents.
    pub fn from_parts(
        identifier: &str,
        resource: &ResourceSnippetParameters,
        request: &super::exchange::RecordedRequest,
        response: &super::exchange::RecordedResponse,
    ) -> Self {
        Self {
            operation_id: identifier.to_string(),
            summary: resource.summary.clone(),
            tags: resource.tags.clone(),
            request: RequestModel {
                path: request.path_template().to_string(),
                method: request.method.as_str().to_string(),
                content_type: request.content_type().map(str::to_string),
                schema: non_empty(&resource.request_schema),
                path_parameters: resource.path_parameters.clone(),
                headers: resource.request_headers.clone(),
                query_parameters: resource.query_parameters.clone(),
                request_fields: resource.request_fields.clone(),
                example: non_empty(&request.body_text()),
            },
            response: ResponseModel {
                status: response.status.as_u16(),
                content_type: response.content_type().map(str::to_string),
                schema: non_empty(&resource.response_schema),
                response_fields: resource.response_fields.clone(),
                example: non_empty(&response.body_text()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Descriptor;

    #[test]
    fn simple_type_follows_param_type_tag() {
        assert_eq!(SimpleType::from_param_type("long"), SimpleType::Integer);
        assert_eq!(SimpleType::from_param_type("integer"), SimpleType::Integer);
        assert_eq!(SimpleType::from_param_type("double"), SimpleType::Number);
        assert_eq!(SimpleType::from_param_type("boolean"), SimpleType::Boolean);
        assert_eq!(SimpleType::from_param_type("file"), SimpleType::File);
        assert_eq!(SimpleType::from_param_type(""), SimpleType::String);
    }

    #[test]
    fn parameter_conversion_keeps_flags_and_default() {
        let mut descriptor = ParameterDescriptor::new("page");
        descriptor.set_attribute(AttributeKey::ParamType, "integer");
        descriptor.set_attribute(AttributeKey::DefaultValue, "0");
        descriptor.set_description("page index".into());
        descriptor.optional();

        let converted = ParameterDescriptorWithType::from(&descriptor);
        assert_eq!(converted.simple_type, SimpleType::Integer);
        assert_eq!(converted.default_value.as_deref(), Some("0"));
        assert!(converted.optional);
        assert!(!converted.ignored);
        assert_eq!(converted.description, "page index");
    }

    #[test]
    fn empty_default_is_absent() {
        let mut descriptor = HeaderDescriptor::new("Authorization");
        descriptor.set_attribute(AttributeKey::DefaultValue, "");
        let converted = HeaderDescriptorWithType::from(&descriptor);
        assert_eq!(converted.default_value, None);
    }

    #[test]
    fn absent_categories_are_not_serialized() {
        let resource = ResourceSnippetParameters {
            tags: vec!["users".into()],
            summary: "list users".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&resource).expect("serialize");
        let object = value.as_object().expect("object");
        assert!(!object.contains_key("pathParameters"));
        assert!(!object.contains_key("responseFields"));
        assert_eq!(object["summary"], "list users");
        assert_eq!(resource.populated_categories(), 0);
    }
}

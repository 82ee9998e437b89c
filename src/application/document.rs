// src/application/document.rs
//! Assembles declared descriptors into snippet directives and a schema
//! contribution, then hands both to a [`Recorder`].
use crate::application::dsl::{Field, Header, Parameter};
use crate::application::dto::{
    Exchange, HeaderDescriptorWithType, ParameterDescriptorWithType, ResourceSnippetParameters,
};
use crate::application::ports::{Documentation, Recorder};
use crate::application::preprocess::{RequestPreprocessor, ResponsePreprocessor};
use crate::application::snippet::Snippet;
use crate::application::{DocsError, DocsResult};
use crate::domain::{FieldDescriptor, HeaderDescriptor, ParameterDescriptor};

/// Declaration of one documented operation.
#[derive(Debug, Clone, Default)]
pub struct DocumentRequest {
    identifier: String,
    summary: String,
    path_variables: Vec<Parameter>,
    request_headers: Vec<Header>,
    request_parameters: Vec<Parameter>,
    request_schema: String,
    response_schema: String,
    request_body: Vec<Field>,
    response_body: Vec<Field>,
}

impl DocumentRequest {
    pub fn new(identifier: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            summary: summary.into(),
            ..Default::default()
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn path_variables(mut self, items: impl IntoIterator<Item = Parameter>) -> Self {
        self.path_variables.extend(items);
        self
    }

    pub fn request_headers(mut self, items: impl IntoIterator<Item = Header>) -> Self {
        self.request_headers.extend(items);
        self
    }

    pub fn request_parameters(mut self, items: impl IntoIterator<Item = Parameter>) -> Self {
        self.request_parameters.extend(items);
        self
    }

    pub fn request_schema(mut self, name: impl Into<String>) -> Self {
        self.request_schema = name.into();
        self
    }

    pub fn response_schema(mut self, name: impl Into<String>) -> Self {
        self.response_schema = name.into();
        self
    }

    pub fn request_body(mut self, items: impl IntoIterator<Item = Field>) -> Self {
        self.request_body.extend(items);
        self
    }

    pub fn response_body(mut self, items: impl IntoIterator<Item = Field>) -> Self {
        self.response_body.extend(items);
        self
    }
}

/// Output of [`assemble`]: snippet directives in rendering order and the
/// matching schema contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledDocument {
    pub identifier: String,
    pub snippets: Vec<Snippet>,
    pub resource: ResourceSnippetParameters,
}

fn unwrap_all<W, D>(items: Vec<W>) -> Vec<D>
where
    W: Into<D>,
{
    items.into_iter().map(Into::into).collect()
}

/// Identifiers name a directory below the snippets root. Nested `a/b` is
/// fine; absolute paths and `..` segments are not.
fn validate_identifier(identifier: &str) -> DocsResult<()> {
    if identifier.trim().is_empty() {
        return Err(DocsError::invalid_identifier(
            "document identifier cannot be empty",
        ));
    }
    if identifier.starts_with(['/', '\\'])
        || identifier.split(['/', '\\']).any(|segment| segment == "..")
    {
        return Err(DocsError::invalid_identifier(format!(
            "document identifier `{identifier}` must be a relative path without `..`"
        )));
    }
    Ok(())
}

/// Build the snippet list and schema contribution for `request`.
///
/// Categories are emitted in a fixed order (path variables, request
/// headers, query parameters, request fields, response fields) and only
/// when they hold at least one descriptor.
pub fn assemble(request: DocumentRequest) -> DocsResult<AssembledDocument> {
    validate_identifier(&request.identifier)?;

    let mut resource = ResourceSnippetParameters {
        tags: vec![request.identifier.clone()],
        summary: request.summary,
        request_schema: request.request_schema,
        response_schema: request.response_schema,
        ..Default::default()
    };
    let mut snippets = Vec::new();

    let path_variables: Vec<ParameterDescriptor> = unwrap_all(request.path_variables);
    if !path_variables.is_empty() {
        resource.path_parameters = Some(
            path_variables
                .iter()
                .map(ParameterDescriptorWithType::from)
                .collect(),
        );
        snippets.push(Snippet::PathParameters(path_variables));
    }

    let request_headers: Vec<HeaderDescriptor> = unwrap_all(request.request_headers);
    if !request_headers.is_empty() {
        resource.request_headers = Some(
            request_headers
                .iter()
                .map(HeaderDescriptorWithType::from)
                .collect(),
        );
        snippets.push(Snippet::RequestHeaders(request_headers));
    }

    let request_parameters: Vec<ParameterDescriptor> = unwrap_all(request.request_parameters);
    if !request_parameters.is_empty() {
        resource.query_parameters = Some(
            request_parameters
                .iter()
                .map(ParameterDescriptorWithType::from)
                .collect(),
        );
        snippets.push(Snippet::QueryParameters(request_parameters));
    }

    let request_body: Vec<FieldDescriptor> = unwrap_all(request.request_body);
    if !request_body.is_empty() {
        resource.request_fields = Some(request_body.clone());
        snippets.push(Snippet::RequestFields(request_body));
    }

    let response_body: Vec<FieldDescriptor> = unwrap_all(request.response_body);
    if !response_body.is_empty() {
        resource.response_fields = Some(response_body.clone());
        snippets.push(Snippet::ResponseFields(response_body));
    }

    Ok(AssembledDocument {
        identifier: request.identifier,
        snippets,
        resource,
    })
}

/// Documents a completed exchange and hands it back for further chaining.
pub trait MakeDocument: Sized {
    /// Uses the default documentation preprocessors.
    fn make_document<R>(self, request: DocumentRequest, recorder: &R) -> DocsResult<Self>
    where
        R: Recorder + ?Sized,
    {
        self.make_document_with(
            request,
            recorder,
            &RequestPreprocessor::default(),
            &ResponsePreprocessor::default(),
        )
    }

    fn make_document_with<R>(
        self,
        request: DocumentRequest,
        recorder: &R,
        request_preprocessor: &RequestPreprocessor,
        response_preprocessor: &ResponsePreprocessor,
    ) -> DocsResult<Self>
    where
        R: Recorder + ?Sized;
}

impl MakeDocument for Exchange {
    fn make_document_with<R>(
        self,
        request: DocumentRequest,
        recorder: &R,
        request_preprocessor: &RequestPreprocessor,
        response_preprocessor: &ResponsePreprocessor,
    ) -> DocsResult<Self>
    where
        R: Recorder + ?Sized,
    {
        let assembled = assemble(request)?;
        tracing::debug!(
            identifier = %assembled.identifier,
            snippets = assembled.snippets.len(),
            "documenting exchange"
        );
        recorder.document(&Documentation {
            identifier: &assembled.identifier,
            exchange: &self,
            request_preprocessor,
            response_preprocessor,
            resource: &assembled.resource,
            snippets: &assembled.snippets,
        })?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dsl::DocsDsl;
    use crate::domain::{FieldType, HeaderType, ParamType};

    #[test]
    fn empty_declaration_keeps_metadata_only() {
        let doc = assemble(
            DocumentRequest::new("users", "List users")
                .request_schema("UserQuery")
                .response_schema("UserPage"),
        )
        .expect("assemble");
        assert!(doc.snippets.is_empty());
        assert_eq!(doc.resource.populated_categories(), 0);
        assert_eq!(doc.resource.tags, vec!["users".to_string()]);
        assert_eq!(doc.resource.summary, "List users");
        assert_eq!(doc.resource.request_schema, "UserQuery");
        assert_eq!(doc.resource.response_schema, "UserPage");
    }

    #[test]
    fn response_only_declaration_emits_one_category() {
        let doc = assemble(
            DocumentRequest::new("users", "Get user")
                .response_body(["id".of_type(FieldType::Number).means("user id")]),
        )
        .expect("assemble");
        assert_eq!(doc.snippets.len(), 1);
        assert_eq!(doc.snippets[0].name(), "response-fields");
        assert_eq!(doc.resource.populated_categories(), 1);
        assert!(doc.resource.response_fields.is_some());
        assert!(doc.resource.path_parameters.is_none());
        assert!(doc.resource.request_headers.is_none());
        assert!(doc.resource.query_parameters.is_none());
        assert!(doc.resource.request_fields.is_none());
    }

    #[test]
    fn snippets_follow_fixed_order() {
        // Declared out of order on purpose.
        let doc = assemble(
            DocumentRequest::new("articles", "Update article")
                .response_body(["id".of_type(FieldType::Number)])
                .request_body(["title".of_type(FieldType::String)])
                .request_parameters(["draft".parameter_type(ParamType::Bool)])
                .request_headers(["Authorization".header_type(HeaderType::Authorization)])
                .path_variables(["id".parameter_type(ParamType::Long)]),
        )
        .expect("assemble");
        let names: Vec<&str> = doc.snippets.iter().map(Snippet::name).collect();
        assert_eq!(
            names,
            vec![
                "path-parameters",
                "request-headers",
                "query-parameters",
                "request-fields",
                "response-fields",
            ]
        );
        assert_eq!(doc.resource.populated_categories(), 5);
    }

    #[test]
    fn empty_identifier_is_rejected() {
        let err = assemble(DocumentRequest::new("  ", "nothing")).expect_err("must fail");
        assert!(matches!(err, DocsError::InvalidIdentifier(_)));
    }

    #[test]
    fn identifiers_escaping_the_snippets_dir_are_rejected() {
        for identifier in [
            "../outside",
            "users/../../etc",
            "/tmp/users",
            "\\share\\users",
            "users\\..\\x",
        ] {
            let err = assemble(DocumentRequest::new(identifier, "escape")).expect_err(identifier);
            assert!(matches!(err, DocsError::InvalidIdentifier(_)), "{identifier}");
        }
    }

    #[test]
    fn nested_identifiers_are_allowed() {
        let doc = assemble(DocumentRequest::new("users/get..by-id", "nested")).expect("assemble");
        assert_eq!(doc.identifier, "users/get..by-id");
    }
}

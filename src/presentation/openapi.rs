// src/presentation/openapi.rs
//! Aggregates the recorded `resource.json` files into one OpenAPI document.
pub mod loader;
pub mod schema;
pub mod security;
pub mod writer;


pub use loader::load_resources;
pub use schema::{field_schema, fields_schema, simple_schema};
pub use security::{
    JWT_SECURITY_BLOCK, SECURITY_SCHEME_NAME, SecurityMode, append_security_block,
    merge_bearer_security,
};
pub use writer::OutputFormat;

use crate::application::DocsResult;
use crate::application::dto::{
    HeaderDescriptorWithType, ParameterDescriptorWithType, ResourceModel,
};
use crate::domain::FieldDescriptor;
use axum::http::StatusCode;
use serde_json::Value;
use std::path::{Path, PathBuf};
use utoipa::openapi::{
    Components, ContentBuilder, InfoBuilder, OpenApi, OpenApiBuilder, Ref, RefOr, Required,
    ResponseBuilder,
    path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn},
    request_body::RequestBodyBuilder,
    schema::Schema,
    server::Server,
};

const DEFAULT_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenApiSettings {
    pub title: String,
    pub description: String,
    pub version: String,
    pub server_urls: Vec<String>,
    pub format: OutputFormat,
    pub security: SecurityMode,
    pub file_name: String,
    pub out_dir: PathBuf,
    pub publish_dir: Option<PathBuf>,
}

impl Default for OpenApiSettings {
    fn default() -> Self {
        Self {
            title: "API documentation".into(),
            description: String::new(),
            version: "0.1.0".into(),
            server_urls: Vec::new(),
            format: OutputFormat::Yaml,
            security: SecurityMode::Merge,
            file_name: "openapi3".into(),
            out_dir: PathBuf::from("target/api-spec"),
            publish_dir: None,
        }
    }
}

impl OpenApiSettings {
    /// Whether the security scheme goes into the document model. Append
    /// mode has no text form for JSON, so it falls back to the model.
    fn structural_security(&self) -> bool {
        match self.security {
            SecurityMode::Merge => true,
            SecurityMode::Append => self.format == OutputFormat::Json,
            SecurityMode::None => false,
        }
    }
}

/// Load, build, write and publish. Returns the path of the written document.
pub fn generate(snippets_dir: &Path, settings: &OpenApiSettings) -> DocsResult<PathBuf> {
    let resources = load_resources(snippets_dir)?;
    let openapi = build_openapi(settings, &resources);
    let text = writer::render(&openapi, settings.format, settings.security)?;
    let path = writer::write_document(&text, &settings.out_dir, &settings.file_name, settings.format)?;
    tracing::info!(
        resources = resources.len(),
        path = %path.display(),
        "openapi document written"
    );

    if let Some(into_dir) = &settings.publish_dir {
        let published = writer::publish(&path, into_dir)?;
        tracing::info!(path = %published.display(), "openapi document published");
    }
    Ok(path)
}

fn http_method(method: &str) -> Option<HttpMethod> {
    match method.to_ascii_uppercase().as_str() {
        "GET" => Some(HttpMethod::Get),
        "POST" => Some(HttpMethod::Post),
        "PUT" => Some(HttpMethod::Put),
        "DELETE" => Some(HttpMethod::Delete),
        "PATCH" => Some(HttpMethod::Patch),
        "HEAD" => Some(HttpMethod::Head),
        "OPTIONS" => Some(HttpMethod::Options),
        "TRACE" => Some(HttpMethod::Trace),
        _ => None,
    }
}

/// Build the document. Resources sharing a path and method become one
/// operation; the first one supplies id, parameters and request body, and
/// each contributes its response status.
pub fn build_openapi(settings: &OpenApiSettings, resources: &[ResourceModel]) -> OpenApi {
    let info = InfoBuilder::new()
        .title(settings.title.clone())
        .version(settings.version.clone())
        .description((!settings.description.is_empty()).then(|| settings.description.clone()))
        .build();
    let servers: Vec<Server> = settings.server_urls.iter().map(Server::new).collect();
    let mut openapi = OpenApiBuilder::new()
        .info(info)
        .servers((!servers.is_empty()).then_some(servers))
        .build();

    let mut groups: Vec<(&str, HttpMethod, Vec<&ResourceModel>)> = Vec::new();
    for resource in resources {
        let Some(method) = http_method(&resource.request.method) else {
            tracing::warn!(
                operation = %resource.operation_id,
                method = %resource.request.method,
                "skipping resource with unsupported method"
            );
            continue;
        };
        let path = resource.request.path.as_str();
        let existing = groups.iter_mut().find(|(p, _, members)| {
            *p == path
                && members
                    .first()
                    .is_some_and(|m| m.request.method.eq_ignore_ascii_case(&resource.request.method))
        });
        match existing {
            Some((_, _, members)) => members.push(resource),
            None => groups.push((path, method, vec![resource])),
        }
    }

    let mut components = Components::default();
    for (path, method, members) in groups {
        let operation = build_operation(&members, &mut components);
        openapi.paths.add_path_operation(path, vec![method], operation);
    }
    if !components.schemas.is_empty() {
        openapi.components = Some(components);
    }

    if settings.structural_security() {
        merge_bearer_security(&mut openapi);
    }
    openapi
}

fn build_operation(
    members: &[&ResourceModel],
    components: &mut Components,
) -> utoipa::openapi::path::Operation {
    let Some(first) = members.first() else {
        return OperationBuilder::new().build();
    };
    let request = &first.request;

    let mut builder = OperationBuilder::new()
        .operation_id(Some(first.operation_id.clone()))
        .summary((!first.summary.is_empty()).then(|| first.summary.clone()));
    for tag in &first.tags {
        builder = builder.tag(tag.clone());
    }

    for param in visible(request.path_parameters.as_deref()) {
        builder = builder.parameter(parameter(param, ParameterIn::Path, true));
    }
    for param in visible(request.query_parameters.as_deref()) {
        builder = builder.parameter(parameter(param, ParameterIn::Query, !param.optional));
    }
    for header in request.headers.iter().flatten() {
        builder = builder.parameter(header_parameter(header));
    }

    let request_fields = request.request_fields.as_deref().unwrap_or_default();
    if !request_fields.is_empty() || request.example.is_some() {
        let content = content(
            request_fields,
            request.schema.as_deref(),
            request.example.as_deref(),
            components,
        );
        let body = RequestBodyBuilder::new()
            .content(
                request.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE),
                content,
            )
            .required(Some(Required::True))
            .build();
        builder = builder.request_body(Some(body));
    }

    let mut statuses = Vec::new();
    for member in members {
        let response = &member.response;
        if statuses.contains(&response.status) {
            continue;
        }
        statuses.push(response.status);

        let description = StatusCode::from_u16(response.status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or_default();
        let mut response_builder = ResponseBuilder::new().description(description);
        let fields = response.response_fields.as_deref().unwrap_or_default();
        if !fields.is_empty() || response.example.is_some() {
            response_builder = response_builder.content(
                response.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE),
                content(
                    fields,
                    response.schema.as_deref(),
                    response.example.as_deref(),
                    components,
                ),
            );
        }
        builder = builder.response(response.status.to_string(), response_builder.build());
    }

    builder.build()
}

fn visible(
    params: Option<&[ParameterDescriptorWithType]>,
) -> impl Iterator<Item = &ParameterDescriptorWithType> {
    params.into_iter().flatten().filter(|param| !param.ignored)
}

fn parameter(
    param: &ParameterDescriptorWithType,
    location: ParameterIn,
    required: bool,
) -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name(param.name.clone())
        .parameter_in(location)
        .required(if required { Required::True } else { Required::False })
        .description((!param.description.is_empty()).then(|| param.description.clone()))
        .schema(Some(RefOr::T(simple_schema(param.simple_type, &param.attributes))))
        .build()
}

fn header_parameter(header: &HeaderDescriptorWithType) -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name(header.name.clone())
        .parameter_in(ParameterIn::Header)
        .required(if header.optional { Required::False } else { Required::True })
        .description((!header.description.is_empty()).then(|| header.description.clone()))
        .schema(Some(RefOr::T(simple_schema(header.simple_type, &header.attributes))))
        .build()
}

/// Body content: the field schema, registered as a component and
/// referenced when named, plus the recorded body as example.
fn content(
    fields: &[FieldDescriptor],
    schema_name: Option<&str>,
    example: Option<&str>,
    components: &mut Components,
) -> utoipa::openapi::Content {
    let mut builder = ContentBuilder::new();
    if !fields.is_empty() {
        let schema = fields_schema(fields);
        let schema: RefOr<Schema> = match schema_name {
            Some(name) => {
                components.schemas.insert(name.to_string(), RefOr::T(schema));
                RefOr::Ref(Ref::from_schema_name(name))
            }
            None => RefOr::T(schema),
        };
        builder = builder.schema(Some(schema));
    }
    if let Some(text) = example {
        let value = serde_json::from_str::<Value>(text)
            .unwrap_or_else(|_| Value::String(text.to_string()));
        builder = builder.example(Some(value));
    }
    builder.build()
}

// tests/openapi_integration.rs
mod support;

use axum::http::Method;
use restdocs_dsl::config::DocsConfig;
use restdocs_dsl::presentation::openapi::{
    JWT_SECURITY_BLOCK, OpenApiSettings, OutputFormat, SecurityMode, generate,
};
use restdocs_dsl::prelude::*;
use serde_json::json;
use std::path::Path;

async fn record_users_api(snippets_dir: &Path) {
    let recorder = SnippetRecorder::new(snippets_dir, SnippetFormat::Asciidoctor);

    support::exchange(support::get_request("/users/1"), "/users/{id}")
        .await
        .make_document(
            DocumentRequest::new("users-get", "Fetch a single user")
                .path_variables(["id".parameter_type(ParamType::Long).means("user id")])
                .response_schema("UserResponse")
                .response_body([
                    "id".of_type(FieldType::Number).means("user id"),
                    "name".of_type(FieldType::String).means("display name"),
                    "tags[].label".of_type(FieldType::String).means("tag label"),
                ]),
            &recorder,
        )
        .expect("document users-get");

    support::exchange(support::get_request("/users/0"), "/users/{id}")
        .await
        .make_document(
            DocumentRequest::new("users-get-missing", "Unknown user")
                .path_variables(["id".parameter_type(ParamType::Long).means("user id")])
                .response_body(["message".of_type(FieldType::String).means("reason")]),
            &recorder,
        )
        .expect("document users-get-missing");

    support::exchange(
        support::json_request(Method::POST, "/users", &json!({ "name": "lee", "role": "USER" })),
        "/users",
    )
    .await
    .make_document(
        DocumentRequest::new("users-create", "Create a user")
            .request_headers(["Authorization"
                .header_type(HeaderType::Authorization)
                .means("bearer access token")])
            .request_schema("CreateUserRequest")
            .request_body([
                "name".of_type(FieldType::String).means("display name"),
                "role"
                    .of_type(FieldType::enumeration(["ADMIN", "USER"]))
                    .means("granted role"),
            ]),
        &recorder,
    )
    .expect("document users-create");

    support::exchange(support::get_request("/users?page=2&size=5"), "/users")
        .await
        .make_document(
            DocumentRequest::new("users-list", "List users").request_parameters([
                "page".parameter_type(ParamType::Int).means("page index"),
                "size"
                    .parameter_type(ParamType::Int)
                    .means("page size")
                    .mark_optional(true)
                    .with_default_value("20"),
            ]),
            &recorder,
        )
        .expect("document users-list");
}

#[tokio::test]
async fn generated_yaml_describes_recorded_operations() {
    let snippets = tempfile::tempdir().expect("tempdir");
    let out = tempfile::tempdir().expect("tempdir");
    record_users_api(snippets.path()).await;

    let settings = OpenApiSettings {
        title: "Drunk API".into(),
        version: "1.0.0".into(),
        server_urls: vec!["https://dev.drunk.com".into()],
        out_dir: out.path().to_path_buf(),
        ..OpenApiSettings::default()
    };
    let path = generate(snippets.path(), &settings).expect("generate");
    let yaml = std::fs::read_to_string(&path).expect("read document");
    let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).expect("yaml");

    assert_eq!(doc["info"]["title"].as_str(), Some("Drunk API"));
    assert_eq!(doc["servers"][0]["url"].as_str(), Some("https://dev.drunk.com"));

    let get = &doc["paths"]["/users/{id}"]["get"];
    assert_eq!(get["operationId"].as_str(), Some("users-get"));
    assert!(get["responses"]["200"].is_mapping());
    assert!(get["responses"]["404"].is_mapping());
    assert_eq!(
        get["responses"]["200"]["content"]["application/json"]["schema"]["$ref"].as_str(),
        Some("#/components/schemas/UserResponse")
    );

    let post = &doc["paths"]["/users"]["post"];
    assert_eq!(post["parameters"][0]["in"].as_str(), Some("header"));
    assert_eq!(
        post["requestBody"]["content"]["application/json"]["schema"]["$ref"].as_str(),
        Some("#/components/schemas/CreateUserRequest")
    );

    let list = &doc["paths"]["/users"]["get"];
    let params = list["parameters"].as_sequence().expect("parameters");
    assert_eq!(params.len(), 2);
    assert_eq!(params[1]["required"].as_bool(), Some(false));
    assert_eq!(params[1]["schema"]["default"].as_str(), Some("20"));

    let schemas = &doc["components"]["schemas"];
    assert_eq!(
        schemas["UserResponse"]["properties"]["tags"]["type"].as_str(),
        Some("array")
    );
    assert_eq!(
        schemas["CreateUserRequest"]["properties"]["role"]["format"].as_str(),
        Some("ADMIN|USER")
    );

    assert_eq!(
        doc["components"]["securitySchemes"]["Authorization"]["scheme"].as_str(),
        Some("bearer")
    );
    assert!(doc["security"].is_sequence());
}

#[tokio::test]
async fn append_mode_keeps_the_literal_block_and_publishes() {
    let snippets = tempfile::tempdir().expect("tempdir");
    let out = tempfile::tempdir().expect("tempdir");
    let publish = tempfile::tempdir().expect("tempdir");
    record_users_api(snippets.path()).await;

    let settings = OpenApiSettings {
        security: SecurityMode::Append,
        file_name: "api".into(),
        out_dir: out.path().to_path_buf(),
        publish_dir: Some(publish.path().to_path_buf()),
        ..OpenApiSettings::default()
    };
    let path = generate(snippets.path(), &settings).expect("generate");
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("api.yaml"));

    let published = std::fs::read_to_string(publish.path().join("api.yaml")).expect("copy");
    assert_eq!(published, std::fs::read_to_string(&path).expect("original"));
    assert!(published.ends_with(JWT_SECURITY_BLOCK));

    let doc: serde_yaml::Value = serde_yaml::from_str(&published).expect("yaml");
    assert_eq!(
        doc["components"]["securitySchemes"]["Authorization"]["bearerFormat"].as_str(),
        Some("JWT")
    );
}

#[tokio::test]
async fn json_output_from_configuration() {
    let snippets = tempfile::tempdir().expect("tempdir");
    let out = tempfile::tempdir().expect("tempdir");
    record_users_api(snippets.path()).await;

    let out_dir = out.path().display().to_string();
    let config = DocsConfig::from_lookup(|key| match key {
        "OPENAPI3_FORMAT" => Some("json".into()),
        "OPENAPI3_SECURITY_MODE" => Some("none".into()),
        "OPENAPI3_OUT_DIR" => Some(out_dir.clone()),
        _ => None,
    })
    .expect("config");
    assert_eq!(config.openapi().format, OutputFormat::Json);

    let path = generate(snippets.path(), config.openapi()).expect("generate");
    assert_eq!(path, out.path().join("openapi3.json"));
    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
    assert!(doc["paths"]["/users/{id}"]["get"].is_object());
    assert!(doc.get("security").is_none());
}

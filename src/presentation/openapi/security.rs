// src/presentation/openapi/security.rs
use std::{fmt, str::FromStr};
use utoipa::openapi::{
    Components, OpenApi,
    security::{Http, HttpAuthScheme, SecurityRequirement, SecurityScheme},
};

pub const SECURITY_SCHEME_NAME: &str = "Authorization";

/// Block appended to the YAML document when byte compatibility with
/// previously published documents is required. It continues the
/// `components:` mapping, so it only parses when that key is last.
pub const JWT_SECURITY_BLOCK: &str = "  securitySchemes:\n    Authorization:\n      type: http\n      scheme: bearer\n      bearerFormat: JWT\nsecurity:\n  - Authorization: []";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityMode {
    /// Add the scheme to the document model before serializing.
    #[default]
    Merge,
    /// Serialize first, then append [`JWT_SECURITY_BLOCK`] as text.
    Append,
    None,
}

impl fmt::Display for SecurityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityMode::Merge => f.write_str("merge"),
            SecurityMode::Append => f.write_str("append"),
            SecurityMode::None => f.write_str("none"),
        }
    }
}

impl FromStr for SecurityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "merge" => Ok(SecurityMode::Merge),
            "append" => Ok(SecurityMode::Append),
            "none" => Ok(SecurityMode::None),
            other => Err(format!("unknown security mode '{other}'")),
        }
    }
}

/// Register the bearer JWT scheme and require it globally.
pub fn merge_bearer_security(openapi: &mut OpenApi) {
    let components = openapi.components.get_or_insert_with(Components::default);
    let mut http = Http::new(HttpAuthScheme::Bearer);
    http.bearer_format = Some("JWT".into());
    components.add_security_scheme(SECURITY_SCHEME_NAME, SecurityScheme::Http(http));

    openapi
        .security
        .get_or_insert_with(Vec::new)
        .push(SecurityRequirement::new(SECURITY_SCHEME_NAME, Vec::<String>::new()));
}

/// Append the literal security block to a serialized YAML document.
///
/// Starts a `components:` mapping first when the document has none, so
/// the indented `securitySchemes` key has a parent.
pub fn append_security_block(yaml: &str) -> String {
    let mut out = yaml.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    let has_components = yaml.lines().any(|line| line.starts_with("components:"));
    if !has_components {
        out.push_str("components:\n");
    }
    out.push_str(JWT_SECURITY_BLOCK);
    out
}

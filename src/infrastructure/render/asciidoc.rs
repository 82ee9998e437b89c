// src/infrastructure/render/asciidoc.rs
use super::{HEADER_ROW, Row, SnippetRenderer, http_request_text, http_response_text, rows};
use crate::application::dto::{RecordedRequest, RecordedResponse};
use crate::application::snippet::Snippet;

pub struct AsciidocRenderer;

fn cell(value: &str) -> String {
    value.replace('|', "\\|")
}

fn code(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("`+{}+`", cell(value))
    }
}

fn render_row(row: &Row) -> String {
    [
        code(&row.name),
        code(&row.type_name),
        row.optional.to_string(),
        code(&row.default_value),
        code(&row.format),
        code(&row.sample),
        cell(&row.description),
    ]
    .iter()
    .map(|value| format!("|{value}\n"))
    .collect()
}

impl SnippetRenderer for AsciidocRenderer {
    fn render_snippet(&self, snippet: &Snippet) -> String {
        let mut out = format!(".{}\n|===\n", snippet.name());
        for column in HEADER_ROW {
            out.push('|');
            out.push_str(column);
        }
        out.push('\n');
        for row in rows(snippet) {
            out.push('\n');
            out.push_str(&render_row(&row));
        }
        out.push_str("|===\n");
        out
    }

    fn render_http_request(&self, request: &RecordedRequest) -> String {
        format!(
            "[source,http,options=\"nowrap\"]\n----\n{}\n----\n",
            http_request_text(request)
        )
    }

    fn render_http_response(&self, response: &RecordedResponse) -> String {
        format!(
            "[source,http,options=\"nowrap\"]\n----\n{}\n----\n",
            http_response_text(response)
        )
    }

    fn file_extension(&self) -> &'static str {
        "adoc"
    }
}

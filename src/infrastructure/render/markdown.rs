// src/infrastructure/render/markdown.rs
use super::{HEADER_ROW, Row, SnippetRenderer, http_request_text, http_response_text, rows};
use crate::application::dto::{RecordedRequest, RecordedResponse};
use crate::application::snippet::Snippet;

pub struct MarkdownRenderer;

fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

fn code(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("`{}`", cell(value))
    }
}

fn render_row(row: &Row) -> String {
    format!(
        "| {} | {} | {} | {} | {} | {} | {} |\n",
        code(&row.name),
        code(&row.type_name),
        row.optional,
        code(&row.default_value),
        code(&row.format),
        code(&row.sample),
        cell(&row.description),
    )
}

impl SnippetRenderer for MarkdownRenderer {
    fn render_snippet(&self, snippet: &Snippet) -> String {
        let mut out = format!("| {} |\n", HEADER_ROW.join(" | "));
        out.push_str(&format!("|{}\n", " --- |".repeat(HEADER_ROW.len())));
        for row in rows(snippet) {
            out.push_str(&render_row(&row));
        }
        out
    }

    fn render_http_request(&self, request: &RecordedRequest) -> String {
        format!("```http\n{}\n```\n", http_request_text(request))
    }

    fn render_http_response(&self, response: &RecordedResponse) -> String {
        format!("```http\n{}\n```\n", http_response_text(response))
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }
}

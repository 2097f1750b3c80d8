//! Markup for the result summary block.
//!
//! Every value interpolated here comes from the server, which in turn took it
//! from the uploaded specification, so all of it is escaped before it reaches
//! `innerHTML`.

use crate::model::generation::GenerationResult;

/// Escapes special HTML characters in a string.
///
/// Replaces `&`, `<`, `>`, `"` and `'` by their entities.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Builds the summary block shown above the generated tests.
pub fn summary_markup(result: &GenerationResult) -> String {
    format!(
        "<strong>API:</strong> {}<br>\
         <strong>Endpoints:</strong> {}<br>\
         <strong>Generated File:</strong> {}",
        escape_html(&result.api_title),
        result.endpoints_count,
        escape_html(&result.filename)
    )
}

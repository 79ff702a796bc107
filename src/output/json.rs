//! JSON output.

use super::Report;

/// Render a report as pretty-printed JSON followed by a newline.
pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

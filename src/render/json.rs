use crate::model::AuditReport;

/// Pretty-printed JSON report, one document with a trailing newline.
pub fn render_json_report(report: &AuditReport) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

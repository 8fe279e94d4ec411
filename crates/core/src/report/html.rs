//! Static HTML rendering of a drift report

use std::fmt::Write;

use super::payload::DriftPayload;

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; margin: 2rem; color: #1f2328; }
h1 { font-size: 1.5rem; margin-bottom: 1rem; }
.banner { display: flex; gap: 1.5rem; padding: 1rem 1.25rem; border-radius: 6px; margin-bottom: 1.5rem; }
.banner.ok { background: #dafbe1; border: 1px solid #4ac26b; }
.banner.breaking { background: #ffebe9; border: 1px solid #ff8182; }
.banner .metric { font-weight: 600; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 0.5rem 0.75rem; border-bottom: 1px solid #d0d7de; vertical-align: top; }
th { background: #f6f8fa; }
td.sev-low { color: #1a7f37; }
td.sev-medium { color: #9a6700; }
td.sev-high { color: #cf222e; font-weight: 600; }
td.empty { color: #656d76; font-style: italic; }
code { font-family: ui-monospace, SFMono-Regular, Menlo, monospace; }
"#;

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render the payload as a self-contained HTML page
pub fn render_html(payload: &DriftPayload) -> String {
    let summary = &payload.summary;
    let mut html = String::new();

    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>driftfence report</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<h1>Schema drift report</h1>\n");

    let banner_class = if summary.breaking { "breaking" } else { "ok" };
    let verdict = if summary.breaking { "BREAKING" } else { "non-breaking" };
    // Writing to a String cannot fail
    let _ = write!(
        html,
        "<div class=\"banner {}\">\
         <span>Verdict: <span class=\"metric\">{}</span></span>\
         <span>Risk score: <span class=\"metric\">{}</span>/100</span>\
         <span>Changes: <span class=\"metric\">{}</span></span>\
         <span>Rows sampled: <span class=\"metric\">{} &rarr; {}</span></span>\
         </div>\n",
        banner_class,
        verdict,
        summary.risk_score,
        summary.change_count,
        payload.before.sampled_rows,
        payload.after.sampled_rows,
    );

    html.push_str("<table>\n<thead><tr><th>Kind</th><th>Field</th><th>Before</th>");
    html.push_str("<th>After</th><th>Severity</th><th>Note</th></tr></thead>\n<tbody>\n");

    if payload.changes.is_empty() {
        html.push_str("<tr><td class=\"empty\" colspan=\"6\">No drift detected</td></tr>\n");
    }

    for change in &payload.changes {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td><code>{}</code></td><td>{}</td><td>{}</td>\
             <td class=\"sev-{}\">{}</td><td>{}</td></tr>",
            escape_html(change.kind.as_str()),
            escape_html(&change.field),
            escape_html(change.before.as_deref().unwrap_or("")),
            escape_html(change.after.as_deref().unwrap_or("")),
            escape_html(change.severity.as_str()),
            escape_html(change.severity.as_str()),
            escape_html(&change.note),
        );
    }

    html.push_str("</tbody>\n</table>\n");
    let _ = writeln!(
        html,
        "<p><small>Generated {}</small></p>",
        escape_html(&payload.generated_at.to_rfc3339())
    );
    html.push_str("</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff_schemas;
    use crate::inference::{DatasetSchema, FieldSchema, FieldType};
    use crate::sources::SourceFormat;

    fn payload(before: Vec<FieldSchema>, after: Vec<FieldSchema>) -> DriftPayload {
        let before = DatasetSchema::from_fields(SourceFormat::Csv, 2, before);
        let after = DatasetSchema::from_fields(SourceFormat::Csv, 2, after);
        let report = diff_schemas(&before, &after);
        DriftPayload::new(&before, &after, &report)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_field_names_are_escaped() {
        let html = payload(
            vec![],
            vec![FieldSchema::new("<script>alert(1)</script>", FieldType::Int, false, 1.0)],
        );
        let html = render_html(&html);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_breaking_banner() {
        let html = render_html(&payload(
            vec![FieldSchema::new("status", FieldType::String, false, 1.0)],
            vec![],
        ));
        assert!(html.contains("banner breaking"));
        assert!(html.contains("BREAKING"));
        assert!(html.contains("<td class=\"sev-high\">high</td>"));
        assert!(html.contains(">35</span>/100"));
    }

    #[test]
    fn test_empty_report() {
        let html = render_html(&payload(vec![], vec![]));
        assert!(html.contains("banner ok"));
        assert!(html.contains("No drift detected"));
    }
}

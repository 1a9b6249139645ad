use healthlens_types::Report;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A bare `<table>` fragment, ready to embed in a page or notebook cell.
pub fn render(report: &Report) -> String {
    let mut html = String::from("<table>\n");
    html.push_str("  <tr><th>Category</th><th>Status</th><th>Remarks</th></tr>\n");
    for (category, status, remarks) in report.rows() {
        html.push_str("  <tr>\n");
        for cell in [category, status.as_str(), remarks] {
            html.push_str(&format!("    <td>{}</td>\n", escape(cell)));
        }
        html.push_str("  </tr>\n");
    }
    html.push_str("</table>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use healthlens_types::{Dialect, HealthRecord};

    #[test]
    fn test_cells_are_escaped() {
        let report = Report {
            dialect: Dialect::Banner,
            evaluated_at: NaiveDateTime::default(),
            records: vec![HealthRecord::ok("A/C <dump>", "OK", "Pacemaker & Corosync")],
        };
        insta::assert_snapshot!(render(&report), @r"
        <table>
          <tr><th>Category</th><th>Status</th><th>Remarks</th></tr>
          <tr>
            <td>A/C &lt;dump&gt;</td>
            <td>✅ OK</td>
            <td>Pacemaker &amp; Corosync</td>
          </tr>
        </table>
        ");
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let report = Report {
            dialect: Dialect::Banner,
            evaluated_at: NaiveDateTime::default(),
            records: vec![],
        };
        assert_eq!(render(&report).matches("<tr>").count(), 1);
    }
}

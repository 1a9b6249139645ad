use healthlens_types::{HealthRecord, Report, StatusLevel};
use owo_colors::OwoColorize;

const GAP: &str = "  ";
const MIN_REMARKS_WIDTH: usize = 24;
const CATEGORY_HEADER: &str = "Category";
const STATUS_HEADER: &str = "Status";
const REMARKS_HEADER: &str = "Remarks";

#[derive(Debug, Clone, Copy, Default)]
pub struct TableOptions {
    pub color: bool,
    /// Terminal width in columns; remarks wrap to fit when set
    pub width: Option<usize>,
}

fn text_width(text: &str) -> usize {
    text.chars().filter(|&c| c != '\u{fe0f}').count()
}

// Status symbols take two cells in common terminals
fn status_width(record: &HealthRecord) -> usize {
    3 + text_width(&record.verdict)
}

fn paint(record: &HealthRecord, color: bool) -> String {
    let text = record.status_text();
    if !color {
        return text;
    }
    match record.status {
        StatusLevel::Ok => text.green().to_string(),
        StatusLevel::Warning => text.yellow().bold().to_string(),
        StatusLevel::Info => text.cyan().to_string(),
        StatusLevel::Unknown => text.bright_black().to_string(),
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text_width(text) <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while text_width(&word) > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.chars().take(width).collect());
            word = word.chars().skip(width).collect();
        }
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            current = word;
        } else if text_width(&current) + 1 + text_width(&word) <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn tally(report: &Report) -> String {
    format!(
        "{} checks: {} OK, {} Warning, {} Info, {} Unknown",
        report.len(),
        report.count(StatusLevel::Ok),
        report.count(StatusLevel::Warning),
        report.count(StatusLevel::Info),
        report.count(StatusLevel::Unknown)
    )
}

fn pad(width: usize, used: usize) -> String {
    " ".repeat(width.saturating_sub(used))
}

pub fn render(report: &Report, options: &TableOptions) -> String {
    if report.is_empty() {
        return format!("No sections found\n{}\n", tally(report));
    }

    let category_w = report
        .iter()
        .map(|r| text_width(&r.category))
        .chain([CATEGORY_HEADER.len()])
        .max()
        .unwrap_or(0);
    let status_w = report
        .iter()
        .map(status_width)
        .chain([STATUS_HEADER.len()])
        .max()
        .unwrap_or(0);
    let remarks_max = report
        .iter()
        .map(|r| text_width(&r.remarks))
        .chain([REMARKS_HEADER.len()])
        .max()
        .unwrap_or(0);
    let indent = category_w + status_w + 2 * GAP.len();
    let remarks_w = options
        .width
        .map(|w| w.saturating_sub(indent).max(MIN_REMARKS_WIDTH));

    let mut lines = vec![
        format!(
            "{}{}{}{}{}{}{}",
            CATEGORY_HEADER,
            pad(category_w, CATEGORY_HEADER.len()),
            GAP,
            STATUS_HEADER,
            pad(status_w, STATUS_HEADER.len()),
            GAP,
            REMARKS_HEADER
        ),
        format!(
            "{}{}{}{}{}",
            "-".repeat(category_w),
            GAP,
            "-".repeat(status_w),
            GAP,
            "-".repeat(remarks_w.map_or(remarks_max, |w| w.min(remarks_max)))
        ),
    ];

    for record in report {
        let remarks = match remarks_w {
            Some(w) => wrap(&record.remarks, w),
            None => vec![record.remarks.clone()],
        };
        let mut remarks = remarks.into_iter();
        lines.push(format!(
            "{}{}{}{}{}{}{}",
            record.category,
            pad(category_w, text_width(&record.category)),
            GAP,
            paint(record, options.color),
            pad(status_w, status_width(record)),
            GAP,
            remarks.next().unwrap_or_default()
        ));
        for continuation in remarks {
            lines.push(format!("{}{}", " ".repeat(indent), continuation));
        }
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&tally(report));
    out.push('\n');
    out
}

use crate::domain::model::{CheckedPackage, ReportSummary};
use chrono::{DateTime, SecondsFormat, Utc};

/// Fixed report name, written to the storage root (the working directory).
pub const REPORT_FILE: &str = "addons.html";

/// Splits checked packages into report partitions without reordering them.
pub fn partition(packages: Vec<CheckedPackage>) -> ReportSummary {
    let mut summary = ReportSummary::default();
    for package in packages {
        if package.is_unknown() {
            summary.unknown.push(package);
        } else if package.is_outdated {
            summary.outdated.push(package);
        } else {
            summary.up_to_date.push(package);
        }
    }
    summary
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn remote_version(package: &CheckedPackage) -> &str {
    package.remote_version.as_deref().unwrap_or_default()
}

/// 與 HTML 報告相同內容的純文字行
pub fn console_lines(summary: &ReportSummary) -> Vec<String> {
    let mut lines = Vec::with_capacity(summary.total());

    for package in &summary.outdated {
        lines.push(format!(
            "Found newer version of {} ( {} -> {} ): {}",
            package.id,
            package.local_version,
            remote_version(package),
            package.catalog_url
        ));
    }

    for package in &summary.up_to_date {
        lines.push(format!(
            "Addon {} ( {} ) is at the latest version",
            package.id, package.local_version
        ));
    }

    for package in &summary.unknown {
        lines.push(format!(
            "Could not find the newest version of {} ( {} ): {}",
            package.id, package.local_version, package.catalog_url
        ));
    }

    lines
}

pub fn render_html(summary: &ReportSummary, generated_at: DateTime<Utc>) -> String {
    let mut html = String::new();
    html.push_str("<html><body><h1>Addons:</h1>\n");
    html.push_str(&format!(
        "<p>Checked at {}</p>\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));

    html.push_str("<h2>Outdated:</h2><ul>\n");
    for package in &summary.outdated {
        html.push_str(&format!(
            "<li>Newer version of {} ( {} -> {} ): <a href=\"{}\">Curse link</a></li>\n",
            escape_html(&package.id),
            escape_html(&package.local_version),
            escape_html(remote_version(package)),
            escape_html(&package.catalog_url)
        ));
    }

    html.push_str("</ul><h2>Up to date:</h2><ul>\n");
    for package in &summary.up_to_date {
        html.push_str(&format!(
            "<li>Addon {} ( {} ) is at the latest version</li>\n",
            escape_html(&package.id),
            escape_html(&package.local_version)
        ));
    }
    html.push_str("</ul>");

    if !summary.unknown.is_empty() {
        html.push_str("<h2>Unknown:</h2><ul>\n");
        for package in &summary.unknown {
            html.push_str(&format!(
                "<li>No newest version found for {} ( {} ): <a href=\"{}\">Curse link</a></li>\n",
                escape_html(&package.id),
                escape_html(&package.local_version),
                escape_html(&package.catalog_url)
            ));
        }
        html.push_str("</ul>");
    }

    html.push_str("</body></html>");
    html
}

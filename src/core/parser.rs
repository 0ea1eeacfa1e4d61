//! Narrow text extractors for addon metadata files and catalog pages.
//!
//! Each function is pure: text in, optional captured value out.

use regex::Regex;
use std::sync::OnceLock;

const PROJECT_ID_PATTERN: &str = r"X-Curse-Project-ID: (.*)";
const PACKAGED_VERSION_PATTERN: &str = r"X-Curse-Packaged-Version: (.*)";
const NEWEST_FILE_PATTERN: &str = r#"<li class="newest-file">Newest File: (.*)</li>"#;

fn project_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PROJECT_ID_PATTERN).expect("project id pattern is valid"))
}

fn packaged_version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(PACKAGED_VERSION_PATTERN).expect("packaged version pattern is valid")
    })
}

fn newest_file_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NEWEST_FILE_PATTERN).expect("newest file pattern is valid"))
}

/// 移除行尾殘留的 `\r`（CRLF 檔案會留下）
pub fn trim_carriage_return(value: &str) -> &str {
    value.trim_end_matches('\r')
}

fn capture_line_value(re: &Regex, text: &str) -> Option<String> {
    let raw = re.captures(text)?.get(1)?.as_str();
    let value = trim_carriage_return(raw);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Value of the first `X-Curse-Project-ID:` line, if any.
pub fn parse_project_id(metadata: &str) -> Option<String> {
    capture_line_value(project_id_regex(), metadata)
}

/// Value of the first `X-Curse-Packaged-Version:` line, if any.
pub fn parse_packaged_version(metadata: &str) -> Option<String> {
    capture_line_value(packaged_version_regex(), metadata)
}

/// Version string from the catalog page's newest-file list item.
pub fn parse_newest_version(html: &str) -> Option<String> {
    newest_file_regex()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOC: &str = concat!(
        "## Interface: 70200\r\n",
        "## Title: Deadly Boss Mods\r\n",
        "## X-Curse-Packaged-Version: 7.2.5\r\n",
        "## X-Curse-Project-Name: Deadly Boss Mods\r\n",
        "## X-Curse-Project-ID: deadly-boss-mods\r\n",
        "\r\n",
        "DBM-Core.lua\r\n",
    );

    #[test]
    fn test_parse_crlf_toc() {
        assert_eq!(parse_project_id(TOC).as_deref(), Some("deadly-boss-mods"));
        assert_eq!(parse_packaged_version(TOC).as_deref(), Some("7.2.5"));
    }

    #[test]
    fn test_parse_lf_toc() {
        let toc = "X-Curse-Project-ID: 123\nX-Curse-Packaged-Version: 1.0\n";
        assert_eq!(parse_project_id(toc).as_deref(), Some("123"));
        assert_eq!(parse_packaged_version(toc).as_deref(), Some("1.0"));
    }

    #[test]
    fn test_missing_id_returns_none() {
        let toc = "## Title: Bagnon\n## X-Curse-Packaged-Version: 2.0\n";
        assert_eq!(parse_project_id(toc), None);
    }

    #[test]
    fn test_empty_id_returns_none() {
        assert_eq!(parse_project_id("## X-Curse-Project-ID: \r\n"), None);
    }

    #[test]
    fn test_first_matching_line_wins() {
        let toc = "X-Curse-Project-ID: first\nX-Curse-Project-ID: second\n";
        assert_eq!(parse_project_id(toc).as_deref(), Some("first"));
    }

    #[test]
    fn test_trim_carriage_return() {
        assert_eq!(trim_carriage_return("1.0\r"), "1.0");
        assert_eq!(trim_carriage_return("1.0"), "1.0");
        assert_eq!(trim_carriage_return(""), "");
    }

    #[test]
    fn test_trim_carriage_return_is_idempotent() {
        for value in ["1.0\r", "1.0", "1.0\r\r", "\r"] {
            let once = trim_carriage_return(value);
            assert_eq!(trim_carriage_return(once), once);
        }
    }

    #[test]
    fn test_parse_newest_version() {
        let html = r#"<ul class="details-list">
<li class="version">Supports: 7.2.0</li>
<li class="newest-file">Newest File: 7.2.6</li>
</ul>"#;
        assert_eq!(parse_newest_version(html).as_deref(), Some("7.2.6"));
    }

    #[test]
    fn test_parse_newest_version_missing_fragment() {
        assert_eq!(parse_newest_version("<html><body>Not here</body></html>"), None);
    }
}

use std::sync::LazyLock;

use regex::Regex;

use super::sanitize::SEPARATOR;

// title line, optional second title line, result, "(CODE) - (ignored)", date range
static COURSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*)(\n.*)?\n(.*)\n\((.*)\) - \(.*\)\n\d{2}/\d{2}/\d{4}-\d{2}/\d{2}/\d{4}")
        .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub result: String,
}

/// Scan the text for course blocks, in document order.
pub fn extract_courses(text: &str) -> Vec<Course> {
    COURSE_RE
        .captures_iter(text)
        .map(|caps| {
            let first = caps.get(1).map_or("", |m| m.as_str());
            let second = caps.get(2).map_or("", |m| m.as_str());
            Course {
                code: caps[4].to_string(),
                title: clean_title(first, second),
                result: caps[3].to_string(),
            }
        })
        .collect()
}

fn clean_title(first: &str, second: &str) -> String {
    format!("{}{}", first, second)
        .replace('\n', " ")
        .replace(SEPARATOR, "")
        .trim()
        .to_string()
}

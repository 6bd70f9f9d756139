pub mod courses;
pub mod name;
pub mod sanitize;

use courses::Course;

/// What one document yields: the inferred owner and their courses.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub name: Option<String>,
    pub courses: Vec<Course>,
}

/// Three-pass pipeline: raw text → sanitized text → name + course blocks.
pub fn process_text(raw: &str) -> (String, Transcript) {
    let text = sanitize::sanitize(raw);
    let transcript = Transcript {
        name: name::extract_name(&text),
        courses: courses::extract_courses(&text),
    };
    (text, transcript)
}

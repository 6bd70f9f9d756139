use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static FOOTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*)\nPage  \d+ of \d+").unwrap());

/// Infer the transcript owner's name from the line above each page footer.
///
/// The cover page carries a differently formatted name, so candidates are
/// voted on rather than taking the first one. Ties go to the candidate seen
/// first. A document with a single footer still yields that one candidate,
/// even when it comes from the cover page.
pub fn extract_name(text: &str) -> Option<String> {
    let candidates: Vec<&str> = FOOTER_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    most_common(&candidates).map(title_case)
}

fn most_common<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &c in candidates {
        *counts.entry(c).or_default() += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for &c in candidates {
        let n = counts[c];
        match best {
            Some((_, top)) if n <= top => {}
            _ => best = Some((c, n)),
        }
    }
    best.map(|(c, _)| c)
}

/// Title-case each word, where a word is a run of cased letters. Digits,
/// punctuation and uncased scripts all end a word, so "o'neil 2nd" becomes
/// "O'Neil 2Nd". A first letter whose upper case expands to several
/// characters keeps only the first of them upper-case ("ß" → "Ss").
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if cased && in_word {
            out.extend(ch.to_lowercase());
        } else if cased {
            let mut upper = ch.to_uppercase();
            out.extend(upper.next());
            upper.for_each(|c| out.extend(c.to_lowercase()));
        } else {
            out.push(ch);
        }
        in_word = cased;
    }
    out
}

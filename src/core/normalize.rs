//! Text normalization applied to both the spoken transcript and the expected
//! phrase before they are judged.
//!
//! Steps, in order: contraction expansion, lowercasing, removal of anything
//! that is neither a word character nor whitespace, trimming.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Contractions whose expansion does not follow the suffix rules.
static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("won't", "will not");
    map.insert("can't", "cannot");
    map.insert("shan't", "shall not");
    map.insert("ain't", "are not");
    map.insert("let's", "let us");
    map.insert("y'all", "you all");
    map.insert("ma'am", "madam");
    map.insert("o'clock", "of the clock");
    map.insert("'cause", "because");
    map.insert("gonna", "going to");
    map.insert("gotta", "got to");
    map.insert("wanna", "want to");
    map
});

/// Words where a trailing `'s` means "is" rather than a possessive.
static IS_BASES: &[&str] = &[
    "it", "he", "she", "that", "what", "there", "here", "who", "where", "when", "how", "why",
    "this",
];

static APOSTROPHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\u{2018}\u{2019}\u{02BC}`]").unwrap());

static CONTRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)'cause\b|\b[a-z]+(?:'[a-z]+)+\b|\b(?:gonna|gotta|wanna)\b").unwrap());

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Normalize `text` so that two phrasings of the same sentence compare equal.
pub fn normalize_text(text: &str) -> String {
    let expanded = expand_contractions(text);
    let lowered = expanded.to_lowercase();
    NON_WORD.replace_all(&lowered, "").trim().to_string()
}

/// Expand contractions. Output case of an expanded token is lowercase.
pub fn expand_contractions(text: &str) -> String {
    let unified = APOSTROPHES.replace_all(text, "'");

    CONTRACTION
        .replace_all(&unified, |caps: &regex::Captures| {
            let token = &caps[0];
            expand_token(&token.to_lowercase()).unwrap_or_else(|| token.to_string())
        })
        .into_owned()
}

/// Expands the last suffix, then whatever is left of the token, so stacked
/// forms like `wouldn't've` come out fully expanded.
fn expand_token(token: &str) -> Option<String> {
    if let Some(full) = IRREGULAR.get(token) {
        return Some(full.to_string());
    }

    let (base, suffix) = token.rsplit_once('\'')?;
    let (base, expansion) = match suffix {
        "t" => (base.strip_suffix('n')?, "not"),
        "re" => (base, "are"),
        "ll" => (base, "will"),
        "ve" => (base, "have"),
        "m" => (base, "am"),
        "d" => (base, "would"),
        "s" if IS_BASES.contains(&base) => (base, "is"),
        _ => return None,
    };
    let head = expand_token(base).unwrap_or_else(|| base.to_string());
    Some(format!("{} {}", head, expansion))
}

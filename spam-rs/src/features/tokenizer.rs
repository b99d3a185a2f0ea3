//! Word tokenization and n-gram generation

use regex::Regex;
use std::sync::OnceLock;

/// Runs of two or more Unicode word characters
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"))
}

/// Split text into word tokens
pub fn tokenize(text: &str, lowercase: bool) -> Vec<String> {
    let text = if lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    token_regex()
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// All contiguous n-grams of `tokens` for n in `min_n..=max_n`, joined by a
/// single space. Shorter n-grams come first.
pub fn ngrams(tokens: &[String], min_n: usize, max_n: usize) -> Vec<String> {
    let mut grams = Vec::new();

    for n in min_n.max(1)..=max_n {
        if n > tokens.len() {
            break;
        }
        grams.extend(tokens.windows(n).map(|window| window.join(" ")));
    }

    grams
}

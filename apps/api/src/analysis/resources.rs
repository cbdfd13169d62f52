use regex::Regex;
use std::sync::LazyLock;

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"'];

/// Collects every URL in `text`, left to right, duplicates kept.
/// Returns `None` when there are none.
pub fn extract_resources(text: &str) -> Option<Vec<String>> {
    let resources: Vec<String> = URL_REGEX
        .find_iter(text)
        .map(|m| trim_url(m.as_str()).to_string())
        .collect();

    if resources.is_empty() {
        None
    } else {
        Some(resources)
    }
}

/// Drops sentence punctuation and unbalanced closing brackets glued to the end of a URL,
/// e.g. the `)` in `(see https://example.com/guide)`.
fn trim_url(url: &str) -> &str {
    let mut url = url;
    loop {
        let Some(last) = url.chars().last() else {
            return url;
        };
        let unbalanced = match last {
            ')' => url.matches('(').count() < url.matches(')').count(),
            ']' => url.matches('[').count() < url.matches(']').count(),
            c => TRAILING_PUNCTUATION.contains(&c),
        };
        if !unbalanced {
            return url;
        }
        url = &url[..url.len() - last.len_utf8()];
    }
}

//! Policy tags referenced inside a question.
//!
//! A user can mention `@leave` or `@dress_code` in a message. The tags the
//! catalog knows are forwarded as `policyKeys` so the backend can narrow
//! its document search.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Any `@word` token in free text.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@[A-Za-z0-9_]+").unwrap());

#[derive(Debug, Clone, Default)]
pub struct PolicyCatalog {
    keys: Vec<String>,
}

impl PolicyCatalog {
    pub fn new(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Known tags mentioned in `text`, in catalog order, without duplicates.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mentioned: Vec<&str> = TAG_RE.find_iter(text).map(|m| m.as_str()).collect();
        self.keys
            .iter()
            .filter(|key| mentioned.contains(&key.as_str()))
            .cloned()
            .collect()
    }

    /// Add `key` to the input buffer, or remove it if already present.
    /// Returns whether the key is in the buffer afterwards. Unknown keys
    /// leave the buffer untouched.
    pub fn toggle(&self, input: &mut String, key: &str) -> bool {
        if !self.keys.iter().any(|k| k == key) {
            return false;
        }
        let spans: Vec<Range<usize>> = TAG_RE
            .find_iter(input)
            .filter(|m| m.as_str() == key)
            .map(|m| m.range())
            .collect();
        if !spans.is_empty() {
            for span in spans.into_iter().rev() {
                let span = with_one_separator(input, span);
                input.replace_range(span, "");
            }
            false
        } else {
            let joined = format!("{} {}", input.trim_end(), key);
            *input = joined.trim().to_string();
            true
        }
    }
}

/// Widen a tag span by the whitespace character before it, or after it
/// when the tag starts the text, so removal leaves no doubled gap.
fn with_one_separator(text: &str, span: Range<usize>) -> Range<usize> {
    if let Some(c) = text[..span.start].chars().next_back().filter(|c| c.is_whitespace()) {
        return span.start - c.len_utf8()..span.end;
    }
    match text[span.end..].chars().next().filter(|c| c.is_whitespace()) {
        Some(c) => span.start..span.end + c.len_utf8(),
        None => span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PolicyCatalog {
        PolicyCatalog::new(["@dress_code", "@leave", "@annual_leave"])
    }

    #[test]
    fn extracts_known_tags_in_catalog_order() {
        let keys = catalog().extract("compare @annual_leave with @leave please");
        assert_eq!(keys, vec!["@leave", "@annual_leave"]);
    }

    #[test]
    fn ignores_unknown_and_partial_tags() {
        let keys = catalog().extract("@leaves and @parking and leave");
        assert!(keys.is_empty());
    }

    #[test]
    fn duplicates_are_reported_once() {
        let keys = catalog().extract("@leave @leave @leave");
        assert_eq!(keys, vec!["@leave"]);
    }

    #[test]
    fn toggle_appends_then_removes() {
        let catalog = catalog();
        let mut input = String::from("what is the");
        assert!(catalog.toggle(&mut input, "@dress_code"));
        assert_eq!(input, "what is the @dress_code");

        assert!(!catalog.toggle(&mut input, "@dress_code"));
        assert_eq!(input, "what is the");
    }

    #[test]
    fn toggle_into_empty_input() {
        let mut input = String::new();
        assert!(catalog().toggle(&mut input, "@leave"));
        assert_eq!(input, "@leave");
    }

    #[test]
    fn toggle_unknown_key_is_ignored() {
        let mut input = String::from("hello");
        assert!(!catalog().toggle(&mut input, "@parking"));
        assert_eq!(input, "hello");
    }

    #[test]
    fn toggle_removes_tag_followed_by_punctuation() {
        let mut input = String::from("how many days of @leave?");
        assert!(!catalog().toggle(&mut input, "@leave"));
        assert_eq!(input, "how many days of?");
        assert!(catalog().extract(&input).is_empty());
    }

    #[test]
    fn toggle_removal_keeps_other_whitespace() {
        let mut input = String::from("@leave first line\nsecond  line");
        assert!(!catalog().toggle(&mut input, "@leave"));
        assert_eq!(input, "first line\nsecond  line");
    }

    #[test]
    fn toggle_leaves_longer_tags_alone() {
        let mut input = String::from("@annual_leave and @leave");
        assert!(!catalog().toggle(&mut input, "@leave"));
        assert_eq!(input, "@annual_leave and");
    }
}

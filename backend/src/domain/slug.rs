//! Slug derivation for first-party blog posts.
//!
//! A slug is the lowercased title with every run of non-alphanumeric
//! characters collapsed into a single hyphen and leading/trailing hyphens
//! stripped. Slugs are not deduplicated: two posts with the same title share
//! a slug, and lookups return the earliest match.

/// Derive a URL-safe slug from a post title.
///
/// # Examples
/// ```
/// use backend::domain::slug_from_title;
///
/// assert_eq!(slug_from_title("Hello, World!"), "hello-world");
/// ```
pub fn slug_from_title(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;
    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            // Separators only materialise between two kept characters, which
            // strips them from both ends for free.
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::punctuation("Hello, World!", "hello-world")]
    #[case::surrounding_separators("  ---Test---  ", "test")]
    #[case::mixed_case("Building AI Agents", "building-ai-agents")]
    #[case::digits("Top 10 Tips", "top-10-tips")]
    #[case::collapsed_runs("a  --  b", "a-b")]
    #[case::empty("", "")]
    #[case::only_separators("!!!", "")]
    fn derives_expected_slug(#[case] title: &str, #[case] expected: &str) {
        assert_eq!(slug_from_title(title), expected);
    }

    #[test]
    fn identical_titles_share_a_slug() {
        assert_eq!(
            slug_from_title("Launch Week"),
            slug_from_title("Launch Week"),
        );
    }
}

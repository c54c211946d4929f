const EMPTY_SLUG: &str = "item";

/// Lowercase, hyphen-separated token safe for ids and URLs.
///
/// Runs of non-alphanumeric characters collapse to a single `-`, boundary
/// hyphens are stripped, and an input with nothing left becomes `"item"`.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_dash = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }

    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::{is_slug, slugify};

    #[test]
    fn slug_sanitization_is_stable() {
        assert_eq!(slugify("Main Session #1"), "main-session-1");
        assert_eq!(slugify("abc___def"), "abc-def");
        assert_eq!(slugify("--Dragons--"), "dragons");
    }

    #[test]
    fn slug_falls_back_to_item() {
        assert_eq!(slugify("!!!"), "item");
        assert_eq!(slugify(""), "item");
        assert_eq!(slugify("银龙"), "item");
    }

    #[test]
    fn slug_is_idempotent() {
        for raw in ["Hello World", "a--b", "  x  ", "银龙 dragons 2024", "???", "ABC-123"] {
            let once = slugify(raw);
            assert_eq!(slugify(&once), once, "input {raw:?}");
            assert!(is_slug(&once), "input {raw:?} gave {once:?}");
        }
    }

    #[test]
    fn is_slug_rejects_unsafe_ids() {
        assert!(is_slug("dragons-20240101-0900-001-2"));
        assert!(!is_slug("Dragons"));
        assert!(!is_slug("a--b"));
        assert!(!is_slug("-a"));
        assert!(!is_slug(""));
    }
}

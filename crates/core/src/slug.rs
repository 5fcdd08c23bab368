//! Slug normalization for form URLs
//!
//! Slugs identify forms in public URLs, so they are restricted to
//! `[a-z0-9-]`. [`slugify`] is the single normalization used everywhere a
//! slug is derived from display text.

/// Normalize arbitrary text into a slug.
///
/// Lowercases the input and collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen. Total over any input and idempotent.
/// Leading and trailing runs still map to a hyphen - `"Contact Form!!"`
/// becomes `"contact-form-"` - matching what the backend stores for
/// existing forms.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut in_separator_run = false;

    for c in input.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_separator_run = false;
        } else if !in_separator_run {
            slug.push('-');
            in_separator_run = true;
        }
    }

    slug
}

/// Resolve the slug to persist for a form.
///
/// An explicitly entered slug wins verbatim (trimmed); a blank slug falls
/// back to deriving one from the form's name.
pub fn effective_slug(entered: &str, name: &str) -> String {
    let entered = entered.trim();
    if entered.is_empty() {
        slugify(name)
    } else {
        entered.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("My Leads"), "my-leads");
        assert_eq!(slugify("Lead Capture"), "lead-capture");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("a   b"), "a-b");
        assert_eq!(slugify("a---b"), "a-b");
        assert_eq!(slugify("a!!??b"), "a-b");
    }

    #[test]
    fn test_slugify_keeps_edge_hyphens() {
        // Trailing/leading separator runs map to a hyphen, not nothing
        assert_eq!(slugify("Contact Form!!"), "contact-form-");
        assert_eq!(slugify(" My Leads "), "-my-leads-");
    }

    #[test]
    fn test_slugify_total() {
        for input in ["", "!!!", "日本語", "\t\n", "çà-et-là"] {
            let slug = slugify(input);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slugify({input:?}) produced {slug:?}"
            );
        }
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "-");
    }

    #[test]
    fn test_slugify_idempotent() {
        for input in ["Contact Form!!", "My Leads", "x  y", "9 to 5"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_effective_slug_explicit_wins() {
        assert_eq!(effective_slug("custom-slug", "Ignored Name"), "custom-slug");
        assert_eq!(effective_slug("  padded  ", "Ignored"), "padded");
    }

    #[test]
    fn test_effective_slug_derives_from_name() {
        assert_eq!(effective_slug("", "My Leads"), "my-leads");
        assert_eq!(effective_slug("   ", "My Leads"), "my-leads");
    }
}

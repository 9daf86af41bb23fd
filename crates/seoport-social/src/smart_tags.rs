//! Translation of legacy `%macro%` placeholders to `#smart_tag` tokens.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static MACRO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%([a-z0-9_]+)%").unwrap());

/// Smart tag for a legacy macro name, if there is one.
fn smart_tag(name: &str) -> Option<String> {
    if let Some(field) = name.strip_prefix("cf_") {
        return Some(format!("#custom_field-{field}"));
    }
    if let Some(taxonomy) = name.strip_prefix("tax_") {
        return Some(format!("#tax_name-{taxonomy}"));
    }

    let tag = match name {
        "site_title" | "blog_title" => "#site_title",
        "site_description" | "blog_description" => "#tagline",
        "page_title" | "post_title" | "wp_title" => "#post_title",
        "category_title" | "category" | "tag_title" | "tag" | "taxonomy_title" => {
            "#taxonomy_title"
        }
        "category_description" | "tag_description" | "taxonomy_description" => {
            "#taxonomy_description"
        }
        "description" => "#description",
        "post_excerpt" => "#post_excerpt",
        "post_content" => "#post_content",
        "author" => "#author_name",
        "post_author_login" | "post_author_nicename" | "post_author_firstname" => {
            "#author_first_name"
        }
        "post_author_lastname" => "#author_last_name",
        "current_date" => "#current_date",
        "current_day" => "#current_day",
        "current_month" => "#current_month",
        "current_year" => "#current_year",
        "post_date" => "#post_date",
        "post_day" => "#post_day",
        "post_month" => "#post_month",
        "post_year" => "#post_year",
        "archive_title" | "date" => "#archive_title",
        "page" => "#page_number",
        "search" => "#search_term",
        _ => return None,
    };
    Some(tag.to_string())
}

/// Replace every known `%macro%` with its smart tag; unknown macros are kept.
///
/// ```
/// use seoport_social::smart_tags::macros_to_smart_tags;
///
/// assert_eq!(
///     macros_to_smart_tags("%post_title% | %blog_title%"),
///     "#post_title | #site_title"
/// );
/// ```
pub fn macros_to_smart_tags(value: &str) -> String {
    MACRO_RE
        .replace_all(value, |caps: &Captures| {
            smart_tag(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_macros() {
        assert_eq!(macros_to_smart_tags("%blog_description%"), "#tagline");
        assert_eq!(macros_to_smart_tags("%category% archives"), "#taxonomy_title archives");
        assert_eq!(macros_to_smart_tags("%page% of %search%"), "#page_number of #search_term");
    }

    #[test]
    fn test_prefixed_macros() {
        assert_eq!(macros_to_smart_tags("%cf_subtitle%"), "#custom_field-subtitle");
        assert_eq!(macros_to_smart_tags("%tax_genre%"), "#tax_name-genre");
    }

    #[test]
    fn test_unknown_and_plain_text() {
        assert_eq!(macros_to_smart_tags("%unknown_thing%"), "%unknown_thing%");
        assert_eq!(macros_to_smart_tags("50% off, 20% more"), "50% off, 20% more");
        assert_eq!(macros_to_smart_tags("#site_title"), "#site_title");
    }
}

//! Sanitization and escaping services.
//!
//! The migration only depends on the [`Sanitizer`] trait. [`DefaultSanitizer`]
//! is a plain-text implementation good enough for snapshot migrations; a host
//! with its own escaping rules plugs in its own implementation.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script\s*>|<style[^>]*>.*?</style\s*>").unwrap()
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n\t ]+").unwrap());
static OCTET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%[a-fA-F0-9]{2}").unwrap());
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z][a-zA-Z0-9+.-]*):").unwrap());
static TWITTER_PROFILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:www\.|mobile\.)?(?:twitter|x)\.com/@?([^/?#]+)").unwrap()
});

/// URL schemes [`DefaultSanitizer::esc_url`] lets through.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps", "mailto"];

/// ASCII punctuation kept in escaped URLs; everything else is dropped.
const URL_PUNCTUATION: &str = "-~+_.?#=!&;,/:%@$|*'()[]";

/// Cleans values before they are stored.
pub trait Sanitizer {
    /// Clean a free-text option value.
    fn sanitize_option(&self, value: &str) -> String;

    /// Clean a single-line plain-text field.
    fn sanitize_text_field(&self, value: &str) -> String;

    /// Remove HTML tags, dropping script and style bodies entirely.
    fn strip_all_tags(&self, value: &str) -> String;

    /// Escape a URL, returning an empty string when it is not safe to store.
    fn esc_url(&self, value: &str) -> String;

    /// Reduce a Twitter handle or profile URL to a bare username.
    fn prepare_username(&self, value: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSanitizer;

impl DefaultSanitizer {
    fn collapse_whitespace(value: &str) -> String {
        WHITESPACE_RE.replace_all(value, " ").trim().to_string()
    }
}

impl Sanitizer for DefaultSanitizer {
    fn sanitize_option(&self, value: &str) -> String {
        Self::collapse_whitespace(&self.strip_all_tags(value))
    }

    fn sanitize_text_field(&self, value: &str) -> String {
        let stripped = self.strip_all_tags(value);
        Self::collapse_whitespace(&OCTET_RE.replace_all(&stripped, ""))
    }

    fn strip_all_tags(&self, value: &str) -> String {
        let without_scripts = SCRIPT_STYLE_RE.replace_all(value, "");
        TAG_RE.replace_all(&without_scripts, "").trim().to_string()
    }

    fn esc_url(&self, value: &str) -> String {
        let url: String = value
            .trim()
            .replace(' ', "%20")
            .chars()
            .filter(|c| !c.is_ascii() || c.is_ascii_alphanumeric() || URL_PUNCTUATION.contains(*c))
            .collect();

        if url.is_empty() || url.starts_with('/') || url.starts_with('#') || url.starts_with('?') {
            return url;
        }

        match SCHEME_RE.captures(&url) {
            Some(caps) => {
                let scheme = caps[1].to_ascii_lowercase();
                // `example.com:8080/path` has no scheme, just a port.
                let is_port = url[caps[0].len()..].starts_with(|c: char| c.is_ascii_digit());
                if ALLOWED_SCHEMES.contains(&scheme.as_str()) {
                    url
                } else if is_port {
                    format!("http://{url}")
                } else {
                    String::new()
                }
            }
            None => format!("http://{url}"),
        }
    }

    fn prepare_username(&self, value: &str) -> String {
        let value = value.trim();
        let handle = match TWITTER_PROFILE_RE.captures(value) {
            Some(caps) => caps[1].to_string(),
            None => value.to_string(),
        };
        handle.trim_start_matches('@').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_all_tags() {
        let s = DefaultSanitizer;
        assert_eq!(s.strip_all_tags("<b>Bold</b> text"), "Bold text");
        assert_eq!(
            s.strip_all_tags("Hi<script type=\"x\">alert(1)</script> there"),
            "Hi there"
        );
        assert_eq!(s.strip_all_tags("<style>p{}</style>Plain"), "Plain");
    }

    #[test]
    fn test_sanitize_option_collapses_whitespace() {
        let s = DefaultSanitizer;
        assert_eq!(s.sanitize_option("  Custom\n\tTitle  "), "Custom Title");
        assert_eq!(s.sanitize_option("#site_title - Example"), "#site_title - Example");
        assert_eq!(s.sanitize_option("100%25 real"), "100%25 real");
    }

    #[test]
    fn test_sanitize_text_field_drops_octets() {
        let s = DefaultSanitizer;
        assert_eq!(s.sanitize_text_field("@me%0A"), "@me");
        assert_eq!(s.sanitize_text_field("<i>@me</i>"), "@me");
    }

    #[test]
    fn test_esc_url() {
        let s = DefaultSanitizer;
        assert_eq!(s.esc_url("https://example.com/a b.png"), "https://example.com/a%20b.png");
        assert_eq!(s.esc_url("example.com/img.png"), "http://example.com/img.png");
        assert_eq!(s.esc_url("example.com:8080/img.png"), "http://example.com:8080/img.png");
        assert_eq!(s.esc_url("/wp-content/uploads/x.png"), "/wp-content/uploads/x.png");
        assert_eq!(s.esc_url("javascript:alert(1)"), "");
        assert_eq!(s.esc_url("  "), "");
        assert_eq!(s.esc_url("https://example.com/\"quoted\"<>"), "https://example.com/quoted");
    }

    #[test]
    fn test_prepare_username() {
        let s = DefaultSanitizer;
        assert_eq!(s.prepare_username("handle"), "handle");
        assert_eq!(s.prepare_username("@handle"), "handle");
        assert_eq!(s.prepare_username("https://twitter.com/handle"), "handle");
        assert_eq!(s.prepare_username("https://x.com/@handle/status/1"), "handle");
        assert_eq!(s.prepare_username("twitter.com/handle?ref=a"), "handle");
    }
}

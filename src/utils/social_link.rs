//! Social media profile link validation.
//!
//! Only Instagram, Twitter/X and TikTok profile links are recognised. The
//! check is purely structural; no network request is made.

use regex::Regex;
use std::sync::LazyLock;

/// Profile link pattern, anchored at the start only.
///
/// Anything after the matched handle (extra path segments, query strings) is
/// accepted as-is.
static SOCIAL_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(www\.)?(instagram\.com|twitter\.com|tiktok\.com|x\.com)/[a-zA-Z0-9_.]+/?")
        .expect("social link pattern is valid")
});

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F,
/// which `str::trim` keeps.
fn is_link_padding(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Social platforms accepted on a fan profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Instagram,
    Twitter,
    TikTok,
}

impl SocialPlatform {
    /// Human-readable platform name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::TikTok => "TikTok",
        }
    }
}

/// Returns `true` if `input`, once trimmed, starts with a recognised
/// `https://` profile link.
///
/// # Examples
///
/// ```
/// use fan_registry::utils::social_link::validate_social_link;
///
/// assert!(validate_social_link("https://instagram.com/someuser"));
/// assert!(validate_social_link("  https://x.com/user  "));
/// assert!(!validate_social_link("http://instagram.com/someuser"));
/// ```
pub fn validate_social_link(input: &str) -> bool {
    SOCIAL_LINK_REGEX.is_match(input.trim_matches(is_link_padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_hosts() {
        assert!(validate_social_link("https://instagram.com/someuser"));
        assert!(validate_social_link("https://twitter.com/someuser"));
        assert!(validate_social_link("https://tiktok.com/someuser"));
        assert!(validate_social_link("https://x.com/someuser"));
    }

    #[test]
    fn test_www_prefix() {
        assert!(validate_social_link("https://www.instagram.com/some.user"));
        assert!(validate_social_link("https://www.x.com/some_user/"));
    }

    #[test]
    fn test_unknown_host_rejected() {
        assert!(!validate_social_link("https://facebook.com/someuser"));
        assert!(!validate_social_link("https://instagram.org/someuser"));
        assert!(!validate_social_link("https://m.instagram.com/someuser"));
    }

    #[test]
    fn test_http_scheme_rejected() {
        assert!(!validate_social_link("http://instagram.com/someuser"));
        assert!(!validate_social_link("instagram.com/someuser"));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert!(validate_social_link("  https://x.com/user  "));
        assert!(validate_social_link("\thttps://tiktok.com/user\n"));
    }

    #[test]
    fn test_information_separators_trimmed() {
        assert!(validate_social_link("\u{1C}https://instagram.com/someuser\u{1F}"));
        assert!(validate_social_link("\u{1D}\u{1E} https://x.com/user"));
        assert!(!validate_social_link("\u{1B}https://x.com/user"));
    }

    #[test]
    fn test_missing_handle_rejected() {
        assert!(!validate_social_link("https://instagram.com/"));
        assert!(!validate_social_link("https://instagram.com"));
        assert!(!validate_social_link("https://tiktok.com/@user"));
    }

    #[test]
    fn test_trailing_content_accepted() {
        assert!(validate_social_link("https://instagram.com/someuser/reels"));
        assert!(validate_social_link("https://twitter.com/someuser?lang=pt"));
        assert!(validate_social_link("https://x.com/user name"));
    }

    #[test]
    fn test_leading_garbage_rejected() {
        assert!(!validate_social_link("see https://instagram.com/someuser"));
        assert!(!validate_social_link(""));
    }

    #[test]
    fn test_platform_labels() {
        assert_eq!(SocialPlatform::Instagram.label(), "Instagram");
        assert_eq!(SocialPlatform::TikTok.label(), "TikTok");
    }
}

//! Share Links
//!
//! Outbound share URLs built by percent-encoding the page URL and text into
//! each platform's endpoint.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Unreserved characters (RFC 3986) stay as-is
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    X,
    Facebook,
    LinkedIn,
    Telegram,
    WhatsApp,
    Reddit,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 6] = [
        ShareTarget::X,
        ShareTarget::Facebook,
        ShareTarget::LinkedIn,
        ShareTarget::Telegram,
        ShareTarget::WhatsApp,
        ShareTarget::Reddit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::X => "X",
            ShareTarget::Facebook => "Facebook",
            ShareTarget::LinkedIn => "LinkedIn",
            ShareTarget::Telegram => "Telegram",
            ShareTarget::WhatsApp => "WhatsApp",
            ShareTarget::Reddit => "Reddit",
        }
    }
}

fn encode(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Share endpoint for `target` carrying `url` and `text`
pub fn share_url(target: ShareTarget, url: &str, text: &str) -> String {
    let (u, t) = (encode(url), encode(text));
    match target {
        ShareTarget::X => format!("https://twitter.com/intent/tweet?text={}&url={}", t, u),
        ShareTarget::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={}", u),
        ShareTarget::LinkedIn => format!("https://www.linkedin.com/sharing/share-offsite/?url={}", u),
        ShareTarget::Telegram => format!("https://t.me/share/url?url={}&text={}", u, t),
        ShareTarget::WhatsApp => format!("https://wa.me/?text={}%20{}", t, u),
        ShareTarget::Reddit => format!("https://www.reddit.com/submit?url={}&title={}", u, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.cryptoscamguide.com/";

    #[test]
    fn test_encodes_url_and_text() {
        let link = share_url(ShareTarget::X, URL, "Stay safe & informed");
        assert_eq!(
            link,
            "https://twitter.com/intent/tweet?text=Stay%20safe%20%26%20informed&url=https%3A%2F%2Fwww.cryptoscamguide.com%2F"
        );
    }

    #[test]
    fn test_url_only_targets_ignore_text() {
        let fb = share_url(ShareTarget::Facebook, URL, "ignored");
        assert!(!fb.contains("ignored"));
        assert!(fb.ends_with("u=https%3A%2F%2Fwww.cryptoscamguide.com%2F"));
    }

    #[test]
    fn test_every_target_is_https_and_carries_url() {
        for target in ShareTarget::ALL {
            let link = share_url(target, URL, "hi");
            assert!(link.starts_with("https://"), "{}", target.label());
            assert!(link.contains("cryptoscamguide.com"), "{}", target.label());
        }
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        assert_eq!(encode("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(encode("é"), "%C3%A9");
    }
}

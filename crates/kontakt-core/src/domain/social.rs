use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    #[serde(rename = "linkedin")]
    LinkedIn,
    Instagram,
    #[serde(rename = "youtube")]
    YouTube,
    #[serde(rename = "tiktok")]
    TikTok,
}

impl SocialPlatform {
    /// Output order of `X-SOCIALPROFILE` lines.
    pub const ALL: [SocialPlatform; 6] = [
        SocialPlatform::Facebook,
        SocialPlatform::Twitter,
        SocialPlatform::LinkedIn,
        SocialPlatform::Instagram,
        SocialPlatform::YouTube,
        SocialPlatform::TikTok,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::YouTube => "youtube",
            SocialPlatform::TikTok => "tiktok",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Twitter => "X (Twitter)",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::TikTok => "TikTok",
        }
    }

    /// Canonical profile URL for a bare handle (no leading `@`).
    pub fn url_for_handle(&self, handle: &str) -> String {
        match self {
            SocialPlatform::Facebook => format!("https://facebook.com/{handle}"),
            SocialPlatform::Twitter => format!("https://x.com/{handle}"),
            SocialPlatform::LinkedIn => format!("https://linkedin.com/in/{handle}"),
            SocialPlatform::Instagram => format!("https://instagram.com/{handle}"),
            SocialPlatform::YouTube => format!("https://youtube.com/@{handle}"),
            SocialPlatform::TikTok => format!("https://tiktok.com/@{handle}"),
        }
    }

    pub fn profile_url(&self, value: &str) -> String {
        profile_url_for(self.as_str(), value)
    }
}

impl FromStr for SocialPlatform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        SocialPlatform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == lower)
            .ok_or(CoreError::UnknownPlatform(lower))
    }
}

/// True when a social value is a full `http://` or `https://` link rather
/// than a handle.
pub fn is_profile_link(value: &str) -> bool {
    let value = value.trim_start();
    ["http://", "https://"].iter().any(|scheme| {
        value
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Rewrites a handle (optionally `@`-prefixed) into a profile URL. Full links
/// pass through unchanged; unknown platform keys fall back to
/// `https://<platform>.com/<handle>`.
pub fn profile_url_for(platform: &str, value: &str) -> String {
    let value = value.trim();
    if is_profile_link(value) {
        return value.to_string();
    }

    let handle = value.strip_prefix('@').unwrap_or(value);
    match platform.parse::<SocialPlatform>() {
        Ok(known) => known.url_for_handle(handle),
        Err(_) => format!("https://{platform}.com/{handle}"),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialHandles {
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub instagram: String,
    pub youtube: String,
    pub tiktok: String,
}

impl SocialHandles {
    pub fn get(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::LinkedIn => &self.linkedin,
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::YouTube => &self.youtube,
            SocialPlatform::TikTok => &self.tiktok,
        }
    }

    pub fn get_mut(&mut self, platform: SocialPlatform) -> &mut String {
        match platform {
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::LinkedIn => &mut self.linkedin,
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::YouTube => &mut self.youtube,
            SocialPlatform::TikTok => &mut self.tiktok,
        }
    }

    /// Non-empty handles in output order.
    pub fn present(&self) -> impl Iterator<Item = (SocialPlatform, &str)> + '_ {
        SocialPlatform::ALL
            .into_iter()
            .map(|platform| (platform, self.get(platform)))
            .filter(|(_, value)| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{is_profile_link, profile_url_for, SocialPlatform};

    #[test]
    fn twitter_handle_drops_at_sign() {
        assert_eq!(
            SocialPlatform::Twitter.profile_url("@handle"),
            "https://x.com/handle"
        );
    }

    #[test]
    fn full_urls_pass_through() {
        let url = "https://www.linkedin.com/in/beispiel";
        assert_eq!(SocialPlatform::LinkedIn.profile_url(url), url);
    }

    #[test]
    fn platform_templates() {
        assert_eq!(
            SocialPlatform::Instagram.profile_url("insta_handle"),
            "https://instagram.com/insta_handle"
        );
        assert_eq!(
            SocialPlatform::TikTok.profile_url("@tiktokuser"),
            "https://tiktok.com/@tiktokuser"
        );
        assert_eq!(
            SocialPlatform::YouTube.profile_url("kanal"),
            "https://youtube.com/@kanal"
        );
        assert_eq!(
            SocialPlatform::Facebook.profile_url("@beispiel"),
            "https://facebook.com/beispiel"
        );
        assert_eq!(
            SocialPlatform::LinkedIn.profile_url("beispiel"),
            "https://linkedin.com/in/beispiel"
        );
    }

    #[test]
    fn handles_that_start_with_http_are_rewritten() {
        assert!(!is_profile_link("httpster"));
        assert!(is_profile_link("HTTPS://example.com/me"));
        assert_eq!(
            SocialPlatform::Twitter.profile_url("httpster"),
            "https://x.com/httpster"
        );
    }

    #[test]
    fn unknown_platform_uses_generic_template() {
        assert_eq!(
            profile_url_for("mastodon", "@someone"),
            "https://mastodon.com/someone"
        );
    }

    #[test]
    fn platform_parses_from_key() {
        assert_eq!(
            "LinkedIn".parse::<SocialPlatform>().unwrap(),
            SocialPlatform::LinkedIn
        );
        assert!("myspace".parse::<SocialPlatform>().is_err());
    }
}

//! Tracked marketing links.

/// Builds links that carry campaign tracking parameters.
pub trait UrlBuilder {
    /// Link to `path` under the marketing site, tagged with `medium` and `content`.
    fn utm_url(&self, path: &str, medium: &str, content: &str) -> String;
}

/// [`UrlBuilder`] rooted at a marketing site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketingUrls {
    base: String,
    campaign: String,
}

impl MarketingUrls {
    pub fn new(base: &str, campaign: &str) -> Self {
        let mut base = base.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self {
            base,
            campaign: campaign.to_string(),
        }
    }
}

impl Default for MarketingUrls {
    fn default() -> Self {
        Self::new("https://aioseo.com/", "liteplugin")
    }
}

impl UrlBuilder for MarketingUrls {
    fn utm_url(&self, path: &str, medium: &str, content: &str) -> String {
        let path = path.trim_matches('/');
        format!(
            "{}{}/?utm_source=WordPress&utm_campaign={}&utm_medium={}&utm_content={}",
            self.base, path, self.campaign, medium, content
        )
    }
}

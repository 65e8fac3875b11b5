//! Optional URLs behind the greeting: mini-app, banner image, contact, channel and social links.

use catalogue_telegram::read_env;
use reqwest::Url;
use tracing::{error, warn};

/// Telegram only opens web apps over HTTPS.
const APP_SCHEMES: &[&str] = &["https"];
/// Schemes Telegram accepts on a URL button.
const LINK_SCHEMES: &[&str] = &["http", "https", "tg"];

/// A link variable that was set but could not be used as a button URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLink {
    pub key: &'static str,
    pub value: String,
}

/// Optional URLs. Absence changes what is rendered, never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkConfig {
    /// MINI_APP_URL
    pub mini_app_url: Option<String>,
    /// BANNER_IMAGE_URL; kept verbatim, a bad value shows up as a failed photo send.
    pub banner_image_url: Option<String>,
    /// SIGNAL_LINK
    pub contact_url: Option<String>,
    /// CHANNEL_URL
    pub channel_url: Option<String>,
    /// INSTAGRAM_URL
    pub social_url: Option<String>,
    /// Button URLs that were set but unparsable or with a scheme Telegram refuses on that button;
    /// reported by [`LinkConfig::report`].
    pub rejected: Vec<InvalidLink>,
}

impl LinkConfig {
    pub fn from_env() -> Self {
        let mut rejected = Vec::new();
        let mini_app_url = button_url("MINI_APP_URL", APP_SCHEMES, &mut rejected);
        let contact_url = button_url("SIGNAL_LINK", LINK_SCHEMES, &mut rejected);
        let channel_url = button_url("CHANNEL_URL", LINK_SCHEMES, &mut rejected);
        let social_url = button_url("INSTAGRAM_URL", LINK_SCHEMES, &mut rejected);
        Self {
            mini_app_url,
            banner_image_url: read_env("BANNER_IMAGE_URL"),
            contact_url,
            channel_url,
            social_url,
            rejected,
        }
    }

    /// Logs what is missing or unusable. Call once tracing is initialized.
    pub fn report(&self) {
        for link in &self.rejected {
            warn!(key = link.key, value = %link.value, "Ignoring link that is not a usable button URL");
        }
        if self.mini_app_url.is_none() {
            error!("MINI_APP_URL missing: the catalogue button will be shown as unavailable");
        }
        if self.banner_image_url.is_none() {
            warn!("BANNER_IMAGE_URL missing: the greeting will have no image");
        }
    }
}

fn button_url(
    key: &'static str,
    schemes: &[&str],
    rejected: &mut Vec<InvalidLink>,
) -> Option<String> {
    let value = read_env(key)?;
    let accepted = Url::parse(&value)
        .map(|url| schemes.contains(&url.scheme()))
        .unwrap_or(false);
    if accepted {
        Some(value)
    } else {
        rejected.push(InvalidLink { key, value });
        None
    }
}

//! Greeting keyboard. Pure function of the link config.

use catalogue_core::{Button, Keyboard};

use crate::config::LinkConfig;

/// Callback id of the "Informations" button.
pub const SHOW_INFO: &str = "show_info";

pub const LABEL_INFO: &str = "Informations ℹ️";
pub const LABEL_CONTACT: &str = "Contact (Signal) 📧";
pub const LABEL_CATALOGUE: &str = "Notre Catalogue 🐾";
pub const LABEL_CATALOGUE_UNAVAILABLE: &str = "Catalogue (Indisponible)";
pub const LABEL_CHANNEL: &str = "Notre Canal ↗️";
pub const LABEL_SOCIAL: &str = "Instagram ↗️";

/// Builds the greeting rows:
/// 1. info callback, plus contact link when configured;
/// 2. mini-app launcher, or an unavailable placeholder without a mini-app URL;
/// 3. channel then social link, only when at least one is configured.
pub fn build_greeting_keyboard(links: &LinkConfig) -> Keyboard {
    let mut keyboard = Keyboard::new();

    let mut first = vec![Button::callback(LABEL_INFO, SHOW_INFO)];
    if let Some(url) = &links.contact_url {
        first.push(Button::link(LABEL_CONTACT, url.as_str()));
    }
    keyboard.add_row(first);

    let catalogue = match &links.mini_app_url {
        Some(url) => Button::app(LABEL_CATALOGUE, url.as_str()),
        None => Button::placeholder(LABEL_CATALOGUE_UNAVAILABLE),
    };
    keyboard.add_row(vec![catalogue]);

    let optional: Vec<Button> = [
        (LABEL_CHANNEL, &links.channel_url),
        (LABEL_SOCIAL, &links.social_url),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.as_ref().map(|u| Button::link(label, u.as_str())))
    .collect();
    keyboard.add_row(optional);

    keyboard
}

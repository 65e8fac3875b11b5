//! Reply texts (HTML subset) for the greeting, the info panel, and mini-app acknowledgments.

use catalogue_core::{OutboundMessage, User};
use teloxide::utils::html;

use crate::config::LinkConfig;
use crate::keyboard::build_greeting_keyboard;
use crate::payload::{DecodeError, OrderIntent};

pub const INFO_TEXT: &str = "<b>ℹ️ Informations Utiles :</b>\n\n\
    Nos croquettes sont préparées avec amour et des ingrédients de première qualité pour assurer la santé et le bonheur de votre chat.\n\n\
    ✅ Sans céréales ajoutées (selon recettes)\n\
    ✅ Riches en protéines animales\n\
    ✅ Favorisent un pelage brillant et une bonne digestion\n\n\
    ➡️ Explorez notre gamme complète via le bouton 'Notre Catalogue' !";

pub const ACK_DEFAULT: &str = "Nous avons bien reçu votre demande depuis le catalogue. Merci !";
pub const ACK_MALFORMED: &str =
    "Oups, un problème est survenu lors de la réception des informations du catalogue.";
pub const ACK_UNEXPECTED: &str = "Une erreur inattendue est survenue.";

/// Greeting body plus the banner to try first, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub message: OutboundMessage,
    pub banner_url: Option<String>,
}

/// `<a href="tg://user?id=…">Full Name</a>` with the name escaped.
pub fn mention_html(user: &User) -> String {
    format!(
        "<a href=\"tg://user?id={}\">{}</a>",
        user.id,
        html::escape(&user.full_name())
    )
}

pub fn greeting_text(user: &User) -> String {
    format!(
        "Miaourrrr {} ! 👋\n\n\
         Bienvenue sur le bot officiel de <b>Super Croquettes Chat</b> !\n\n\
         Découvrez nos délicieuses recettes spécialement conçues pour votre félin préféré. 😻\n\
         Cliquez sur <b>Notre Catalogue</b> pour explorer.",
        mention_html(user)
    )
}

/// Welcome text with the greeting keyboard. The same message serves as photo caption and as the
/// plain-text fallback.
pub fn compose_greeting(user: &User, links: &LinkConfig) -> Greeting {
    Greeting {
        message: OutboundMessage::text(greeting_text(user))
            .with_keyboard(build_greeting_keyboard(links)),
        banner_url: links.banner_image_url.clone(),
    }
}

pub fn compose_info() -> OutboundMessage {
    OutboundMessage::text(INFO_TEXT).without_link_preview()
}

/// Reply to a decoded mini-app payload.
pub fn compose_ack(decoded: &Result<OrderIntent, DecodeError>) -> OutboundMessage {
    let text = match decoded {
        Ok(OrderIntent::OrderProduct(product)) => format!(
            "👍 Bien reçu ! Votre intérêt pour les croquettes \"<b>{}</b>\" (ID: {}) a été enregistré.\n\
             Nous vous contacterons bientôt si nécessaire !",
            html::escape(&product.name),
            html::escape(&product.id)
        ),
        Ok(OrderIntent::Acknowledge { .. }) => ACK_DEFAULT.to_string(),
        Err(DecodeError::Malformed { .. }) => ACK_MALFORMED.to_string(),
        Err(DecodeError::UnexpectedShape { .. }) => ACK_UNEXPECTED.to_string(),
    };
    OutboundMessage::text(text)
}

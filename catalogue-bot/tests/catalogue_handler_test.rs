//! Integration tests for CatalogueHandler: routing, greeting fallback, info callback, and
//! mini-app acknowledgments, driven through a recording MockBot.

use std::sync::Arc;

use catalogue_bot::replies::{compose_info, ACK_DEFAULT, ACK_MALFORMED};
use catalogue_bot::{build_greeting_keyboard, CatalogueHandler, LinkConfig};
use catalogue_core::{Chat, Handler, HandlerResponse, InboundEvent, MessageRef, User};

mod common;
use common::mock_bot::{MockBot, SentCall};

const CHAT_ID: i64 = 9001;
const BANNER: &str = "https://cdn.example.com/banner.jpg";

fn sender() -> User {
    User {
        id: 123,
        username: Some("minou".to_string()),
        first_name: Some("Jean".to_string()),
        last_name: Some("Dupont".to_string()),
    }
}

fn source() -> MessageRef {
    MessageRef {
        chat: Chat { id: CHAT_ID },
        message_id: 10,
    }
}

fn command(name: &str) -> InboundEvent {
    InboundEvent::Command {
        name: name.to_string(),
        sender: sender(),
        chat: Chat { id: CHAT_ID },
    }
}

fn callback(data: &str) -> InboundEvent {
    InboundEvent::CallbackTrigger {
        query_id: "query-1".to_string(),
        data: data.to_string(),
        sender: sender(),
        source: Some(source()),
    }
}

fn payload(raw: &str) -> InboundEvent {
    InboundEvent::StructuredPayload {
        raw: raw.to_string(),
        sender: sender(),
        source: source(),
    }
}

fn full_links() -> LinkConfig {
    LinkConfig {
        mini_app_url: Some("https://shop.example.com/app".to_string()),
        banner_image_url: Some(BANNER.to_string()),
        contact_url: Some("https://signal.me/#p/+33600000000".to_string()),
        channel_url: Some("https://t.me/croquettes".to_string()),
        social_url: Some("https://instagram.com/croquettes".to_string()),
        rejected: Vec::new(),
    }
}

fn handler(links: LinkConfig, bot: &Arc<MockBot>) -> CatalogueHandler {
    CatalogueHandler::new(Arc::new(links), bot.clone())
}

fn sent_texts(calls: &[SentCall]) -> Vec<String> {
    calls
        .iter()
        .filter_map(|c| match c {
            SentCall::Text { message, .. } => Some(message.text.clone()),
            _ => None,
        })
        .collect()
}

/// **Test: /start without a banner sends one text with the greeting keyboard.**
#[tokio::test]
async fn test_start_without_banner_sends_text() {
    let bot = Arc::new(MockBot::new());
    let links = LinkConfig::default();
    let handler = handler(links.clone(), &bot);

    let response = handler.handle(&command("start")).await.unwrap();

    assert_eq!(response, HandlerResponse::Handled);
    let calls = bot.calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        SentCall::Text { chat_id, message } => {
            assert_eq!(*chat_id, CHAT_ID);
            assert!(message.text.contains("tg://user?id=123"));
            assert!(message.text.contains("Jean Dupont"));
            assert_eq!(message.keyboard, Some(build_greeting_keyboard(&links)));
        }
        other => panic!("expected a text send, got {other:?}"),
    }
}

/// **Test: /start with a banner sends exactly one photo when it succeeds.**
#[tokio::test]
async fn test_start_with_banner_sends_photo() {
    let bot = Arc::new(MockBot::new());
    let handler = handler(full_links(), &bot);

    handler.handle(&command("start")).await.unwrap();

    let calls = bot.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(
        &calls[0],
        SentCall::Photo { photo_url, .. } if photo_url == BANNER
    ));
}

/// **Test: a failed photo is followed by exactly one text with the identical body and keyboard.**
#[tokio::test]
async fn test_start_photo_failure_falls_back_to_text() {
    let bot = Arc::new(MockBot::failing_photo());
    let handler = handler(full_links(), &bot);

    let response = handler.handle(&command("start")).await.unwrap();

    assert_eq!(response, HandlerResponse::Handled);
    let calls = bot.calls();
    assert_eq!(calls.len(), 2);
    let SentCall::Photo { caption, .. } = &calls[0] else {
        panic!("expected the photo attempt first, got {:?}", calls[0]);
    };
    let SentCall::Text { message, chat_id } = &calls[1] else {
        panic!("expected the text fallback second, got {:?}", calls[1]);
    };
    assert_eq!(*chat_id, CHAT_ID);
    assert_eq!(message, caption);
}

/// **Test: when the text fallback also fails, the error reaches the caller.**
#[tokio::test]
async fn test_start_fallback_failure_is_returned() {
    let bot = Arc::new(MockBot {
        fail_photo: true,
        fail_text: true,
        ..MockBot::default()
    });
    let handler = handler(full_links(), &bot);

    assert!(handler.handle(&command("start")).await.is_err());
    assert_eq!(bot.calls().len(), 2);
}

/// **Test: show_info is acknowledged once, then the info panel is sent once, whatever the config.**
#[tokio::test]
async fn test_show_info_acks_then_sends() {
    for links in [LinkConfig::default(), full_links()] {
        let bot = Arc::new(MockBot::new());
        let handler = handler(links, &bot);

        let response = handler.handle(&callback("show_info")).await.unwrap();

        assert_eq!(response, HandlerResponse::Handled);
        assert_eq!(
            bot.calls(),
            vec![
                SentCall::Ack {
                    callback_id: "query-1".to_string()
                },
                SentCall::Text {
                    chat_id: CHAT_ID,
                    message: compose_info(),
                },
            ]
        );
    }
}

/// **Test: a failed acknowledgment does not prevent the info panel.**
#[tokio::test]
async fn test_show_info_ack_failure_still_sends() {
    let bot = Arc::new(MockBot {
        fail_ack: true,
        ..MockBot::default()
    });
    let handler = handler(LinkConfig::default(), &bot);

    handler.handle(&callback("show_info")).await.unwrap();

    let calls = bot.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[1], SentCall::Text { .. }));
}

/// **Test: a callback from an inaccessible message is acknowledged but gets no reply.**
#[tokio::test]
async fn test_show_info_without_source_only_acks() {
    let bot = Arc::new(MockBot::new());
    let handler = handler(LinkConfig::default(), &bot);
    let event = InboundEvent::CallbackTrigger {
        query_id: "query-2".to_string(),
        data: "show_info".to_string(),
        sender: sender(),
        source: None,
    };

    handler.handle(&event).await.unwrap();

    assert_eq!(
        bot.calls(),
        vec![SentCall::Ack {
            callback_id: "query-2".to_string()
        }]
    );
}

/// **Test: unknown commands and callback ids are ignored with zero outbound calls.**
#[tokio::test]
async fn test_unrouted_events_are_ignored() {
    let bot = Arc::new(MockBot::new());
    let handler = handler(full_links(), &bot);

    for event in [command("help"), callback("no_action"), callback("SHOW_INFO")] {
        let response = handler.handle(&event).await.unwrap();
        assert_eq!(response, HandlerResponse::Ignored);
    }

    assert!(bot.calls().is_empty());
}

/// **Test: an order payload is answered with the product name and id.**
#[tokio::test]
async fn test_payload_order_acknowledged() {
    let bot = Arc::new(MockBot::new());
    let handler = handler(LinkConfig::default(), &bot);

    handler
        .handle(&payload(
            r#"{"action":"order_product","product":{"id":"42","nom":"Saumon"}}"#,
        ))
        .await
        .unwrap();

    let texts = sent_texts(&bot.calls());
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("Saumon"));
    assert!(texts[0].contains("42"));
}

/// **Test: malformed and unknown-action payloads get their fixed replies, without errors.**
#[tokio::test]
async fn test_payload_fixed_replies() {
    let bot = Arc::new(MockBot::new());
    let handler = handler(LinkConfig::default(), &bot);

    assert_eq!(
        handler.handle(&payload("not json")).await.unwrap(),
        HandlerResponse::Handled
    );
    handler.handle(&payload(r#"{"action":"noop"}"#)).await.unwrap();

    assert_eq!(
        sent_texts(&bot.calls()),
        vec![ACK_MALFORMED.to_string(), ACK_DEFAULT.to_string()]
    );
}

/// **Test: a failed acknowledgment send is swallowed; the next event is still served.**
#[tokio::test]
async fn test_payload_delivery_failure_is_swallowed() {
    let bot = Arc::new(MockBot {
        fail_text: true,
        ..MockBot::default()
    });
    let handler = handler(LinkConfig::default(), &bot);

    let first = handler.handle(&payload(r#"{"action":"noop"}"#)).await;
    let second = handler.handle(&payload("not json")).await;

    assert_eq!(first.unwrap(), HandlerResponse::Handled);
    assert_eq!(second.unwrap(), HandlerResponse::Handled);
    assert_eq!(bot.calls().len(), 2);
}

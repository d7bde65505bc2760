//! Support chat timing tests, run on tokio's paused clock.

use std::time::Duration;

use marketplace_core::domains::support_chat::{ChatConfig, ChatError, Sender, SupportChat};

fn quick_config() -> ChatConfig {
    ChatConfig {
        reply_delay: Duration::from_millis(500),
        ..ChatConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn reply_waits_for_the_configured_delay() {
    let mut chat = SupportChat::new(quick_config());
    chat.send_message("Is this book still available?").unwrap();

    tokio::time::sleep(Duration::from_millis(499)).await;
    assert_eq!(chat.messages().len(), 2);
    assert_eq!(chat.pending_reply_count(), 1);

    chat.flush_replies().await;
    let messages = chat.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].sender, Sender::Support);
    assert_eq!(chat.pending_reply_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn every_message_gets_its_own_reply() {
    let mut chat = SupportChat::new(quick_config());
    chat.send_message("first").unwrap();
    chat.send_message("second").unwrap();

    chat.flush_replies().await;

    let senders: Vec<Sender> = chat.messages().iter().map(|m| m.sender).collect();
    assert_eq!(
        senders,
        vec![
            Sender::Support,
            Sender::User,
            Sender::User,
            Sender::Support,
            Sender::Support,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn custom_texts_are_used() {
    let mut chat = SupportChat::new(ChatConfig {
        reply_delay: Duration::from_secs(2),
        greeting: "Hej!".to_string(),
        auto_reply: "Vi svarar snart.".to_string(),
    });
    chat.send_message("hello").unwrap();
    chat.flush_replies().await;

    let texts: Vec<String> = chat.messages().into_iter().map(|m| m.text).collect();
    assert_eq!(texts, vec!["Hej!", "hello", "Vi svarar snart."]);
}

#[tokio::test]
async fn empty_message_error_matches_screen_text() {
    let mut chat = SupportChat::default();
    let err = chat.send_message("").unwrap_err();

    assert_eq!(err, ChatError::EmptyMessage);
    assert_eq!(err.to_string(), "Please enter a message");
}

#[tokio::test(start_paused = true)]
async fn message_ids_are_unique() {
    let mut chat = SupportChat::default();
    chat.send_message("one").unwrap();
    chat.send_message("two").unwrap();
    chat.flush_replies().await;

    let mut ids: Vec<_> = chat.messages().iter().map(|m| m.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

//! Support chat session.
//!
//! Every message the user sends gets one canned reply from support after a
//! fixed delay. Replies are never cancelled; they land in the transcript even
//! if the user keeps typing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::models::{ChatError, ChatMessage, Sender};

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub reply_delay: Duration,
    pub greeting: String,
    pub auto_reply: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1000),
            greeting: "Hello! How can I help you today?".to_string(),
            auto_reply:
                "Thank you for your message. Our support team will get back to you shortly."
                    .to_string(),
        }
    }
}

pub struct SupportChat {
    config: ChatConfig,
    messages: Arc<Mutex<Vec<ChatMessage>>>,
    pending_replies: Vec<JoinHandle<()>>,
}

impl SupportChat {
    /// Open a session; the transcript starts with the support greeting
    pub fn new(config: ChatConfig) -> Self {
        let greeting = ChatMessage::new(Sender::Support, config.greeting.clone());
        Self {
            config,
            messages: Arc::new(Mutex::new(vec![greeting])),
            pending_replies: Vec::new(),
        }
    }

    /// Snapshot of the transcript in arrival order
    pub fn messages(&self) -> Vec<ChatMessage> {
        transcript(&self.messages).clone()
    }

    /// Append the user's message and schedule the support reply.
    ///
    /// Outside a tokio runtime nothing is appended and `NoRuntime` is returned.
    pub fn send_message(&mut self, text: &str) -> Result<ChatMessage, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        let runtime = Handle::try_current().map_err(|_| ChatError::NoRuntime)?;

        let message = ChatMessage::new(Sender::User, text);
        transcript(&self.messages).push(message.clone());
        debug!(message_id = %message.id, "User message sent");

        let messages = Arc::clone(&self.messages);
        let delay = self.config.reply_delay;
        let reply_text = self.config.auto_reply.clone();
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let reply = ChatMessage::new(Sender::Support, reply_text);
            debug!(message_id = %reply.id, "Support reply delivered");
            transcript(&messages).push(reply);
        });

        self.pending_replies.retain(|h| !h.is_finished());
        self.pending_replies.push(handle);

        Ok(message)
    }

    /// Wait until every scheduled reply has been delivered
    pub async fn flush_replies(&mut self) {
        for handle in self.pending_replies.drain(..) {
            if let Err(e) = handle.await {
                warn!(error = %e, "Support reply task failed");
            }
        }
    }

    /// Number of replies still waiting on their delay
    pub fn pending_reply_count(&self) -> usize {
        self.pending_replies
            .iter()
            .filter(|h| !h.is_finished())
            .count()
    }
}

// Lock the transcript, ignoring poisoning from a panicked reply task
fn transcript(messages: &Mutex<Vec<ChatMessage>>) -> MutexGuard<'_, Vec<ChatMessage>> {
    messages.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Default for SupportChat {
    fn default() -> Self {
        Self::new(ChatConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_with_greeting() {
        let chat = SupportChat::default();
        let messages = chat.messages();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Support);
        assert_eq!(messages[0].text, "Hello! How can I help you today?");
    }

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let mut chat = SupportChat::default();

        assert_eq!(chat.send_message("   "), Err(ChatError::EmptyMessage));
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.pending_reply_count(), 0);
    }

    #[test]
    fn sending_outside_a_runtime_leaves_transcript_untouched() {
        let mut chat = SupportChat::default();

        assert_eq!(chat.send_message("hello"), Err(ChatError::NoRuntime));
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.pending_reply_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn message_is_trimmed_and_answered() {
        let mut chat = SupportChat::default();

        let sent = chat.send_message("  Where is my order?  ").unwrap();
        assert_eq!(sent.text, "Where is my order?");
        assert_eq!(sent.sender, Sender::User);

        chat.flush_replies().await;

        let messages = chat.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].sender, Sender::Support);
        assert!(messages[2].text.starts_with("Thank you for your message"));
    }
}

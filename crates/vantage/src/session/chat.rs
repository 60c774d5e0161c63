use super::domain::ChatRole;
use crate::profiles::{Profile, ProfileId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static MESSAGE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_message_id() -> String {
    let id = MESSAGE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("msg-{id:06}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: ChatRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Ephemeral message log for one match.
///
/// Nothing here survives closing the overlay; reopening seeds a fresh
/// greeting. Delivery is local and immediate, so sends never fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    match_id: ProfileId,
    messages: Vec<ChatMessage>,
    compose: String,
}

impl ChatSession {
    /// Open a conversation, seeded with the match's scripted greeting.
    pub fn open(with: &Profile) -> Self {
        let greeting = format!("Hey! I noticed we both like {}.", with.primary_interest());
        Self {
            match_id: with.id.clone(),
            messages: vec![ChatMessage {
                id: next_message_id(),
                sender: ChatRole::Match,
                text: greeting,
                sent_at: Utc::now(),
            }],
            compose: String::new(),
        }
    }

    pub fn match_id(&self) -> &ProfileId {
        &self.match_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Current contents of the compose field.
    pub fn compose(&self) -> &str {
        &self.compose
    }

    pub fn set_compose(&mut self, text: impl Into<String>) {
        self.compose = text.into();
    }

    /// Append a user message unless the text is blank after trimming.
    /// Sending clears the compose field either way the message went out.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            id: next_message_id(),
            sender: ChatRole::User,
            text: text.to_string(),
            sent_at: Utc::now(),
        });
        self.compose.clear();
        self.messages.last()
    }

    /// Send whatever sits in the compose field.
    pub fn send_compose(&mut self) -> Option<&ChatMessage> {
        let draft = std::mem::take(&mut self.compose);
        self.send(&draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::demo_candidates;

    fn isabella() -> Profile {
        demo_candidates().remove(0)
    }

    #[test]
    fn opening_seeds_exactly_one_greeting_from_the_match() {
        let chat = ChatSession::open(&isabella());
        assert_eq!(chat.messages().len(), 1);
        let greeting = &chat.messages()[0];
        assert_eq!(greeting.sender, ChatRole::Match);
        assert_eq!(greeting.text, "Hey! I noticed we both like Violin.");
    }

    #[test]
    fn reopening_regenerates_the_greeting() {
        let profile = isabella();
        let first = ChatSession::open(&profile);
        let second = ChatSession::open(&profile);
        assert_eq!(first.messages()[0].text, second.messages()[0].text);
        assert_ne!(first.messages()[0].id, second.messages()[0].id);
    }

    #[test]
    fn send_appends_a_user_message_and_clears_the_compose_field() {
        let mut chat = ChatSession::open(&isabella());
        chat.set_compose("see you at the concert?");
        let sent = chat.send_compose().cloned().expect("non-blank text sends");
        assert_eq!(sent.sender, ChatRole::User);
        assert_eq!(sent.text, "see you at the concert?");
        assert_eq!(chat.compose(), "");
        assert_eq!(chat.messages().len(), 2);
    }

    #[test]
    fn blank_text_is_not_sent() {
        let mut chat = ChatSession::open(&isabella());
        assert!(chat.send("   \t ").is_none());
        assert_eq!(chat.messages().len(), 1);
    }
}

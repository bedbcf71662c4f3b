use chrono::Utc;

use crate::{
    domain::{Category, ChatMessage},
    responder::BotReply,
};

const GREETING: &str = "Hi! I'm EcoBot 🌱 Your personal waste management assistant. Ask me about recycling, composting, or sustainable living tips!";

/// In-memory chat transcript for one session. The session owns all mutable
/// chat state; callers drive it through the transition methods below and
/// everything is dropped on exit.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: u64,
    typing: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            next_id: 1,
            typing: false,
        };
        session.append(GREETING.to_string(), true, Some(Category::Guide));
        session
    }

    pub fn push_user(&mut self, text: String) -> &ChatMessage {
        self.append(text, false, None)
    }

    /// Marks the bot as composing a reply. Purely cosmetic state behind the
    /// fixed typing delay; there is no computation to cancel.
    pub fn begin_typing(&mut self) {
        self.typing = true;
    }

    pub fn push_bot(&mut self, reply: BotReply) -> &ChatMessage {
        self.typing = false;
        self.append(reply.text.to_string(), true, Some(reply.category))
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.typing = false;
        self.append(GREETING.to_string(), true, Some(Category::Guide));
    }

    fn append(&mut self, text: String, is_bot: bool, category: Option<Category>) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            text,
            is_bot,
            timestamp: Utc::now(),
            category,
        });
        self.messages.last().expect("message just pushed")
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_with_the_greeting() {
        let session = ChatSession::new();
        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_bot);
        assert_eq!(messages[0].category, Some(Category::Guide));
    }

    #[test]
    fn messages_are_appended_in_order_with_increasing_ids() {
        let mut session = ChatSession::new();
        session.push_user("how do I recycle?".to_string());
        session.begin_typing();
        assert!(session.is_typing());
        session.push_bot(BotReply {
            text: "rinse it first",
            category: Category::Tip,
        });
        assert!(!session.is_typing());

        let ids: Vec<u64> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(!session.messages()[1].is_bot);
        assert!(session.messages()[2].is_bot);
    }

    #[test]
    fn clear_resets_to_a_fresh_greeting() {
        let mut session = ChatSession::new();
        session.push_user("hello".to_string());
        session.clear();
        assert_eq!(session.messages().len(), 1);
        assert!(session.messages()[0].is_bot);
    }
}

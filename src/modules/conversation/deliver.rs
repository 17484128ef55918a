use super::{Conversation, Message};
use crate::log_warn;

impl Conversation {
    /// Appends the assistant reply for the oldest outstanding submission.
    pub fn deliver(&mut self, text: impl Into<String>) {
        if self.pending_replies == 0 {
            log_warn!("Conversation {} got a reply with nothing pending", self.id);
        }
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.messages.push(Message::assistant(text));
    }
}

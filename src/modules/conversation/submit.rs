use super::{Conversation, Message};

impl Conversation {
    /// Appends the input as a user message and reserves one reply for it.
    /// Blank input is rejected: nothing is appended and `None` comes back.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        if input.trim().is_empty() {
            return None;
        }

        self.messages.push(Message::user(input));
        self.pending_replies += 1;
        Some(input.to_string())
    }
}

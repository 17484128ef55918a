// src/modules/conversation/mod.rs
//! Conversation log shared by both assistant widgets

mod deliver;
mod submit;
pub mod reply_scheduler;

pub use reply_scheduler::{PendingReply, ReplyScheduler};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub origin: Origin,
    pub text: String,
    pub sent_at: DateTime<Local>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { origin: Origin::User, text: text.into(), sent_at: Local::now() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { origin: Origin::Assistant, text: text.into(), sent_at: Local::now() }
    }
}

/// Append-only message log for one assistant session. Never empty: it opens
/// with the assistant's greeting.
#[derive(Debug, Clone)]
pub struct Conversation {
    id: Uuid,
    messages: Vec<Message>,
    pending_replies: usize,
}

impl Conversation {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: vec![Message::assistant(seed)],
            pending_replies: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    /// Drives the "Typing..." / "Thinking..." indicator
    pub fn is_processing(&self) -> bool {
        self.pending_replies > 0
    }
}

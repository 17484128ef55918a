// src/modules/assistant/mod.rs
//! Assistant widgets - canned-reply responders and the chat handlers around them

pub mod handler;
pub mod rule_table;
pub mod telegram;
pub mod voice;

pub use handler::{AssistantHandler, ChatInput};
pub use rule_table::{Rule, RuleTable};

use serde::{Deserialize, Serialize};

/// Answer category a rule resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Energy,
    Packaging,
    Water,
    Sustainability,
    Fines,
    Rewards,
    Greeting,
    /// No trigger matched
    Fallback,
}

/// The two assistant widgets. Each has its own rule table and conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssistantKind {
    Voice,
    Telegram,
}

impl AssistantKind {
    pub fn title(&self) -> &'static str {
        match self {
            AssistantKind::Voice => "Voice Assistant",
            AssistantKind::Telegram => "Telegram Bot",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            AssistantKind::Voice => "Ask me anything about sustainability",
            AssistantKind::Telegram => "Sustainability tips for your business",
        }
    }

    /// First assistant message of every session
    pub fn greeting(&self) -> &'static str {
        match self {
            AssistantKind::Voice => voice::GREETING,
            AssistantKind::Telegram => telegram::GREETING,
        }
    }

    /// Label shown while a reply is pending
    pub fn processing_label(&self) -> &'static str {
        match self {
            AssistantKind::Voice => "Thinking...",
            AssistantKind::Telegram => "Typing...",
        }
    }

    pub fn rule_table(&self) -> RuleTable {
        match self {
            AssistantKind::Voice => voice::rule_table(),
            AssistantKind::Telegram => telegram::rule_table(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssistantKind::Voice => "voice",
            AssistantKind::Telegram => "telegram",
        }
    }
}

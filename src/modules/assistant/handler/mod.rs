mod chat_input;
mod handle_key;
mod new;
mod submit_message;

pub use chat_input::ChatInput;

use crate::modules::{
    assistant::{AssistantKind, RuleTable},
    conversation::{Conversation, ReplyScheduler},
};

/// Coordinates one assistant widget: its input box, its log and its replies
#[derive(Debug)]
pub struct AssistantHandler {
    kind: AssistantKind,
    rules: RuleTable,
    conversation: Conversation,
    chat_input: ChatInput,
    is_recording: bool,
    scheduler: ReplyScheduler,
}

impl AssistantHandler {
    pub fn kind(&self) -> AssistantKind {
        self.kind
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn chat_input(&self) -> &ChatInput {
        &self.chat_input
    }

    pub fn chat_input_mut(&mut self) -> &mut ChatInput {
        &mut self.chat_input
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording
    }

    pub fn is_processing(&self) -> bool {
        self.conversation.is_processing()
    }

    /// Voice only. Stopping a recording fills the input with the transcription.
    pub fn toggle_recording(&mut self) {
        if self.kind != AssistantKind::Voice {
            return;
        }

        if self.is_recording {
            self.is_recording = false;
            self.chat_input.set(crate::modules::assistant::voice::MOCK_TRANSCRIPTION);
        } else {
            self.is_recording = true;
        }
    }
}

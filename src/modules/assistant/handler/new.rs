use super::{AssistantHandler, ChatInput};
use crate::modules::{
    assistant::AssistantKind,
    conversation::{Conversation, ReplyScheduler},
};

impl AssistantHandler {
    pub fn new(kind: AssistantKind, scheduler: ReplyScheduler) -> Self {
        Self {
            kind,
            rules: kind.rule_table(),
            conversation: Conversation::new(kind.greeting()),
            chat_input: ChatInput::new(),
            is_recording: false,
            scheduler,
        }
    }
}

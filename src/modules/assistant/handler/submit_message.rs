use crate::error::Result;
use crate::log_info;
use crate::modules::conversation::PendingReply;

use super::AssistantHandler;

impl AssistantHandler {
    /// Sends the input box contents. Returns `false` when there was nothing to send.
    ///
    /// The reply is queued before anything is committed: if the worker is gone
    /// the input box and the log are left as they were.
    pub fn submit_message(&mut self) -> Result<bool> {
        if !self.chat_input.can_send() {
            return Ok(false);
        }

        let query = self.chat_input.get();
        let topic = self.rules.resolve(query);
        let reply = self.rules.respond(query).to_string();
        self.scheduler.schedule(PendingReply { kind: self.kind, text: reply })?;

        let input = self.chat_input.take();
        self.conversation.submit(&input);
        log_info!(
            "{} assistant matched {:?} for conversation {}",
            self.kind.as_str(),
            topic,
            self.conversation.id()
        );

        Ok(true)
    }

    /// A scheduled reply has come back from the scheduler
    pub fn receive_reply(&mut self, text: String) {
        self.conversation.deliver(text);
        // Follow the newest message
        self.chat_input.scroll_to(usize::MAX);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tokio::sync::mpsc;

    use crate::modules::assistant::{telegram, voice, AssistantHandler, AssistantKind};
    use crate::modules::conversation::{Origin, ReplyScheduler};
    use crate::util::io::event::{AppEvent, Event};

    fn handler(kind: AssistantKind) -> (AssistantHandler, mpsc::UnboundedReceiver<Event>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = ReplyScheduler::spawn(Duration::from_millis(1500), sender);
        (AssistantHandler::new(kind, scheduler), receiver)
    }

    async fn next_reply(receiver: &mut mpsc::UnboundedReceiver<Event>) -> (AssistantKind, String) {
        match receiver.recv().await {
            Some(Event::App(AppEvent::AssistantReply(kind, text))) => (kind, text),
            other => panic!("expected a reply, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn water_question_round_trip() {
        let (mut handler, mut receiver) = handler(AssistantKind::Telegram);
        let before = handler.conversation().len();
        handler.chat_input.set("How can I save water?");

        assert!(handler.submit_message().unwrap());
        assert_eq!(handler.conversation().len(), before + 1);
        assert!(handler.is_processing());
        assert_eq!(handler.chat_input().get(), "");

        let (kind, text) = next_reply(&mut receiver).await;
        assert_eq!(kind, AssistantKind::Telegram);
        handler.receive_reply(text);

        assert_eq!(handler.conversation().len(), before + 2);
        let last = handler.conversation().last().unwrap();
        assert_eq!(last.origin, Origin::Assistant);
        assert_eq!(last.text, telegram::WATER_TIPS);
        assert!(!handler.is_processing());
    }

    #[tokio::test(start_paused = true)]
    async fn blank_input_schedules_nothing() {
        let (mut handler, mut receiver) = handler(AssistantKind::Voice);
        handler.chat_input.set("   ");

        assert!(!handler.submit_message().unwrap());
        assert_eq!(handler.conversation().len(), 1);
        // Rejected input stays in the box
        assert_eq!(handler.chat_input().get(), "   ");

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_worker_leaves_input_and_log_alone() {
        let (mut handler, receiver) = handler(AssistantKind::Telegram);
        drop(receiver);

        // The worker exits once it finds nobody listening for this reply
        handler.chat_input.set("plastic");
        assert!(handler.submit_message().unwrap());
        tokio::time::sleep(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;

        let before = handler.conversation().len();
        handler.chat_input.set("energy");
        assert!(handler.submit_message().is_err());
        assert_eq!(handler.conversation().len(), before);
        assert_eq!(handler.conversation().pending_replies(), 1);
        assert_eq!(handler.chat_input().get(), "energy");
    }

    #[tokio::test(start_paused = true)]
    async fn recording_fills_in_the_transcription() {
        let (mut handler, mut receiver) = handler(AssistantKind::Voice);
        handler.toggle_recording();
        assert!(handler.is_recording());
        handler.toggle_recording();
        assert!(!handler.is_recording());
        assert_eq!(handler.chat_input().get(), voice::MOCK_TRANSCRIPTION);

        handler.submit_message().unwrap();
        let (_, text) = next_reply(&mut receiver).await;
        assert_eq!(text, voice::SUSTAINABILITY_TIPS);
    }

    #[tokio::test(start_paused = true)]
    async fn telegram_has_no_recording() {
        let (mut handler, _receiver) = handler(AssistantKind::Telegram);
        handler.toggle_recording();
        assert!(!handler.is_recording());
    }
}

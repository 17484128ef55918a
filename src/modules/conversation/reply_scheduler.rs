// src/modules/conversation/reply_scheduler.rs

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{JugaadError, Result};
use crate::modules::assistant::AssistantKind;
use crate::util::io::event::{AppEvent, Event, EventSender};

/// A reply that was decided at submit time and waits out the simulated delay
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReply {
    pub kind: AssistantKind,
    pub text: String,
}

/// Delivers replies for one conversation after a fixed delay.
///
/// A single worker drains the queue in order and waits the full delay before
/// each reply, so replies land in submission order and never overlap.
#[derive(Debug)]
pub struct ReplyScheduler {
    queue: mpsc::UnboundedSender<PendingReply>,
    worker: JoinHandle<()>,
}

impl ReplyScheduler {
    /// Must be called from inside a tokio runtime.
    pub fn spawn(delay: Duration, events: EventSender) -> Self {
        let (queue, mut receiver) = mpsc::unbounded_channel::<PendingReply>();

        let worker = tokio::spawn(async move {
            while let Some(reply) = receiver.recv().await {
                tokio::time::sleep(delay).await;
                tracing::debug!(assistant = reply.kind.as_str(), "delivering scheduled reply");
                let event = Event::App(AppEvent::AssistantReply(reply.kind, reply.text));
                if events.send(event).is_err() {
                    // Event loop is gone, nothing left to deliver to
                    break;
                }
            }
        });

        Self { queue, worker }
    }

    pub fn schedule(&self, reply: PendingReply) -> Result<()> {
        self.queue
            .send(reply)
            .map_err(|_| JugaadError::Runtime("reply worker has stopped".to_string()))
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

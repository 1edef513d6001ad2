//! Demo chat: an append-only log and a canned agent reply after a fixed delay.

use crate::services::scheduler::{Scheduler, TimerHandle};
use log::debug;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use yew::Callback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Agent,
    User,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    last_id: u64,
}

impl ChatLog {
    pub fn with_greeting(greeting: &str) -> Self {
        let mut log = Self::default();
        log.push(Sender::Agent, greeting);
        log
    }

    pub fn push(&mut self, sender: Sender, text: &str) -> u64 {
        self.last_id += 1;
        self.messages.push(ChatMessage {
            id: self.last_id,
            sender,
            text: text.to_string(),
        });
        self.last_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

/// Trimmed draft, or `None` when there is nothing to send.
pub fn normalize_draft(draft: &str) -> Option<&str> {
    let trimmed = draft.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    Ignored,
    Sent { id: u64 },
}

struct Inner {
    log: RefCell<ChatLog>,
    pending: RefCell<HashMap<u64, TimerHandle>>,
    next_pending: Cell<u64>,
    scheduler: Rc<dyn Scheduler>,
    reply_delay_ms: u32,
    canned_reply: String,
    on_change: Callback<Vec<ChatMessage>>,
}

impl Inner {
    fn append(&self, sender: Sender, text: &str) -> u64 {
        let (id, snapshot) = {
            let mut log = self.log.borrow_mut();
            let id = log.push(sender, text);
            (id, log.messages().to_vec())
        };
        self.on_change.emit(snapshot);
        id
    }
}

#[derive(Clone)]
pub struct ChatSession {
    inner: Rc<Inner>,
}

impl ChatSession {
    pub fn new(
        greeting: &str,
        canned_reply: &str,
        scheduler: Rc<dyn Scheduler>,
        reply_delay_ms: u32,
        on_change: Callback<Vec<ChatMessage>>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                log: RefCell::new(ChatLog::with_greeting(greeting)),
                pending: RefCell::new(HashMap::new()),
                next_pending: Cell::new(0),
                scheduler,
                reply_delay_ms,
                canned_reply: canned_reply.to_string(),
                on_change,
            }),
        }
    }

    #[cfg(test)]
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.inner.log.borrow().messages().to_vec()
    }

    /// Appends the user's message now and schedules the agent reply.
    /// Blank drafts are ignored.
    pub fn send(&self, draft: &str) -> SendOutcome {
        let Some(text) = normalize_draft(draft) else {
            return SendOutcome::Ignored;
        };
        let id = self.inner.append(Sender::User, text);

        let key = self.inner.next_pending.get() + 1;
        self.inner.next_pending.set(key);
        let weak = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.timeout(
            self.inner.reply_delay_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else { return };
                let fired = inner.pending.borrow_mut().remove(&key);
                drop(fired);
                let reply = inner.canned_reply.clone();
                inner.append(Sender::Agent, &reply);
            }),
        );
        self.inner.pending.borrow_mut().insert(key, handle);
        debug!("chat message {id} sent, reply in {}ms", self.inner.reply_delay_ms);
        SendOutcome::Sent { id }
    }

    #[cfg(test)]
    pub fn pending_replies(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    /// Drops every scheduled reply. Used on unmount.
    pub fn cancel_pending(&self) {
        let pending: Vec<TimerHandle> = self.inner.pending.borrow_mut().drain().map(|(_, h)| h).collect();
        drop(pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scheduler::VirtualScheduler;

    const GREETING: &str = "Hello - how can we help today?";
    const REPLY: &str = "Thanks - a member of our team will reply shortly.";

    fn session() -> (ChatSession, VirtualScheduler, Rc<RefCell<usize>>) {
        let scheduler = VirtualScheduler::new();
        let publishes = Rc::new(RefCell::new(0));
        let on_change = {
            let publishes = publishes.clone();
            Callback::from(move |_| *publishes.borrow_mut() += 1)
        };
        let session = ChatSession::new(GREETING, REPLY, Rc::new(scheduler.clone()), 500, on_change);
        (session, scheduler, publishes)
    }

    #[test]
    fn starts_with_agent_greeting() {
        let (session, _, _) = session();
        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Agent);
        assert_eq!(messages[0].text, GREETING);
    }

    #[test]
    fn whitespace_draft_is_ignored() {
        let (session, scheduler, publishes) = session();
        assert_eq!(session.send("  "), SendOutcome::Ignored);
        assert_eq!(session.send("\n\t"), SendOutcome::Ignored);
        scheduler.advance(5000);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.pending_replies(), 0);
        assert_eq!(*publishes.borrow(), 0);
    }

    #[test]
    fn message_then_single_reply_after_delay() {
        let (session, scheduler, _) = session();
        assert_eq!(session.send("  Hello "), SendOutcome::Sent { id: 2 });

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].text, "Hello");

        scheduler.advance(499);
        assert_eq!(session.messages().len(), 2);
        scheduler.advance(1);
        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].sender, Sender::Agent);
        assert_eq!(messages[2].text, REPLY);

        scheduler.advance(10_000);
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.pending_replies(), 0);
    }

    #[test]
    fn ids_are_monotonic() {
        let (session, scheduler, _) = session();
        session.send("one");
        session.send("two");
        scheduler.advance(500);
        let ids: Vec<u64> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn cancelled_replies_never_arrive() {
        let (session, scheduler, _) = session();
        session.send("Hello");
        session.cancel_pending();
        scheduler.advance(1000);
        assert_eq!(session.messages().len(), 2);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropping_the_session_cancels_replies() {
        let (session, scheduler, _) = session();
        session.send("Hello");
        drop(session);
        assert_eq!(scheduler.pending(), 0);
    }
}

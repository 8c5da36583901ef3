use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::events::HiringEvent;
use super::notify::{Notifier, SubscriptionId};

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEntry {
    pub occurred_at: DateTime<Utc>,
    pub source: String,
    pub kind: &'static str,
    pub payload: Value,
}

/// Observer that keeps an ordered log of everything published on the notifiers it is attached to.
#[derive(Debug, Default)]
pub struct EventJournal {
    entries: RefCell<Vec<JournalEntry>>,
}

impl EventJournal {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Subscribe this journal to `notifier`, tagging entries with `source`.
    pub fn attach<E>(
        self: &Rc<Self>,
        source: impl Into<String>,
        notifier: &Notifier<E>,
    ) -> SubscriptionId
    where
        E: HiringEvent + 'static,
    {
        let journal = Rc::clone(self);
        let source = source.into();
        notifier.subscribe(move |event: &E| journal.record(&source, event))
    }

    pub fn record<E: HiringEvent>(&self, source: &str, event: &E) {
        self.entries.borrow_mut().push(JournalEntry {
            occurred_at: Utc::now(),
            source: source.to_string(),
            kind: event.kind(),
            payload: event.payload(),
        });
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.entries.borrow().iter().map(|entry| entry.kind).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&*self.entries.borrow())
    }
}

//! Grouping of flat event streams by request id
//!
//! Events arrive as one flat, ordered list covering every request. Grouping
//! buckets them per request id without reordering, and indexes each bucket
//! by event kind. Duplicate kinds within one id resolve last-write-wins:
//! the index is built by an explicit ordered fold over the bucket, so the
//! later event in the original sequence is the representative. This is a
//! deliberate policy, not an artifact of map construction order.

use crate::event::{EventKind, RequestEventInfo};
use std::collections::HashMap;

/// Events of a single request id, in original relative order
#[derive(Debug, Clone, Default)]
pub struct EventGroup {
    events: Vec<RequestEventInfo>,
    by_kind: HashMap<EventKind, usize>,
}

impl EventGroup {
    fn push(&mut self, event: RequestEventInfo) {
        let kind = event.event.kind();
        self.events.push(event);
        // Ordered fold: later events overwrite earlier ones of the same kind
        self.by_kind.insert(kind, self.events.len() - 1);
    }

    /// All events of this id, in arrival order
    pub fn events(&self) -> &[RequestEventInfo] {
        &self.events
    }

    /// Representative event of a kind (last seen wins on duplicates)
    pub fn event_of_kind(&self, kind: EventKind) -> Option<&RequestEventInfo> {
        self.by_kind.get(&kind).map(|&i| &self.events[i])
    }

    pub fn has_kind(&self, kind: EventKind) -> bool {
        self.by_kind.contains_key(&kind)
    }
}

/// Per-id event buckets, with ids in first-seen order
#[derive(Debug, Clone, Default)]
pub struct GroupedEvents {
    order: Vec<String>,
    groups: HashMap<String, EventGroup>,
}

impl GroupedEvents {
    pub fn group(&self, id: &str) -> Option<&EventGroup> {
        self.groups.get(id)
    }

    /// Request ids in the order they first appeared in the event stream
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Bucket a flat event list by request id, preserving relative order
pub fn group_by_request(events: &[RequestEventInfo]) -> GroupedEvents {
    let mut grouped = GroupedEvents::default();
    for event in events {
        if !grouped.groups.contains_key(&event.id) {
            grouped.order.push(event.id.clone());
        }
        grouped
            .groups
            .entry(event.id.clone())
            .or_default()
            .push(event.clone());
    }
    grouped
}

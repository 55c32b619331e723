//! Boundary data model for request records and network activity events
//!
//! These types mirror the wire shape produced by the recording backend:
//! a flat list of request records plus a flat list of per-kind events, all
//! keyed by request id. They are consumed read-only; correlation never
//! mutates caller-owned data.

use crate::point::TimePoint;
use serde::{Deserialize, Serialize};

/// A single HTTP header as observed on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The kind of a network activity event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Request,
    Response,
    RequestBody,
    ResponseBody,
}

/// Kind-specific payload of a network activity event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RequestEvent {
    /// Request opened: the method, target URL, and outgoing headers
    Request {
        method: String,
        url: String,
        headers: Vec<Header>,
    },
    /// Response headers arrived
    Response { status: u16, headers: Vec<Header> },
    /// A request body was sent (presence only; content is not carried here)
    RequestBody,
    /// A response body was received (presence only)
    ResponseBody,
}

impl RequestEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            RequestEvent::Request { .. } => EventKind::Request,
            RequestEvent::Response { .. } => EventKind::Response,
            RequestEvent::RequestBody => EventKind::RequestBody,
            RequestEvent::ResponseBody => EventKind::ResponseBody,
        }
    }
}

/// One network activity event, tagged with the request id it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEventInfo {
    pub id: String,
    pub point: String,
    pub time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_point: Option<TimePoint>,
    pub event: RequestEvent,
}

/// A request record as emitted by the recording backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub id: String,
    pub point: String,
    pub time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_point: Option<TimePoint>,
}

/// Input snapshot: everything one correlation pass consumes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub requests: Vec<RequestRecord>,
    pub events: Vec<RequestEventInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_tags() {
        let ev = RequestEvent::Request {
            method: "GET".to_string(),
            url: "https://a.test/x".to_string(),
            headers: vec![],
        };
        assert_eq!(ev.kind(), EventKind::Request);
        assert_eq!(RequestEvent::RequestBody.kind(), EventKind::RequestBody);
        assert_eq!(RequestEvent::ResponseBody.kind(), EventKind::ResponseBody);
    }

    #[test]
    fn test_event_deserializes_from_kind_tag() {
        let json = r#"{
            "id": "7",
            "point": "123456789012345678901234567890",
            "time": 41.5,
            "event": { "kind": "response", "status": 200, "headers": [
                { "name": "Content-Type", "value": "text/html" }
            ]}
        }"#;
        let info: RequestEventInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id, "7");
        assert_eq!(info.event.kind(), EventKind::Response);
        match &info.event {
            RequestEvent::Response { status, headers } => {
                assert_eq!(*status, 200);
                assert_eq!(headers[0].name, "Content-Type");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_body_events_deserialize_without_fields() {
        let json = r#"{ "id": "1", "point": "5", "time": 1.0, "event": { "kind": "request-body" } }"#;
        let info: RequestEventInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.event, RequestEvent::RequestBody);
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        // Recording backends grow fields we don't consume; snapshots carrying
        // them must still parse. Unknown keys at the record level and inside
        // the tagged event payload are both ignored.
        let json = r#"{
            "id": "9",
            "point": "42",
            "time": 7.0,
            "frameId": "frame-3",
            "event": {
                "kind": "request",
                "method": "POST",
                "url": "https://a.test/submit",
                "headers": [],
                "cause": "fetch",
                "initiator": { "line": 12 }
            }
        }"#;
        let info: RequestEventInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id, "9");
        assert_eq!(info.event.kind(), EventKind::Request);
    }

    #[test]
    fn test_snapshot_with_unknown_top_level_fields() {
        let json = r#"{
            "version": 2,
            "sessionId": "abc",
            "requests": [
                { "id": "1", "point": "10", "time": 0.0, "recordingId": "r1" }
            ],
            "events": []
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.requests.len(), 1);
        assert_eq!(snapshot.requests[0].id, "1");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let snapshot = Snapshot {
            requests: vec![RequestRecord {
                id: "1".to_string(),
                point: "10".to_string(),
                time: 0.0,
                trigger_point: None,
            }],
            events: vec![],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}

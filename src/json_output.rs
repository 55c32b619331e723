//! JSON output format for correlation reports
//!
//! --format json implementation

use crate::correlate::RequestSummary;
use serde::Serialize;

/// Machine-readable result of one correlation pass
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// Number of request records in the input snapshot
    pub total_requests: usize,
    /// Number of raw events in the input snapshot
    pub total_events: usize,
    /// Completed, filtered exchanges, ascending by execution point
    pub summaries: Vec<RequestSummary>,
}

impl JsonReport {
    pub fn new(
        total_requests: usize,
        total_events: usize,
        summaries: Vec<RequestSummary>,
    ) -> Self {
        Self {
            total_requests,
            total_events,
            summaries,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::TimePoint;

    fn summary(id: &str, point: &str) -> RequestSummary {
        RequestSummary {
            id: id.to_string(),
            method: "GET".to_string(),
            url: "https://a.test/x".to_string(),
            domain: "a.test".to_string(),
            name: "x".to_string(),
            query_params: vec![],
            start: 1.0,
            end: 2.0,
            time: 1.0,
            status: 200,
            document_type: "text/html".to_string(),
            resource_type: "html".to_string(),
            request_headers: vec![],
            response_headers: vec![],
            has_request_body: false,
            has_response_body: false,
            point: TimePoint {
                point: point.to_string(),
                time: 2.0,
            },
            trigger_point: None,
        }
    }

    #[test]
    fn test_report_serializes() {
        let report = JsonReport::new(3, 7, vec![summary("1", "12")]);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"total_requests\": 3"));
        assert!(json.contains("\"total_events\": 7"));
        assert!(json.contains("\"id\": \"1\""));
        // classified type serializes under the wire name "type"
        assert!(json.contains("\"type\": \"html\""));
    }

    #[test]
    fn test_absent_trigger_point_omitted() {
        let report = JsonReport::new(1, 2, vec![summary("1", "12")]);
        let json = report.to_json().unwrap();
        assert!(!json.contains("trigger_point"));
    }
}

//! Request correlation: joining scattered events into exchange summaries
//!
//! One correlation pass is a pure function of three immutable snapshots
//! (request records, events, filter). Incomplete exchanges are a designed
//! filtering outcome, not an error: an id missing either its request-open
//! or response-headers event is silently excluded and may complete on a
//! later pass over a longer event list. Errors local to one record (bad
//! URL, malformed point) drop that record only; the rest of the batch is
//! never aborted.

use crate::event::{EventKind, Header, RequestEvent, RequestEventInfo, RequestRecord};
use crate::filter::TypeFilter;
use crate::group::{group_by_request, EventGroup};
use crate::headers::document_type;
use crate::point::{cmp_digits, validate_point, PointError, TimePoint};
use crate::url_parts::{decompose, UrlError};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that drop a single record from the correlation output
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error(transparent)]
    Url(#[from] UrlError),
    #[error(transparent)]
    Point(#[from] PointError),
}

/// A completed HTTP exchange, derived and immutable
///
/// Exists only when both a request-open and a response-headers event were
/// observed for the id. Body presence is recorded as flags; body content
/// never flows through this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSummary {
    pub id: String,
    pub method: String,
    pub url: String,
    pub domain: String,
    /// Last path segment of the URL, as shown in a request list
    pub name: String,
    pub query_params: Vec<(String, String)>,
    pub start: f64,
    pub end: f64,
    /// Duration end - start; passed through uninterpreted, even if negative
    pub time: f64,
    pub status: u16,
    pub document_type: String,
    /// MIME subtype (text after `/`), or the whole document type if none
    #[serde(rename = "type")]
    pub resource_type: String,
    pub request_headers: Vec<Header>,
    pub response_headers: Vec<Header>,
    pub has_request_body: bool,
    pub has_response_body: bool,
    /// Timeline position used for final ordering
    pub point: TimePoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_point: Option<TimePoint>,
}

/// Correlate request records with their events into filtered, ordered summaries
///
/// Pure and idempotent: identical inputs produce identical, identically
/// ordered output. Output is ascending by execution point.
pub fn correlate(
    requests: &[RequestRecord],
    events: &[RequestEventInfo],
    filter: &TypeFilter,
) -> Vec<RequestSummary> {
    let grouped = group_by_request(events);
    let mut summaries = Vec::new();

    for record in requests {
        match summarize(record, grouped.group(&record.id)) {
            Ok(Some(summary)) => {
                if filter.matches(&summary.resource_type) {
                    summaries.push(summary);
                }
            }
            // Incomplete exchange: excluded by design, may complete later
            Ok(None) => {}
            Err(err) => {
                warn!(id = %record.id, error = %err, "dropping malformed request record");
            }
        }
    }

    sort_summaries(&mut summaries);
    debug!(
        requests = requests.len(),
        events = events.len(),
        summaries = summaries.len(),
        "correlation pass complete"
    );
    summaries
}

/// Stable ascending sort by execution point
///
/// Points are validated when summaries are built, so the comparison here
/// cannot fail.
pub fn sort_summaries(summaries: &mut [RequestSummary]) {
    summaries.sort_by(|a, b| cmp_digits(&a.point.point, &b.point.point));
}

/// Build the summary for one request record, if its exchange is complete
fn summarize(
    record: &RequestRecord,
    group: Option<&EventGroup>,
) -> Result<Option<RequestSummary>, SummaryError> {
    let Some(group) = group else {
        return Ok(None);
    };
    let (Some(open), Some(response)) = (
        group.event_of_kind(EventKind::Request),
        group.event_of_kind(EventKind::Response),
    ) else {
        return Ok(None);
    };

    let RequestEvent::Request {
        method,
        url,
        headers: request_headers,
    } = &open.event
    else {
        return Ok(None);
    };
    let RequestEvent::Response {
        status,
        headers: response_headers,
    } = &response.event
    else {
        return Ok(None);
    };

    // The summary orders by the response point; reject it up front so one
    // malformed record cannot poison the final sort.
    validate_point(&response.point)?;

    let parts = decompose(url)?;
    let doc_type = document_type(response_headers);
    let resource_type = doc_type
        .split_once('/')
        .map(|(_, subtype)| subtype.to_string())
        .unwrap_or_else(|| doc_type.clone());

    Ok(Some(RequestSummary {
        id: record.id.clone(),
        method: method.clone(),
        url: url.clone(),
        domain: parts.host,
        name: parts.name,
        query_params: parts.query_params,
        start: open.time,
        end: response.time,
        time: response.time - open.time,
        status: *status,
        document_type: doc_type,
        resource_type,
        request_headers: request_headers.clone(),
        response_headers: response_headers.clone(),
        has_request_body: group.has_kind(EventKind::RequestBody),
        has_response_body: group.has_kind(EventKind::ResponseBody),
        point: TimePoint {
            point: response.point.clone(),
            time: response.time,
        },
        trigger_point: record.trigger_point.clone(),
    }))
}

//! Enlace - network request event correlator
//!
//! This library joins independently-arriving network activity events
//! (request opened, request body, response headers, response body) that
//! share a request id, and produces ordered, typed summaries of completed
//! HTTP exchanges ready for display and filtering. Timeline positions are
//! arbitrary-precision execution points compared without native-integer
//! truncation.

pub mod cli;
pub mod correlate;
pub mod event;
pub mod filter;
pub mod group;
pub mod headers;
pub mod json_output;
pub mod point;
pub mod url_parts;

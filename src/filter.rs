//! Summary filtering for -e types= expressions
//!
//! Supports:
//! - Individual categories: -e types=xhr,img,font
//! - Everything: -e types=all (or no filter at all)
//!
//! Categories are fuzzy: a filter category accepts several underlying MIME
//! subtypes through fixed alias rules. The aliases are written as explicit,
//! independently testable predicates so each special case stays auditable.

use anyhow::{bail, Result};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Resource categories offered by the filter UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    Xhr,
    Javascript,
    Html,
    Css,
    Font,
    Img,
    Manifest,
    Media,
    Other,
    Wasm,
    Websocket,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Xhr => "xhr",
            RequestType::Javascript => "javascript",
            RequestType::Html => "html",
            RequestType::Css => "css",
            RequestType::Font => "font",
            RequestType::Img => "img",
            RequestType::Manifest => "manifest",
            RequestType::Media => "media",
            RequestType::Other => "other",
            RequestType::Wasm => "wasm",
            RequestType::Websocket => "websocket",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "xhr" => RequestType::Xhr,
            "javascript" => RequestType::Javascript,
            "html" => RequestType::Html,
            "css" => RequestType::Css,
            "font" => RequestType::Font,
            "img" => RequestType::Img,
            "manifest" => RequestType::Manifest,
            "media" => RequestType::Media,
            "other" => RequestType::Other,
            "wasm" => RequestType::Wasm,
            "websocket" => RequestType::Websocket,
            _ => bail!("unknown request type: {}", s),
        })
    }
}

/// `xhr` accepts any JSON-ish subtype
fn xhr_alias_matches(summary_type: &str) -> bool {
    summary_type.contains("json")
}

/// `font` accepts the web font subtypes (woff, woff2, ttf)
fn font_alias_matches(summary_type: &str) -> bool {
    summary_type.contains("woff") || summary_type.contains("ttf")
}

/// `img` accepts the common image subtypes
fn img_alias_matches(summary_type: &str) -> bool {
    summary_type.contains("svg")
        || summary_type.contains("jpeg")
        || summary_type.contains("png")
        || summary_type.contains("gif")
}

/// Filter that decides which summaries to keep
#[derive(Debug, Clone, Default)]
pub struct TypeFilter {
    /// Categories to include (None or empty = keep every summary)
    include: Option<HashSet<RequestType>>,
}

impl TypeFilter {
    /// Create a filter that keeps every summary
    pub fn all() -> Self {
        Self { include: None }
    }

    /// Create a filter from an explicit category set
    ///
    /// An empty set keeps everything, same as no filter.
    pub fn from_types(types: HashSet<RequestType>) -> Self {
        if types.is_empty() {
            Self::all()
        } else {
            Self {
                include: Some(types),
            }
        }
    }

    /// Parse a filter expression like "types=xhr,img" or "types=all"
    pub fn from_expr(expr: &str) -> Result<Self> {
        if let Some(spec) = expr.strip_prefix("types=") {
            Self::from_types_spec(spec)
        } else {
            bail!(
                "Invalid filter expression: {}. Expected format: types=SPEC",
                expr
            );
        }
    }

    /// Parse a types specification (the part after "types=")
    fn from_types_spec(spec: &str) -> Result<Self> {
        let mut types = HashSet::new();
        for part in spec.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if part == "all" {
                return Ok(Self::all());
            }
            types.insert(part.parse::<RequestType>()?);
        }
        Ok(Self::from_types(types))
    }

    /// Check whether a summary with the given derived type passes the filter
    ///
    /// A summary matches on its exact category name, or through any of the
    /// fixed alias rules. All alias clauses are independent; matching more
    /// than one keeps the summary exactly once.
    pub fn matches(&self, summary_type: &str) -> bool {
        let set = match &self.include {
            None => return true,
            Some(set) if set.is_empty() => return true,
            Some(set) => set,
        };

        if let Ok(exact) = summary_type.parse::<RequestType>() {
            if set.contains(&exact) {
                return true;
            }
        }
        (set.contains(&RequestType::Xhr) && xhr_alias_matches(summary_type))
            || (set.contains(&RequestType::Font) && font_alias_matches(summary_type))
            || (set.contains(&RequestType::Img) && img_alias_matches(summary_type))
    }
}

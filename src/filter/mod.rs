// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Time range filters for the history and logbook endpoints.
//!
//! Both endpoints take the start of the range as a path segment and every
//! other criterion as a query parameter:
//!
//! ```text
//! /api/history/period/2024-01-15T10%3A30%3A00%2B01%3A00?filter_entity_id=sensor.temp
//! ```
//!
//! Each filter lists its parameters itself, in declaration order, through
//! [`QueryFilter::params`]. Parameters still holding their default value
//! (empty text, `false`, no timestamp) are left out entirely.
//!
//! # Examples
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use hass_rest::filter::{QueryFilter, StateChangesFilter};
//!
//! let start = FixedOffset::east_opt(3600)
//!     .unwrap()
//!     .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
//!     .unwrap();
//! let filter = StateChangesFilter::default()
//!     .with_start_time(start)
//!     .with_entity_id("sensor.temp")
//!     .with_minimal_response(true);
//!
//! assert_eq!(
//!     filter.to_query_string(),
//!     "/2024-01-15T10%3A30%3A00%2B01%3A00?filter_entity_id=sensor.temp&minimal_response=true"
//! );
//! assert_eq!(StateChangesFilter::default().to_query_string(), "");
//! ```

mod history;
mod logbook;

use chrono::{DateTime, FixedOffset};

pub use history::StateChangesFilter;
pub use logbook::LogbookFilter;

/// Timestamp layout used in filters, e.g. `2024-01-15T10:30:00+01:00`.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Value of a single query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryValue<'a> {
    /// Free text, default when empty.
    Text(&'a str),
    /// Boolean flag, default when `false`.
    Flag(bool),
    /// Timestamp, default when absent.
    Time(Option<DateTime<FixedOffset>>),
}

/// A named query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam<'a> {
    name: &'static str,
    value: QueryValue<'a>,
}

impl<'a> QueryParam<'a> {
    /// Creates a text parameter.
    #[must_use]
    pub fn text(name: &'static str, value: &'a str) -> Self {
        Self {
            name,
            value: QueryValue::Text(value),
        }
    }

    /// Creates a boolean parameter.
    #[must_use]
    pub fn flag(name: &'static str, value: bool) -> Self {
        Self {
            name,
            value: QueryValue::Flag(value),
        }
    }

    /// Creates a timestamp parameter.
    #[must_use]
    pub fn time(name: &'static str, value: Option<DateTime<FixedOffset>>) -> Self {
        Self {
            name,
            value: QueryValue::Time(value),
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the parameter value.
    #[must_use]
    pub fn value(&self) -> QueryValue<'a> {
        self.value
    }

    /// Returns true when the value is the default of its type.
    #[must_use]
    pub fn is_default(&self) -> bool {
        match self.value {
            QueryValue::Text(text) => text.is_empty(),
            QueryValue::Flag(flag) => !flag,
            QueryValue::Time(time) => time.is_none(),
        }
    }

    /// Renders `name=value` with the value percent-encoded, or `None` for a default value.
    fn encode(&self) -> Option<String> {
        if self.is_default() {
            return None;
        }
        let value = match self.value {
            QueryValue::Text(text) => urlencoding::encode(text).into_owned(),
            QueryValue::Flag(flag) => flag.to_string(),
            QueryValue::Time(time) => encode_time(time?),
        };
        Some(format!("{}={value}", self.name))
    }
}

/// A filter that can be appended to an endpoint path.
pub trait QueryFilter {
    /// Start of the time range, rendered as a path segment.
    fn start_time(&self) -> Option<DateTime<FixedOffset>>;

    /// Every other criterion, in declaration order.
    fn params(&self) -> Vec<QueryParam<'_>>;

    /// Renders `/<start>?<params>`.
    ///
    /// The start segment is omitted when no start time is set, the `?` part
    /// when every parameter holds its default value. Returns an empty string
    /// when both are absent.
    fn to_query_string(&self) -> String {
        encode_query(self.start_time(), &self.params())
    }
}

/// Builds the path suffix for a start time and an ordered parameter list.
#[must_use]
pub fn encode_query(start_time: Option<DateTime<FixedOffset>>, params: &[QueryParam<'_>]) -> String {
    let mut query = start_time
        .map(|start| format!("/{}", encode_time(start)))
        .unwrap_or_default();

    let pairs: Vec<String> = params.iter().filter_map(QueryParam::encode).collect();
    if !pairs.is_empty() {
        query.push('?');
        query.push_str(&pairs.join("&"));
    }
    query
}

fn encode_time(time: DateTime<FixedOffset>) -> String {
    urlencoding::encode(&time.format(TIME_FORMAT).to_string()).into_owned()
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! History filter.

use chrono::{DateTime, FixedOffset};

use crate::filter::{QueryFilter, QueryParam};

/// Filter for `GET /api/history/period`.
///
/// Without a start time the server defaults to one day before now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateChangesFilter {
    /// Start of the period.
    pub start_time: Option<DateTime<FixedOffset>>,
    /// End of the period.
    pub end_time: Option<DateTime<FixedOffset>>,
    /// Comma separated entity ids to restrict the history to.
    pub filter_entity_id: String,
    /// Only return `last_changed` and `state` for intermediate states.
    pub minimal_response: bool,
    /// Only return significant state changes.
    pub significant_changes_only: bool,
    /// Skip attributes in the returned states.
    pub no_attributes: bool,
}

impl StateChangesFilter {
    /// Sets the start of the period.
    #[must_use]
    pub fn with_start_time(mut self, start_time: DateTime<FixedOffset>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets the end of the period.
    #[must_use]
    pub fn with_end_time(mut self, end_time: DateTime<FixedOffset>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Restricts the history to the given entity ids (comma separated).
    #[must_use]
    pub fn with_entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.filter_entity_id = entity_id.into();
        self
    }

    /// Requests a minimal response.
    #[must_use]
    pub fn with_minimal_response(mut self, enabled: bool) -> Self {
        self.minimal_response = enabled;
        self
    }

    /// Requests significant changes only.
    #[must_use]
    pub fn with_significant_changes_only(mut self, enabled: bool) -> Self {
        self.significant_changes_only = enabled;
        self
    }

    /// Requests states without attributes.
    #[must_use]
    pub fn with_no_attributes(mut self, enabled: bool) -> Self {
        self.no_attributes = enabled;
        self
    }
}

impl QueryFilter for StateChangesFilter {
    fn start_time(&self) -> Option<DateTime<FixedOffset>> {
        self.start_time
    }

    fn params(&self) -> Vec<QueryParam<'_>> {
        vec![
            QueryParam::time("end_time", self.end_time),
            QueryParam::text("filter_entity_id", &self.filter_entity_id),
            QueryParam::flag("minimal_response", self.minimal_response),
            QueryParam::flag("significant_changes_only", self.significant_changes_only),
            QueryParam::flag("no_attributes", self.no_attributes),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 15, hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn empty_filter() {
        assert_eq!(StateChangesFilter::default().to_query_string(), "");
    }

    #[test]
    fn all_fields() {
        let filter = StateChangesFilter::default()
            .with_start_time(utc(8))
            .with_end_time(utc(9))
            .with_entity_id("sensor.a,sensor.b")
            .with_minimal_response(true)
            .with_significant_changes_only(true)
            .with_no_attributes(true);
        assert_eq!(
            filter.to_query_string(),
            "/2024-01-15T08%3A00%3A00%2B00%3A00\
             ?end_time=2024-01-15T09%3A00%3A00%2B00%3A00\
             &filter_entity_id=sensor.a%2Csensor.b\
             &minimal_response=true\
             &significant_changes_only=true\
             &no_attributes=true"
        );
    }

    #[test]
    fn flags_only() {
        let filter = StateChangesFilter::default().with_significant_changes_only(true);
        assert_eq!(filter.to_query_string(), "?significant_changes_only=true");
    }

    #[test]
    fn start_time_prefix_regardless_of_other_fields() {
        let with_start = StateChangesFilter::default().with_start_time(utc(8));
        assert_eq!(
            with_start.to_query_string(),
            "/2024-01-15T08%3A00%3A00%2B00%3A00"
        );

        let more = with_start.with_entity_id("light.x");
        assert!(
            more.to_query_string()
                .starts_with("/2024-01-15T08%3A00%3A00%2B00%3A00?")
        );
    }

    #[test]
    fn params_follow_declaration_order() {
        let names: Vec<_> = StateChangesFilter::default()
            .params()
            .iter()
            .map(QueryParam::name)
            .collect();
        assert_eq!(
            names,
            [
                "end_time",
                "filter_entity_id",
                "minimal_response",
                "significant_changes_only",
                "no_attributes"
            ]
        );
    }
}

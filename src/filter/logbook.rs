// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Logbook filter.

use chrono::{DateTime, FixedOffset};

use crate::filter::{QueryFilter, QueryParam};

/// Filter for `GET /api/logbook`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogbookFilter {
    /// Start of the period.
    pub start_time: Option<DateTime<FixedOffset>>,
    /// End of the period.
    pub end_time: Option<DateTime<FixedOffset>>,
    /// Entity to restrict the logbook to.
    pub entity_id: String,
}

impl LogbookFilter {
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

    /// Restricts the logbook to one entity.
    #[must_use]
    pub fn with_entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = entity_id.into();
        self
    }
}

impl QueryFilter for LogbookFilter {
    fn start_time(&self) -> Option<DateTime<FixedOffset>> {
        self.start_time
    }

    fn params(&self) -> Vec<QueryParam<'_>> {
        vec![
            QueryParam::time("end_time", self.end_time),
            QueryParam::text("entity", &self.entity_id),
        ]
    }
}

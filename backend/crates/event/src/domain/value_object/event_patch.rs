//! Event Patch
//!
//! Sparse set of field changes for an event update.
//!
//! Empty strings count as "not supplied": a field can be changed but never
//! blanked through an update.

use chrono::{DateTime, Utc};

use crate::domain::value_object::event_date::parse_event_date;
use crate::error::{EventError, EventResult};

/// Raw update fields as received
#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
}

/// Validated sparse update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl EventPatch {
    /// Keep supplied, non-empty fields and parse `date`
    ///
    /// ## Errors
    /// - `InvalidDate` if a supplied date does not parse
    /// - `NothingToUpdate` if no field survives
    pub fn from_changes(changes: EventChanges) -> EventResult<Self> {
        let supplied = |value: Option<String>| value.filter(|v| !v.is_empty());

        let date = match supplied(changes.date) {
            Some(raw) => Some(parse_event_date(&raw)?),
            None => None,
        };

        let patch = Self {
            title: supplied(changes.title),
            description: supplied(changes.description),
            location: supplied(changes.location),
            date,
        };

        if patch.is_empty() {
            return Err(EventError::NothingToUpdate);
        }

        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.date.is_none()
    }
}

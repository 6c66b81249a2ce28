//! Ordered in-memory event store.
//!
//! Dates iterate in ascending order and each date's events iterate in
//! ascending byte-wise order. A date never stays in the store with an
//! empty event set.

use crate::Date;
use std::collections::{BTreeMap, BTreeSet};

/// Mapping from dates to the set of event names recorded for them
#[derive(Clone, Debug, Default)]
pub struct EventStore {
    events: BTreeMap<Date, BTreeSet<String>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `event` under `date`. Adding an existing event is a no-op.
    pub fn add_event(&mut self, date: Date, event: impl Into<String>) {
        let event = event.into();
        tracing::debug!(%date, event = %event, "Adding event");
        self.events.entry(date).or_default().insert(event);
    }

    /// Remove one event, returning whether it was present.
    ///
    /// Removing the last event of a date removes the date as well.
    pub fn delete_event(&mut self, date: &Date, event: &str) -> bool {
        let Some(set) = self.events.get_mut(date) else {
            return false;
        };

        let removed = set.remove(event);
        if set.is_empty() {
            self.events.remove(date);
        }
        tracing::debug!(%date, event, removed, "Deleted event");
        removed
    }

    /// Remove every event for `date`, returning how many there were.
    pub fn delete_date(&mut self, date: &Date) -> usize {
        let count = self.events.remove(date).map_or(0, |set| set.len());
        tracing::debug!(%date, count, "Deleted date");
        count
    }

    /// Events recorded for `date` in ascending order, or `None` if the
    /// date has no entry.
    pub fn find(&self, date: &Date) -> Option<impl Iterator<Item = &str> + '_> {
        self.events
            .get(date)
            .map(|set| set.iter().map(String::as_str))
    }

    /// Every (date, event) pair, dates ascending, then events ascending.
    pub fn entries(&self) -> impl Iterator<Item = (&Date, &str)> + '_ {
        self.events
            .iter()
            .flat_map(|(date, set)| set.iter().map(move |event| (date, event.as_str())))
    }

    /// Number of dates with at least one event
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of stored events across all dates
    pub fn event_count(&self) -> usize {
        self.events.values().map(BTreeSet::len).sum()
    }
}

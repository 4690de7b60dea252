use crate::grid::Week;
use crate::model::{EngineError, Event, Rgb};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// Events partitioned by calendar date. Each date keeps its events in
/// insertion order; dates are visited in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleIndex {
    days: BTreeMap<NaiveDate, Vec<Event>>,
}

impl ScheduleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        color: Rgb,
        description: impl Into<String>,
    ) -> &Event {
        self.insert(Event::new(date, time, color, description))
    }

    /// Appends an already built event to its date's list.
    pub fn insert(&mut self, event: Event) -> &Event {
        let list = self.days.entry(event.date).or_default();
        list.push(event);
        &list[list.len() - 1]
    }

    /// Removes the first event equal to the given fields. Nothing changes
    /// when there is no such event.
    pub fn remove(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        color: Rgb,
        description: &str,
    ) -> Result<Event, EngineError> {
        let target = Event::new(date, time, color, description);
        let not_found = || {
            EngineError::NotFound(format!(
                "event \"{}\" at {} on {}",
                target.description,
                target.time.format("%H:%M"),
                target.date.format("%m/%d/%Y")
            ))
        };
        let list = self.days.get_mut(&date).ok_or_else(not_found)?;
        let position = list
            .iter()
            .position(|event| *event == target)
            .ok_or_else(not_found)?;
        let removed = list.remove(position);
        if list.is_empty() {
            self.days.remove(&date);
        }
        Ok(removed)
    }

    pub fn events_on(&self, date: NaiveDate) -> &[Event] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Events for each day of `week`, Sunday first.
    pub fn week_events(&self, week: &Week) -> [&[Event]; 7] {
        week.days().map(|date| self.events_on(date))
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// All events, grouped by ascending date.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.days.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

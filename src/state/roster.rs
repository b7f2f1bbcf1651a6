//! Activity roster state as last fetched from the server.
//!
//! DESIGN
//! ======
//! The roster is never patched locally. Every successful `GET /activities`
//! replaces it wholesale, and each fetch carries a ticket so a slow response
//! can't overwrite a newer one that already landed.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::net::types::ActivityDetails;

/// A named, capacity-bounded activity and its participant emails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn from_details(name: impl Into<String>, details: ActivityDetails) -> Self {
        Self {
            name: name.into(),
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    /// Remaining capacity. Negative when the server has over-admitted.
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Activities keyed by name, in server response order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityRoster {
    activities: Vec<Activity>,
}

impl ActivityRoster {
    pub fn new(activities: impl IntoIterator<Item = Activity>) -> Self {
        let mut roster = Self::default();
        for activity in activities {
            roster.insert(activity);
        }
        roster
    }

    /// Insert or replace by name; a replaced entry keeps its position.
    pub fn insert(&mut self, activity: Activity) {
        match self.activities.iter_mut().find(|a| a.name == activity.name) {
            Some(existing) => *existing = activity,
            None => self.activities.push(activity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl<'de> Deserialize<'de> for ActivityRoster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RosterVisitor;

        impl<'de> Visitor<'de> for RosterVisitor {
            type Value = ActivityRoster;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut roster = ActivityRoster::default();
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    roster.insert(Activity::from_details(name, details));
                }
                Ok(roster)
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}

/// Outcome of the most recently applied roster fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// No fetch has completed yet.
    #[default]
    Loading,
    Ready,
    /// The latest fetch failed; `roster` still holds the last good data.
    Failed,
}

/// Roster plus fetch bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterState {
    roster: ActivityRoster,
    status: LoadStatus,
    issued: u64,
    applied: u64,
}

impl RosterState {
    pub fn roster(&self) -> &ActivityRoster {
        &self.roster
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Reserve a ticket for a fetch that is about to be sent.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Replace the roster with a fetch result. Returns false when a newer
    /// fetch has already been applied and `roster` was discarded.
    pub fn apply(&mut self, ticket: u64, roster: ActivityRoster) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.applied = ticket;
        self.roster = roster;
        self.status = LoadStatus::Ready;
        true
    }

    /// Record a failed fetch. The in-memory roster is left as it was.
    pub fn fail(&mut self, ticket: u64) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.applied = ticket;
        self.status = LoadStatus::Failed;
        true
    }

    fn accepts(&self, ticket: u64) -> bool {
        ticket > self.applied
    }
}

use std::str::FromStr;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// Event segments a guest can be invited to, in sheet column order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Activity {
    Antwerp,
    Ceremony,
    Diner,
    Party,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown activity: '{0}'")]
pub struct UnknownActivity(pub String);

impl Activity {
    pub fn parse(label: &str) -> Result<Self, UnknownActivity> {
        Activity::from_str(label.trim()).map_err(|_| UnknownActivity(label.trim().to_owned()))
    }
}

/// Insertion-ordered set of activities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivitySet(Vec<Activity>);

impl ActivitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the activity was already present.
    pub fn insert(&mut self, activity: Activity) -> bool {
        if self.0.contains(&activity) {
            return false;
        }
        self.0.push(activity);
        true
    }

    pub fn contains(&self, activity: Activity) -> bool {
        self.0.contains(&activity)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Activity> + '_ {
        self.0.iter().copied()
    }

    /// Parses a comma-delimited cell such as `"Ceremony, party"`.
    /// Whitespace is dropped before splitting. Blank tokens are skipped; any
    /// other unrecognized token fails the whole cell.
    pub fn parse_cell(cell: &str) -> Result<Self, UnknownActivity> {
        let compact: String = cell.chars().filter(|c| !c.is_whitespace()).collect();
        let mut set = ActivitySet::new();
        for token in compact.split(',').filter(|t| !t.is_empty()) {
            set.insert(Activity::parse(token)?);
        }
        Ok(set)
    }
}

impl FromIterator<Activity> for ActivitySet {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut set = ActivitySet::new();
        for activity in iter {
            set.insert(activity);
        }
        set
    }
}

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Utc};

use crate::core::error::CommandError;

/// RFC 822 layout used when showing creation times.
pub const CREATED_AT_FORMAT: &str = "%d %b %y %H:%M %Z";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityId(u64);
impl ActivityId {
    pub fn new(id: u64) -> Self {
        ActivityId(id)
    }
}
impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl FromStr for ActivityId {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(ActivityId)
            .map_err(|_e| CommandError::InvalidId(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActivityStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl ActivityStatus {
    pub const ALL: [ActivityStatus; 3] = [
        ActivityStatus::Todo,
        ActivityStatus::InProgress,
        ActivityStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Todo => "todo",
            ActivityStatus::InProgress => "in-progress",
            ActivityStatus::Done => "done",
        }
    }
}
impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for ActivityStatus {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CommandError::InvalidStatus(s.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct Activity {
    pub id: ActivityId,
    pub description: String,
    pub status: ActivityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    pub fn new(id: ActivityId, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            description: description.into(),
            status: ActivityStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Bumps `updated_at`, never moving it behind its previous value.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}
impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ID: {}, Description: '{}', Status: {}, Created: {}",
            self.id,
            self.description,
            self.status,
            self.created_at.with_timezone(&Local).format(CREATED_AT_FORMAT)
        )
    }
}

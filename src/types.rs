use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlankError;

/// Priority scale used by the board payload: 0 (none) through 4 (urgent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Priority {
    #[default]
    NoPriority,
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_num(&self) -> u8 {
        match self {
            Priority::NoPriority => 0,
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Urgent => 4,
        }
    }

    /// Human label shown in column headers and cards.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::NoPriority => "No priority",
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    /// Parse a raw bucket key ("0".."4") back into a priority.
    pub fn from_raw_key(s: &str) -> Option<Self> {
        s.parse::<u8>().ok().filter(|n| *n <= 4).map(Self::from)
    }
}

impl From<u8> for Priority {
    fn from(n: u8) -> Self {
        match n {
            1 => Priority::Low,
            2 => Priority::Medium,
            3 => Priority::High,
            4 => Priority::Urgent,
            // Out-of-range values degrade instead of failing the payload.
            _ => Priority::NoPriority,
        }
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> Self {
        p.as_num()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_num())
    }
}

/// A single work item as delivered by the board endpoint.
///
/// Tickets are immutable once fetched; the board only regroups and reorders
/// clones of them. Every field defaults so a sparse record renders degraded
/// rather than rejecting the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub tag: Vec<String>,

    #[serde(default)]
    pub priority: Priority,

    #[serde(rename = "userId", default)]
    pub user_id: String,

    #[serde(default)]
    pub status: String,
}

/// A user referenced by tickets via `user_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,
}

/// Ticket field used to partition tickets into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupKey {
    #[default]
    Status,
    UserId,
    Priority,
}

impl GroupKey {
    /// Raw string bucket key for a ticket under this grouping.
    pub fn bucket_key(&self, ticket: &Ticket) -> String {
        match self {
            GroupKey::Status => ticket.status.clone(),
            GroupKey::UserId => ticket.user_id.clone(),
            GroupKey::Priority => ticket.priority.as_num().to_string(),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Status => write!(f, "status"),
            GroupKey::UserId => write!(f, "userId"),
            GroupKey::Priority => write!(f, "priority"),
        }
    }
}

impl FromStr for GroupKey {
    type Err = PlankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(GroupKey::Status),
            "userId" => Ok(GroupKey::UserId),
            "priority" => Ok(GroupKey::Priority),
            _ => Err(PlankError::InvalidGroupKey(s.to_string())),
        }
    }
}

pub const VALID_GROUP_KEYS: &[&str] = &["status", "userId", "priority"];

/// Ticket field used to order tickets within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Priority,
    Title,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Priority => write!(f, "priority"),
            SortKey::Title => write!(f, "title"),
        }
    }
}

impl FromStr for SortKey {
    type Err = PlankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority" => Ok(SortKey::Priority),
            "title" => Ok(SortKey::Title),
            _ => Err(PlankError::InvalidSortKey(s.to_string())),
        }
    }
}

pub const VALID_SORT_KEYS: &[&str] = &["priority", "title"];

/// Fixed avatar lookup for the known user ids delivered by the endpoint.
/// Unknown ids resolve to no avatar.
pub fn avatar_url(user_id: &str) -> Option<&'static str> {
    match user_id {
        "usr-1" => Some(
            "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?q=80&w=1000&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8M3x8dXNlcnxlbnwwfHwwfHx8MA%3D%3D",
        ),
        "usr-2" => Some(
            "https://img.freepik.com/free-photo/portrait-white-man-isolated_53876-40306.jpg?size=626&ext=jpg&ga=GA1.1.1413502914.1699920000&semt=ais",
        ),
        "usr-3" => Some(
            "https://images.unsplash.com/photo-1542909168-82c3e7fdca5c?q=80&w=1000&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8OHx8ZmFjZXxlbnwwfHwwfHx8MA%3D%3D",
        ),
        "usr-4" => Some(
            "https://images.unsplash.com/photo-1633332755192-727a05c4013d?q=80&w=1000&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8Mnx8dXNlcnxlbnwwfHwwfHx8MA%3D%3D",
        ),
        "usr-5" => Some(
            "https://images.unsplash.com/photo-1568602471122-7832951cc4c5?q=80&w=1000&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MTJ8fHVzZXJ8ZW58MHx8MHx8fDA%3D",
        ),
        _ => None,
    }
}

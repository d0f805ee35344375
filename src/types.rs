use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FrontdeskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn is_closed(&self) -> bool {
        matches!(self, TicketStatus::Closed)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, TicketStatus::Resolved)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "open"),
            TicketStatus::InProgress => write!(f, "in_progress"),
            TicketStatus::Resolved => write!(f, "resolved"),
            TicketStatus::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = FrontdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "in_progress" => Ok(TicketStatus::InProgress),
            "resolved" => Ok(TicketStatus::Resolved),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(FrontdeskError::InvalidStatus(s.to_string())),
        }
    }
}

// Servers are inconsistent about casing, so ingest goes through FromStr
// rather than a derived deserializer.
impl<'de> Deserialize<'de> for TicketStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

pub const VALID_STATUSES: &[&str] = &["open", "in_progress", "resolved", "closed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketPriority::Low => write!(f, "low"),
            TicketPriority::Medium => write!(f, "medium"),
            TicketPriority::High => write!(f, "high"),
        }
    }
}

impl FromStr for TicketPriority {
    type Err = FrontdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            _ => Err(FrontdeskError::InvalidPriority(s.to_string())),
        }
    }
}

pub const VALID_PRIORITIES: &[&str] = &["low", "medium", "high"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
    #[default]
    User,
}

impl Role {
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::Agent)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Agent => write!(f, "agent"),
            Role::User => write!(f, "user"),
        }
    }
}

impl FromStr for Role {
    type Err = FrontdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "agent" => Ok(Role::Agent),
            "user" => Ok(Role::User),
            _ => Err(FrontdeskError::InvalidRole(s.to_string())),
        }
    }
}

pub const VALID_ROLES: &[&str] = &["admin", "agent", "user"];

// Tags the server records in `last_action` after each mutation.
pub const ACTION_ASSIGNED: &str = "assigned";
pub const ACTION_SELF_ASSIGNED: &str = "self-assigned";
pub const ACTION_RESOLVED: &str = "resolved";
pub const ACTION_CLOSED: &str = "closed";
pub const ACTION_RESPONDED: &str = "responded";
pub const ACTION_REPLIED: &str = "replied";

/// Identifier of a response or reply. Entries created optimistically carry a
/// local placeholder id until the next refresh replaces them with
/// server-confirmed rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentId {
    Pending(String),
    Confirmed(String),
}

impl CommentId {
    pub fn as_str(&self) -> &str {
        match self {
            CommentId::Pending(id) | CommentId::Confirmed(id) => id,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CommentId::Pending(_))
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CommentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// Everything read off the wire is authoritative, so pending ids can only be
// minted locally and never survive a refresh.
impl<'de> Deserialize<'de> for CommentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(CommentId::Confirmed(String::deserialize(deserializer)?))
    }
}

/// Agent or admin authored message on a ticket. Held newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub response_id: CommentId,
    pub responder: String,
    pub response: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Requester authored message attached to a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub reply_id: CommentId,
    #[serde(default)]
    pub response_id: Option<String>,
    pub replier: String,
    pub reply: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: String,

    pub subject: String,

    #[serde(default)]
    pub issue: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub priority: TicketPriority,

    #[serde(default)]
    pub status: TicketStatus,

    #[serde(default)]
    pub created_by: Option<String>,

    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub last_action: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub responses: Vec<Response>,

    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl Ticket {
    /// Newest response, if any. Responses are held newest-first, so this is
    /// the default reply target.
    pub fn newest_response(&self) -> Option<&Response> {
        self.responses.first()
    }

    /// Whether the conversation accepts no further comments.
    pub fn thread_locked(&self) -> bool {
        self.status.is_closed() || self.last_action.as_deref() == Some(ACTION_CLOSED)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
}

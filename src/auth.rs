use secrecy::SecretString;
use std::fmt;

use crate::error::{FrontdeskError, Result};
use crate::types::Role;

/// Actions gated by role. `Comment` covers both agent responses and
/// requester replies; which one is submitted depends on the viewer's role,
/// not on a separate capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketAction {
    Assign,
    SelfAssign,
    Comment,
    Resolve,
    Close,
    Refresh,
}

impl TicketAction {
    /// Every action, in display order.
    pub const ALL: [TicketAction; 6] = [
        TicketAction::Assign,
        TicketAction::SelfAssign,
        TicketAction::Comment,
        TicketAction::Resolve,
        TicketAction::Close,
        TicketAction::Refresh,
    ];

    /// Name used in `last_action` style contexts and JSON output.
    pub fn slug(&self) -> &'static str {
        match self {
            TicketAction::Assign => "assign",
            TicketAction::SelfAssign => "self-assign",
            TicketAction::Comment => "comment",
            TicketAction::Resolve => "resolve",
            TicketAction::Close => "close",
            TicketAction::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TicketAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketAction::Assign => write!(f, "assign an agent"),
            TicketAction::SelfAssign => write!(f, "self-assign"),
            TicketAction::Comment => write!(f, "comment"),
            TicketAction::Resolve => write!(f, "resolve tickets"),
            TicketAction::Close => write!(f, "close tickets"),
            TicketAction::Refresh => write!(f, "refresh"),
        }
    }
}

/// Pure capability table. Staff get every action; requesters may comment on
/// their own thread, close it, and refresh.
pub fn is_authorized(role: Role, action: TicketAction) -> bool {
    match role {
        Role::Admin | Role::Agent => true,
        Role::User => matches!(
            action,
            TicketAction::Comment | TicketAction::Close | TicketAction::Refresh
        ),
    }
}

/// Gate used by every action entry point.
pub fn ensure(role: Role, action: TicketAction) -> Result<()> {
    if is_authorized(role, action) {
        Ok(())
    } else {
        Err(FrontdeskError::NotPermitted(
            role.to_string(),
            action.to_string(),
        ))
    }
}

/// The acting identity. Passed explicitly into the session and the service
/// layer; nothing in the crate reads credentials from ambient state.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub username: String,
    pub role: Role,
    pub token: Option<SecretString>,
}

impl Viewer {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Viewer {
            username: username.into(),
            role,
            token: None,
        }
    }

    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// Writes need a bearer token. A missing token is a local validation
    /// failure, caught before any request is built.
    pub fn require_token(&self) -> Result<&SecretString> {
        self.token.as_ref().ok_or(FrontdeskError::MissingToken)
    }
}

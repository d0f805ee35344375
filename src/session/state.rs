//! Per-ticket view state and the action gate.
//!
//! This module separates the raw state of a viewed ticket from the session
//! that mutates it, so the gating rules are plain functions over data and
//! can be tested without any service behind them.

use crate::auth::{self, TicketAction};
use crate::error::{FrontdeskError, Result};
use crate::types::{Role, Ticket};

/// Raw state of one viewed ticket.
#[derive(Debug, Clone)]
pub struct TicketState {
    /// The displayed ticket. May briefly carry optimistic values while an
    /// action is in flight.
    pub ticket: Ticket,
    /// Whether a fetch is currently populating the ticket
    pub is_loading: bool,
    /// Single-flight flag. At most one mutating action runs per ticket.
    pub action_in_progress: bool,
    /// Advisory reply target. Only affects which response id the next
    /// comment submits against.
    pub selected_response: Option<String>,
}

impl TicketState {
    pub fn new(ticket: Ticket) -> Self {
        Self {
            ticket,
            is_loading: false,
            action_in_progress: false,
            selected_response: None,
        }
    }
}

/// Pure function: why `action` cannot start right now, if it cannot.
///
/// Combines the role capability table, the single-flight flag, and the
/// status rules. Token presence is deliberately not part of this check;
/// it is validated by the session just before a write goes out.
pub fn check_action(state: &TicketState, role: Role, action: TicketAction) -> Result<()> {
    auth::ensure(role, action)?;

    if state.action_in_progress {
        return Err(FrontdeskError::ActionInFlight);
    }

    let status = state.ticket.status;
    match action {
        TicketAction::Refresh => Ok(()),
        TicketAction::Close => {
            if status.is_closed() {
                Err(FrontdeskError::Validation(
                    "ticket is already closed".to_string(),
                ))
            } else {
                Ok(())
            }
        }
        TicketAction::Resolve => {
            if status.is_closed() {
                Err(FrontdeskError::Validation("ticket is closed".to_string()))
            } else if status.is_resolved() {
                Err(FrontdeskError::Validation(
                    "ticket is already resolved".to_string(),
                ))
            } else {
                Ok(())
            }
        }
        TicketAction::Assign | TicketAction::SelfAssign => {
            if status.is_closed() {
                Err(FrontdeskError::Validation("ticket is closed".to_string()))
            } else {
                Ok(())
            }
        }
        TicketAction::Comment => {
            if state.ticket.thread_locked() {
                Err(FrontdeskError::Validation(
                    "the conversation is locked".to_string(),
                ))
            } else if role == Role::User && state.ticket.responses.is_empty() {
                // Requesters reply to an existing response; with none there
                // is nothing to attach to.
                Err(FrontdeskError::NoReplyTarget)
            } else {
                Ok(())
            }
        }
    }
}

/// Pure function: whether `action` can start right now.
pub fn action_enabled(state: &TicketState, role: Role, action: TicketAction) -> bool {
    check_action(state, role, action).is_ok()
}

/// Actions the viewer could start right now, in display order.
pub fn available_actions(state: &TicketState, role: Role) -> Vec<TicketAction> {
    TicketAction::ALL
        .into_iter()
        .filter(|action| action_enabled(state, role, *action))
        .collect()
}

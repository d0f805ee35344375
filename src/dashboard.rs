//! Derived dashboard figures.
//!
//! Pure derivations over a fetched ticket list: status counts, the
//! high-priority backlog, and a recent-activity feed keyed off each ticket's
//! `last_action` tag. Nothing here talks to the service.

use serde::Serialize;

use crate::types::{
    ACTION_ASSIGNED, ACTION_CLOSED, ACTION_REPLIED, ACTION_RESOLVED, ACTION_RESPONDED,
    ACTION_SELF_ASSIGNED, Ticket, TicketPriority, TicketStatus,
};

/// Counts of tickets by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
}

impl StatusCounts {
    /// Get count for a specific status
    pub fn for_status(&self, status: TicketStatus) -> usize {
        match status {
            TicketStatus::Open => self.open,
            TicketStatus::InProgress => self.in_progress,
            TicketStatus::Resolved => self.resolved,
            TicketStatus::Closed => self.closed,
        }
    }

    pub fn total(&self) -> usize {
        self.open + self.in_progress + self.resolved + self.closed
    }
}

/// Count tickets per status.
pub fn status_counts(tickets: &[Ticket]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for ticket in tickets {
        match ticket.status {
            TicketStatus::Open => counts.open += 1,
            TicketStatus::InProgress => counts.in_progress += 1,
            TicketStatus::Resolved => counts.resolved += 1,
            TicketStatus::Closed => counts.closed += 1,
        }
    }
    counts
}

/// High-priority tickets still being worked: open or in progress.
pub fn high_priority_backlog(tickets: &[Ticket]) -> Vec<&Ticket> {
    tickets
        .iter()
        .filter(|t| {
            t.priority == TicketPriority::High
                && matches!(t.status, TicketStatus::Open | TicketStatus::InProgress)
        })
        .collect()
}

/// One line of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityLine {
    pub ticket_id: String,
    pub summary: String,
    /// Timestamp to show relatively, when the ticket carries one
    pub when: Option<String>,
}

/// Human summary of a ticket's most recent mutation.
pub fn activity_summary(ticket: &Ticket) -> String {
    match ticket.last_action.as_deref() {
        Some(ACTION_ASSIGNED) | Some(ACTION_SELF_ASSIGNED) => format!(
            "Assigned to {}",
            ticket.assigned_to.as_deref().unwrap_or("Unassigned")
        ),
        Some(ACTION_RESOLVED) => "Status changed to resolved".to_string(),
        Some(ACTION_CLOSED) => "Status changed to closed".to_string(),
        Some(ACTION_RESPONDED) | Some(ACTION_REPLIED) => "New comment added".to_string(),
        Some(other) => other.to_string(),
        None => "Ticket created".to_string(),
    }
}

/// Recent activity, at most `limit` lines, in the order the server returned
/// the list.
pub fn recent_activity(tickets: &[Ticket], limit: usize) -> Vec<ActivityLine> {
    tickets
        .iter()
        .take(limit)
        .map(|ticket| ActivityLine {
            ticket_id: ticket.ticket_id.clone(),
            summary: activity_summary(ticket),
            when: ticket.created_at.clone(),
        })
        .collect()
}

//! Conversation assembly.
//!
//! Merges a ticket's responses and replies into display order: responses
//! newest-first, each with its replies nested under it. Replies carry a
//! `response_id` linkage; when the linkage matches nothing the reply is shown
//! under the newest response rather than dropped, and with no responses at
//! all it lands in a trailing standalone group. Assembly never fails on
//! inconsistent data.

use crate::types::{Reply, Response, Ticket};

/// One response with the replies nested under it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadNode<'a> {
    pub response: &'a Response,
    pub replies: Vec<&'a Reply>,
}

/// The assembled conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread<'a> {
    /// Responses in display order, newest first.
    pub nodes: Vec<ThreadNode<'a>>,
    /// Replies that had nowhere to attach because the ticket has no
    /// responses at all.
    pub orphans: Vec<&'a Reply>,
}

impl Thread<'_> {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.orphans.is_empty()
    }
}

/// Pure function: merge responses and replies into the rendered order.
pub fn assemble(ticket: &Ticket) -> Thread<'_> {
    let mut nodes: Vec<ThreadNode<'_>> = ticket
        .responses
        .iter()
        .map(|response| ThreadNode {
            response,
            replies: Vec::new(),
        })
        .collect();

    let mut orphans = Vec::new();
    for reply in &ticket.replies {
        let slot = reply
            .response_id
            .as_deref()
            .and_then(|id| nodes.iter().position(|n| n.response.response_id.as_str() == id));

        match slot {
            Some(i) => nodes[i].replies.push(reply),
            // Dangling or missing linkage lands on the newest response.
            None if !nodes.is_empty() => nodes[0].replies.push(reply),
            None => orphans.push(reply),
        }
    }

    Thread { nodes, orphans }
}

/// Pure function: which response the next reply attaches to.
///
/// An explicit selection wins while it still exists; otherwise the newest
/// response. Selection is advisory only, so a stale one falls back instead
/// of erroring.
pub fn resolve_reply_target<'a>(
    ticket: &'a Ticket,
    selected: Option<&str>,
) -> Option<&'a Response> {
    if let Some(id) = selected
        && let Some(response) = ticket
            .responses
            .iter()
            .find(|r| r.response_id.as_str() == id)
    {
        return Some(response);
    }
    ticket.newest_response()
}

use serde_json::json;

use super::CommandOutput;
use super::interactive::comment_text;
use crate::error::{FrontdeskError, Result};
use crate::session::TicketSession;
use crate::types::Role;

/// Add a comment to a ticket.
///
/// Staff viewers submit a response on the ticket; requesters submit a reply
/// against `--reply-to`, or the newest response when none is given.
pub async fn cmd_comment(
    ticket_id: &str,
    reply_to: Option<&str>,
    text: Option<String>,
    output_json: bool,
) -> Result<()> {
    let text = comment_text(text)?;
    if text.is_empty() {
        return Err(FrontdeskError::EmptyComment);
    }

    let (config, service) = super::connect()?;
    let viewer = config.viewer()?;

    let mut session = TicketSession::open(service, viewer, ticket_id).await?;
    if let Some(response_id) = reply_to {
        session.select_reply_target(response_id);
    }
    session.add_comment(&text).await?;

    let kind = if session.viewer().role == Role::User {
        "reply"
    } else {
        "response"
    };

    let ticket = session.ticket();
    CommandOutput::new(json!({
        "id": &ticket.ticket_id,
        "action": "commented",
        "kind": kind,
        "responses": ticket.responses.len(),
        "replies": ticket.replies.len(),
    }))
    .with_text(format!("Added {} to {}", kind, ticket.ticket_id))
    .print(output_json)
}

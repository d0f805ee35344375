use serde_json::json;

use super::CommandOutput;
use super::interactive::require_confirmation;
use crate::error::Result;
use crate::session::TicketSession;

/// Mark a ticket resolved, with confirmation
pub async fn cmd_resolve(ticket_id: &str, yes: bool, output_json: bool) -> Result<()> {
    let (config, service) = super::connect()?;
    let viewer = config.viewer()?;

    require_confirmation(&format!("Resolve {ticket_id}"), yes)?;

    let mut session = TicketSession::open(service, viewer, ticket_id).await?;
    session.resolve().await?;

    let ticket = session.ticket();
    CommandOutput::new(json!({
        "id": &ticket.ticket_id,
        "action": "resolved",
        "status": ticket.status.to_string(),
    }))
    .with_text(format!("Resolved {}", ticket.ticket_id))
    .print(output_json)
}

/// Close a ticket, with confirmation. Closed is terminal.
pub async fn cmd_close(ticket_id: &str, yes: bool, output_json: bool) -> Result<()> {
    let (config, service) = super::connect()?;
    let viewer = config.viewer()?;

    require_confirmation(&format!("Close {ticket_id}"), yes)?;

    let mut session = TicketSession::open(service, viewer, ticket_id).await?;
    session.close().await?;

    let ticket = session.ticket();
    CommandOutput::new(json!({
        "id": &ticket.ticket_id,
        "action": "closed",
        "status": ticket.status.to_string(),
    }))
    .with_text(format!("Closed {}", ticket.ticket_id))
    .print(output_json)
}

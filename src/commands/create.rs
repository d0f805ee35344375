use serde_json::json;

use super::CommandOutput;
use crate::error::Result;
use crate::service::{TicketDraft, TicketService};
use crate::types::TicketPriority;

/// Options for creating a new ticket
pub struct CreateOptions {
    pub subject: String,
    pub issue: String,
    pub category: String,
    pub priority: TicketPriority,
}

/// Create a new ticket
///
/// All fields and the token are validated locally; nothing goes on the wire
/// until the draft passes.
pub async fn cmd_create(options: CreateOptions, output_json: bool) -> Result<()> {
    let draft = TicketDraft {
        subject: options.subject,
        issue: options.issue,
        category: options.category,
        priority: options.priority,
    };
    draft.validate()?;

    let (config, service) = super::connect()?;
    config.viewer()?.require_token()?;

    let ack = service.create_ticket(&draft).await?;
    let message = ack
        .message
        .unwrap_or_else(|| "Ticket created".to_string());

    CommandOutput::new(json!({
        "action": "created",
        "subject": draft.subject,
        "message": message.clone(),
    }))
    .with_text(message)
    .print(output_json)
}

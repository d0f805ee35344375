use serde_json::json;

use super::CommandOutput;
use crate::display::{ThreadFormatter, TicketFormatter};
use crate::error::Result;
use crate::service::TicketService;
use crate::thread;

/// Display a ticket with its conversation thread
pub async fn cmd_show(ticket_id: &str, output_json: bool) -> Result<()> {
    let (_, service) = super::connect()?;
    let ticket = service.fetch_ticket(ticket_id).await?;

    let assembled = thread::assemble(&ticket);

    let json_output = json!({
        "ticket": &ticket,
        "thread": assembled
            .nodes
            .iter()
            .map(|node| {
                json!({
                    "response": node.response,
                    "replies": &node.replies,
                })
            })
            .collect::<Vec<_>>(),
        "orphan_replies": &assembled.orphans,
    });

    let mut text_output = TicketFormatter::format_overview(&ticket);
    text_output.push_str("\n\n");
    text_output.push_str(&ThreadFormatter::format_thread(&assembled));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output_json)
}

use serde_json::json;

use super::CommandOutput;
use crate::display::{FormatOptions, format_ticket_line};
use crate::error::Result;
use crate::search::filter_tickets;
use crate::service::TicketService;
use crate::types::{Ticket, TicketStatus};

/// List tickets, optionally narrowed by status and a fuzzy filter
pub async fn cmd_ls(
    status: Option<TicketStatus>,
    filter: Option<&str>,
    output_json: bool,
) -> Result<()> {
    let (_, service) = super::connect()?;
    let tickets = service.fetch_tickets().await?;

    let by_status: Vec<Ticket> = tickets
        .into_iter()
        .filter(|t| status.is_none_or(|s| t.status == s))
        .collect();

    let filtered = filter_tickets(&by_status, filter.unwrap_or(""));

    let json_output = json!({
        "count": filtered.len(),
        "tickets": filtered.iter().map(|f| f.ticket).collect::<Vec<_>>(),
    });

    let text_output = if filtered.is_empty() {
        "No tickets found.".to_string()
    } else {
        filtered
            .iter()
            .map(|f| {
                let suffix = f
                    .ticket
                    .last_action
                    .as_ref()
                    .map(|action| format!("  ({action})"));
                format_ticket_line(
                    f.ticket,
                    FormatOptions {
                        show_priority: true,
                        suffix,
                    },
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output_json)
}

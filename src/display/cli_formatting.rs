use crate::types::Ticket;
use owo_colors::OwoColorize;

/// Format a ticket for single-line display with colors
pub fn format_ticket_line(
    ticket: &Ticket,
    options: super::data_formatting::FormatOptions,
) -> String {
    let id_padded = format!("{:10}", ticket.ticket_id);
    let colored_id = id_padded.cyan().to_string();

    let colored_priority = if options.show_priority {
        super::format_priority_colored(ticket.priority)
    } else {
        String::new()
    };

    let colored_status = super::format_status_colored(ticket.status);
    let suffix = options.suffix.unwrap_or_default();

    format!(
        "{} {}{} - {}{}",
        colored_id, colored_priority, colored_status, ticket.subject, suffix
    )
}

/// Format a ticket as a bullet point with colors
pub fn format_ticket_bullet(ticket: &Ticket) -> String {
    format!(
        "- {} [{}] {}",
        ticket.ticket_id.cyan(),
        ticket.status,
        ticket.subject
    )
}

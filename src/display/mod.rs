use crate::types::{TicketPriority, TicketStatus};
use owo_colors::OwoColorize;

pub mod cli_formatting;
pub mod data_formatting;
pub mod formatters;

pub use cli_formatting::*;
pub use data_formatting::*;
pub use formatters::{ThreadFormatter, TicketFormatter};

pub fn format_status_colored(status: TicketStatus) -> String {
    format_status_colored_with_format(status, |s| format!("[{}]", s))
}

pub fn format_status_colored_with_format<F>(status: TicketStatus, format_fn: F) -> String
where
    F: Fn(&str) -> String,
{
    let badge = format_fn(&status.to_string());
    match status {
        TicketStatus::Open => badge.yellow().to_string(),
        TicketStatus::InProgress => badge.cyan().to_string(),
        TicketStatus::Resolved => badge.green().to_string(),
        TicketStatus::Closed => badge.dimmed().to_string(),
    }
}

pub fn format_priority_colored(priority: TicketPriority) -> String {
    let badge = format!("[{}]", priority);
    match priority {
        TicketPriority::High => badge.red().to_string(),
        TicketPriority::Medium => badge,
        TicketPriority::Low => badge.dimmed().to_string(),
    }
}

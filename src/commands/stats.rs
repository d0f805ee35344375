use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::dashboard;
use crate::display::{format_relative_time, format_ticket_bullet};
use crate::error::Result;
use crate::service::TicketService;

/// Dashboard summary: status counts, high-priority backlog, recent activity
pub async fn cmd_stats(output_json: bool) -> Result<()> {
    let (_, service) = super::connect()?;
    let tickets = service.fetch_tickets().await?;

    let counts = dashboard::status_counts(&tickets);
    let backlog = dashboard::high_priority_backlog(&tickets);
    let activity = dashboard::recent_activity(&tickets, 5);

    let json_output = json!({
        "counts": counts,
        "high_priority": backlog.iter().map(|t| &t.ticket_id).collect::<Vec<_>>(),
        "recent_activity": &activity,
    });

    let mut text_output = format!("{}\n", "Tickets:".cyan().bold());
    text_output.push_str(&format!(
        "  open: {}  in_progress: {}  resolved: {}  closed: {}  (total {})\n",
        counts.open,
        counts.in_progress,
        counts.resolved,
        counts.closed,
        counts.total()
    ));

    if !backlog.is_empty() {
        text_output.push_str(&format!("\n{}\n", "High priority:".red().bold()));
        for ticket in &backlog {
            text_output.push_str(&format!("{}\n", format_ticket_bullet(ticket)));
        }
    }

    if !activity.is_empty() {
        text_output.push_str(&format!("\n{}\n", "Recent activity:".cyan().bold()));
        for line in &activity {
            let when = line
                .when
                .as_deref()
                .map(|w| format!(" ({})", format_relative_time(w)))
                .unwrap_or_default();
            text_output.push_str(&format!(
                "- {} {}{}\n",
                line.ticket_id.cyan(),
                line.summary,
                when.dimmed()
            ));
        }
    }

    CommandOutput::new(json_output)
        .with_text(text_output.trim_end().to_string())
        .print(output_json)
}

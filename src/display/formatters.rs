//! Output formatters for tickets and conversation threads

use owo_colors::OwoColorize;

use crate::thread::Thread;
use crate::types::Ticket;

/// Ticket display formatters
pub struct TicketFormatter;

impl TicketFormatter {
    /// Format the header block for a single ticket
    pub fn format_overview(ticket: &Ticket) -> String {
        let mut out = format!(
            "{} {} {}",
            crate::display::format_status_colored(ticket.status),
            ticket.ticket_id.cyan(),
            ticket.subject.bold()
        );
        out.push_str(&format!(
            "\n  Priority:  {}",
            crate::display::format_priority_colored(ticket.priority)
        ));
        out.push_str(&format!(
            "\n  Category:  {}",
            ticket.category.as_deref().unwrap_or("N/A")
        ));
        out.push_str(&format!(
            "\n  Opened by: {}",
            ticket.created_by.as_deref().unwrap_or("Unknown")
        ));
        out.push_str(&format!(
            "\n  Assignee:  {}",
            ticket.assigned_to.as_deref().unwrap_or("Unassigned")
        ));
        if let Some(created) = &ticket.created_at {
            out.push_str(&format!(
                "\n  Created:   {}",
                crate::display::format_relative_time(created)
            ));
        }
        if !ticket.issue.trim().is_empty() {
            out.push_str("\n\n");
            out.push_str(ticket.issue.trim());
        }
        out
    }
}

/// Conversation thread formatter
///
/// Renders plain text so the output stays stable under pipes and in tests.
/// Responses come newest-first; replies sit indented under the response they
/// answer, and unmatched replies trail at the end.
pub struct ThreadFormatter;

impl ThreadFormatter {
    pub fn format_thread(thread: &Thread) -> String {
        Self::thread_lines(thread).join("\n")
    }

    pub fn thread_lines(thread: &Thread) -> Vec<String> {
        if thread.is_empty() {
            return vec!["No responses yet.".to_string()];
        }

        let mut lines = Vec::new();
        for node in &thread.nodes {
            lines.push(Self::entry_header(
                &node.response.responder,
                node.response.created_at.as_deref(),
                node.response.response_id.is_pending(),
            ));
            for line in node.response.response.lines() {
                lines.push(format!("    {line}"));
            }
            for reply in &node.replies {
                lines.push(format!(
                    "  {}",
                    Self::entry_header(
                        &reply.replier,
                        reply.created_at.as_deref(),
                        reply.reply_id.is_pending(),
                    )
                ));
                for line in reply.reply.lines() {
                    lines.push(format!("      {line}"));
                }
            }
        }
        for reply in &thread.orphans {
            lines.push(Self::entry_header(
                &reply.replier,
                reply.created_at.as_deref(),
                reply.reply_id.is_pending(),
            ));
            for line in reply.reply.lines() {
                lines.push(format!("    {line}"));
            }
        }
        lines
    }

    fn entry_header(author: &str, created_at: Option<&str>, pending: bool) -> String {
        let mut header = format!("- {author}");
        if let Some(when) = created_at {
            header.push_str(", ");
            header.push_str(&crate::display::format_relative_time(when));
        }
        if pending {
            header.push_str(" [sending]");
        }
        header.push(':');
        header
    }
}

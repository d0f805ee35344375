//! Fuzzy filtering for the ticket list.
//!
//! Matches across id, subject, and category. Status filtering is a plain
//! CLI flag and happens before this runs.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::types::Ticket;

/// A ticket with its fuzzy match score
#[derive(Debug, Clone)]
pub struct FilteredTicket<'a> {
    pub ticket: &'a Ticket,
    /// The fuzzy match score (higher is better)
    pub score: i64,
}

/// Filter tickets by a fuzzy query.
///
/// An empty query returns everything in the order the server sent it.
/// Matching is smart-case: case-insensitive unless the query contains an
/// uppercase character.
pub fn filter_tickets<'a>(tickets: &'a [Ticket], query: &str) -> Vec<FilteredTicket<'a>> {
    if query.is_empty() {
        return tickets
            .iter()
            .map(|ticket| FilteredTicket { ticket, score: 0 })
            .collect();
    }

    let matcher = SkimMatcherV2::default().smart_case();

    let mut results: Vec<FilteredTicket<'a>> = tickets
        .iter()
        .filter_map(|ticket| {
            let search_text = format!(
                "{} {} {}",
                ticket.ticket_id,
                ticket.subject,
                ticket.category.as_deref().unwrap_or(""),
            );

            matcher
                .fuzzy_match(&search_text, query)
                .map(|score| FilteredTicket { ticket, score })
        })
        .collect();

    // Best matches first
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

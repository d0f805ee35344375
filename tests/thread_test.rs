//! Thread assembly and rendering.

mod common;

use common::{make_reply, make_response, make_ticket};

use frontdesk::display::{ThreadFormatter, TicketFormatter};
use frontdesk::thread;
use frontdesk::types::{CommentId, Reply, TicketStatus};

#[test]
fn thread_renders_newest_first_with_nested_replies() {
    let mut ticket = make_ticket("TK-1", TicketStatus::InProgress);
    ticket.responses = vec![
        make_response("R-2", "Replaced the fuser unit."),
        make_response("R-1", "Have you tried turning it off and on?"),
    ];
    ticket.replies = vec![
        make_reply("P-2", "R-2", "It works now, thank you!"),
        make_reply("P-1", "R-1", "Yes, twice."),
    ];

    let assembled = thread::assemble(&ticket);
    insta::assert_snapshot!(ThreadFormatter::format_thread(&assembled), @r"
    - casey, 2025-06-01:
        Replaced the fuser unit.
      - riley, 2025-06-01:
          It works now, thank you!
    - casey, 2025-06-01:
        Have you tried turning it off and on?
      - riley, 2025-06-01:
          Yes, twice.
    ");
}

#[test]
fn pending_entries_are_marked_while_in_flight() {
    let mut ticket = make_ticket("TK-1", TicketStatus::InProgress);
    ticket.responses = vec![make_response("R-1", "On it.")];
    ticket.replies = vec![Reply {
        reply_id: CommentId::Pending("pending-ab12".to_string()),
        response_id: Some("R-1".to_string()),
        replier: "riley".to_string(),
        reply: "Thanks".to_string(),
        created_at: None,
    }];

    let assembled = thread::assemble(&ticket);
    insta::assert_snapshot!(ThreadFormatter::format_thread(&assembled), @r"
    - casey, 2025-06-01:
        On it.
      - riley [sending]:
          Thanks
    ");
}

#[test]
fn empty_thread_has_a_placeholder_line() {
    let ticket = make_ticket("TK-1", TicketStatus::Open);
    let assembled = thread::assemble(&ticket);
    assert_eq!(ThreadFormatter::format_thread(&assembled), "No responses yet.");
}

#[test]
fn overview_falls_back_for_missing_optional_fields() {
    let mut ticket = make_ticket("TK-1", TicketStatus::Open);
    ticket.category = None;
    ticket.created_by = None;
    ticket.assigned_to = None;
    ticket.created_at = None;
    ticket.issue = String::new();

    let overview = TicketFormatter::format_overview(&ticket);
    assert!(overview.contains("Category:  N/A"));
    assert!(overview.contains("Opened by: Unknown"));
    assert!(overview.contains("Assignee:  Unassigned"));
}

#[test]
fn selecting_a_reply_target_is_advisory_and_idempotent() {
    let mut ticket = make_ticket("TK-1", TicketStatus::InProgress);
    ticket.responses = vec![
        make_response("R-2", "newest"),
        make_response("R-1", "oldest"),
    ];

    let first = thread::resolve_reply_target(&ticket, Some("R-1")).unwrap();
    let again = thread::resolve_reply_target(&ticket, Some("R-1")).unwrap();
    assert_eq!(first.response_id.as_str(), "R-1");
    assert_eq!(again.response_id.as_str(), "R-1");

    // No selection defaults to the newest response.
    let default = thread::resolve_reply_target(&ticket, None).unwrap();
    assert_eq!(default.response_id.as_str(), "R-2");
}

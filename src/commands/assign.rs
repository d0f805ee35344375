use serde_json::json;

use super::CommandOutput;
use super::interactive;
use crate::error::{FrontdeskError, Result};
use crate::display::sort_users_by_name;
use crate::service::TicketService;
use crate::session::TicketSession;
use crate::types::{Role, User};

/// Assignment candidates: the roster narrowed to agents, freshly fetched.
///
/// Fetched on every invocation; candidates are never cached between picker
/// opens, so a roster change is always visible.
async fn fetch_candidates<S: TicketService>(service: &S) -> Result<Vec<User>> {
    let mut candidates: Vec<User> = service
        .fetch_users()
        .await?
        .into_iter()
        .filter(|u| u.role == Role::Agent)
        .collect();
    sort_users_by_name(&mut candidates);

    if candidates.is_empty() {
        return Err(FrontdeskError::Validation(
            "no agents available for assignment".to_string(),
        ));
    }
    Ok(candidates)
}

/// Match `wanted` against a candidate's id or username.
fn pick_candidate(candidates: Vec<User>, wanted: &str) -> Result<User> {
    candidates
        .into_iter()
        .find(|u| u.user_id == wanted || u.username == wanted)
        .ok_or_else(|| FrontdeskError::AgentNotFound(wanted.to_string()))
}

/// Let the viewer choose a candidate interactively.
fn select_candidate(mut candidates: Vec<User>) -> Result<User> {
    if !interactive::stdin_is_tty() {
        return Err(FrontdeskError::Validation(
            "no agent given and stdin is not a terminal; pass --agent <id-or-name>".to_string(),
        ));
    }

    let labels: Vec<String> = candidates
        .iter()
        .map(|u| {
            format!(
                "{} <{}>",
                u.username,
                u.email.as_deref().unwrap_or("no email")
            )
        })
        .collect();
    let idx = interactive::select_option("Assign to", &labels)?;
    Ok(candidates.swap_remove(idx))
}

/// Assign a ticket to an agent, with confirmation
pub async fn cmd_assign(
    ticket_id: &str,
    agent: Option<&str>,
    yes: bool,
    output_json: bool,
) -> Result<()> {
    let (config, service) = super::connect()?;
    let viewer = config.viewer()?;

    let candidates = fetch_candidates(&service).await?;
    let candidate = match agent {
        Some(wanted) => pick_candidate(candidates, wanted)?,
        None => select_candidate(candidates)?,
    };

    interactive::require_confirmation(
        &format!("Assign {ticket_id} to {}", candidate.username),
        yes,
    )?;

    let mut session = TicketSession::open(service, viewer, ticket_id).await?;
    session.assign(&candidate).await?;

    let ticket = session.ticket();
    CommandOutput::new(json!({
        "id": &ticket.ticket_id,
        "action": "assigned",
        "assigned_to": &ticket.assigned_to,
    }))
    .with_text(format!(
        "Assigned {} to {}",
        ticket.ticket_id,
        ticket.assigned_to.as_deref().unwrap_or("Unassigned")
    ))
    .print(output_json)
}

/// Assign a ticket to the acting identity
pub async fn cmd_take(ticket_id: &str, output_json: bool) -> Result<()> {
    let (config, service) = super::connect()?;
    let viewer = config.viewer()?;

    let mut session = TicketSession::open(service, viewer, ticket_id).await?;
    session.self_assign().await?;

    let ticket = session.ticket();
    CommandOutput::new(json!({
        "id": &ticket.ticket_id,
        "action": "self-assigned",
        "assigned_to": &ticket.assigned_to,
    }))
    .with_text(format!(
        "Assigned {} to {}",
        ticket.ticket_id,
        ticket.assigned_to.as_deref().unwrap_or("Unassigned")
    ))
    .print(output_json)
}

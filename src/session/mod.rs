//! The per-ticket session.
//!
//! Every mutating action follows the same shape: gate the action, apply an
//! optimistic local mutation, call the service, then reconcile. A successful
//! write commits the next fetched snapshot wholesale; a failed write triggers
//! a mandatory refresh so the optimistic value is discarded. The session
//! keeps the last confirmed snapshot, and every failure path ends with the
//! displayed ticket equal to it: optimistic state never outlives the action
//! that produced it.
//!
//! One action runs per ticket at a time. A second invocation while one is in
//! flight is rejected with `ActionInFlight` before it touches anything.

pub mod state;

pub use state::{TicketState, action_enabled, available_actions, check_action};

use rand::Rng;

use crate::auth::{TicketAction, Viewer};
use crate::error::{FrontdeskError, Result};
use crate::service::{TicketService, WriteAck};
use crate::thread;
use crate::types::{
    ACTION_ASSIGNED, ACTION_CLOSED, ACTION_RESOLVED, ACTION_SELF_ASSIGNED, CommentId, Reply,
    Response, Role, Ticket, TicketStatus, User,
};

/// Locally generated id for an optimistic comment, replaced by the
/// server-assigned id on the next refresh.
fn pending_id() -> String {
    let mut buf = [0u8; 4];
    rand::rng().fill(&mut buf[..]);
    let hex: String = buf.iter().map(|b| format!("{b:02x}")).collect();
    format!("pending-{hex}")
}

pub struct TicketSession<S> {
    service: S,
    viewer: Viewer,
    state: TicketState,
    /// Snapshot from the most recent successful fetch. Failure paths restore
    /// the displayed ticket from here when they cannot re-fetch.
    confirmed: Ticket,
}

impl<S: TicketService> TicketSession<S> {
    /// Fetch `ticket_id` and open a session over it.
    pub async fn open(service: S, viewer: Viewer, ticket_id: &str) -> Result<Self> {
        let ticket = service.fetch_ticket(ticket_id).await?;
        Ok(Self {
            service,
            viewer,
            confirmed: ticket.clone(),
            state: TicketState::new(ticket),
        })
    }

    /// Open a session over an already-fetched snapshot.
    pub fn from_snapshot(service: S, viewer: Viewer, ticket: Ticket) -> Self {
        Self {
            service,
            viewer,
            confirmed: ticket.clone(),
            state: TicketState::new(ticket),
        }
    }

    pub fn ticket(&self) -> &Ticket {
        &self.state.ticket
    }

    pub fn state(&self) -> &TicketState {
        &self.state
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Actions the viewer could start right now.
    pub fn available_actions(&self) -> Vec<TicketAction> {
        state::available_actions(&self.state, self.viewer.role)
    }

    /// Select which response the next requester comment replies to.
    /// Advisory and idempotent; it submits nothing.
    pub fn select_reply_target(&mut self, response_id: &str) {
        self.state.selected_response = Some(response_id.to_string());
    }

    pub fn selected_response(&self) -> Option<&str> {
        self.state.selected_response.as_deref()
    }

    /// Re-read the ticket and replace the local snapshot.
    pub async fn refresh(&mut self) -> Result<()> {
        self.begin(TicketAction::Refresh)?;
        self.state.is_loading = true;
        let outcome = match self.service.fetch_ticket(&self.confirmed.ticket_id).await {
            Ok(fresh) => {
                self.commit(fresh);
                Ok(())
            }
            // The displayed ticket is still the last known-good snapshot.
            Err(err) => Err(err),
        };
        self.state.is_loading = false;
        self.finish(outcome)
    }

    /// Assign the ticket to `agent`.
    ///
    /// Optimistically shows the candidate's name; the confirmed snapshot may
    /// come back with a different display value and wins wholesale.
    pub async fn assign(&mut self, agent: &User) -> Result<()> {
        self.begin(TicketAction::Assign)?;
        let outcome = self.assign_inner(agent).await;
        self.finish(outcome)
    }

    async fn assign_inner(&mut self, agent: &User) -> Result<()> {
        self.viewer.require_token()?;

        self.state.ticket.assigned_to = Some(agent.username.clone());
        self.state.ticket.last_action = Some(ACTION_ASSIGNED.to_string());

        match self
            .service
            .assign(&self.confirmed.ticket_id, &agent.user_id)
            .await
        {
            Ok(_) => self.commit_refresh().await,
            Err(err) => Err(self.rollback(err).await),
        }
    }

    /// Assign the ticket to the acting identity. The server resolves who that
    /// is from the token; the viewer's username is only the optimistic guess.
    pub async fn self_assign(&mut self) -> Result<()> {
        self.begin(TicketAction::SelfAssign)?;
        let outcome = self.self_assign_inner().await;
        self.finish(outcome)
    }

    async fn self_assign_inner(&mut self) -> Result<()> {
        self.viewer.require_token()?;

        self.state.ticket.assigned_to = Some(self.viewer.username.clone());
        self.state.ticket.last_action = Some(ACTION_SELF_ASSIGNED.to_string());

        match self.service.self_assign(&self.confirmed.ticket_id).await {
            Ok(_) => self.commit_refresh().await,
            Err(err) => Err(self.rollback(err).await),
        }
    }

    /// Mark the ticket resolved.
    pub async fn resolve(&mut self) -> Result<()> {
        self.begin(TicketAction::Resolve)?;
        let outcome = self.resolve_inner().await;
        self.finish(outcome)
    }

    async fn resolve_inner(&mut self) -> Result<()> {
        self.viewer.require_token()?;

        self.state.ticket.status = TicketStatus::Resolved;
        self.state.ticket.last_action = Some(ACTION_RESOLVED.to_string());

        match self.service.resolve(&self.confirmed.ticket_id).await {
            Ok(_) => self.commit_refresh().await,
            Err(err) => Err(self.rollback(err).await),
        }
    }

    /// Close the ticket.
    pub async fn close(&mut self) -> Result<()> {
        self.begin(TicketAction::Close)?;
        let outcome = self.close_inner().await;
        self.finish(outcome)
    }

    async fn close_inner(&mut self) -> Result<()> {
        self.viewer.require_token()?;

        self.state.ticket.status = TicketStatus::Closed;
        self.state.ticket.last_action = Some(ACTION_CLOSED.to_string());

        match self.service.close(&self.confirmed.ticket_id).await {
            Ok(_) => {
                let outcome = self.commit_refresh().await;
                if outcome.is_ok() {
                    // Closure can lag the write ack on the server side. Pin
                    // the status locally; the thread is locked either way.
                    self.state.ticket.status = TicketStatus::Closed;
                    self.confirmed.status = TicketStatus::Closed;
                }
                outcome
            }
            Err(err) => Err(self.rollback(err).await),
        }
    }

    /// Add a comment: a response when the viewer is staff, a reply to the
    /// selected (or newest) response when the viewer is a requester.
    pub async fn add_comment(&mut self, text: &str) -> Result<()> {
        self.begin(TicketAction::Comment)?;
        let outcome = self.add_comment_inner(text).await;
        self.finish(outcome)
    }

    async fn add_comment_inner(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FrontdeskError::EmptyComment);
        }
        self.viewer.require_token()?;

        let submitted = if self.viewer.role == Role::User {
            let target = thread::resolve_reply_target(
                &self.state.ticket,
                self.state.selected_response.as_deref(),
            )
            .ok_or(FrontdeskError::NoReplyTarget)?;
            let target_id = target.response_id.as_str().to_string();

            self.state.ticket.replies.insert(
                0,
                Reply {
                    reply_id: CommentId::Pending(pending_id()),
                    response_id: Some(target_id.clone()),
                    replier: self.viewer.username.clone(),
                    reply: text.to_string(),
                    created_at: None,
                },
            );
            self.service.submit_reply(&target_id, text).await
        } else {
            self.state.ticket.responses.insert(
                0,
                Response {
                    response_id: CommentId::Pending(pending_id()),
                    responder: self.viewer.username.clone(),
                    response: text.to_string(),
                    created_at: None,
                },
            );
            self.service
                .submit_response(&self.confirmed.ticket_id, text)
                .await
        };

        // Comments re-fetch on both paths, so the placeholder entry never
        // outlives this call.
        self.reconcile_comment(submitted).await
    }

    async fn reconcile_comment(&mut self, submitted: Result<WriteAck>) -> Result<()> {
        match submitted {
            Ok(_) => self.commit_refresh().await,
            Err(err) => Err(self.rollback(err).await),
        }
    }

    fn begin(&mut self, action: TicketAction) -> Result<()> {
        state::check_action(&self.state, self.viewer.role, action)?;
        self.state.action_in_progress = true;
        Ok(())
    }

    fn finish(&mut self, outcome: Result<()>) -> Result<()> {
        self.state.action_in_progress = false;
        outcome
    }

    fn commit(&mut self, fresh: Ticket) {
        self.confirmed = fresh.clone();
        self.state.ticket = fresh;
    }

    /// Reconciliation tail of a successful write. When the re-fetch itself
    /// fails, the write may or may not have landed; the displayed ticket is
    /// restored to the last confirmed snapshot and the failure is surfaced
    /// as a stale read.
    async fn commit_refresh(&mut self) -> Result<()> {
        match self.service.fetch_ticket(&self.confirmed.ticket_id).await {
            Ok(fresh) => {
                self.commit(fresh);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    "refresh after write failed for {}: {err}",
                    self.confirmed.ticket_id
                );
                self.state.ticket = self.confirmed.clone();
                Err(FrontdeskError::StaleRead(err.to_string()))
            }
        }
    }

    /// Mandatory reconciliation after a failed write. The write error is what
    /// the caller sees; the refresh only restores ground truth, falling back
    /// to the kept snapshot when it fails too.
    async fn rollback(&mut self, write_err: FrontdeskError) -> FrontdeskError {
        match self.service.fetch_ticket(&self.confirmed.ticket_id).await {
            Ok(fresh) => self.commit(fresh),
            Err(refresh_err) => {
                tracing::warn!(
                    "rollback refresh failed for {}: {refresh_err}",
                    self.confirmed.ticket_id
                );
                self.state.ticket = self.confirmed.clone();
            }
        }
        write_err
    }
}

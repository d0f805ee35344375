//! Ticket service interface.
//!
//! The remote authority for everything this tool displays. Reads return
//! freshened snapshots; writes return an acknowledgement envelope and are
//! always followed by a re-fetch at the session layer, so nothing in the
//! crate treats a write response as the new state.

pub mod http;

pub use http::HttpTicketService;

use serde::{Deserialize, Serialize};

use crate::error::{FrontdeskError, Result};
use crate::types::{Ticket, TicketPriority, User};

/// Acknowledgement returned by every write endpoint.
///
/// An `Ok` from the service layer already implies `success == true`; the
/// struct is kept whole for the server message that rides along with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteAck {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload for creating a ticket.
#[derive(Debug, Clone, Serialize)]
pub struct TicketDraft {
    pub subject: String,
    pub issue: String,
    pub category: String,
    pub priority: TicketPriority,
}

impl TicketDraft {
    /// Reject blank fields before anything goes on the wire.
    pub fn validate(&self) -> Result<()> {
        if self.subject.trim().is_empty() {
            return Err(FrontdeskError::Validation(
                "subject cannot be empty".to_string(),
            ));
        }
        if self.issue.trim().is_empty() {
            return Err(FrontdeskError::Validation(
                "issue description cannot be empty".to_string(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(FrontdeskError::Validation(
                "category cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Common interface to the ticket authority.
///
/// Implementations must not retry on their own: a failed write has to fail
/// fast so the session can run its reconciliation refresh.
pub trait TicketService: Send + Sync {
    /// Fetch every ticket visible to the viewer.
    fn fetch_tickets(&self) -> impl std::future::Future<Output = Result<Vec<Ticket>>> + Send;

    /// Fetch a single ticket snapshot by id.
    fn fetch_ticket(
        &self,
        ticket_id: &str,
    ) -> impl std::future::Future<Output = Result<Ticket>> + Send;

    /// Fetch the user roster.
    fn fetch_users(&self) -> impl std::future::Future<Output = Result<Vec<User>>> + Send;

    /// Create a new ticket.
    fn create_ticket(
        &self,
        draft: &TicketDraft,
    ) -> impl std::future::Future<Output = Result<WriteAck>> + Send;

    /// Submit an agent response to a ticket.
    fn submit_response(
        &self,
        ticket_id: &str,
        response: &str,
    ) -> impl std::future::Future<Output = Result<WriteAck>> + Send;

    /// Submit a requester reply to a response.
    fn submit_reply(
        &self,
        response_id: &str,
        reply: &str,
    ) -> impl std::future::Future<Output = Result<WriteAck>> + Send;

    /// Assign a ticket to an agent.
    fn assign(
        &self,
        ticket_id: &str,
        assigned_to: &str,
    ) -> impl std::future::Future<Output = Result<WriteAck>> + Send;

    /// Assign a ticket to the acting identity.
    fn self_assign(
        &self,
        ticket_id: &str,
    ) -> impl std::future::Future<Output = Result<WriteAck>> + Send;

    /// Mark a ticket resolved.
    fn resolve(
        &self,
        ticket_id: &str,
    ) -> impl std::future::Future<Output = Result<WriteAck>> + Send;

    /// Close a ticket.
    fn close(&self, ticket_id: &str)
    -> impl std::future::Future<Output = Result<WriteAck>> + Send;
}

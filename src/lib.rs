pub mod auth;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod search;
pub mod service;
pub mod session;
pub mod thread;
pub mod types;

#[cfg(test)]
pub mod test_guards;

pub use auth::{TicketAction, Viewer, is_authorized};
pub use config::Config;
pub use error::{FrontdeskError, Result};
pub use service::{HttpTicketService, TicketDraft, TicketService, WriteAck};
pub use session::{TicketSession, TicketState};
pub use thread::{Thread, ThreadNode, assemble, resolve_reply_target};
pub use types::{
    CommentId, Reply, Response, Role, Ticket, TicketPriority, TicketStatus, User,
    VALID_PRIORITIES, VALID_ROLES, VALID_STATUSES,
};

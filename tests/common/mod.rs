//! Shared test harness: an in-process scripted TicketService and fixture
//! builders, plus a binary runner for CLI-level tests.

#![allow(dead_code)]

use std::process::{Command, Output};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use frontdesk::error::{FrontdeskError, Result};
use frontdesk::service::{TicketDraft, TicketService, WriteAck};
use frontdesk::types::{
    CommentId, Reply, Response, Role, Ticket, TicketPriority, TicketStatus, User,
};

// ============================================================================
// Fixtures
// ============================================================================

pub fn make_ticket(id: &str, status: TicketStatus) -> Ticket {
    Ticket {
        ticket_id: id.to_string(),
        subject: "Printer on fire".to_string(),
        issue: "It beeps and smokes".to_string(),
        category: Some("hardware".to_string()),
        priority: TicketPriority::Medium,
        status,
        created_by: Some("riley".to_string()),
        assigned_to: None,
        last_action: None,
        created_at: Some("2025-06-01T09:00:00Z".to_string()),
        responses: vec![],
        replies: vec![],
    }
}

pub fn make_response(id: &str, text: &str) -> Response {
    Response {
        response_id: CommentId::Confirmed(id.to_string()),
        responder: "casey".to_string(),
        response: text.to_string(),
        created_at: Some("2025-06-01T10:00:00Z".to_string()),
    }
}

pub fn make_reply(id: &str, parent: &str, text: &str) -> Reply {
    Reply {
        reply_id: CommentId::Confirmed(id.to_string()),
        response_id: Some(parent.to_string()),
        replier: "riley".to_string(),
        reply: text.to_string(),
        created_at: Some("2025-06-01T11:00:00Z".to_string()),
    }
}

pub fn make_agent(user_id: &str, username: &str) -> User {
    User {
        user_id: user_id.to_string(),
        username: username.to_string(),
        email: Some(format!("{username}@desk.example.com")),
        role: Role::Agent,
        created_at: None,
    }
}

// ============================================================================
// Mock service
// ============================================================================

/// How the mock answers write calls.
#[derive(Clone, Copy, PartialEq)]
enum WriteMode {
    Succeed,
    Fail,
    Unauthorized,
}

struct Inner {
    ticket: Ticket,
    users: Vec<User>,
    write_mode: WriteMode,
    /// Number of upcoming fetches that fail before fetches recover.
    fetch_failures: usize,
    /// What the server records as the assignee after a confirmed
    /// (self-)assignment. Deliberately different from any optimistic guess.
    canonical_assignee: String,
    calls: Vec<String>,
    next_comment_id: usize,
}

/// Scripted in-memory ticket authority.
///
/// Holds one ticket as server truth, mutates it on successful writes the way
/// the real backend would, and can be told to fail writes or fetches. Clones
/// share state so a test can keep a handle while the session owns another.
#[derive(Clone)]
pub struct MockService {
    inner: Arc<Mutex<Inner>>,
}

impl MockService {
    pub fn new(ticket: Ticket) -> Self {
        MockService {
            inner: Arc::new(Mutex::new(Inner {
                ticket,
                users: vec![make_agent("7", "casey"), make_agent("8", "mina")],
                write_mode: WriteMode::Succeed,
                fetch_failures: 0,
                canonical_assignee: "Casey Alvarez".to_string(),
                calls: Vec::new(),
                next_comment_id: 100,
            })),
        }
    }

    /// All subsequent writes fail with a generic service error.
    pub fn fail_writes(&self) {
        self.inner.lock().unwrap().write_mode = WriteMode::Fail;
    }

    /// All subsequent writes fail with 401.
    pub fn reject_unauthorized(&self) {
        self.inner.lock().unwrap().write_mode = WriteMode::Unauthorized;
    }

    /// The next `n` fetches fail, then fetches recover.
    pub fn fail_fetches(&self, n: usize) {
        self.inner.lock().unwrap().fetch_failures = n;
    }

    /// Server truth as it stands now.
    pub fn server_ticket(&self) -> Ticket {
        self.inner.lock().unwrap().ticket.clone()
    }

    pub fn set_server_ticket(&self, ticket: Ticket) {
        self.inner.lock().unwrap().ticket = ticket;
    }

    /// Remote calls made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn record(inner: &mut Inner, call: impl Into<String>) {
        inner.calls.push(call.into());
    }

    fn write_gate(inner: &Inner) -> Result<()> {
        match inner.write_mode {
            WriteMode::Succeed => Ok(()),
            WriteMode::Fail => Err(FrontdeskError::Api("mock write failure".to_string())),
            WriteMode::Unauthorized => Err(FrontdeskError::Unauthorized(
                "session expired or invalid token".to_string(),
            )),
        }
    }

    fn ack() -> Result<WriteAck> {
        Ok(WriteAck {
            success: true,
            message: None,
        })
    }
}

impl TicketService for MockService {
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>> {
        let mut inner = self.inner.lock().unwrap();
        Self::record(&mut inner, "fetch_tickets");
        Ok(vec![inner.ticket.clone()])
    }

    async fn fetch_ticket(&self, ticket_id: &str) -> Result<Ticket> {
        let mut inner = self.inner.lock().unwrap();
        Self::record(&mut inner, format!("fetch_ticket {ticket_id}"));
        if inner.fetch_failures > 0 {
            inner.fetch_failures -= 1;
            return Err(FrontdeskError::Api("mock fetch failure".to_string()));
        }
        if inner.ticket.ticket_id != ticket_id {
            return Err(FrontdeskError::TicketNotFound(ticket_id.to_string()));
        }
        Ok(inner.ticket.clone())
    }

    async fn fetch_users(&self) -> Result<Vec<User>> {
        let mut inner = self.inner.lock().unwrap();
        Self::record(&mut inner, "fetch_users");
        Ok(inner.users.clone())
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<WriteAck> {
        let mut inner = self.inner.lock().unwrap();
        Self::record(&mut inner, format!("create_ticket {}", draft.subject));
        Self::write_gate(&inner)?;
        Self::ack()
    }

    async fn submit_response(&self, ticket_id: &str, response: &str) -> Result<WriteAck> {
        let mut inner = self.inner.lock().unwrap();
        Self::record(&mut inner, format!("submit_response {ticket_id}"));
        Self::write_gate(&inner)?;

        let id = inner.next_comment_id;
        inner.next_comment_id += 1;
        let responder = inner.canonical_assignee.clone();
        inner.ticket.responses.insert(
            0,
            Response {
                response_id: CommentId::Confirmed(format!("R-{id}")),
                responder,
                response: response.to_string(),
                created_at: Some("2025-06-02T09:00:00Z".to_string()),
            },
        );
        inner.ticket.last_action = Some("responded".to_string());
        Self::ack()
    }

    async fn submit_reply(&self, response_id: &str, reply: &str) -> Result<WriteAck> {
        let mut inner = self.inner.lock().unwrap();
        Self::record(&mut inner, format!("submit_reply {response_id}"));
        Self::write_gate(&inner)?;

        let id = inner.next_comment_id;
        inner.next_comment_id += 1;
        inner.ticket.replies.insert(
            0,
            Reply {
                reply_id: CommentId::Confirmed(format!("P-{id}")),
                response_id: Some(response_id.to_string()),
                replier: "riley".to_string(),
                reply: reply.to_string(),
                created_at: Some("2025-06-02T09:30:00Z".to_string()),
            },
        );
        inner.ticket.last_action = Some("replied".to_string());
        Self::ack()
    }

    async fn assign(&self, ticket_id: &str, assigned_to: &str) -> Result<WriteAck> {
        let mut inner = self.inner.lock().unwrap();
        Self::record(&mut inner, format!("assign {ticket_id} -> {assigned_to}"));
        Self::write_gate(&inner)?;

        if !inner.users.iter().any(|u| u.user_id == assigned_to) {
            return Err(FrontdeskError::Api(format!(
                "no such agent: {assigned_to}"
            )));
        }
        inner.ticket.assigned_to = Some(inner.canonical_assignee.clone());
        inner.ticket.last_action = Some("assigned".to_string());
        Self::ack()
    }

    async fn self_assign(&self, ticket_id: &str) -> Result<WriteAck> {
        let mut inner = self.inner.lock().unwrap();
        Self::record(&mut inner, format!("self_assign {ticket_id}"));
        Self::write_gate(&inner)?;

        inner.ticket.assigned_to = Some(inner.canonical_assignee.clone());
        inner.ticket.last_action = Some("self-assigned".to_string());
        Self::ack()
    }

    async fn resolve(&self, ticket_id: &str) -> Result<WriteAck> {
        let mut inner = self.inner.lock().unwrap();
        Self::record(&mut inner, format!("resolve {ticket_id}"));
        Self::write_gate(&inner)?;

        inner.ticket.status = TicketStatus::Resolved;
        inner.ticket.last_action = Some("resolved".to_string());
        Self::ack()
    }

    async fn close(&self, ticket_id: &str) -> Result<WriteAck> {
        let mut inner = self.inner.lock().unwrap();
        Self::record(&mut inner, format!("close {ticket_id}"));
        Self::write_gate(&inner)?;

        inner.ticket.status = TicketStatus::Closed;
        inner.ticket.last_action = Some("closed".to_string());
        Self::ack()
    }
}

// ============================================================================
// Binary runner
// ============================================================================

/// Runs the frontdesk binary in an isolated temp home, with config pointed
/// into the temp dir so tests never touch the real environment.
pub struct FrontdeskTest {
    pub temp_dir: TempDir,
}

impl FrontdeskTest {
    pub fn new() -> Self {
        FrontdeskTest {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_frontdesk"));
        command
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("FRONTDESK_API_URL")
            .env_remove("FRONTDESK_USER")
            .env_remove("FRONTDESK_ROLE")
            .env_remove("FRONTDESK_TOKEN")
            .env("FRONTDESK_CONFIG", self.config_path());
        for (key, value) in env {
            command.env(key, value);
        }
        command.output().expect("Failed to run frontdesk binary")
    }

    pub fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

impl Default for FrontdeskTest {
    fn default() -> Self {
        Self::new()
    }
}

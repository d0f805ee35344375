//! HTTP implementation of the ticket service.
//!
//! Speaks REST-style JSON to the help-desk backend. Read endpoints return
//! `{tickets}`, `{ticket}` or `{users}` envelopes; write endpoints return
//! `{success, message?}` and require a bearer token.
//!
//! The bearer token is wrapped so that it is never printed, even when
//! reqwest's own logging is enabled.

use std::fmt;
use std::time::Duration;

use reqwest::header;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{FrontdeskError, Result};
use crate::service::{TicketDraft, TicketService, WriteAck};
use crate::types::{Ticket, User};

/// Wrapper for the Authorization header value that redacts itself when
/// formatted, so an accidentally enabled request log cannot leak the token.
struct RedactedHeader {
    value: String,
}

impl RedactedHeader {
    fn bearer(token: &SecretString) -> Self {
        Self {
            value: format!("Bearer {}", token.expose_secret()),
        }
    }

    fn as_header_value(&self) -> Result<header::HeaderValue> {
        header::HeaderValue::from_str(&self.value)
            .map_err(|_| FrontdeskError::Config("token contains invalid header characters".to_string()))
    }
}

impl fmt::Display for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Debug for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactedHeader")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

#[derive(serde::Deserialize)]
struct TicketsEnvelope {
    tickets: Vec<Ticket>,
}

#[derive(serde::Deserialize)]
struct TicketEnvelope {
    ticket: Ticket,
}

#[derive(serde::Deserialize)]
struct UsersEnvelope {
    users: Vec<User>,
}

#[derive(Serialize)]
struct TicketRef<'a> {
    ticket_id: &'a str,
}

#[derive(Serialize)]
struct ResponsePayload<'a> {
    ticket_id: &'a str,
    response: &'a str,
}

#[derive(Serialize)]
struct ReplyPayload<'a> {
    response_id: &'a str,
    reply: &'a str,
}

#[derive(Serialize)]
struct AssignPayload<'a> {
    ticket_id: &'a str,
    assigned_to: &'a str,
}

pub struct HttpTicketService {
    client: Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl HttpTicketService {
    /// Create a service client against `base_url`.
    ///
    /// Configures the HTTP client with a 30s connect timeout and 60s total
    /// timeout. Writes fail locally with `MissingToken` when `token` is
    /// `None`; reads go out unauthenticated.
    pub fn new(base_url: &str, token: Option<SecretString>) -> Result<Self> {
        // A trailing slash keeps Url::join from swallowing the last path
        // segment of the base.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Create a service client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config.require_api_url()?;
        Self::new(&base_url, config.token())
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        let mut request = self.client.get(url.clone());
        if let Some(token) = &self.token {
            let auth_header = RedactedHeader::bearer(token);
            request = request.header(header::AUTHORIZATION, auth_header.as_header_value()?);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("GET {path} -> {status}");

        Self::check_status(status)?;
        Ok(response.json().await?)
    }

    async fn post_write<P: Serialize + Sync>(&self, path: &str, payload: &P) -> Result<WriteAck> {
        let token = self.token.as_ref().ok_or(FrontdeskError::MissingToken)?;
        let auth_header = RedactedHeader::bearer(token);

        let url = self.endpoint(path)?;
        let response = self
            .client
            .post(url)
            .header(header::AUTHORIZATION, auth_header.as_header_value()?)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("POST {path} -> {status}");

        Self::check_status(status)?;

        let ack: WriteAck = response.json().await?;
        if !ack.success {
            return Err(FrontdeskError::Api(
                ack.message
                    .unwrap_or_else(|| "write rejected by the ticket service".to_string()),
            ));
        }
        Ok(ack)
    }

    fn check_status(status: StatusCode) -> Result<()> {
        if status == StatusCode::UNAUTHORIZED {
            return Err(FrontdeskError::Unauthorized(
                "session expired or invalid token".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(FrontdeskError::Api(format!("HTTP {status}")));
        }
        Ok(())
    }
}

impl TicketService for HttpTicketService {
    async fn fetch_tickets(&self) -> Result<Vec<Ticket>> {
        let envelope: TicketsEnvelope = self.get_json("tickets").await?;
        Ok(envelope.tickets)
    }

    async fn fetch_ticket(&self, ticket_id: &str) -> Result<Ticket> {
        let path = format!("tickets/{ticket_id}");
        let envelope: TicketEnvelope = match self.get_json(&path).await {
            Ok(envelope) => envelope,
            Err(FrontdeskError::Api(msg)) if msg.contains("404") => {
                return Err(FrontdeskError::TicketNotFound(ticket_id.to_string()));
            }
            Err(err) => return Err(err),
        };
        Ok(envelope.ticket)
    }

    async fn fetch_users(&self) -> Result<Vec<User>> {
        let envelope: UsersEnvelope = self.get_json("users").await?;
        Ok(envelope.users)
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<WriteAck> {
        draft.validate()?;
        self.post_write("tickets", draft).await
    }

    async fn submit_response(&self, ticket_id: &str, response: &str) -> Result<WriteAck> {
        self.post_write(
            "respond",
            &ResponsePayload {
                ticket_id,
                response,
            },
        )
        .await
    }

    async fn submit_reply(&self, response_id: &str, reply: &str) -> Result<WriteAck> {
        self.post_write("reply", &ReplyPayload { response_id, reply })
            .await
    }

    async fn assign(&self, ticket_id: &str, assigned_to: &str) -> Result<WriteAck> {
        self.post_write(
            "assign",
            &AssignPayload {
                ticket_id,
                assigned_to,
            },
        )
        .await
    }

    async fn self_assign(&self, ticket_id: &str) -> Result<WriteAck> {
        self.post_write("self-assign", &TicketRef { ticket_id }).await
    }

    async fn resolve(&self, ticket_id: &str) -> Result<WriteAck> {
        self.post_write("resolve", &TicketRef { ticket_id }).await
    }

    async fn close(&self, ticket_id: &str) -> Result<WriteAck> {
        self.post_write("close", &TicketRef { ticket_id }).await
    }
}

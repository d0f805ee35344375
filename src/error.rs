use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontdeskError {
    #[error("ticket '{0}' not found")]
    TicketNotFound(String),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),

    #[error("invalid role '{0}'")]
    InvalidRole(String),

    // Local validation failures, rejected before any network call
    #[error("comment text cannot be empty")]
    EmptyComment,

    #[error("no responses to reply to yet")]
    NoReplyTarget,

    #[error(
        "no API token configured. Set FRONTDESK_TOKEN or run: frontdesk config set token <token>"
    )]
    MissingToken,

    #[error("{0}")]
    Validation(String),

    // Action gating
    #[error("role '{0}' may not {1}")]
    NotPermitted(String, String),

    #[error("another action is already in flight for this ticket")]
    ActionInFlight,

    // Remote failures
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("ticket service error: {0}")]
    Api(String),

    #[error("refresh failed, keeping last known ticket state: {0}")]
    StaleRead(String),

    #[error("agent '{0}' not found in the candidate list")]
    AgentNotFound(String),

    #[error("{0}")]
    ConfirmationRequired(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl FrontdeskError {
    /// Whether this error was raised locally, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FrontdeskError::EmptyComment
                | FrontdeskError::NoReplyTarget
                | FrontdeskError::MissingToken
                | FrontdeskError::Validation(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FrontdeskError>;

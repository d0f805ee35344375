use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::process::ExitCode;

use frontdesk::commands::{
    CreateOptions, cmd_assign, cmd_close, cmd_comment, cmd_config_get, cmd_config_set,
    cmd_config_show, cmd_create, cmd_ls, cmd_resolve, cmd_roster, cmd_show, cmd_stats, cmd_take,
};
use frontdesk::types::{
    Role, TicketPriority, TicketStatus, VALID_PRIORITIES, VALID_ROLES, VALID_STATUSES,
};

#[derive(Parser)]
#[command(name = "frontdesk")]
#[command(about = "Console client for help-desk ticket queues")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tickets
    Ls {
        /// Only show tickets with this status
        #[arg(long, value_parser = parse_status)]
        status: Option<TicketStatus>,

        /// Fuzzy filter across id, subject, and category
        #[arg(short, long)]
        filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a ticket and its conversation
    #[command(visible_alias = "s")]
    Show {
        /// Ticket ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new ticket
    #[command(visible_alias = "c")]
    Create {
        /// One-line subject
        #[arg(long)]
        subject: String,

        /// Description of the issue
        #[arg(long)]
        issue: String,

        /// Category (e.g. hardware, network)
        #[arg(long)]
        category: String,

        /// Priority: low, medium, high (default: medium)
        #[arg(short, long, default_value = "medium", value_parser = parse_priority)]
        priority: TicketPriority,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Assign a ticket to an agent
    Assign {
        /// Ticket ID
        id: String,

        /// Agent id or username (prompts with a picker when omitted)
        #[arg(long)]
        agent: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Assign a ticket to yourself
    Take {
        /// Ticket ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a ticket resolved
    Resolve {
        /// Ticket ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Close a ticket (terminal; locks the conversation)
    Close {
        /// Ticket ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a comment (response for agents, reply for requesters)
    Comment {
        /// Ticket ID
        id: String,

        /// Response to reply to (requesters only; default: newest response)
        #[arg(long)]
        reply_to: Option<String>,

        /// Comment text (reads from stdin when omitted)
        text: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List users (defaults to assignable agents)
    Roster {
        /// Role to list: admin, agent, user (default: agent)
        #[arg(long, value_parser = parse_role)]
        role: Option<Role>,

        /// Sort by: name, email, created
        #[arg(long, default_value = "name")]
        sort: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show queue statistics and recent activity
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set a configuration value (api_url, username, role, token)
    Set {
        key: String,
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read a configuration value
    Get {
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Display current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_status(s: &str) -> Result<TicketStatus, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid status. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )
    })
}

fn parse_priority(s: &str) -> Result<TicketPriority, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid priority. Must be one of: {}",
            VALID_PRIORITIES.join(", ")
        )
    })
}

fn parse_role(s: &str) -> Result<Role, String> {
    s.parse()
        .map_err(|_| format!("Invalid role. Must be one of: {}", VALID_ROLES.join(", ")))
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "frontdesk", &mut io::stdout());
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ls {
            status,
            filter,
            json,
        } => cmd_ls(status, filter.as_deref(), json).await,

        Commands::Show { id, json } => cmd_show(&id, json).await,

        Commands::Create {
            subject,
            issue,
            category,
            priority,
            json,
        } => {
            cmd_create(
                CreateOptions {
                    subject,
                    issue,
                    category,
                    priority,
                },
                json,
            )
            .await
        }

        Commands::Assign {
            id,
            agent,
            yes,
            json,
        } => cmd_assign(&id, agent.as_deref(), yes, json).await,
        Commands::Take { id, json } => cmd_take(&id, json).await,

        Commands::Resolve { id, yes, json } => cmd_resolve(&id, yes, json).await,
        Commands::Close { id, yes, json } => cmd_close(&id, yes, json).await,

        Commands::Comment {
            id,
            reply_to,
            text,
            json,
        } => cmd_comment(&id, reply_to.as_deref(), text, json).await,

        Commands::Roster { role, sort, json } => cmd_roster(role, &sort, json).await,
        Commands::Stats { json } => cmd_stats(json).await,

        Commands::Config { action } => match action {
            ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
            ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            ConfigAction::Show { json } => cmd_config_show(json),
        },

        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::CommandOutput;
use crate::display::sort_users_by;
use crate::error::Result;
use crate::service::TicketService;
use crate::types::{Role, User};

/// A row in the roster table
#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Signed up")]
    created: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        UserRow {
            username: user.username.clone(),
            email: user.email.clone().unwrap_or_else(|| "-".to_string()),
            role: user.role.to_string(),
            created: user
                .created_at
                .as_deref()
                .map(crate::display::format_date_for_display)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// List users. Defaults to the assignment candidates (role `agent`).
pub async fn cmd_roster(role: Option<Role>, sort_by: &str, output_json: bool) -> Result<()> {
    let (_, service) = super::connect()?;

    let mut users: Vec<User> = service
        .fetch_users()
        .await?
        .into_iter()
        .filter(|u| u.role == role.unwrap_or(Role::Agent))
        .collect();
    sort_users_by(&mut users, sort_by);

    let json_output = json!({
        "count": users.len(),
        "users": &users,
    });

    let text_output = if users.is_empty() {
        "No users found.".to_string()
    } else {
        let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        format!("{table}\n\n{} user(s)", users.len())
    };

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output_json)
}

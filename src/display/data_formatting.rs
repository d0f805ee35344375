use jiff::Timestamp;

use crate::types::User;

/// Format options for ticket display
#[derive(Default)]
pub struct FormatOptions {
    pub show_priority: bool,
    pub suffix: Option<String>,
}

/// Format a date string for display
///
/// Extracts just the date part (YYYY-MM-DD) from an ISO datetime string.
/// If the string is too short, returns it unchanged.
///
/// # Examples
///
/// ```
/// use frontdesk::display::format_date_for_display;
///
/// assert_eq!(format_date_for_display("2024-01-15T10:30:00Z"), "2024-01-15");
/// assert_eq!(format_date_for_display("2024-01-15"), "2024-01-15");
/// assert_eq!(format_date_for_display("short"), "short");
/// ```
pub fn format_date_for_display(date_str: &str) -> String {
    if date_str.len() >= 10 {
        date_str[..10].to_string()
    } else {
        date_str.to_string()
    }
}

/// Format a timestamp relative to now ("3h ago", "2d ago").
///
/// Anything older than a week, or anything that does not parse as an RFC 3339
/// timestamp, falls back to [`format_date_for_display`].
pub fn format_relative_time(raw: &str) -> String {
    let Ok(then) = raw.parse::<Timestamp>() else {
        return format_date_for_display(raw);
    };
    let secs = Timestamp::now().as_second() - then.as_second();
    if secs < 0 {
        // Clock skew between us and the server; treat as current.
        return "just now".to_string();
    }
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else if secs < 604_800 {
        format!("{}d ago", secs / 86_400)
    } else {
        format_date_for_display(raw)
    }
}

/// Sort users by username (alphabetical)
pub fn sort_users_by_name(users: &mut [User]) {
    users.sort_by(|a, b| a.username.cmp(&b.username));
}

/// Sort users by email, usernames breaking ties
pub fn sort_users_by_email(users: &mut [User]) {
    users.sort_by(|a, b| match (&a.email, &b.email) {
        (Some(x), Some(y)) => x.cmp(y).then_with(|| a.username.cmp(&b.username)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.username.cmp(&b.username),
    });
}

/// Sort users by signup date (newest first)
pub fn sort_users_by_created(users: &mut [User]) {
    users.sort_by(|a, b| match (&a.created_at, &b.created_at) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.username.cmp(&b.username),
    });
}

/// Sort users by the specified field
pub fn sort_users_by(users: &mut [User], sort_by: &str) {
    match sort_by {
        "email" => sort_users_by_email(users),
        "created" => sort_users_by_created(users),
        _ => sort_users_by_name(users),
    }
}

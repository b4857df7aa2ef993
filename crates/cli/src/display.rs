// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use civic_core::{DashboardStats, Issue, IssueAction, Notice, SupportRequest, Team, User};

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    for word in content.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines.join("\n")
}

fn indented(content: &str) -> Vec<String> {
    wrap_text(content, WRAP_WIDTH)
        .lines()
        .map(|line| format!("    {}", line))
        .collect()
}

/// Format a single issue line for list output
pub fn format_issue_line(issue: &Issue) -> String {
    let status_display = match &issue.assigned_to {
        Some(assignee) => format!("{}, @{}", issue.status, assignee),
        None => issue.status.to_string(),
    };
    format!(
        "- [{}] ({}) {}: {}",
        issue.priority, status_display, issue.id, issue.title
    )
}

/// Format one history entry.
///
/// ```text
/// 2025-09-15 09:00  assign  u1  Issue assigned to u7 (open -> in_progress)
/// ```
pub fn format_action_line(action: &IssueAction) -> String {
    let mut line = format!(
        "{}  {}  {}  {}",
        action.performed_at.format(TIMESTAMP_FORMAT),
        action.kind(),
        action.performed_by,
        action.description
    );
    if let Some(t) = action.payload.transition() {
        line.push_str(&format!(" ({} -> {})", t.status_from, t.status_to));
    }
    line
}

/// Format a support request as one line.
pub fn format_support_line(request: &SupportRequest) -> String {
    format!(
        "{} [{}] {} {} -> {} ({}): {}",
        request.id,
        request.priority,
        request.request_type,
        request.requested_from,
        request.requested_to,
        request.status,
        request.description
    )
}

/// Format issue details for the show command.
pub fn format_issue_details(issue: &Issue) -> String {
    let mut output = vec![format!("[{}] {}", issue.priority, issue.id)];
    output.push(format!("Title: {}", issue.title));
    output.push(format!("Status: {}", issue.status));
    output.push(format!("Department: {}", issue.department_id));
    if !issue.category.is_empty() {
        output.push(format!("Category: {}", issue.category));
    }
    if let Some(assignee) = &issue.assigned_to {
        output.push(format!("Assigned: {}", assignee));
    }
    if !issue.assigned_team.is_empty() {
        output.push(format!("Team: {}", issue.assigned_team.join(", ")));
    }
    if !issue.tags.is_empty() {
        let tags: Vec<&str> = issue.tags.iter().map(String::as_str).collect();
        output.push(format!("Tags: {}", tags.join(", ")));
    }
    output.push(format!(
        "Reported: {} by {}",
        issue.reported_at.format(TIMESTAMP_FORMAT),
        issue.reported_by
    ));
    output.push(format!(
        "Due: {} ({}h estimate)",
        issue.due_date.format(TIMESTAMP_FORMAT),
        issue.estimated_resolution_hours
    ));
    output.push(format!(
        "Updated: {} by {}",
        issue.last_updated.format(TIMESTAMP_FORMAT),
        issue.updated_by
    ));
    if let Some(location) = &issue.location {
        output.push(format!(
            "Location: {} ({}, {})",
            location.address, location.latitude, location.longitude
        ));
    }

    if !issue.description.is_empty() {
        output.push(String::new());
        output.push("Description:".to_string());
        output.extend(indented(&issue.description));
    }

    if let Some(notes) = &issue.notes {
        output.push(String::new());
        output.push("Notes:".to_string());
        output.extend(indented(notes));
    }

    if !issue.support_requests.is_empty() {
        output.push(String::new());
        output.push("Support requests:".to_string());
        for request in &issue.support_requests {
            output.push(format!("  {}", format_support_line(request)));
        }
    }

    if !issue.history.is_empty() {
        output.push(String::new());
        output.push("History:".to_string());
        for action in &issue.history {
            output.push(format!("  {}", format_action_line(action)));
        }
    }

    output.join("\n")
}

/// Format dashboard counters.
pub fn format_stats(stats: &DashboardStats) -> String {
    let mut output = vec![
        format!("Total: {}", stats.total),
        format!("Open: {}", stats.open),
        format!("In progress: {}", stats.in_progress),
        format!("Resolved: {}", stats.resolved),
        format!("High priority: {}", stats.high_priority),
        format!("Overdue: {}", stats.overdue),
    ];
    if !stats.departments.is_empty() {
        output.push(String::new());
        output.push("Departments:".to_string());
        for (id, counts) in &stats.departments {
            output.push(format!("  {}: {} total, {} open", id, counts.total, counts.open));
        }
    }
    output.join("\n")
}

pub fn format_team_line(team: &Team) -> String {
    let inactive = if team.is_active { "" } else { " (inactive)" };
    format!(
        "- {}: {} [{}] lead {}, members {}{}",
        team.id,
        team.name,
        team.department_id,
        team.lead,
        team.members.join(", "),
        inactive
    )
}

pub fn format_user_line(user: &User) -> String {
    let department = user.department_id.as_deref().unwrap_or("-");
    format!(
        "- {}: {} <{}> {} [{}]",
        user.id, user.name, user.email, user.role, department
    )
}

/// Format the notice a collaborator would deliver.
pub fn format_notice(notice: &Notice) -> String {
    format!(
        "notify {} [{}]: {}: {}",
        notice.recipient, notice.level, notice.title, notice.message
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;

//! Single project page with its tab strip and overview quick actions.

use super::{
    PageContext, PageQuery, layout,
    widgets::{self, Escape},
};
use crate::{
    core::{actions::QuickAction, format, project::ProjectStore, task::TaskStore, team::TeamStore},
    entities::Project,
    errors::Result,
};
use std::fmt::Write;

/// Tabs in display order as `(key, label)`.
pub const TABS: [(&str, &str); 7] = [
    ("overview", "Overview"),
    ("structural", "Structural"),
    ("architectural", "Architectural"),
    ("team", "Team Members"),
    ("tasks", "Kanban Tasks"),
    ("files", "Files & Blueprints"),
    ("chat", "Project Chat"),
];

/// Stores the project page reads from.
#[derive(Clone, Copy, Debug)]
pub struct ProjectData<'a> {
    /// Project lookup
    pub projects: &'a ProjectStore,
    /// Team tab
    pub team: &'a TeamStore,
    /// Tasks tab
    pub tasks: &'a TaskStore,
}

fn quick_action_fields(action: QuickAction) -> Result<String> {
    let mut fields = String::new();
    match action {
        QuickAction::UploadBlueprint => {
            widgets::drop_zone(&mut fields, widgets::UPLOAD_PROMPT, "DWG, PDF, PNG up to 50MB")?;
        }
        QuickAction::ScheduleMeeting => {
            widgets::text_field(&mut fields, "Meeting Title", "title", "e.g. Design Review")?;
            widgets::input_field(&mut fields, "Date", "date", "date", "", "")?;
            widgets::input_field(&mut fields, "Time", "time", "time", "", "")?;
        }
        QuickAction::GenerateProjectReport => {
            widgets::select_field(
                &mut fields,
                "Report Type",
                "report_type",
                &[
                    "Progress Report",
                    "Financial Summary",
                    "Team Performance",
                    "Full Project Report",
                ],
            )?;
        }
        _ => {}
    }
    Ok(fields)
}

fn overview(
    out: &mut String,
    ctx: &PageContext<'_>,
    project: &Project,
    query: &PageQuery,
) -> Result<()> {
    let page = ctx.path;
    let state = [("tab", "overview")];

    out.push_str(r#"<div class="grid"><section class="card"><h3>Project Progress</h3>"#);
    write!(
        out,
        r#"<p>Overall Completion <strong>{}%</strong></p>"#,
        project.progress
    )?;
    widgets::progress_bar(out, project.progress)?;
    write!(
        out,
        r#"<div class="grid"><div><p class="muted">Budget</p><p class="stat-value">{}</p></div><div><p class="muted">Team Size</p><p class="stat-value">5 Members</p></div></div></section>"#,
        format::millions(project.budget, ctx.currency(), 1)
    )?;

    out.push_str(r#"<section class="card"><h3>Quick Actions</h3>"#);
    for action in QuickAction::PROJECT_OVERVIEW {
        widgets::dialog_link(out, page, action, &state, action.label(), "outline")?;
    }
    out.push_str("</section></div>");

    if let Some(action) = query
        .dialog_action()
        .filter(|action| QuickAction::PROJECT_OVERVIEW.contains(action))
    {
        let close = widgets::href(page, &state);
        widgets::dialog(out, action, &close, &close, &quick_action_fields(action)?)?;
    }
    Ok(())
}

fn team(out: &mut String, store: &TeamStore) -> Result<()> {
    out.push_str(r#"<div class="grid">"#);
    for member in store.members() {
        write!(
            out,
            r#"<div class="card"><span class="chip">{}</span><p><strong>{}</strong></p><p class="muted">{}</p></div>"#,
            Escape(&member.avatar),
            Escape(&member.name),
            Escape(&member.role)
        )?;
    }
    out.push_str("</div>");
    Ok(())
}

fn tasks(out: &mut String, store: &TaskStore) -> Result<()> {
    out.push_str(r#"<div class="board">"#);
    for (status, tasks) in store.board() {
        write!(out, "<div><h4>{}</h4>", status.label())?;
        for task in tasks {
            write!(
                out,
                r#"<div class="card"><p>{}</p><span class="chip">{}</span></div>"#,
                Escape(&task.title),
                Escape(&task.assignee)
            )?;
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    Ok(())
}

fn chat(out: &mut String, page: &str) -> Result<()> {
    let return_to = widgets::href(page, &[("tab", "chat")]);
    out.push_str(r#"<section class="card"><div class="empty"><p>Project chat will appear here</p><p class="muted">Start a conversation with your team</p></div>"#);
    write!(
        out,
        r#"<form class="search" method="post" action="/actions/{}"><input type="hidden" name="return_to" value="{}"><input type="text" name="message" placeholder="Type a message..."><button type="submit">{}</button></form></section>"#,
        QuickAction::SendProjectMessage.slug(),
        Escape(&return_to),
        QuickAction::SendProjectMessage.label()
    )?;
    Ok(())
}

/// Renders `/projects/:id`, or the not-found state for an unknown id.
pub fn render(
    ctx: &PageContext<'_>,
    id: &str,
    data: &ProjectData<'_>,
    query: &PageQuery,
) -> Result<String> {
    let Some(project) = data.projects.project_by_id(id) else {
        return layout::shell(
            ctx,
            "Project not found",
            r#"<div class="empty"><p class="muted">Project not found.</p></div>"#,
        );
    };

    let active = query
        .tab
        .as_deref()
        .filter(|tab| TABS.iter().any(|(key, _)| key == tab))
        .unwrap_or("overview");

    let mut out = String::new();
    write!(
        out,
        r#"<a href="/projects">&larr; Back to Projects</a><div class="page-header"><div><h1>{} "#,
        Escape(&project.name)
    )?;
    widgets::status_badge(&mut out, project.status.as_str(), project.status.label())?;
    write!(
        out,
        r#"</h1><p class="muted">{} · Deadline: {}</p></div></div>"#,
        Escape(&project.client),
        project.deadline
    )?;
    widgets::tabs(&mut out, ctx.path, &TABS, active, &[])?;

    out.push_str(r#"<div class="tab-body">"#);
    match active {
        "overview" => overview(&mut out, ctx, project, query)?,
        "team" => team(&mut out, data.team)?,
        "tasks" => tasks(&mut out, data.tasks)?,
        "files" => widgets::drop_zone(
            &mut out,
            "Drop files here or click to upload",
            "Supports blueprints, CAD files, and documents",
        )?,
        "chat" => chat(&mut out, ctx.path)?,
        // Structural and architectural views have no content yet.
        _ => {}
    }
    out.push_str("</div>");

    layout::shell(ctx, &project.name, &out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{config::settings::BrandingConfig, data::MockData};

    fn render_project(id: &str, query: &PageQuery) -> String {
        let branding = BrandingConfig::default();
        let projects = ProjectStore::from_source(&MockData);
        let team = TeamStore::from_source(&MockData);
        let tasks = TaskStore::from_source(&MockData);
        let path = format!("/projects/{id}");
        let ctx = PageContext {
            branding: &branding,
            user: None,
            path: &path,
            toast: None,
        };
        let data = ProjectData {
            projects: &projects,
            team: &team,
            tasks: &tasks,
        };
        render(&ctx, id, &data, query).unwrap()
    }

    fn tab(tab: &str) -> PageQuery {
        PageQuery {
            tab: Some(tab.to_string()),
            ..PageQuery::default()
        }
    }

    #[test]
    fn test_known_project_overview() {
        let html = render_project("PRJ-001", &PageQuery::default());
        assert!(html.contains("Skyline Tower"));
        assert!(html.contains("Urban Dev Corp · Deadline: 2025-06-15"));
        assert!(html.contains("₱4.5M"));
        assert!(html.contains("Overall Completion <strong>72%</strong>"));
        assert!(html.contains("Upload Blueprint"));
        assert!(!html.contains("Project not found."));
    }

    #[test]
    fn test_unknown_project_is_not_found() {
        let html = render_project("UNKNOWN-ID", &PageQuery::default());
        assert!(html.contains("Project not found."));
        assert!(!html.contains("Back to Projects"));
    }

    #[test]
    fn test_team_tab_lists_members() {
        let html = render_project("PRJ-002", &tab("team"));
        assert!(html.contains("Lisa Thompson"));
        assert!(!html.contains("Robert Kim"));
        assert!(!html.contains("Quick Actions"));
    }

    #[test]
    fn test_files_and_chat_tabs() {
        let html = render_project("PRJ-002", &tab("files"));
        assert!(html.contains("Drop files here or click to upload"));

        let html = render_project("PRJ-002", &tab("chat"));
        assert!(html.contains("Project chat will appear here"));
        assert!(html.contains(r#"action="/actions/send-project-message""#));
        assert!(html.contains(r#"value="/projects/PRJ-002?tab=chat""#));
    }

    #[test]
    fn test_unknown_tab_falls_back_to_overview() {
        let html = render_project("PRJ-003", &tab("blueprints"));
        assert!(html.contains("Project Progress"));
    }

    #[test]
    fn test_schedule_meeting_dialog() {
        let query = PageQuery {
            tab: Some("overview".to_string()),
            dialog: Some("schedule-meeting".to_string()),
            ..PageQuery::default()
        };
        let html = render_project("PRJ-001", &query);
        assert!(html.contains("Schedule a meeting with your project team."));
        assert!(html.contains("Meeting Title"));
        assert!(html.contains(r#"action="/actions/schedule-meeting""#));
    }
}

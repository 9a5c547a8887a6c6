//! The dashboard, one of three views chosen by role.
//!
//! `/tasks`, `/uploads`, `/timeline` and `/documents` render this page too.

use super::{
    PageContext, PageQuery, layout,
    widgets::{self, Escape, StatCard, Tone},
};
use crate::{
    core::{
        actions::QuickAction, communication::CommunicationStore, format, invoice::InvoiceStore,
        project::ProjectStore, task::TaskStore,
    },
    entities::{Role, User},
    errors::Result,
};
use std::fmt::Write;

/// Number of rows in the admin "Recent Projects" list.
const RECENT_PROJECTS: usize = 5;

/// Which dashboard a role sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardView {
    /// Firm-wide overview
    Admin,
    /// Architects and engineers
    Team,
    /// Client portal
    Client,
}

impl DashboardView {
    /// Picks the view for `role`.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::Architect | Role::Engineer => Self::Team,
            Role::Client => Self::Client,
        }
    }
}

/// Stores the dashboards read from.
#[derive(Clone, Copy, Debug)]
pub struct DashboardData<'a> {
    /// Projects and status series
    pub projects: &'a ProjectStore,
    /// Invoices
    pub invoices: &'a InvoiceStore,
    /// Kanban board
    pub tasks: &'a TaskStore,
    /// Chat rooms and timeline
    pub communication: &'a CommunicationStore,
}

fn admin(out: &mut String, ctx: &PageContext<'_>, data: &DashboardData<'_>) -> Result<()> {
    let projects = data.projects;
    let pending = data.invoices.pending_invoices().count();
    let next = projects.next_deadline().map_or_else(
        || "None scheduled".to_string(),
        |date| format!("Next: {}", format::short_date(date)),
    );

    widgets::stat_cards(
        out,
        &[
            StatCard::new(
                "Active Projects",
                projects.active_projects().count(),
                "+2 this month",
                Tone::Positive,
            ),
            StatCard::new(
                "Upcoming Deadlines",
                projects.open_projects().count(),
                next,
                Tone::Neutral,
            ),
            StatCard::new(
                "Unread Messages",
                data.communication.total_unread(),
                "+5 today",
                Tone::Negative,
            ),
            StatCard::new(
                "Pending Payments",
                format::millions(data.invoices.pending_total(), ctx.currency(), 2),
                format!("{pending} invoices due"),
                Tone::Neutral,
            ),
        ],
    )?;

    out.push_str(r#"<div class="grid"><section class="card"><h3>Project Status Overview</h3>"#);
    widgets::table_head(out, &["Month", "Active", "Completed", "On Hold"])?;
    for row in projects.status_data() {
        write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            Escape(&row.month),
            row.active,
            row.completed,
            row.on_hold
        )?;
    }
    out.push_str("</tbody></table></section>");

    out.push_str(r#"<section class="card"><h3>Recent Projects</h3>"#);
    for project in projects.projects().iter().take(RECENT_PROJECTS) {
        write!(
            out,
            r#"<div class="recent"><a href="/projects/{}"><p>{}</p></a><p class="muted">{}</p>"#,
            Escape(&project.id),
            Escape(&project.name),
            Escape(&project.client)
        )?;
        widgets::status_badge(out, project.status.as_str(), project.status.label())?;
        widgets::progress_bar(out, project.progress)?;
        out.push_str("</div>");
    }
    out.push_str("</section></div>");
    Ok(())
}

fn team(out: &mut String, data: &DashboardData<'_>, query: &PageQuery, path: &str) -> Result<()> {
    widgets::stat_cards(
        out,
        &[
            StatCard::new("My Projects", 3, "2 active", Tone::Neutral),
            StatCard::new("Tasks Completed", 12, "This week", Tone::Positive),
            StatCard::new("Pending Reviews", 4, "2 urgent", Tone::Negative),
            StatCard::new("Design Uploads", 28, "+6 this week", Tone::Positive),
        ],
    )?;

    out.push_str(r#"<section class="card"><div class="page-header"><h3>Task Board</h3>"#);
    let action = QuickAction::GenerateSuggestions;
    widgets::dialog_link(out, path, action, &[], action.label(), "")?;
    out.push_str(r#"</div><div class="board">"#);
    for (status, tasks) in data.tasks.board() {
        write!(out, "<div><h4>{} ({})</h4>", status.label(), tasks.len())?;
        for task in tasks {
            write!(
                out,
                r#"<div class="card"><p>{}</p><span class="badge badge-{}">{}</span> <span class="chip">{}</span></div>"#,
                Escape(&task.title),
                task.priority.as_str(),
                task.priority.as_str(),
                Escape(&task.assignee)
            )?;
        }
        out.push_str("</div>");
    }
    out.push_str("</div></section>");

    if query.is_open(action) {
        let mut fields = String::new();
        widgets::text_area(
            &mut fields,
            "Describe your design concept",
            "concept",
            "e.g. A modern mixed-use building with sustainable features...",
        )?;
        widgets::select_field(
            &mut fields,
            "Style Preference",
            "style",
            &["Modernist", "Minimalist", "Brutalist", "Neo-classical", "Sustainable / Green"],
        )?;
        widgets::dialog(out, action, path, path, &fields)?;
    }
    Ok(())
}

fn client(
    out: &mut String,
    ctx: &PageContext<'_>,
    data: &DashboardData<'_>,
    query: &PageQuery,
) -> Result<()> {
    let path = ctx.path;
    let pending = data.invoices.pending_invoices().count();
    widgets::stat_cards(
        out,
        &[
            StatCard::new("Active Projects", 2, "On track", Tone::Positive),
            StatCard::new(
                "Total Invested",
                format::millions(5_200_000, ctx.currency(), 1),
                format!("{pending} pending invoices"),
                Tone::Neutral,
            ),
            StatCard::new("Messages", 4, "1 unread", Tone::Neutral),
        ],
    )?;

    out.push_str(r#"<div class="grid"><section class="card"><h3>Project Timeline</h3><ol class="timeline">"#);
    for event in data.communication.timeline_events() {
        write!(
            out,
            r#"<li><p class="muted">{}</p><p><strong>{}</strong></p><p>{}</p></li>"#,
            Escape(&event.date),
            Escape(&event.title),
            Escape(&event.description)
        )?;
    }
    out.push_str("</ol></section>");

    let action = QuickAction::AskAssistant;
    out.push_str(
        r#"<section class="card"><h3>AI Virtual Assistant</h3><p><strong>AI Assistant Ready</strong></p><p class="muted">Ask questions about your project</p><div class="message assistant">Hello! I'm your project assistant. How can I help you today?</div>"#,
    );
    widgets::dialog_link(out, path, action, &[], "Start Chat", "")?;
    out.push_str("</section></div>");

    if query.is_open(action) {
        let mut fields = String::new();
        widgets::text_area(&mut fields, "Your question", "question", "Type your question...")?;
        widgets::dialog(out, action, path, path, &fields)?;
    }
    Ok(())
}

/// Renders the dashboard for `user`.
pub fn render(
    ctx: &PageContext<'_>,
    user: &User,
    data: &DashboardData<'_>,
    query: &PageQuery,
) -> Result<String> {
    let mut out = String::new();
    write!(
        out,
        r#"<div class="page-header"><div><h1>Welcome back, {}</h1><p class="muted">Here's what's happening with your projects today.</p></div></div>"#,
        Escape(user.first_name())
    )?;

    match DashboardView::for_role(user.role) {
        DashboardView::Admin => admin(&mut out, ctx, data)?,
        DashboardView::Team => team(&mut out, data, query, ctx.path)?,
        DashboardView::Client => client(&mut out, ctx, data, query)?,
    }

    layout::shell(ctx, "Dashboard", &out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        config::settings::BrandingConfig, core::auth::AuthStore, data::MockData,
    };

    struct Fixture {
        projects: ProjectStore,
        invoices: InvoiceStore,
        tasks: TaskStore,
        communication: CommunicationStore,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                projects: ProjectStore::from_source(&MockData),
                invoices: InvoiceStore::from_source(&MockData),
                tasks: TaskStore::from_source(&MockData),
                communication: CommunicationStore::from_source(&MockData),
            }
        }

        fn data(&self) -> DashboardData<'_> {
            DashboardData {
                projects: &self.projects,
                invoices: &self.invoices,
                tasks: &self.tasks,
                communication: &self.communication,
            }
        }
    }

    fn render_as(role: Role, query: &PageQuery) -> String {
        let fixture = Fixture::new();
        let branding = BrandingConfig::default();
        let mut auth = AuthStore::new();
        let user = auth.login("someone@structura.io", "", role).clone();
        let ctx = PageContext {
            branding: &branding,
            user: Some(&user),
            path: "/dashboard",
            toast: None,
        };
        render(&ctx, &user, &fixture.data(), query).unwrap()
    }

    #[test]
    fn test_view_per_role() {
        assert_eq!(DashboardView::for_role(Role::Admin), DashboardView::Admin);
        assert_eq!(DashboardView::for_role(Role::Architect), DashboardView::Team);
        assert_eq!(DashboardView::for_role(Role::Engineer), DashboardView::Team);
        assert_eq!(DashboardView::for_role(Role::Client), DashboardView::Client);
    }

    #[test]
    fn test_admin_dashboard_stats() {
        let html = render_as(Role::Admin, &PageQuery::default());
        assert!(html.contains("Welcome back, Alex"));
        assert!(html.contains("Project Status Overview"));
        assert!(html.contains("₱2.02M"));
        assert!(html.contains("2 invoices due"));
        assert!(html.contains("Next: Mar 20"));
        assert!(html.contains("Skyline Tower"));
        // Only the first five projects are listed.
        assert!(!html.contains("Innovation Lab"));
    }

    #[test]
    fn test_team_dashboard_shows_board() {
        let html = render_as(Role::Engineer, &PageQuery::default());
        assert!(html.contains("Welcome back, James"));
        assert!(html.contains("Task Board"));
        assert!(html.contains("In Progress (3)"));
        assert!(html.contains("Fire safety compliance check"));
        assert!(!html.contains("Project Status Overview"));
        assert!(!html.contains("Describe your design concept"));
    }

    #[test]
    fn test_team_dashboard_design_dialog() {
        let query = PageQuery {
            dialog: Some("generate-suggestions".to_string()),
            ..PageQuery::default()
        };
        let html = render_as(Role::Architect, &query);
        assert!(html.contains("Describe your design concept"));
        assert!(html.contains("Sustainable / Green"));
    }

    #[test]
    fn test_client_dashboard_timeline_and_assistant() {
        let html = render_as(Role::Client, &PageQuery::default());
        assert!(html.contains("Welcome back, Michael"));
        assert!(html.contains("Project Timeline"));
        assert!(html.contains("Facade design approved"));
        assert!(html.contains("₱5.2M"));
        assert!(html.contains("Start Chat"));
        assert!(!html.contains("Task Board"));
    }
}

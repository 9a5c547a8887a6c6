//! Team directory with text search, role filter and the invite dialog.

use super::{
    PageContext, PageQuery, layout,
    widgets::{self, Escape},
};
use crate::{
    core::{
        actions::QuickAction,
        team::{ALL_ROLES, TeamStore},
    },
    entities::TeamMemberDetailed,
    errors::Result,
};
use std::fmt::Write;

const PATH: &str = "/teams";

const INVITE_ROLES: [&str; 6] = [
    "Lead Architect",
    "Structural Engineer",
    "Interior Designer",
    "Project Manager",
    "MEP Engineer",
    "Civil Engineer",
];

fn filter_form(out: &mut String, store: &TeamStore, search: &str, role: &str) -> Result<()> {
    write!(
        out,
        r#"<form class="search" method="get" action="{PATH}"><input type="search" name="q" value="{}" placeholder="Search by name or role..."><select name="role">"#,
        Escape(search)
    )?;
    for option in store.role_options() {
        let selected = if option == role { " selected" } else { "" };
        write!(
            out,
            r#"<option value="{0}"{selected}>{0}</option>"#,
            Escape(option)
        )?;
    }
    out.push_str(r#"</select><button type="submit">Filter</button></form>"#);
    Ok(())
}

fn card(out: &mut String, member: &TeamMemberDetailed) -> Result<()> {
    write!(
        out,
        r#"<div class="card"><span class="chip">{}</span><p><strong>{}</strong></p><p class="muted">{}</p><p>{}</p><p>{}</p><p>{} active projects</p><p>"#,
        Escape(&member.avatar),
        Escape(&member.name),
        Escape(&member.role),
        Escape(&member.email),
        Escape(&member.phone),
        member.projects
    )?;
    for project in &member.assigned_projects {
        write!(out, r#"<span class="chip">{}</span>"#, Escape(project))?;
    }
    out.push_str("</p></div>");
    Ok(())
}

fn invite_fields() -> Result<String> {
    let mut fields = String::new();
    widgets::text_field(&mut fields, "Full Name", "name", "John Doe")?;
    widgets::input_field(&mut fields, "Email", "email", "email", "john@structura.com", "")?;
    widgets::select_field(&mut fields, "Role", "role", &INVITE_ROLES)?;
    Ok(fields)
}

/// Renders `/teams`.
pub fn render(ctx: &PageContext<'_>, store: &TeamStore, query: &PageQuery) -> Result<String> {
    let search = query.search();
    let role = query
        .role
        .as_deref()
        .filter(|role| !role.is_empty())
        .unwrap_or(ALL_ROLES);
    let state = [("q", search), ("role", role)];
    let action = QuickAction::InviteMember;

    let mut actions = String::new();
    widgets::dialog_link(&mut actions, PATH, action, &state, action.label(), "")?;

    let mut out = String::new();
    widgets::page_header(
        &mut out,
        "Teams",
        &format!(
            "{} team members across all projects",
            store.detailed_members().len()
        ),
        &actions,
    )?;
    filter_form(&mut out, store, search, role)?;

    let members: Vec<&TeamMemberDetailed> = store.filter(search, role).collect();
    if members.is_empty() {
        widgets::empty_state(
            &mut out,
            "No team members found",
            "Try adjusting your search or filter",
        )?;
    } else {
        out.push_str(r#"<div class="grid">"#);
        for member in members {
            card(&mut out, member)?;
        }
        out.push_str("</div>");
    }

    if query.is_open(action) {
        let close = widgets::href(PATH, &state);
        widgets::dialog(&mut out, action, &close, &close, &invite_fields()?)?;
    }

    layout::shell(ctx, "Teams", &out)
}

//! Project list with search and the new-project dialog.

use super::{
    PageContext, PageQuery, layout,
    widgets::{self, Escape},
};
use crate::{core::actions::QuickAction, core::project::ProjectStore, errors::Result};
use std::fmt::Write;

const PATH: &str = "/projects";

fn new_project_fields(currency: &str) -> Result<String> {
    let mut fields = String::new();
    widgets::text_field(&mut fields, "Project Name", "name", "e.g. Central Park Tower")?;
    widgets::text_field(&mut fields, "Client", "client", "e.g. Urban Dev Corp")?;
    widgets::input_field(
        &mut fields,
        &format!("Budget ({currency})"),
        "budget",
        "number",
        "5000000",
        "",
    )?;
    widgets::input_field(&mut fields, "Deadline", "deadline", "date", "", "")?;
    Ok(fields)
}

/// Renders `/projects`.
pub fn render(ctx: &PageContext<'_>, store: &ProjectStore, query: &PageQuery) -> Result<String> {
    let search = query.search();
    let state = [("q", search)];
    let action = QuickAction::CreateProject;

    let mut actions = String::new();
    widgets::dialog_link(&mut actions, PATH, action, &state, action.label(), "")?;

    let mut out = String::new();
    widgets::page_header(&mut out, "Projects", "Manage all your architecture projects", &actions)?;
    out.push_str(r#"<section class="card">"#);
    widgets::search_form(&mut out, PATH, "Search projects...", search, &[])?;
    widgets::table_head(
        &mut out,
        &["Project ID", "Name", "Client", "Status", "Progress", "Deadline", "Action"],
    )?;
    for project in store.search(search) {
        write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>",
            Escape(&project.id),
            Escape(&project.name),
            Escape(&project.client)
        )?;
        widgets::status_badge(&mut out, project.status.as_str(), project.status.label())?;
        out.push_str("</td><td>");
        widgets::progress_bar(&mut out, project.progress)?;
        write!(
            out,
            r#" {}%</td><td>{}</td><td><a href="/projects/{}">View</a></td></tr>"#,
            project.progress,
            project.deadline,
            Escape(&project.id)
        )?;
    }
    out.push_str("</tbody></table></section>");

    if query.is_open(action) {
        let close = widgets::href(PATH, &state);
        widgets::dialog(&mut out, action, &close, &close, &new_project_fields(ctx.currency())?)?;
    }

    layout::shell(ctx, "Projects", &out)
}

//! Client directory, client detail dialog and the add-client dialog.

use super::{
    PageContext, PageQuery, layout,
    widgets::{self, Escape},
};
use crate::{
    core::{actions::QuickAction, client::ClientStore, format},
    entities::Client,
    errors::Result,
};
use std::fmt::Write;

const PATH: &str = "/clients";

const INDUSTRIES: [&str; 5] = [
    "Real Estate Development",
    "Government",
    "Education",
    "Technology",
    "Healthcare",
];

fn row(out: &mut String, client: &Client, search: &str, currency: &str) -> Result<()> {
    let id = client.id.to_string();
    write!(
        out,
        r#"<tr><td><p>{}</p><p class="muted">{}</p></td><td><p>{}</p><p class="muted">{}</p></td><td>{} active</td><td>{}</td><td>"#,
        Escape(&client.name),
        Escape(&client.industry),
        Escape(&client.contact_person),
        Escape(&client.email),
        client.active_projects,
        format::millions(client.total_value, currency, 1)
    )?;
    widgets::status_badge(out, client.status.as_str(), client.status.label())?;
    write!(
        out,
        r#"</td><td><a href="{}">View</a></td></tr>"#,
        Escape(&widgets::href(PATH, &[("q", search), ("client", &id)]))
    )?;
    Ok(())
}

fn detail(out: &mut String, client: &Client, close: &str, currency: &str) -> Result<()> {
    let mut body = String::new();
    write!(
        body,
        r#"<ul><li>{}</li><li>{}</li><li>{}</li><li>{} total value</li></ul><h4>Associated Projects</h4><p>"#,
        Escape(&client.email),
        Escape(&client.phone),
        Escape(&client.location),
        format::millions(client.total_value, currency, 1)
    )?;
    for project in &client.projects {
        write!(body, r#"<span class="chip">{}</span>"#, Escape(project))?;
    }
    write!(
        body,
        "</p><h4>Contact Person</h4><p>{}</p>",
        Escape(&client.contact_person)
    )?;
    widgets::info_dialog(out, &client.name, &client.industry, close, &body)?;
    Ok(())
}

fn add_client_fields() -> Result<String> {
    let mut fields = String::new();
    widgets::text_field(&mut fields, "Company Name", "company", "e.g. Acme Corp")?;
    widgets::text_field(&mut fields, "Contact Person", "contact", "Full name")?;
    widgets::input_field(&mut fields, "Email", "email", "email", "contact@company.com", "")?;
    widgets::select_field(&mut fields, "Industry", "industry", &INDUSTRIES)?;
    Ok(fields)
}

/// Renders `/clients`.
pub fn render(ctx: &PageContext<'_>, store: &ClientStore, query: &PageQuery) -> Result<String> {
    let search = query.search();
    let state = [("q", search)];
    let close = widgets::href(PATH, &state);
    let action = QuickAction::AddClient;

    let mut actions = String::new();
    widgets::dialog_link(&mut actions, PATH, action, &state, action.label(), "")?;

    let mut out = String::new();
    widgets::page_header(
        &mut out,
        "Clients",
        "Manage your client relationships and projects",
        &actions,
    )?;
    out.push_str(r#"<section class="card">"#);
    widgets::search_form(&mut out, PATH, "Search clients...", search, &[])?;

    let matches: Vec<&Client> = store.search(search).collect();
    if matches.is_empty() {
        widgets::empty_state(&mut out, "No clients found", "")?;
    } else {
        widgets::table_head(
            &mut out,
            &["Client", "Contact Person", "Projects", "Total Value", "Status", "Action"],
        )?;
        for client in &matches {
            row(&mut out, client, search, ctx.currency())?;
        }
        out.push_str("</tbody></table>");
    }
    out.push_str("</section>");

    if let Some(client) = query.client.and_then(|id| store.client_by_id(id)) {
        detail(&mut out, client, &close, ctx.currency())?;
    } else if query.is_open(action) {
        widgets::dialog(&mut out, action, &close, &close, &add_client_fields()?)?;
    }

    layout::shell(ctx, "Clients", &out)
}

//! Invoices table and the contract dialogs.

use super::{
    PageContext, PageQuery, layout,
    widgets::{self, Escape},
};
use crate::{
    core::{actions::QuickAction, format, invoice::InvoiceStore, project::ProjectStore},
    errors::Result,
};
use std::fmt::Write;

const PATH: &str = "/payments";

/// Number of projects offered in the invoice and contract project pickers.
const PICKER_PROJECTS: usize = 4;

fn project_names(projects: &ProjectStore) -> Vec<&str> {
    projects
        .projects()
        .iter()
        .take(PICKER_PROJECTS)
        .map(|p| p.name.as_str())
        .collect()
}

fn dialog_fields(action: QuickAction, projects: &[&str], currency: &str) -> Result<String> {
    let mut fields = String::new();
    match action {
        QuickAction::GenerateInvoice => {
            widgets::select_field(&mut fields, "Project", "project", projects)?;
            widgets::input_field(
                &mut fields,
                &format!("Amount ({currency})"),
                "amount",
                "number",
                "150000",
                "",
            )?;
            widgets::input_field(&mut fields, "Due Date", "due_date", "date", "", "")?;
        }
        QuickAction::UploadContract => {
            widgets::select_field(&mut fields, "Project", "project", projects)?;
            widgets::drop_zone(&mut fields, widgets::UPLOAD_PROMPT, "PDF, DOCX up to 10MB")?;
        }
        QuickAction::AnalyzeContract => {
            widgets::drop_zone(&mut fields, "Select a contract to analyze", "PDF, DOCX up to 10MB")?;
        }
        _ => {}
    }
    Ok(fields)
}

/// Renders `/payments`.
pub fn render(
    ctx: &PageContext<'_>,
    invoices: &InvoiceStore,
    projects: &ProjectStore,
    query: &PageQuery,
) -> Result<String> {
    let mut actions = String::new();
    widgets::dialog_link(
        &mut actions,
        PATH,
        QuickAction::UploadContract,
        &[],
        QuickAction::UploadContract.label(),
        "outline",
    )?;
    widgets::dialog_link(
        &mut actions,
        PATH,
        QuickAction::GenerateInvoice,
        &[],
        QuickAction::GenerateInvoice.label(),
        "",
    )?;

    let mut out = String::new();
    widgets::page_header(
        &mut out,
        "Payments & Contracts",
        "Manage invoices and contract documents",
        &actions,
    )?;

    out.push_str(r#"<div class="grid"><section class="card"><h3>Invoices</h3>"#);
    widgets::table_head(
        &mut out,
        &["Invoice ID", "Project", "Client", "Amount", "Status", "Due Date"],
    )?;
    for invoice in invoices.invoices() {
        write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>",
            Escape(&invoice.id),
            Escape(&invoice.project),
            Escape(&invoice.client),
            format::thousands(invoice.amount, ctx.currency())
        )?;
        widgets::status_badge(&mut out, invoice.status.as_str(), invoice.status.as_str())?;
        write!(out, "</td><td>{}</td></tr>", invoice.due_date)?;
    }
    out.push_str("</tbody></table></section>");

    out.push_str(
        r#"<section class="card"><h3>AI Contract Analysis</h3><div class="empty"><p class="muted">Upload a contract for AI-powered analysis</p>"#,
    );
    widgets::dialog_link(
        &mut out,
        PATH,
        QuickAction::AnalyzeContract,
        &[],
        QuickAction::AnalyzeContract.label(),
        "",
    )?;
    out.push_str("</div></section></div>");

    if let Some(action) = query.dialog_action().filter(|action| {
        matches!(
            action,
            QuickAction::GenerateInvoice | QuickAction::UploadContract | QuickAction::AnalyzeContract
        )
    }) {
        let fields = dialog_fields(action, &project_names(projects), ctx.currency())?;
        widgets::dialog(&mut out, action, PATH, PATH, &fields)?;
    }

    layout::shell(ctx, "Payments", &out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{config::settings::BrandingConfig, data::MockData};

    fn render_with(query: &PageQuery) -> String {
        let branding = BrandingConfig::default();
        let invoices = InvoiceStore::from_source(&MockData);
        let projects = ProjectStore::from_source(&MockData);
        let ctx = PageContext {
            branding: &branding,
            user: None,
            path: PATH,
            toast: None,
        };
        render(&ctx, &invoices, &projects, query).unwrap()
    }

    fn dialog(slug: &str) -> PageQuery {
        PageQuery {
            dialog: Some(slug.to_string()),
            ..PageQuery::default()
        }
    }

    #[test]
    fn test_invoice_table() {
        let html = render_with(&PageQuery::default());
        assert!(html.contains("INV-004"));
        assert!(html.contains("₱1200K"));
        assert!(html.contains("₱155K"));
        assert!(html.contains(r#"<span class="badge badge-overdue">overdue</span>"#));
        assert!(html.contains("2025-04-01"));
    }

    #[test]
    fn test_generate_invoice_dialog_lists_projects() {
        let html = render_with(&dialog("generate-invoice"));
        assert!(html.contains("Create a new invoice for a project."));
        assert!(html.contains("<option>Metro Station Complex</option>"));
        assert!(!html.contains("<option>Riverside Apartments</option>"));
        assert!(html.contains("Amount (₱)"));
    }

    #[test]
    fn test_analyze_contract_dialog() {
        let html = render_with(&dialog("analyze-contract"));
        assert!(html.contains("Select a contract to analyze"));
        assert!(html.contains(r#"action="/actions/analyze-contract""#));
    }

    #[test]
    fn test_foreign_dialog_is_ignored() {
        let html = render_with(&dialog("add-client"));
        assert!(!html.contains(r#"class="overlay""#));
    }
}

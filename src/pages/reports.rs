//! Analytics: status and revenue series, AI insight cards, weekly report.

use super::{
    PageContext, PageQuery, layout,
    widgets::{self, Escape},
};
use crate::{
    core::{
        actions::QuickAction, format, insights::REPORT_INSIGHTS, invoice::InvoiceStore,
        project::ProjectStore,
    },
    errors::Result,
};
use std::fmt::Write;

const PATH: &str = "/reports";

const REPORT_PERIODS: [&str; 4] = [
    "This Week (Feb 3 - Feb 9)",
    "Last Week (Jan 27 - Feb 2)",
    "Last 2 Weeks",
    "This Month",
];

const REPORT_SECTIONS: [&str; 4] = [
    "Project Status Summary",
    "Revenue & Expenses",
    "Team Performance",
    "AI Insights & Recommendations",
];

fn status_table(out: &mut String, projects: &ProjectStore) -> Result<()> {
    out.push_str(r#"<section class="card"><h3>Project Status</h3>"#);
    widgets::table_head(out, &["Month", "Active", "Completed"])?;
    for row in projects.status_data() {
        write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            Escape(&row.month),
            row.active,
            row.completed
        )?;
    }
    out.push_str("</tbody></table></section>");
    Ok(())
}

fn revenue_table(out: &mut String, invoices: &InvoiceStore, currency: &str) -> Result<()> {
    out.push_str(r#"<section class="card"><h3>Revenue vs Expenses</h3>"#);
    widgets::table_head(out, &["Month", "Revenue", "Expenses", "Margin"])?;
    for row in invoices.revenue_data() {
        let margin = u64::try_from(row.margin()).unwrap_or(0);
        write!(
            out,
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td><pre class="bar">{}</pre></td></tr>"#,
            Escape(&row.month),
            format::thousands(row.revenue, currency),
            format::thousands(row.expenses, currency),
            format::format_progress_bar(format::percentage(margin, row.revenue), None)
        )?;
    }
    out.push_str("</tbody></table></section>");
    Ok(())
}

fn weekly_report_fields() -> Result<String> {
    let mut fields = String::new();
    widgets::select_field(&mut fields, "Report Period", "period", &REPORT_PERIODS)?;
    widgets::checkbox_list(&mut fields, "Include Sections", "sections", &REPORT_SECTIONS)?;
    Ok(fields)
}

/// Renders `/reports`.
pub fn render(
    ctx: &PageContext<'_>,
    projects: &ProjectStore,
    invoices: &InvoiceStore,
    query: &PageQuery,
) -> Result<String> {
    let action = QuickAction::GenerateWeeklyReport;
    let mut actions = String::new();
    widgets::dialog_link(&mut actions, PATH, action, &[], action.label(), "")?;

    let mut out = String::new();
    widgets::page_header(&mut out, "Reports", "Analytics and AI-generated insights", &actions)?;

    out.push_str(r#"<div class="grid">"#);
    status_table(&mut out, projects)?;
    revenue_table(&mut out, invoices, ctx.currency())?;
    out.push_str("</div>");

    out.push_str(r#"<h3>AI Insights</h3><div class="grid">"#);
    for insight in REPORT_INSIGHTS {
        write!(
            out,
            r#"<div class="card"><h4>{}</h4><p class="muted">{}</p></div>"#,
            Escape(insight.title),
            Escape(insight.description)
        )?;
    }
    out.push_str("</div>");

    if query.is_open(action) {
        widgets::dialog(&mut out, action, PATH, PATH, &weekly_report_fields()?)?;
    }

    layout::shell(ctx, "Reports", &out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{config::settings::BrandingConfig, data::MockData};

    fn render_with(query: &PageQuery) -> String {
        let branding = BrandingConfig::default();
        let projects = ProjectStore::from_source(&MockData);
        let invoices = InvoiceStore::from_source(&MockData);
        let ctx = PageContext {
            branding: &branding,
            user: None,
            path: PATH,
            toast: None,
        };
        render(&ctx, &projects, &invoices, query).unwrap()
    }

    #[test]
    fn test_series_and_insights() {
        let html = render_with(&PageQuery::default());
        assert!(html.contains("Project Status"));
        assert!(html.contains("Revenue vs Expenses"));
        // Sep: revenue 1.2M, expenses 800K, margin 33.3%.
        assert!(html.contains("<td>₱1200K</td><td>₱800K</td>"));
        assert!(html.contains("33.3%"));
        for insight in REPORT_INSIGHTS {
            assert!(html.contains(insight.title));
        }
    }

    #[test]
    fn test_weekly_report_dialog() {
        let query = PageQuery {
            dialog: Some("generate-weekly-report".to_string()),
            ..PageQuery::default()
        };
        let html = render_with(&query);
        assert!(html.contains("Configure and generate an AI-powered weekly progress report."));
        assert!(html.contains("Last 2 Weeks"));
        assert!(html.contains("AI Insights &amp; Recommendations"));
    }
}

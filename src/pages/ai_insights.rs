//! AI tool catalogue with one launch dialog per tool.

use super::{
    PageContext, PageQuery, layout,
    widgets::{self, Escape},
};
use crate::{
    core::{actions::QuickAction, insights::AiFeature, project::ProjectStore},
    errors::Result,
};
use std::fmt::Write;

const PATH: &str = "/ai-insights";

/// Number of projects offered besides "All Projects".
const PICKER_PROJECTS: usize = 4;

fn launch_fields(projects: &ProjectStore) -> Result<String> {
    let mut options = vec!["All Projects"];
    options.extend(
        projects
            .projects()
            .iter()
            .take(PICKER_PROJECTS)
            .map(|p| p.name.as_str()),
    );

    let mut fields = String::new();
    widgets::select_field(&mut fields, "Select Project", "project", &options)?;
    widgets::text_area(
        &mut fields,
        "Additional Notes",
        "notes",
        "Any specific focus areas or parameters...",
    )?;
    Ok(fields)
}

/// Renders `/ai-insights`.
pub fn render(
    ctx: &PageContext<'_>,
    projects: &ProjectStore,
    query: &PageQuery,
) -> Result<String> {
    let mut out = String::new();
    widgets::page_header(
        &mut out,
        "AI Insights",
        "AI-powered tools for architecture project management",
        "",
    )?;

    out.push_str(r#"<div class="grid">"#);
    for feature in AiFeature::ALL {
        let action = QuickAction::LaunchFeature(feature);
        write!(
            out,
            r#"<div class="card"><h3>{}</h3><p class="muted">{}</p>"#,
            Escape(feature.title()),
            Escape(feature.description())
        )?;
        widgets::dialog_link(&mut out, PATH, action, &[], action.label(), "")?;
        out.push_str("</div>");
    }
    out.push_str("</div>");

    if let Some(action @ QuickAction::LaunchFeature(_)) = query.dialog_action() {
        widgets::dialog(&mut out, action, PATH, PATH, &launch_fields(projects)?)?;
    }

    layout::shell(ctx, "AI Insights", &out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{config::settings::BrandingConfig, data::MockData};

    fn render_with(query: &PageQuery) -> String {
        let branding = BrandingConfig::default();
        let projects = ProjectStore::from_source(&MockData);
        let ctx = PageContext {
            branding: &branding,
            user: None,
            path: PATH,
            toast: None,
        };
        render(&ctx, &projects, query).unwrap()
    }

    #[test]
    fn test_six_feature_cards() {
        let html = render_with(&PageQuery::default());
        for feature in AiFeature::ALL {
            assert!(html.contains(feature.title()));
            assert!(html.contains(&format!("dialog=launch-{}", feature.slug())));
        }
        assert!(!html.contains(r#"class="overlay""#));
    }

    #[test]
    fn test_launch_dialog() {
        let query = PageQuery {
            dialog: Some("launch-contract-checker".to_string()),
            ..PageQuery::default()
        };
        let html = render_with(&query);
        assert!(html.contains("Scans contracts for potential risks, missing clauses, and compliance requirements."));
        assert!(html.contains("<option>All Projects</option>"));
        assert!(html.contains("Run Contract Checker"));
        assert!(html.contains(r#"action="/actions/launch-contract-checker""#));
    }
}

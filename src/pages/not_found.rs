//! Catch-all page for unknown paths.

use super::{PageContext, layout, widgets::Escape};
use crate::errors::Result;
use std::fmt::Write;

/// Renders the 404 page for `path`.
pub fn render(ctx: &PageContext<'_>) -> Result<String> {
    let mut out = String::new();
    write!(
        out,
        r#"<div class="empty"><h1>404</h1><p>Oops! Page not found</p><p class="muted">{}</p><a href="/">Return to Home</a></div>"#,
        Escape(ctx.path)
    )?;
    layout::bare(ctx, "Not Found", &out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::settings::BrandingConfig;

    #[test]
    fn test_not_found_echoes_escaped_path() {
        let branding = BrandingConfig::default();
        let ctx = PageContext {
            branding: &branding,
            user: None,
            path: "/<nope>",
            toast: None,
        };
        let html = render(&ctx).unwrap();
        assert!(html.contains("Page not found"));
        assert!(html.contains("/&lt;nope&gt;"));
    }
}

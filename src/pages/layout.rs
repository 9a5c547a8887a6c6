//! Page chrome: document head, sidebar, header and toast banner.

use super::{PageContext, widgets::Escape};
use crate::{
    core::navigation::{self, Icon, NavItem},
    errors::Result,
};
use std::fmt::Write;

const STYLE: &str = r"
body{margin:0;font-family:system-ui,sans-serif;color:#1f2937;background:#f5f6f8;display:flex;min-height:100vh}
a{color:#1d4ed8;text-decoration:none}
.sidebar{width:15rem;background:#111827;color:#e5e7eb;display:flex;flex-direction:column}
.sidebar a{color:#cbd5e1;display:block;padding:.55rem 1rem;border-radius:.375rem;margin:.1rem .5rem}
.sidebar a.active{background:#1d4ed8;color:#fff}
.brand{font-weight:700;font-size:1.15rem;padding:1.1rem 1rem}
.sidebar-user{margin-top:auto;padding:1rem;border-top:1px solid #374151;font-size:.85rem}
.main{flex:1;display:flex;flex-direction:column;min-width:0}
header{display:flex;justify-content:space-between;align-items:center;padding:.75rem 1.5rem;background:#fff;border-bottom:1px solid #e5e7eb}
.content{padding:1.5rem}
.card{background:#fff;border:1px solid #e5e7eb;border-radius:.5rem;padding:1.25rem;margin-bottom:1rem}
.stats,.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr));gap:1rem;margin-bottom:1rem}
.stat-value{font-size:1.8rem;font-weight:700;margin:.25rem 0}
.change.positive{color:#059669}.change.negative{color:#dc2626}.change.neutral,.muted{color:#6b7280}
table{width:100%;border-collapse:collapse}th,td{text-align:left;padding:.6rem;border-bottom:1px solid #e5e7eb}
.badge{border-radius:999px;padding:.1rem .6rem;font-size:.75rem;font-weight:600;text-transform:capitalize;background:#eef2ff}
.badge-active{color:#1d4ed8}.badge-completed,.badge-paid{color:#059669}.badge-review,.badge-pending{color:#b45309}
.badge-on-hold{color:#6b7280;background:#f3f4f6}.badge-overdue{color:#dc2626;background:#fef2f2}
.progress{height:.5rem;background:#e5e7eb;border-radius:999px;min-width:6rem}.progress-fill{height:100%;background:#1d4ed8;border-radius:999px}
.toast{position:fixed;right:1.5rem;bottom:1.5rem;background:#fff;border:1px solid #e5e7eb;border-radius:.5rem;padding:1rem;box-shadow:0 4px 12px #0002}
.overlay{position:fixed;inset:0;background:#0006;display:flex;align-items:center;justify-content:center}
.dialog{background:#fff;border-radius:.5rem;padding:1.5rem;width:min(32rem,90vw)}
.fields label{display:block;margin:.75rem 0;font-size:.9rem}.fields input,.fields select,.fields textarea{display:block;width:100%;margin-top:.3rem}
.dialog-footer{display:flex;justify-content:flex-end;gap:.5rem;margin-top:1rem}
.button,button{background:#1d4ed8;color:#fff;border:0;border-radius:.375rem;padding:.5rem .9rem;cursor:pointer;font:inherit}
.button.outline,button.outline{background:#fff;color:#1f2937;border:1px solid #d1d5db}
.tabs a{display:inline-block;padding:.5rem .9rem}.tabs a.active{border-bottom:2px solid #1d4ed8;font-weight:600}
.drop-zone{border:2px dashed #d1d5db;border-radius:.5rem;padding:2rem;text-align:center}
form.inline{display:inline}.search{display:flex;gap:.5rem}
.page-header{display:flex;justify-content:space-between;align-items:flex-start;margin-bottom:1rem}.page-header h1{margin:0}
.empty{text-align:center;padding:3rem 1rem}.board{display:grid;grid-template-columns:repeat(3,1fr);gap:1rem}
.chip{display:inline-block;background:#f3f4f6;border-radius:.375rem;padding:.1rem .5rem;margin:.15rem;font-size:.8rem}
.chat{display:grid;grid-template-columns:18rem 1fr;gap:1rem}.room{display:block;padding:.75rem;border-bottom:1px solid #e5e7eb;color:inherit}.room.active{background:#f3f4f6}
.message{padding:.6rem .8rem;border-radius:.5rem;margin:.4rem 0;max-width:36rem}.message.user{background:#1d4ed8;color:#fff;margin-left:auto}.message.assistant{background:#f3f4f6}
.preview{border:1px dashed #9ca3af;border-radius:.375rem;height:8rem;display:flex;align-items:center;justify-content:center;margin-top:.5rem}
pre.bar{margin:0;font-size:.8rem}
";

const fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Dashboard => "▦",
        Icon::Projects => "▤",
        Icon::Teams => "☺",
        Icon::Clients => "▥",
        Icon::Messages => "✉",
        Icon::Payments => "▭",
        Icon::DesignAssistant => "✎",
        Icon::AiInsights => "✦",
        Icon::Reports => "▮",
        Icon::Settings => "⚙",
        Icon::Tasks => "☑",
        Icon::Uploads => "⇪",
        Icon::Timeline => "◷",
        Icon::Documents => "▯",
    }
}

fn head(out: &mut String, ctx: &PageContext<'_>, title: &str) -> Result<()> {
    write!(
        out,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{} · {}</title><style>{STYLE}</style></head>"#,
        Escape(title),
        Escape(&ctx.branding.app_name),
    )?;
    Ok(())
}

fn sidebar(out: &mut String, ctx: &PageContext<'_>, items: &[NavItem]) -> Result<()> {
    write!(
        out,
        r#"<nav class="sidebar"><div class="brand">{}</div>"#,
        Escape(&ctx.branding.app_name)
    )?;
    for item in items {
        let class = if navigation::is_active(item.path, ctx.path) {
            "active"
        } else {
            ""
        };
        write!(
            out,
            r#"<a class="{class}" href="{}">{} {}</a>"#,
            item.path,
            glyph(item.icon),
            Escape(item.label)
        )?;
    }
    if let Some(user) = ctx.user {
        write!(
            out,
            r#"<div class="sidebar-user"><p>{}</p><p class="muted">{}</p><form method="post" action="/logout"><button class="outline" type="submit">Log out</button></form></div>"#,
            Escape(&user.name),
            user.role.label(),
        )?;
    }
    out.push_str("</nav>");
    Ok(())
}

fn header(out: &mut String, ctx: &PageContext<'_>) -> Result<()> {
    out.push_str(
        r#"<header><form class="search" method="get" action="/projects"><input type="search" name="q" placeholder="Search projects, tasks, files..."></form>"#,
    );
    if let Some(user) = ctx.user {
        write!(
            out,
            r#"<div><p>{}</p><p class="muted">{}</p></div>"#,
            Escape(&user.name),
            user.role.label()
        )?;
    }
    out.push_str("</header>");
    Ok(())
}

fn toast(out: &mut String, ctx: &PageContext<'_>) -> Result<()> {
    if let Some(toast) = ctx.toast {
        write!(
            out,
            r#"<div class="toast" role="status"><strong>{}</strong><p>{}</p></div>"#,
            Escape(&toast.title),
            Escape(&toast.description)
        )?;
    }
    Ok(())
}

/// Wraps `content` in the authenticated shell (sidebar, header, toast).
///
/// The sidebar is omitted when there is no user.
pub fn shell(ctx: &PageContext<'_>, title: &str, content: &str) -> Result<String> {
    let mut out = String::with_capacity(content.len() + STYLE.len() + 2048);
    head(&mut out, ctx, title)?;
    out.push_str("<body>");
    if let Some(items) = navigation::sidebar_for(ctx.user) {
        sidebar(&mut out, ctx, items)?;
    }
    out.push_str(r#"<div class="main">"#);
    header(&mut out, ctx)?;
    write!(out, r#"<main class="content">{content}</main></div>"#)?;
    toast(&mut out, ctx)?;
    out.push_str("</body></html>");
    Ok(out)
}

/// Full-page document without any chrome (login, not found).
pub fn bare(ctx: &PageContext<'_>, title: &str, content: &str) -> Result<String> {
    let mut out = String::with_capacity(content.len() + STYLE.len() + 512);
    head(&mut out, ctx, title)?;
    write!(out, r#"<body><main class="content" style="margin:auto">{content}</main>"#)?;
    toast(&mut out, ctx)?;
    out.push_str("</body></html>");
    Ok(out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        config::settings::BrandingConfig,
        core::actions::Toast,
        entities::{Role, User},
    };

    fn user(role: Role) -> User {
        User {
            email: "x@structura.io".to_string(),
            name: "Sarah <Chen>".to_string(),
            role,
        }
    }

    #[test]
    fn test_shell_renders_role_sidebar_with_active_item() {
        let branding = BrandingConfig::default();
        let user = user(Role::Architect);
        let ctx = PageContext {
            branding: &branding,
            user: Some(&user),
            path: "/projects/PRJ-001",
            toast: None,
        };
        let html = shell(&ctx, "Project", "<p>body</p>").unwrap();

        assert!(html.contains(r#"<a class="active" href="/projects">"#));
        assert!(html.contains("AI Assistant"));
        assert!(!html.contains("Settings"));
        assert!(html.contains("Sarah &lt;Chen&gt;"));
        assert!(html.contains(r#"action="/logout""#));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_shell_without_user_has_no_sidebar() {
        let branding = BrandingConfig::default();
        let ctx = PageContext {
            branding: &branding,
            user: None,
            path: "/nowhere",
            toast: None,
        };
        let html = shell(&ctx, "Missing", "").unwrap();
        assert!(!html.contains(r#"<nav class="sidebar">"#));
    }

    #[test]
    fn test_toast_is_rendered_once_present() {
        let branding = BrandingConfig::default();
        let toast = Toast::new("Client Added", "New client has been registered successfully.");
        let ctx = PageContext {
            branding: &branding,
            user: None,
            path: "/",
            toast: Some(&toast),
        };
        let html = bare(&ctx, "Login", "").unwrap();
        assert!(html.contains("<strong>Client Added</strong>"));
    }
}

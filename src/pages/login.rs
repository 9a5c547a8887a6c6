//! Login screen with the reset-password and client registration dialogs.

use super::{
    PageContext, PageQuery, layout,
    widgets::{self, Escape},
};
use crate::{core::actions::QuickAction, entities::Role, errors::Result};
use std::fmt::Write;

/// Prefilled sign-in email.
pub const DEFAULT_EMAIL: &str = "admin@structura.io";
/// Prefilled sign-in password.
pub const DEFAULT_PASSWORD: &str = "password";

fn sign_in_form(out: &mut String) -> Result<()> {
    out.push_str(r#"<form method="post" action="/login" class="fields">"#);
    widgets::input_field(out, "Email", "email", "email", "you@example.com", DEFAULT_EMAIL)?;
    widgets::input_field(out, "Password", "password", "password", "", DEFAULT_PASSWORD)?;

    out.push_str("<fieldset><legend>Role</legend>");
    for role in Role::ALL {
        let checked = if role == Role::Admin { " checked" } else { "" };
        write!(
            out,
            r#"<label><input type="radio" name="role" value="{}"{checked}> {}</label>"#,
            role.as_str(),
            role.label()
        )?;
    }
    out.push_str(r#"</fieldset><button type="submit">Sign In</button></form>"#);
    Ok(())
}

fn dialog_fields(action: QuickAction) -> Result<String> {
    let mut fields = String::new();
    match action {
        QuickAction::ResetPassword => {
            widgets::input_field(&mut fields, "Email Address", "email", "email", "you@example.com", "")?;
        }
        QuickAction::RegisterClient => {
            widgets::text_field(&mut fields, "Full Name", "name", "John Smith")?;
            widgets::text_field(&mut fields, "Company", "company", "Your company name")?;
            widgets::input_field(&mut fields, "Email", "email", "email", "you@company.com", "")?;
            widgets::input_field(
                &mut fields,
                "Password",
                "password",
                "password",
                "Create a strong password",
                "",
            )?;
        }
        _ => {}
    }
    Ok(fields)
}

/// Renders `/`.
pub fn render(ctx: &PageContext<'_>, query: &PageQuery) -> Result<String> {
    let mut out = String::new();
    write!(
        out,
        r#"<div class="card" style="max-width:26rem;margin:4rem auto"><h1>{}</h1><p class="muted">Architecture Management System</p>"#,
        Escape(&ctx.branding.app_name)
    )?;
    sign_in_form(&mut out)?;

    out.push_str(r#"<p class="dialog-footer">"#);
    for action in [QuickAction::ResetPassword, QuickAction::RegisterClient] {
        widgets::dialog_link(&mut out, "/", action, &[], action.label(), "outline")?;
    }
    out.push_str("</p></div>");

    if let Some(action) = query
        .dialog_action()
        .filter(|action| action.is_public())
    {
        widgets::dialog(&mut out, action, "/", "/", &dialog_fields(action)?)?;
    }

    layout::bare(ctx, "Sign In", &out)
}

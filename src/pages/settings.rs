//! Account settings with profile, notification, security and appearance tabs.

use super::{
    PageContext, PageQuery, layout,
    widgets::{self, Escape},
};
use crate::{core::actions::QuickAction, entities::User, errors::Result};
use std::fmt::Write;

const PATH: &str = "/settings";

/// Tabs in display order as `(key, label)`.
pub const TABS: [(&str, &str); 4] = [
    ("profile", "Profile"),
    ("notifications", "Notifications"),
    ("security", "Security"),
    ("appearance", "Appearance"),
];

const NOTIFICATIONS: [(&str, &str); 5] = [
    ("Email Notifications", "Receive project updates via email"),
    ("Push Notifications", "Browser push notifications for urgent items"),
    ("Task Assignments", "Get notified when tasks are assigned to you"),
    ("Payment Reminders", "Receive reminders for upcoming payments"),
    ("Chat Messages", "Notify on new messages in project chats"),
];

/// Opens the settings form; closed by [`save_button`].
fn open_form(out: &mut String, tab: &str) -> Result<()> {
    write!(
        out,
        r#"<form method="post" action="/actions/{}" class="fields"><input type="hidden" name="return_to" value="{}">"#,
        QuickAction::SaveSettings.slug(),
        Escape(&widgets::href(PATH, &[("tab", tab)]))
    )?;
    Ok(())
}

fn save_button(out: &mut String, label: &str) -> Result<()> {
    write!(out, r#"<button type="submit">{}</button></form>"#, Escape(label))?;
    Ok(())
}

fn profile(out: &mut String, user: &User) -> Result<()> {
    write!(
        out,
        r#"<h3>Profile Settings</h3><p><span class="chip">{}</span> <strong>{}</strong> <span class="muted">{}</span></p>"#,
        Escape(&user.initials()),
        Escape(&user.name),
        user.role
    )?;
    open_form(out, "profile")?;
    widgets::input_field(out, "Full Name", "name", "text", "", &user.name)?;
    widgets::input_field(out, "Email", "email", "email", "", &user.email)?;
    write!(
        out,
        r#"<label>Role<input type="text" value="{}" disabled></label>"#,
        user.role
    )?;
    widgets::input_field(out, "Phone", "phone", "tel", "+1 (555) 000-0000", "")?;
    save_button(out, "Save Changes")
}

fn notifications(out: &mut String) -> Result<()> {
    out.push_str("<h3>Notification Preferences</h3>");
    open_form(out, "notifications")?;
    for (label, description) in NOTIFICATIONS {
        write!(
            out,
            r#"<label><input type="checkbox" checked> <strong>{label}</strong><br><span class="muted">{description}</span></label>"#
        )?;
    }
    save_button(out, "Save Preferences")
}

fn security(out: &mut String) -> Result<()> {
    out.push_str("<h3>Security Settings</h3>");
    open_form(out, "security")?;
    widgets::input_field(out, "Current Password", "current", "password", "Enter current password", "")?;
    widgets::input_field(out, "New Password", "new", "password", "Enter new password", "")?;
    widgets::input_field(out, "Confirm New Password", "confirm", "password", "Confirm new password", "")?;
    save_button(out, "Update Password")?;

    out.push_str(
        r#"<div class="card"><p><strong>Two-Factor Authentication</strong></p><p class="muted">Add an extra layer of security to your account</p>"#,
    );
    widgets::action_button(
        out,
        QuickAction::EnableTwoFactor,
        &widgets::href(PATH, &[("tab", "security")]),
        "outline",
    )?;
    out.push_str("</div>");
    Ok(())
}

fn choice_group(out: &mut String, label: &str, name: &str, options: &[&str]) -> Result<()> {
    write!(out, "<fieldset><legend>{}</legend>", Escape(label))?;
    for (i, option) in options.iter().enumerate() {
        let checked = if i == 0 { " checked" } else { "" };
        write!(
            out,
            r#"<label><input type="radio" name="{name}" value="{0}"{checked}> {0}</label>"#,
            Escape(option)
        )?;
    }
    out.push_str("</fieldset>");
    Ok(())
}

fn appearance(out: &mut String) -> Result<()> {
    out.push_str("<h3>Appearance Settings</h3>");
    open_form(out, "appearance")?;
    choice_group(out, "Theme", "theme", &["Light", "Dark", "System"])?;
    choice_group(out, "Sidebar Position", "sidebar", &["Left", "Right"])?;
    save_button(out, "Save Appearance")
}

/// Renders `/settings` for `user`.
pub fn render(ctx: &PageContext<'_>, user: &User, query: &PageQuery) -> Result<String> {
    let active = query
        .tab
        .as_deref()
        .filter(|tab| TABS.iter().any(|(key, _)| key == tab))
        .unwrap_or("profile");

    let mut out = String::new();
    widgets::page_header(&mut out, "Settings", "Manage your account and preferences", "")?;
    widgets::tabs(&mut out, PATH, &TABS, active, &[])?;

    out.push_str(r#"<section class="card">"#);
    match active {
        "notifications" => notifications(&mut out)?,
        "security" => security(&mut out)?,
        "appearance" => appearance(&mut out)?,
        _ => profile(&mut out, user)?,
    }
    out.push_str("</section>");

    layout::shell(ctx, "Settings", &out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{config::settings::BrandingConfig, core::auth::AuthStore, entities::Role};

    fn render_tab(tab: Option<&str>) -> String {
        let branding = BrandingConfig::default();
        let mut auth = AuthStore::new();
        let user = auth.login("alex@structura.io", "", Role::Admin).clone();
        let ctx = PageContext {
            branding: &branding,
            user: Some(&user),
            path: PATH,
            toast: None,
        };
        let query = PageQuery {
            tab: tab.map(str::to_string),
            ..PageQuery::default()
        };
        render(&ctx, &user, &query).unwrap()
    }

    #[test]
    fn test_profile_is_default_tab() {
        let html = render_tab(None);
        assert!(html.contains("Profile Settings"));
        assert!(html.contains(r#"value="alex@structura.io""#));
        assert!(html.contains(r#"<span class="chip">AM</span>"#));
        assert!(html.contains(r#"action="/actions/save-settings""#));
    }

    #[test]
    fn test_security_tab_offers_two_factor() {
        let html = render_tab(Some("security"));
        assert!(html.contains("Two-Factor Authentication"));
        assert!(html.contains(r#"action="/actions/enable-two-factor""#));
        assert!(html.contains("Update Password"));
        assert!(!html.contains("Profile Settings"));
    }

    #[test]
    fn test_notifications_and_appearance_tabs() {
        let html = render_tab(Some("notifications"));
        assert!(html.contains("Payment Reminders"));

        let html = render_tab(Some("appearance"));
        assert!(html.contains("Sidebar Position"));
        assert!(html.contains("Save Appearance"));
    }
}

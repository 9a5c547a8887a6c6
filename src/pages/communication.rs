//! Chat rooms: room list, selected room, message box and AI summary.

use super::{
    PageContext, PageQuery, layout,
    widgets::{self, Escape},
};
use crate::{
    core::{actions::QuickAction, communication::CommunicationStore, search},
    entities::ChatRoom,
    errors::Result,
};
use std::fmt::Write;

const PATH: &str = "/communication";

/// `?dialog=` value of the summary modal.
pub const SUMMARY_DIALOG: &str = "summary";

const KEY_POINTS: [&str; 4] = [
    "Design specifications were reviewed and approved",
    "Timeline adjustments discussed for Phase 2",
    "Material cost estimates shared by engineering team",
    "Client feedback incorporated into revised plans",
];

const ACTION_ITEMS: [&str; 3] = [
    "Update floor plans by Friday",
    "Schedule follow-up meeting with client",
    "Submit revised budget proposal",
];

fn room_list(
    out: &mut String,
    rooms: &CommunicationStore,
    selected: &ChatRoom,
    query: &str,
) -> Result<()> {
    out.push_str(r#"<aside class="card">"#);
    widgets::search_form(out, PATH, "Search conversations...", query, &[])?;
    for room in rooms
        .chat_rooms()
        .iter()
        .filter(|room| search::matches(&room.name, query))
    {
        let id = room.id.to_string();
        let class = if room.id == selected.id { "room active" } else { "room" };
        write!(
            out,
            r#"<a class="{class}" href="{}"><p><strong>{}</strong>"#,
            Escape(&widgets::href(PATH, &[("q", query), ("room", &id)])),
            Escape(&room.name)
        )?;
        if room.unread > 0 {
            write!(out, r#" <span class="badge">{}</span>"#, room.unread)?;
        }
        write!(
            out,
            r#"</p><p class="muted">{} · {}</p></a>"#,
            Escape(&room.last_message),
            Escape(&room.time)
        )?;
    }
    out.push_str("</aside>");
    Ok(())
}

fn summary(out: &mut String, room: &ChatRoom, close: &str) -> Result<()> {
    let mut body = String::from("<p><strong>Key Discussion Points:</strong></p><ul>");
    for point in KEY_POINTS {
        write!(body, "<li>{point}</li>")?;
    }
    body.push_str("</ul><p><strong>Action Items:</strong></p><ul>");
    for item in ACTION_ITEMS {
        write!(body, "<li>{item}</li>")?;
    }
    body.push_str("</ul>");
    widgets::info_dialog(
        out,
        "AI Chat Summary",
        &format!("AI-generated summary of the conversation in {}.", room.name),
        close,
        &body,
    )?;
    Ok(())
}

/// Renders `/communication`. The first room is selected unless `?room=` names
/// another.
pub fn render(
    ctx: &PageContext<'_>,
    store: &CommunicationStore,
    query: &PageQuery,
) -> Result<String> {
    let mut out = String::new();
    widgets::page_header(&mut out, "Communication", "Project chat rooms and team messaging", "")?;

    let selected = query
        .room
        .and_then(|id| store.room_by_id(id))
        .or_else(|| store.chat_rooms().first());
    let Some(room) = selected else {
        widgets::empty_state(&mut out, "No conversations yet", "")?;
        return layout::shell(ctx, "Communication", &out);
    };

    let search = query.search();
    let id = room.id.to_string();
    let here = widgets::href(PATH, &[("q", search), ("room", &id)]);

    out.push_str(r#"<div class="chat">"#);
    room_list(&mut out, store, room, search)?;

    write!(
        out,
        r#"<section class="card"><div class="page-header"><h3>{}</h3><a class="button outline" href="{}">AI Summary</a></div>"#,
        Escape(&room.name),
        Escape(&widgets::href(
            PATH,
            &[("q", search), ("room", &id), ("dialog", SUMMARY_DIALOG)]
        ))
    )?;
    out.push_str(r#"<div class="empty"><p class="muted">Messages will appear here</p></div><div class="search">"#);
    widgets::action_button(&mut out, QuickAction::AttachFile, &here, "outline")?;
    write!(
        out,
        r#"<form class="search" method="post" action="/communication/messages"><input type="hidden" name="room" value="{id}"><input type="hidden" name="return_to" value="{}"><input type="text" name="message" placeholder="Type a message..."><button type="submit">Send</button></form></div></section></div>"#,
        Escape(&here)
    )?;

    if query.dialog.as_deref() == Some(SUMMARY_DIALOG) {
        summary(&mut out, room, &here)?;
    }

    layout::shell(ctx, "Communication", &out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{config::settings::BrandingConfig, data::MockData};

    fn render_with(query: &PageQuery) -> String {
        let branding = BrandingConfig::default();
        let store = CommunicationStore::from_source(&MockData);
        let ctx = PageContext {
            branding: &branding,
            user: None,
            path: PATH,
            toast: None,
        };
        render(&ctx, &store, query).unwrap()
    }

    #[test]
    fn test_first_room_selected_by_default() {
        let html = render_with(&PageQuery::default());
        assert!(html.contains("<h3>Skyline Tower — General</h3>"));
        assert!(html.contains(r#"<a class="room active" href="/communication?room=1">"#));
        assert!(html.contains(r#"<input type="hidden" name="room" value="1">"#));
        assert!(html.contains(r#"action="/actions/attach-file""#));
    }

    #[test]
    fn test_room_from_query() {
        let query = PageQuery {
            room: Some(4),
            ..PageQuery::default()
        };
        let html = render_with(&query);
        assert!(html.contains("<h3>Metro Station — Engineering</h3>"));
        assert!(html.contains(r#"<span class="badge">5</span>"#));
    }

    #[test]
    fn test_unknown_room_falls_back_to_first() {
        let query = PageQuery {
            room: Some(42),
            ..PageQuery::default()
        };
        let html = render_with(&query);
        assert!(html.contains("<h3>Skyline Tower — General</h3>"));
    }

    #[test]
    fn test_summary_dialog_names_room() {
        let query = PageQuery {
            room: Some(2),
            dialog: Some(SUMMARY_DIALOG.to_string()),
            ..PageQuery::default()
        };
        let html = render_with(&query);
        assert!(html.contains("AI-generated summary of the conversation in Harbor Bridge — Design."));
        assert!(html.contains("Update floor plans by Friday"));
    }

    #[test]
    fn test_room_search() {
        let query = PageQuery {
            q: "metro".to_string(),
            room: Some(4),
            ..PageQuery::default()
        };
        let html = render_with(&query);
        assert!(!html.contains("Green Campus — Client"));
    }
}

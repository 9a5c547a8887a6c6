//! Reusable HTML fragments: escaping, links, badges, stat cards and dialogs.

use crate::core::actions::QuickAction;
use std::fmt::{self, Display, Write};

/// Writes its text with HTML special characters escaped.
#[derive(Clone, Copy, Debug)]
pub struct Escape<'a>(pub &'a str);

impl Display for Escape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

/// Builds `path?k=v&...`, skipping empty values. Values are percent-encoded.
#[must_use]
pub fn href(path: &str, params: &[(&str, &str)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();

    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", query.join("&"))
    }
}

/// Colour of a stat card's change line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Good news
    Positive,
    /// Needs attention
    Negative,
    /// Informational
    Neutral,
}

impl Tone {
    const fn class(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// Headline number on a dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    /// Caption
    pub title: &'static str,
    /// Big value
    pub value: String,
    /// Small line under the value
    pub change: String,
    /// Colour of the change line
    pub tone: Tone,
}

impl StatCard {
    /// Creates a card.
    pub fn new(
        title: &'static str,
        value: impl Display,
        change: impl Into<String>,
        tone: Tone,
    ) -> Self {
        Self {
            title,
            value: value.to_string(),
            change: change.into(),
            tone,
        }
    }
}

/// Writes a row of stat cards.
pub fn stat_cards(out: &mut String, cards: &[StatCard]) -> fmt::Result {
    out.push_str(r#"<div class="stats">"#);
    for card in cards {
        write!(
            out,
            r#"<div class="card stat"><p class="muted">{}</p><p class="stat-value">{}</p><p class="change {}">{}</p></div>"#,
            Escape(card.title),
            Escape(&card.value),
            card.tone.class(),
            Escape(&card.change),
        )?;
    }
    out.push_str("</div>");
    Ok(())
}

/// Writes a status pill. `status` is the wire name, used as CSS class.
pub fn status_badge(out: &mut String, status: &str, label: &str) -> fmt::Result {
    write!(
        out,
        r#"<span class="badge badge-{status}">{}</span>"#,
        Escape(label)
    )
}

/// Writes a progress bar for a 0-100 value.
pub fn progress_bar(out: &mut String, progress: u8) -> fmt::Result {
    let width = progress.min(100);
    write!(
        out,
        r#"<div class="progress" title="{progress}%"><div class="progress-fill" style="width:{width}%"></div></div>"#
    )
}

/// Writes a GET search box that keeps `hidden` params.
pub fn search_form(
    out: &mut String,
    action: &str,
    placeholder: &str,
    query: &str,
    hidden: &[(&str, &str)],
) -> fmt::Result {
    write!(out, r#"<form class="search" method="get" action="{}">"#, Escape(action))?;
    for (name, value) in hidden.iter().filter(|(_, v)| !v.is_empty()) {
        write!(
            out,
            r#"<input type="hidden" name="{name}" value="{}">"#,
            Escape(value)
        )?;
    }
    write!(
        out,
        r#"<input type="search" name="q" value="{}" placeholder="{}"><button type="submit">Search</button></form>"#,
        Escape(query),
        Escape(placeholder)
    )
}

/// Writes a link that opens the dialog of `action` on `page`.
///
/// `extra` keeps the rest of the page state (search text, tab) in the link.
pub fn dialog_link(
    out: &mut String,
    page: &str,
    action: QuickAction,
    extra: &[(&str, &str)],
    label: &str,
    class: &str,
) -> fmt::Result {
    let slug = action.slug();
    let mut params = extra.to_vec();
    params.push(("dialog", &slug));
    write!(
        out,
        r#"<a class="button {class}" href="{}">{}</a>"#,
        Escape(&href(page, &params)),
        Escape(label)
    )
}

/// Writes the title block at the top of a page, with optional trailing HTML
/// (usually action buttons).
pub fn page_header(out: &mut String, title: &str, subtitle: &str, actions: &str) -> fmt::Result {
    write!(
        out,
        r#"<div class="page-header"><div><h1>{}</h1><p class="muted">{}</p></div><div>{actions}</div></div>"#,
        Escape(title),
        Escape(subtitle)
    )
}

/// Writes a tab strip. Each tab links to `page?tab=<key>` plus `extra`.
pub fn tabs(
    out: &mut String,
    page: &str,
    items: &[(&str, &str)],
    active: &str,
    extra: &[(&str, &str)],
) -> fmt::Result {
    out.push_str(r#"<div class="tabs">"#);
    for (key, label) in items {
        let mut params = extra.to_vec();
        params.push(("tab", key));
        let class = if *key == active { "active" } else { "" };
        write!(
            out,
            r#"<a class="{class}" href="{}">{}</a>"#,
            Escape(&href(page, &params)),
            Escape(label)
        )?;
    }
    out.push_str("</div>");
    Ok(())
}

/// Writes a table header row.
pub fn table_head(out: &mut String, columns: &[&str]) -> fmt::Result {
    out.push_str("<table><thead><tr>");
    for column in columns {
        write!(out, "<th>{}</th>", Escape(column))?;
    }
    out.push_str("</tr></thead><tbody>");
    Ok(())
}

/// Writes a centred message for empty lists.
pub fn empty_state(out: &mut String, title: &str, hint: &str) -> fmt::Result {
    write!(
        out,
        r#"<div class="empty"><p>{}</p><p class="muted">{}</p></div>"#,
        Escape(title),
        Escape(hint)
    )
}

/// Writes a one-button form that submits `action` straight away.
pub fn action_button(
    out: &mut String,
    action: QuickAction,
    return_to: &str,
    class: &str,
) -> fmt::Result {
    write!(
        out,
        r#"<form class="inline" method="post" action="/actions/{}"><input type="hidden" name="return_to" value="{}"><button class="{class}" type="submit">{}</button></form>"#,
        action.slug(),
        Escape(return_to),
        Escape(action.label())
    )
}

/// Writes the modal of `action` with `fields` between heading and buttons.
///
/// Cancel goes to `close_href`; submitting posts to `/actions/:action` and
/// comes back to `return_to`. Actions without a dialog write nothing.
pub fn dialog(
    out: &mut String,
    action: QuickAction,
    close_href: &str,
    return_to: &str,
    fields: &str,
) -> fmt::Result {
    let Some(text) = action.dialog() else {
        return Ok(());
    };

    write!(
        out,
        r#"<div class="overlay"><div class="dialog" role="dialog"><h2>{}</h2><p class="muted">{}</p>"#,
        Escape(text.title),
        Escape(text.description)
    )?;
    write!(
        out,
        r#"<form method="post" action="/actions/{}"><input type="hidden" name="return_to" value="{}"><div class="fields">{fields}</div>"#,
        action.slug(),
        Escape(return_to)
    )?;
    write!(
        out,
        r#"<div class="dialog-footer"><a class="button outline" href="{}">Cancel</a><button type="submit">{}</button></div></form></div></div>"#,
        Escape(close_href),
        Escape(&action.submit_label())
    )
}

/// Writes a read-only modal with a single Close link.
pub fn info_dialog(
    out: &mut String,
    title: &str,
    description: &str,
    close_href: &str,
    body: &str,
) -> fmt::Result {
    write!(
        out,
        r#"<div class="overlay"><div class="dialog" role="dialog"><h2>{}</h2><p class="muted">{}</p>{body}<div class="dialog-footer"><a class="button outline" href="{}">Close</a></div></div></div>"#,
        Escape(title),
        Escape(description),
        Escape(close_href)
    )
}

/// Writes a labelled text input.
pub fn text_field(out: &mut String, label: &str, name: &str, placeholder: &str) -> fmt::Result {
    input_field(out, label, name, "text", placeholder, "")
}

/// Writes a labelled input of any `kind` (`email`, `date`, `password`...).
pub fn input_field(
    out: &mut String,
    label: &str,
    name: &str,
    kind: &str,
    placeholder: &str,
    value: &str,
) -> fmt::Result {
    write!(
        out,
        r#"<label>{}<input type="{kind}" name="{name}" placeholder="{}" value="{}"></label>"#,
        Escape(label),
        Escape(placeholder),
        Escape(value)
    )
}

/// Writes a group of pre-checked checkboxes sharing `name`.
pub fn checkbox_list(out: &mut String, label: &str, name: &str, options: &[&str]) -> fmt::Result {
    write!(out, "<fieldset><legend>{}</legend>", Escape(label))?;
    for option in options {
        write!(
            out,
            r#"<label><input type="checkbox" name="{name}" value="{0}" checked> {0}</label>"#,
            Escape(option)
        )?;
    }
    out.push_str("</fieldset>");
    Ok(())
}

/// Writes a labelled select with the given options.
pub fn select_field(out: &mut String, label: &str, name: &str, options: &[&str]) -> fmt::Result {
    write!(out, r#"<label>{}<select name="{name}">"#, Escape(label))?;
    for option in options {
        write!(out, "<option>{}</option>", Escape(option))?;
    }
    out.push_str("</select></label>");
    Ok(())
}

/// Writes a labelled textarea.
pub fn text_area(out: &mut String, label: &str, name: &str, placeholder: &str) -> fmt::Result {
    write!(
        out,
        r#"<label>{}<textarea name="{name}" rows="3" placeholder="{}"></textarea></label>"#,
        Escape(label),
        Escape(placeholder)
    )
}

/// Caption of the drop zone in upload dialogs.
pub const UPLOAD_PROMPT: &str = "Click to upload or drag & drop";

/// Writes the dashed drop zone used by upload dialogs and the files tab.
pub fn drop_zone(out: &mut String, title: &str, hint: &str) -> fmt::Result {
    write!(
        out,
        r#"<div class="drop-zone"><p>{}</p><p class="muted">{}</p></div>"#,
        Escape(title),
        Escape(hint)
    )
}

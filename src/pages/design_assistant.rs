//! AI design assistant: prompt history, conversation and prompt box.

use super::{PageContext, layout, widgets::Escape};
use crate::{
    core::design_chat::{Author, DesignChat},
    errors::Result,
};
use std::fmt::Write;

const EXAMPLE_PROMPT: &str = "Generate a 3D concept of a 5-storey commercial building with glass façade and rooftop garden";

fn history(out: &mut String, chat: &DesignChat) -> Result<()> {
    out.push_str(
        r#"<aside class="card"><form method="post" action="/ai-design-assistant/new"><button type="submit">New Chat</button></form>"#,
    );
    if chat.is_empty() {
        out.push_str(r#"<p class="muted">No chats yet</p>"#);
    }
    for prompt in chat.prompts() {
        write!(
            out,
            r#"<div class="room"><p>{}</p><p class="muted">{}</p></div>"#,
            Escape(&prompt.text),
            prompt.timestamp.format("%H:%M")
        )?;
    }
    out.push_str(r#"<p class="muted">Design Assistant</p></aside>"#);
    Ok(())
}

fn conversation(out: &mut String, chat: &DesignChat) -> Result<()> {
    if chat.is_empty() {
        write!(
            out,
            r#"<div class="empty"><h2>Design Assistant</h2><p>Describe your architectural design ideas and I'll generate stunning visualizations powered by AI.</p><p class="muted">Try asking:</p><p>"{}"</p></div>"#,
            Escape(EXAMPLE_PROMPT)
        )?;
        return Ok(());
    }

    for message in chat.messages() {
        let class = match message.author {
            Author::User => "user",
            Author::Assistant => "assistant",
        };
        write!(
            out,
            r#"<div class="message {class}"><p>{}</p>"#,
            Escape(&message.text)
        )?;
        if message.has_preview() {
            out.push_str(r#"<div class="preview"><p class="muted">Design Preview</p></div>"#);
        }
        out.push_str("</div>");
    }
    Ok(())
}

/// Renders `/ai-design-assistant` for the session's conversation.
pub fn render(ctx: &PageContext<'_>, chat: &DesignChat) -> Result<String> {
    let mut out = String::from(r#"<div class="chat">"#);
    history(&mut out, chat)?;

    out.push_str(
        r#"<section class="card"><div class="page-header"><div><h1>AI Design Assistant</h1><p class="muted">Concept visualization powered by AI</p></div></div>"#,
    );
    conversation(&mut out, chat)?;
    out.push_str(
        r#"<form method="post" action="/ai-design-assistant/messages" class="fields"><textarea name="prompt" rows="3" placeholder="Describe your design idea..."></textarea><button type="submit">Send</button></form><p class="muted">AI Design Assistant • Powered by advanced image generation</p></section></div>"#,
    );

    layout::shell(ctx, "AI Design Assistant", &out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::settings::BrandingConfig;
    use chrono::{TimeZone, Utc};

    fn render_chat(chat: &DesignChat) -> String {
        let branding = BrandingConfig::default();
        let ctx = PageContext {
            branding: &branding,
            user: None,
            path: "/ai-design-assistant",
            toast: None,
        };
        render(&ctx, chat).unwrap()
    }

    #[test]
    fn test_empty_chat_shows_intro() {
        let html = render_chat(&DesignChat::new());
        assert!(html.contains("No chats yet"));
        assert!(html.contains("Try asking:"));
        assert!(html.contains("glass façade"));
        assert!(!html.contains("Design Preview"));
    }

    #[test]
    fn test_conversation_with_preview() {
        let mut chat = DesignChat::new();
        let at = Utc.with_ymd_and_hms(2025, 2, 8, 14, 5, 0).unwrap();
        chat.send("brick <library>", at);

        let html = render_chat(&chat);
        assert!(!html.contains("No chats yet"));
        assert!(html.contains("brick &lt;library&gt;"));
        assert!(html.contains("Generated design for: &quot;brick &lt;library&gt;&quot;"));
        assert!(html.contains("Design Preview"));
        assert!(html.contains("14:05"));
    }
}

//! Markdown preview and the wiki page editor.
//!
//! Rendering goes through `pulldown-cmark`. Raw HTML in the source is shown
//! as text and script-capable link targets are neutralised before the HTML
//! reaches `dangerous_inner_html`.

use dioxus::prelude::*;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

use crate::components::{Button, ButtonVariant, Textarea};
use crate::context::use_api;
use crate::toast::use_toasts;

const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_lowercase();
    if BLOCKED_SCHEMES.iter().any(|s| normalized.starts_with(s)) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// Render markdown to HTML that is safe to inject.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Alt text for an uploaded image: the file name without its extension.
pub fn image_alt(file_name: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    stem.replace(['[', ']'], "")
}

/// Append an image reference on its own line.
pub fn insert_image_markdown(content: &str, alt: &str, url: &str) -> String {
    let image = format!("![{alt}]({url})");
    if content.is_empty() {
        image
    } else if content.ends_with('\n') {
        format!("{content}{image}\n")
    } else {
        format!("{content}\n\n{image}\n")
    }
}

/// Rendered markdown.
#[component]
pub fn MarkdownView(content: String, #[props(default)] class: String) -> Element {
    let rendered = use_memo(use_reactive!(|content| render_markdown(&content)));
    rsx! {
        div {
            class: "markdown-body {class}",
            dangerous_inner_html: "{rendered}",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum EditorTab {
    Write,
    Preview,
}

/// Textarea with a preview tab and image upload.
///
/// `content` is owned by the caller; `on_change` fires after every edit.
#[component]
pub fn MarkdownEditor(
    content: Signal<String>,
    #[props(default)] on_change: EventHandler<String>,
    #[props(default = "Write in markdown…".to_string())] placeholder: String,
    #[props(default = true)] allow_images: bool,
) -> Element {
    let mut content = content;
    let mut tab = use_signal(|| EditorTab::Write);
    let mut uploading = use_signal(|| false);
    let client = use_api();
    let toasts = use_toasts();

    let on_file = move |evt: FormEvent| {
        let client = client.clone();
        async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            let name = file.name();
            let mime = file
                .content_type()
                .unwrap_or_else(|| "application/octet-stream".to_string());
            if !mime.starts_with("image/") {
                toasts.error(format!("{name} is not an image"));
                return;
            }
            uploading.set(true);
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    toasts.error(format!("Could not read {name}: {e}"));
                    uploading.set(false);
                    return;
                }
            };
            match client.upload_wiki_image(&name, &mime, bytes).await {
                Ok(upload) => {
                    let next = insert_image_markdown(&content.peek(), &image_alt(&name), &upload.url);
                    content.set(next.clone());
                    on_change.call(next);
                    toasts.success("Image uploaded");
                }
                Err(e) => toasts.error(format!("Upload failed: {e}")),
            }
            uploading.set(false);
        }
    };

    rsx! {
        div {
            class: "markdown-editor",
            div {
                class: "markdown-editor-toolbar",
                Button {
                    variant: if tab() == EditorTab::Write { ButtonVariant::Secondary } else { ButtonVariant::Ghost },
                    onclick: move |_| tab.set(EditorTab::Write),
                    "Write"
                }
                Button {
                    variant: if tab() == EditorTab::Preview { ButtonVariant::Secondary } else { ButtonVariant::Ghost },
                    onclick: move |_| tab.set(EditorTab::Preview),
                    "Preview"
                }
                if allow_images {
                    label {
                        class: "btn btn--ghost",
                        if uploading() { "Uploading…" } else { "Insert image" }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            class: "sr-only",
                            disabled: uploading(),
                            onchange: on_file,
                        }
                    }
                }
            }
            match tab() {
                EditorTab::Write => rsx! {
                    Textarea {
                        class: "markdown-editor-input",
                        rows: 20,
                        placeholder: placeholder.clone(),
                        value: content(),
                        oninput: move |evt: FormEvent| {
                            let value = evt.value();
                            content.set(value.clone());
                            on_change.call(value);
                        },
                    }
                },
                EditorTab::Preview => rsx! {
                    if content().trim().is_empty() {
                        p { class: "view-muted", "Nothing to preview." }
                    } else {
                        MarkdownView { content: content() }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let html = render_markdown("# Title\n\nSome *text*.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>\n\nhi <b>there</b>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_script_links_are_neutralised() {
        let html = render_markdown("[x](javascript:alert(1)) [y]( JavaScript:evil) ![i](data:image/svg+xml,abc)");
        assert!(!html.to_lowercase().contains("javascript:"));
        assert!(!html.contains("data:"));
        assert!(html.contains("href=\"#\""));
    }

    #[test]
    fn test_regular_links_kept() {
        let html = render_markdown("[docs](https://example.com/docs)");
        assert!(html.contains("href=\"https://example.com/docs\""));
    }

    #[test]
    fn test_insert_image_markdown() {
        assert_eq!(insert_image_markdown("", "cat", "/u/cat.png"), "![cat](/u/cat.png)");
        assert_eq!(
            insert_image_markdown("Intro", "cat", "/u/cat.png"),
            "Intro\n\n![cat](/u/cat.png)\n"
        );
        assert_eq!(
            insert_image_markdown("Intro\n", "cat", "/u/cat.png"),
            "Intro\n![cat](/u/cat.png)\n"
        );
    }

    #[test]
    fn test_image_alt() {
        assert_eq!(image_alt("team-photo.jpeg"), "team-photo");
        assert_eq!(image_alt(".hidden"), ".hidden");
        assert_eq!(image_alt("[odd].png"), "odd");
    }
}

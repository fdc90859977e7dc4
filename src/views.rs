//! Page chrome and HTMX fragments
//!
//! Styling comes from DaisyUI classes; interactivity is wired through htmx
//! attributes, so every function here only assembles markup.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::html::{self, a, button, div, form, h1, h2, input, label, li, p, ul, Element, Node};
use crate::models::{Role, Turn};

pub const PAGE_TITLE: &str = "Poor Man's Agent";

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";
const HTMX_JS: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2/dist/htmx.min.js";

const DRAWER_ID: &str = "my-drawer";

/// Bytes escaped when a conversation id is placed in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// URL that selects conversation `id`
pub fn chat_url(id: &str) -> String {
    format!("/chat/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

/// One DaisyUI chat bubble. User turns sit on the left, assistant turns on the right.
pub fn chat_bubble(turn: &Turn) -> Element {
    let (align_cls, bubble_cls) = match turn.role {
        Role::User => ("chat-start", "chat-bubble chat-bubble-primary"),
        Role::Assistant => ("chat-end", "chat-bubble chat-bubble-secondary"),
    };

    div()
        .class(format!("chat {align_cls}"))
        .child(
            div()
                .class("chat-header text-sm opacity-70")
                .text(turn.role.title()),
        )
        .child(div().class(bubble_cls).text(turn.text.as_str()))
}

/// The message input. With `oob` set, htmx swaps it in place of the current
/// input, which clears it after a submission.
pub fn chat_input(oob: bool) -> Element {
    let input = input()
        .attr("name", "message")
        .id("chat-input")
        .attr("placeholder", "Ask me anything...")
        .class("input input-bordered input-primary flex-1 shadow-sm");
    if oob {
        input.attr("hx-swap-oob", "true")
    } else {
        input
    }
}

/// Message list plus the submission form
pub fn chat_panel(turns: &[Turn]) -> Element {
    let messages = div()
        .id("messages")
        .class("flex flex-col gap-4 p-6 bg-base-200 rounded-box flex-1 overflow-y-auto");
    let messages = if turns.is_empty() {
        messages.child(div().child(p().text("Let start a new conversation")))
    } else {
        messages.children(turns.iter().map(chat_bubble))
    };

    let input_form = form()
        .attr("hx-post", "/send-message")
        .attr("hx-target", "#messages")
        .attr("hx-swap", "beforeend")
        .class("p-4 bg-base-200 rounded-box shadow-md")
        .child(
            div()
                .class("flex gap-3 items-center")
                .child(chat_input(false))
                .child(
                    button()
                        .attr("type", "submit")
                        .class("btn btn-primary shadow-md hover:shadow-lg transition-shadow")
                        .text("Send"),
                )
                .child(
                    button()
                        .attr("type", "submit")
                        .class("btn btn-secondary")
                        .text("Clear"),
                ),
        );

    div().class("p-4 flex-1 bg-base-100").child(
        div()
            .class("flex flex-col gap-4 h-full")
            .child(messages)
            .child(input_form),
    )
}

/// Drawer listing every known conversation
pub fn sidebar(conversation_ids: &[String]) -> Element {
    let links = conversation_ids.iter().map(|id| {
        li().child(
            a().attr("hx-get", chat_url(id))
                .attr("hx-target", "#chat-content")
                .attr("hx-swap", "innerHTML")
                .text(format!("Chat {id}")),
        )
    });

    div()
        .class("drawer-side")
        .child(label().attr("for", DRAWER_ID).class("drawer-overlay"))
        .child(
            ul().class("menu bg-base-200 text-base-content min-h-full w-80 p-4")
                .child(li().child(h2().class("menu-title text-lg px-4 py-2").text("Chat history")))
                .children(links),
        )
}

pub fn header() -> Element {
    div()
        .class("navbar bg-base-300 shadow-lg")
        .child(
            label()
                .attr("for", DRAWER_ID)
                .class("btn btn-ghost btn-circle drawer-button text-2xl")
                .text("☰"),
        )
        .child(h1().class("text-2xl flex-1 text-center").text(PAGE_TITLE))
}

pub fn footer() -> Element {
    div()
        .class("footer footer-center p-4 bg-base-300 text-base-content")
        .child(
            p().class("text-center text-sm").text(format!(
                "Powered by poor man's UI (version {}).",
                env!("CARGO_PKG_VERSION")
            )),
        )
}

/// Drawer layout: header, empty chat panel, footer and the sidebar
pub fn home(conversation_ids: &[String]) -> Element {
    div()
        .class("drawer")
        .child(
            input()
                .id(DRAWER_ID)
                .attr("type", "checkbox")
                .class("drawer-toggle"),
        )
        .child(
            div()
                .class("drawer-content flex flex-col h-screen")
                .child(header())
                .child(div().id("chat-content").child(chat_panel(&[])))
                .child(footer()),
        )
        .child(sidebar(conversation_ids))
}

/// Full HTML document around `body`
pub fn document(body: Element) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text(PAGE_TITLE))
        .child(
            Element::new("link")
                .attr("href", DAISYUI_CSS)
                .attr("rel", "stylesheet")
                .attr("type", "text/css"),
        )
        .child(Element::new("script").attr("src", TAILWIND_JS))
        .child(Element::new("script").attr("src", HTMX_JS));

    let page = Element::new("html")
        .child(head)
        .child(Element::new("body").child(body));

    format!("<!doctype html>{page}")
}

/// Reply to a submission: both bubbles for appending to `#messages`, plus a
/// cleared input swapped out of band.
pub fn exchange_fragment(user: &Turn, assistant: &Turn) -> String {
    let nodes: [Node; 3] = [
        chat_bubble(user).into(),
        chat_bubble(assistant).into(),
        chat_input(true).into(),
    ];
    html::render_fragment(&nodes)
}

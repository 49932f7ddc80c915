//! Server-rendered pages. Each page is a root component rendered once through
//! `dioxus::ssr`, which escapes text and attribute values.

pub mod admin;
pub mod shareholder;

use axum::http::StatusCode;
use dioxus::prelude::*;

use crate::router::Page;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0; display: flex; }
nav { width: 14rem; padding: 1rem; background: #f0f2f6; min-height: 100vh; }
nav a { display: block; margin: 0.5rem 0; }
main { padding: 1rem 2rem; flex: 1; }
.success { color: #1b5e20; }
.error { color: #b71c1c; }
table { border-collapse: collapse; }
td, th { border: 1px solid #ccc; padding: 0.25rem 0.5rem; text-align: left; vertical-align: top; }
td.question { white-space: pre-wrap; }
";

/// Inline message shown above a page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(msg: impl Into<String>) -> Self {
        Notice::Success(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Notice::Error(msg.into())
    }
}

/// Render a VirtualDom into a complete HTML document string.
pub fn render_to_html(dom: &VirtualDom) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus::ssr::render(dom)
    )
}

/// Build a dom from `root` and `props`, run it once and serialize it.
pub(crate) fn render_page<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    render_to_html(&dom)
}

/// Document shell with the navigation sidebar.
pub(crate) fn layout(title: &str, body: Element) -> Element {
    let admin_href = Page::Admin.href();
    let shareholder_href = Page::Shareholder.href();
    rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{title}" }
            style { dangerous_inner_html: STYLE }
        }
        body {
            nav {
                h2 { "Navigation" }
                a { href: admin_href, "Administrator page" }
                a { href: shareholder_href, "Shareholder page" }
            }
            main { {body} }
        }
    }
}

pub(crate) fn notice_banner(notice: &Option<Notice>) -> Element {
    match notice {
        Some(Notice::Success(msg)) => rsx! {
            p { class: "success", "{msg}" }
        },
        Some(Notice::Error(msg)) => rsx! {
            p { class: "error", "{msg}" }
        },
        None => rsx! {},
    }
}

fn home_root(_: ()) -> Element {
    layout(
        "Shareholder Questions",
        rsx! {
            h1 { "Shareholder Questions" }
            p { "Choose a page from the sidebar." }
        },
    )
}

pub fn home_page() -> String {
    render_page(home_root, ())
}

#[derive(Clone, PartialEq)]
struct ErrorProps {
    status: u16,
    message: String,
}

fn error_root(props: ErrorProps) -> Element {
    let status = props.status;
    layout(
        "Error",
        rsx! {
            h1 { "{status}" }
            {notice_banner(&Some(Notice::Error(props.message)))}
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    render_page(
        error_root,
        ErrorProps {
            status: status.as_u16(),
            message: message.to_string(),
        },
    )
}

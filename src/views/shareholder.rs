use dioxus::prelude::*;

use super::{Notice, layout, notice_banner, render_page};
use crate::middleware::session::ShareholderIdentity;

const TITLE: &str = "Shareholders";

#[derive(Clone, PartialEq)]
struct LoginProps {
    notice: Option<Notice>,
}

fn login_root(props: LoginProps) -> Element {
    layout(
        TITLE,
        rsx! {
            h1 { "{TITLE}" }
            h2 { "Log in" }
            {notice_banner(&props.notice)}
            form { method: "post", action: "/shareholder/login",
                label {
                    "Shareholder number "
                    input { r#type: "text", name: "shareholder_number" }
                }
                label {
                    "Postal code "
                    input { r#type: "password", name: "postal_code" }
                }
                button { r#type: "submit", "Log in" }
            }
        },
    )
}

pub fn login_page(notice: Option<Notice>) -> String {
    render_page(login_root, LoginProps { notice })
}

#[derive(Clone, PartialEq)]
struct QuestionProps {
    identity: ShareholderIdentity,
    notice: Option<Notice>,
}

fn question_root(props: QuestionProps) -> Element {
    let name = props.identity.name.clone();
    let shares = props.identity.shares;
    layout(
        TITLE,
        rsx! {
            h1 { "{TITLE}" }
            h2 { "Welcome, {name}" }
            p { "Shares held: {shares}" }
            {notice_banner(&props.notice)}
            form { method: "post", action: "/shareholder/question",
                label {
                    "Enter your question"
                    br {}
                    textarea { name: "question", rows: "6", cols: "60" }
                }
                br {}
                button { r#type: "submit", "Submit" }
            }
            form { method: "post", action: "/shareholder/logout",
                button { r#type: "submit", "Log out" }
            }
        },
    )
}

pub fn question_page(identity: &ShareholderIdentity, notice: Option<Notice>) -> String {
    render_page(
        question_root,
        QuestionProps {
            identity: identity.clone(),
            notice,
        },
    )
}

use dioxus::prelude::*;

use super::{Notice, layout, notice_banner, render_page};
use crate::db::models::Question;
use crate::service::question_export::EXPORT_FILE_NAME;

const TITLE: &str = "Administrator";

#[derive(Clone, PartialEq)]
struct LoginProps {
    notice: Option<Notice>,
}

fn login_root(props: LoginProps) -> Element {
    layout(
        TITLE,
        rsx! {
            h1 { "{TITLE}" }
            {notice_banner(&props.notice)}
            form { method: "post", action: "/admin/login",
                label {
                    "Administrator password "
                    input {
                        r#type: "password",
                        name: "password",
                        autocomplete: "current-password",
                    }
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
struct ConsoleProps {
    questions: Vec<Question>,
    shareholder_count: i64,
    notice: Option<Notice>,
}

fn console_root(props: ConsoleProps) -> Element {
    let shareholder_count = props.shareholder_count;
    let question_count = props.questions.len();
    let rows = props
        .questions
        .iter()
        .map(|q| (q.id, q.shareholder_number.clone(), q.question.clone()));

    layout(
        TITLE,
        rsx! {
            h1 { "{TITLE}" }
            {notice_banner(&props.notice)}
            p { class: "success", "Logged in as administrator." }
            form { method: "post", action: "/admin/logout",
                button { r#type: "submit", "Log out" }
            }

            h2 { "Import roster CSV" }
            p { "Registered shareholders: {shareholder_count}" }
            form {
                method: "post",
                action: "/admin/import",
                enctype: "multipart/form-data",
                input { r#type: "file", name: "file", accept: ".csv,text/csv" }
                button { r#type: "submit", "Import" }
            }

            h2 { "Questions ({question_count})" }
            table {
                thead {
                    tr {
                        th { "id" }
                        th { "shareholder_number" }
                        th { "question" }
                    }
                }
                tbody {
                    for (id, number, question) in rows {
                        tr { key: "{id}",
                            td { "{id}" }
                            td { "{number}" }
                            td { class: "question", "{question}" }
                        }
                    }
                }
            }

            h2 { "Export questions" }
            p {
                a { href: "/admin/export", download: EXPORT_FILE_NAME, "Download CSV" }
            }
        },
    )
}

/// Authenticated view: roster import, question table and export link.
pub fn console_page(
    questions: Vec<Question>,
    shareholder_count: i64,
    notice: Option<Notice>,
) -> String {
    render_page(
        console_root,
        ConsoleProps {
            questions,
            shareholder_count,
            notice,
        },
    )
}

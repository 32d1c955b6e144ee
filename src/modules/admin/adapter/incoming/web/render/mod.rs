//! Server-side HTML for the admin panel.

mod pages;
mod widgets;

pub use pages::{dashboard_page, form_page, list_page, login_page, message_page, DashboardCard};
pub use widgets::{
    checkbox_field, date_field, list_item_controls, number_field, select_field, string_list,
    text_field, textarea_field,
};

use crate::shared::html::{document, escape};

const STYLESHEET: &str = "\
:root{--bg:#0c0a09;--panel:#1c1917;--line:#292524;--text:#f5f5f4;--muted:#a8a29e;--accent:#f59e0b;--bad:#f43f5e;--good:#22c55e}\
*{box-sizing:border-box}\
body{margin:0;font-family:system-ui,sans-serif;background:var(--bg);color:var(--text);display:flex;min-height:100vh}\
a{color:var(--accent);text-decoration:none}\
aside{width:220px;background:var(--panel);border-right:1px solid var(--line);padding:1.5rem 1rem}\
aside a{display:block;padding:.5rem .75rem;border-radius:6px;color:var(--muted)}\
aside a.active{background:var(--line);color:var(--text)}\
aside form{margin-top:2rem}\
main{flex:1;padding:2rem;max-width:960px}\
table{width:100%;border-collapse:collapse}\
td,th{text-align:left;padding:.6rem;border-bottom:1px solid var(--line)}\
.muted{color:var(--muted)}\
.badge{display:inline-block;padding:.05rem .5rem;margin-left:.4rem;border-radius:999px;border:1px solid var(--line);font-size:.75rem;color:var(--muted)}\
.badge.hidden{border-color:var(--bad);color:var(--bad)}\
.notice{padding:.75rem 1rem;border-radius:6px;margin-bottom:1rem}\
.notice.success{border:1px solid var(--good);color:var(--good)}\
.notice.error{border:1px solid var(--bad);color:var(--bad)}\
label{display:block;margin:1rem 0 .25rem;color:var(--muted)}\
input,textarea,select{width:100%;padding:.5rem;background:var(--bg);color:var(--text);border:1px solid var(--line);border-radius:6px}\
input[type=checkbox]{width:auto}\
textarea{min-height:6rem}\
button,.button{padding:.45rem .9rem;border-radius:6px;border:1px solid var(--line);background:var(--panel);color:var(--text);cursor:pointer}\
button.primary,.button.primary{background:var(--accent);color:#000;border-color:var(--accent)}\
button.danger{border-color:var(--bad);color:var(--bad)}\
.list-editor ol{padding-left:1.25rem}\
.list-editor li{margin:.25rem 0}\
.list-editor .add{display:flex;gap:.5rem}\
.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:1rem}\
.card{display:block;background:var(--panel);border:1px solid var(--line);border-radius:10px;padding:1rem;color:var(--text)}\
.card strong{display:block;font-size:2rem}\
.offscreen{position:absolute;left:-9999px}\
";

/// Sidebar entries: key, label, href.
const NAV: [(&str, &str, &str); 6] = [
    ("dashboard", "Dashboard", "/admin"),
    ("profile", "Profile", "/admin/profile"),
    ("projects", "Projects", "/admin/projects"),
    ("skills", "Skills", "/admin/skills"),
    ("certificates", "Certificates", "/admin/certificates"),
    ("experience", "Experience", "/admin/experience"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    fn render(&self) -> String {
        let (class, text) = match self {
            Notice::Success(text) => ("success", text),
            Notice::Error(text) => ("error", text),
        };
        format!(
            "<div class=\"notice {}\" role=\"status\">{}</div>",
            class,
            escape(text)
        )
    }
}

/// Signed-in page frame. `active` is the sidebar key to highlight.
pub fn layout(title: &str, active: &str, notice: Option<&Notice>, body: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(key, label, href)| {
            format!(
                "<a href=\"{}\"{}>{}</a>",
                href,
                if *key == active { " class=\"active\"" } else { "" },
                label
            )
        })
        .collect();

    let page = format!(
        "<aside><strong>Portfolio Admin</strong><nav>{}<a href=\"/\" target=\"_blank\">View site</a></nav>\
         <form method=\"post\" action=\"/admin/logout\"><button type=\"submit\">Log out</button></form></aside>\
         <main>{}{}</main>",
        nav,
        notice.map(Notice::render).unwrap_or_default(),
        body
    );

    document(&format!("{} | Admin", title), STYLESHEET, &page)
}

pub(super) fn bare(title: &str, body: &str) -> String {
    document(title, STYLESHEET, &format!("<main>{}</main>", body))
}

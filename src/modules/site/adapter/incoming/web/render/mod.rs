//! Server-side HTML for the public site.

mod landing;
mod project;

pub use landing::landing_page;
pub use project::{not_found_page, project_page};

use chrono::NaiveDate;

use crate::shared::html::escape;

pub(crate) const FALLBACK_NAME: &str = "Portfolio";
pub(crate) const FALLBACK_TITLE: &str = "Data Scientist & Analytics Expert";

const STYLESHEET: &str = "\
:root{--bg:#0c0a09;--panel:#1c1917;--line:#292524;--text:#f5f5f4;--muted:#a8a29e;--accent:#f59e0b}\
*{box-sizing:border-box}\
body{margin:0;font-family:system-ui,sans-serif;background:var(--bg);color:var(--text);line-height:1.6}\
a{color:var(--accent);text-decoration:none}\
nav{position:sticky;top:0;display:flex;gap:1.25rem;padding:1rem 2rem;background:#0c0a09e6;border-bottom:1px solid var(--line)}\
nav a{color:var(--muted)}\
section{max-width:1100px;margin:0 auto;padding:4rem 1.5rem}\
h1{font-size:3rem;margin:.25rem 0}\
h2{font-size:2rem;border-bottom:2px solid var(--accent);display:inline-block}\
.muted{color:var(--muted)}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(300px,1fr));gap:1.25rem}\
.card{background:var(--panel);border:1px solid var(--line);border-radius:12px;padding:1.25rem}\
.badge{display:inline-block;padding:.1rem .6rem;margin:.15rem;border-radius:999px;border:1px solid var(--line);font-size:.8rem;color:var(--muted)}\
.badge.featured{border-color:var(--accent);color:var(--accent)}\
.tabs a{margin-right:.75rem}\
.tabs a.active{font-weight:bold;text-decoration:underline}\
.stats{display:flex;gap:2rem}\
.stats strong{display:block;font-size:2rem;color:var(--accent)}\
.bar{background:var(--line);border-radius:4px;height:6px}\
.bar span{display:block;height:6px;border-radius:4px;background:var(--accent)}\
.timeline li{margin-bottom:1rem}\
.color-amber{border-top:3px solid #f59e0b}.color-blue{border-top:3px solid #3b82f6}\
.color-green{border-top:3px solid #22c55e}.color-purple{border-top:3px solid #a855f7}\
.color-rose{border-top:3px solid #f43f5e}.color-cyan{border-top:3px solid #06b6d4}\
footer{text-align:center;padding:2rem;border-top:1px solid var(--line);color:var(--muted);font-size:.9rem}\
";

pub(crate) fn stylesheet() -> &'static str {
    STYLESHEET
}

/// `<ul>` of escaped items, or nothing for an empty list.
pub(crate) fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let rows: String = items
        .iter()
        .map(|i| format!("<li>{}</li>", escape(i)))
        .collect();
    format!("<ul>{}</ul>", rows)
}

pub(crate) fn badges(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("<span class=\"badge\">{}</span>", escape(i)))
        .collect()
}

pub(crate) fn month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// External link, or nothing when the URL is absent or blank.
pub(crate) fn link(url: Option<&str>, label: &str) -> String {
    url.filter(|u| !u.trim().is_empty())
        .map(|u| {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                escape(u),
                escape(label)
            )
        })
        .unwrap_or_default()
}

use chrono::NaiveDate;

use crate::modules::admin::adapter::incoming::web::form::{pending_key, FormFields};
use crate::shared::html::escape;

pub fn text_field(name: &str, label: &str, value: &str, required: bool) -> String {
    format!(
        "<label for=\"{n}\">{l}</label><input type=\"text\" id=\"{n}\" name=\"{n}\" value=\"{v}\"{r}>",
        n = name,
        l = escape(label),
        v = escape(value),
        r = if required { " required" } else { "" }
    )
}

pub fn textarea_field(name: &str, label: &str, value: &str) -> String {
    format!(
        "<label for=\"{n}\">{l}</label><textarea id=\"{n}\" name=\"{n}\">{v}</textarea>",
        n = name,
        l = escape(label),
        v = escape(value)
    )
}

pub fn number_field(name: &str, label: &str, value: i64) -> String {
    format!(
        "<label for=\"{n}\">{l}</label><input type=\"number\" id=\"{n}\" name=\"{n}\" value=\"{v}\">",
        n = name,
        l = escape(label),
        v = value
    )
}

pub fn date_field(name: &str, label: &str, value: Option<NaiveDate>) -> String {
    format!(
        "<label for=\"{n}\">{l}</label><input type=\"date\" id=\"{n}\" name=\"{n}\" value=\"{v}\">",
        n = name,
        l = escape(label),
        v = value.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
    )
}

pub fn checkbox_field(name: &str, label: &str, checked: bool) -> String {
    format!(
        "<label><input type=\"checkbox\" name=\"{n}\"{c}> {l}</label>",
        n = name,
        l = escape(label),
        c = if checked { " checked" } else { "" }
    )
}

pub fn select_field(name: &str, label: &str, options: &[&str], selected: &str) -> String {
    let options: String = options
        .iter()
        .map(|o| {
            format!(
                "<option value=\"{v}\"{s}>{v}</option>",
                v = escape(o),
                s = if *o == selected { " selected" } else { "" }
            )
        })
        .collect();

    format!(
        "<label for=\"{n}\">{l}</label><select id=\"{n}\" name=\"{n}\">{o}</select>",
        n = name,
        l = escape(label),
        o = options
    )
}

fn edit_button(action: String, label: &str, enabled: bool) -> String {
    format!(
        "<button type=\"submit\" name=\"_action\" value=\"{}\" formnovalidate{}>{}</button>",
        escape(&action),
        if enabled { "" } else { " disabled" },
        label
    )
}

/// Up, down and remove buttons for item `index` of a list of `len`.
pub fn list_item_controls(field: &str, index: usize, len: usize) -> String {
    [
        edit_button(format!("up:{}:{}", field, index), "↑", index > 0),
        edit_button(format!("down:{}:{}", field, index), "↓", index + 1 < len),
        edit_button(format!("remove:{}:{}", field, index), "Remove", true),
    ]
    .concat()
}

/// Ordered list of strings. Every item travels back as a hidden input so
/// the draft survives each button press.
pub fn string_list(field: &str, label: &str, items: &[String], form: &FormFields) -> String {
    let rows: String = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "<li><input type=\"hidden\" name=\"{f}\" value=\"{v}\">{v} {c}</li>",
                f = field,
                v = escape(item),
                c = list_item_controls(field, i, items.len())
            )
        })
        .collect();

    let pending = pending_key(field);

    format!(
        "<fieldset class=\"list-editor\"><legend>{l}</legend><ol>{rows}</ol>\
         <div class=\"add\"><input type=\"text\" name=\"{p}\" value=\"{pv}\" aria-label=\"New {l}\">{b}</div></fieldset>",
        l = escape(label),
        rows = rows,
        p = pending,
        pv = escape(form.get(&pending).unwrap_or_default()),
        b = edit_button(format!("add:{}", field), "Add", true)
    )
}

use uuid::Uuid;

use super::{bare, layout, Notice};
use crate::modules::admin::adapter::incoming::web::resource::ListRow;
use crate::shared::html::escape;

fn row_actions(slug: &str, row: &ListRow, confirming: bool) -> String {
    if confirming {
        return format!(
            "<form method=\"post\" action=\"/admin/{s}/{id}/delete\">\
             <span>Delete this item?</span> <button type=\"submit\" class=\"danger\">Confirm</button> \
             <a class=\"button\" href=\"/admin/{s}\">Cancel</a></form>",
            s = slug,
            id = row.id
        );
    }

    format!(
        "<a href=\"/admin/{s}/{id}\">Edit</a> <a href=\"/admin/{s}?confirm={id}\">Delete</a>",
        s = slug,
        id = row.id
    )
}

pub fn list_page(
    slug: &str,
    singular: &str,
    plural: &str,
    rows: &[ListRow],
    confirm: Option<Uuid>,
    notice: Option<&Notice>,
) -> String {
    let table = if rows.is_empty() {
        format!(
            "<p class=\"muted\">No {} yet.</p>",
            escape(&plural.to_lowercase())
        )
    } else {
        let body: String = rows
            .iter()
            .map(|row| {
                let hidden = if row.hidden {
                    "<span class=\"badge hidden\">Hidden</span>"
                } else {
                    ""
                };
                let badge = row
                    .badge
                    .as_deref()
                    .map(|b| format!("<span class=\"badge\">{}</span>", escape(b)))
                    .unwrap_or_default();

                format!(
                    "<tr><td>{}{}{}</td><td class=\"muted\">{}</td><td>{}</td></tr>",
                    escape(&row.title),
                    badge,
                    hidden,
                    escape(&row.detail),
                    row_actions(slug, row, confirm == Some(row.id))
                )
            })
            .collect();
        format!("<table><tbody>{}</tbody></table>", body)
    };

    let body = format!(
        "<header><h1>{p}</h1><a class=\"button primary\" href=\"/admin/{s}/new\">New {one}</a></header>{t}",
        p = escape(plural),
        s = slug,
        one = escape(singular),
        t = table
    );

    layout(plural, slug, notice, &body)
}

/// New/edit form. The first submit button is an off-screen save so Enter
/// saves instead of pressing the first list button.
pub fn form_page(
    slug: &str,
    heading: &str,
    action: &str,
    fields: &str,
    notice: Option<&Notice>,
) -> String {
    let body = format!(
        "<h1>{h}</h1><form method=\"post\" action=\"{a}\">\
         <button type=\"submit\" name=\"_action\" value=\"save\" class=\"offscreen\" tabindex=\"-1\" aria-hidden=\"true\">Save</button>\
         {f}<p><button type=\"submit\" name=\"_action\" value=\"save\" class=\"primary\">Save</button> \
         <a class=\"button\" href=\"{back}\">Cancel</a></p></form>",
        h = escape(heading),
        a = escape(action),
        f = fields,
        back = if slug == "profile" {
            "/admin".to_string()
        } else {
            format!("/admin/{}", slug)
        }
    );

    layout(heading, slug, notice, &body)
}

pub struct DashboardCard {
    pub label: &'static str,
    pub href: &'static str,
    /// `None` when the count could not be loaded.
    pub count: Option<usize>,
}

pub fn dashboard_page(cards: &[DashboardCard]) -> String {
    let cards: String = cards
        .iter()
        .map(|c| {
            format!(
                "<a class=\"card\" href=\"{}\"><span class=\"muted\">{}</span><strong>{}</strong></a>",
                c.href,
                c.label,
                c.count.map_or_else(|| "n/a".to_string(), |n| n.to_string())
            )
        })
        .collect();

    let body = format!(
        "<h1>Dashboard</h1><div class=\"cards\">{}</div>\
         <h2>Quick actions</h2><ul>\
         <li><a href=\"/admin/profile\">Edit profile</a></li>\
         <li><a href=\"/admin/projects/new\">Add project</a></li>\
         <li><a href=\"/admin/certificates/new\">Add certificate</a></li>\
         <li><a href=\"/admin/experience/new\">Add experience</a></li>\
         <li><a href=\"/admin/skills/new\">Add skill category</a></li></ul>",
        cards
    );

    layout("Dashboard", "dashboard", None, &body)
}

pub fn login_page(email: &str, error: Option<&str>) -> String {
    let notice = error
        .map(|e| Notice::Error(e.to_string()).render())
        .unwrap_or_default();

    bare(
        "Admin login",
        &format!(
            "<h1>Admin login</h1>{}<form method=\"post\" action=\"/admin/login\">\
             <label for=\"email\">Email</label><input type=\"email\" id=\"email\" name=\"email\" value=\"{}\" required>\
             <label for=\"password\">Password</label><input type=\"password\" id=\"password\" name=\"password\" required>\
             <p><button type=\"submit\" class=\"primary\">Sign in</button></p></form>",
            notice,
            escape(email)
        ),
    )
}

/// Signed-in page with only a notice and a way back.
pub fn message_page(title: &str, active: &str, notice: &Notice, back: &str) -> String {
    layout(
        title,
        active,
        Some(notice),
        &format!("<p><a href=\"{}\">Back</a></p>", escape(back)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(hidden: bool) -> ListRow {
        ListRow {
            id: Uuid::nil(),
            title: "Churn".to_string(),
            detail: "Machine Learning".to_string(),
            hidden,
            badge: Some("Featured".to_string()),
        }
    }

    #[test]
    fn hidden_rows_are_marked() {
        let html = list_page("projects", "Project", "Projects", &[row(true)], None, None);
        assert!(html.contains("badge hidden"));
        assert!(html.contains("Featured"));

        let html = list_page("projects", "Project", "Projects", &[row(false)], None, None);
        assert!(!html.contains("badge hidden"));
    }

    #[test]
    fn confirm_shows_delete_form_for_that_row() {
        let html = list_page(
            "projects",
            "Project",
            "Projects",
            &[row(false)],
            Some(Uuid::nil()),
            None,
        );
        assert!(html.contains(&format!("action=\"/admin/projects/{}/delete\"", Uuid::nil())));
        assert!(html.contains(">Confirm</button>"));
        assert!(html.contains("href=\"/admin/projects\">Cancel</a>"));
    }

    #[test]
    fn empty_list_has_placeholder() {
        let html = list_page("skills", "Skill category", "Skill categories", &[], None, None);
        assert!(html.contains("No skill categories yet."));
        assert!(html.contains("href=\"/admin/skills/new\""));
    }

    #[test]
    fn form_page_defaults_to_save() {
        let html = form_page("projects", "New project", "/admin/projects/new", "", None);
        let first_button = html.find("<button type=\"submit\"").unwrap();
        assert!(html[first_button..].starts_with(
            "<button type=\"submit\" name=\"_action\" value=\"save\""
        ));
    }

    #[test]
    fn dashboard_shows_counts() {
        let html = dashboard_page(&[
            DashboardCard {
                label: "Projects",
                href: "/admin/projects",
                count: Some(3),
            },
            DashboardCard {
                label: "Certificates",
                href: "/admin/certificates",
                count: None,
            },
        ]);
        assert!(html.contains("<strong>3</strong>"));
        assert!(html.contains("<strong>n/a</strong>"));
    }

    #[test]
    fn login_page_keeps_email() {
        let html = login_page("a@b.co", Some("Invalid email or password"));
        assert!(html.contains("value=\"a@b.co\""));
        assert!(html.contains("Invalid email or password"));
        assert!(!html.contains("<aside>"));
    }
}

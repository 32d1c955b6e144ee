use super::{badges, bullet_list, link, stylesheet};
use crate::modules::project::application::domain::Project;
use crate::shared::html::{document, escape};

fn titled_list(title: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!("<h3>{}</h3>{}", title, bullet_list(items))
}

/// Expanded view of one project.
pub fn project_page(p: &Project) -> String {
    let description = match p.full_description.as_deref() {
        Some(full) => format!("<p>{}</p>", escape(full)),
        None => format!(
            "<h3>Problem</h3><p>{}</p><h3>Solution</h3><p>{}</p>",
            escape(&p.problem),
            escape(&p.solution)
        ),
    };

    let images: String = p
        .images
        .iter()
        .map(|src| {
            format!(
                "<img src=\"{}\" alt=\"{}\" style=\"max-width:100%;border-radius:8px\">",
                escape(src),
                escape(&p.title)
            )
        })
        .collect();

    let links = [
        link(p.github_url.as_deref(), "Source code"),
        link(p.live_url.as_deref(), "Live demo"),
    ]
    .into_iter()
    .filter(|l| !l.is_empty())
    .collect::<Vec<_>>()
    .join(" · ");

    let body = format!(
        "<nav><a href=\"/#projects\">← Back to projects</a></nav>\
         <section><div>{} <span class=\"badge\">{}</span>{}</div><h1>{}</h1>{}\
         {}<h3>Tech stack</h3><p>{}</p>{}{}{}<p>{}</p></section>",
        escape(&p.icon),
        escape(p.category.as_str()),
        p.duration
            .as_deref()
            .map(|d| format!(" <span class=\"muted\">{}</span>", escape(d)))
            .unwrap_or_default(),
        escape(&p.title),
        images,
        description,
        badges(&p.tech_stack),
        titled_list("Key features", &p.features),
        titled_list("Challenges", &p.challenges),
        titled_list("Results", &p.results),
        links
    );

    document(&p.title, stylesheet(), &body)
}

pub fn not_found_page() -> String {
    document(
        "Not found",
        stylesheet(),
        "<section><h1>404</h1><p>Project not found.</p><p><a href=\"/\">Back home</a></p></section>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::entities::fixtures::project;

    #[test]
    fn falls_back_to_problem_and_solution() {
        let html = project_page(&project());

        assert!(html.contains("<h3>Problem</h3>"));
        assert!(html.contains("Gradient boosted churn model"));
        assert!(html.contains("<h3>Results</h3><ul><li>AUC 0.91</li></ul>"));
        assert!(!html.contains("<h3>Challenges</h3>"));
    }

    #[test]
    fn full_description_replaces_summary() {
        let mut p = project();
        p.full_description = Some("The long story".to_string());

        let html = project_page(&p);
        assert!(html.contains("The long story"));
        assert!(!html.contains("<h3>Problem</h3>"));
    }
}

use chrono::{Datelike, Utc};

use super::{badges, bullet_list, link, month_year, stylesheet, FALLBACK_NAME, FALLBACK_TITLE};
use crate::modules::certificate::application::domain::Certificate;
use crate::modules::experience::application::domain::Experience;
use crate::modules::profile::application::domain::Profile;
use crate::modules::project::application::domain::Project;
use crate::modules::site::application::domain::{CategoryFilter, LandingData};
use crate::modules::skill::application::domain::SkillCategory;
use crate::shared::html::{document, escape};

pub fn landing_page(data: &LandingData, filter: CategoryFilter) -> String {
    let profile = data.profile.as_ref();
    let name = profile.map_or(FALLBACK_NAME, |p| p.name.as_str());

    let body = [
        navigation(),
        hero(profile),
        about(data),
        projects(&data.projects, filter),
        skills(&data.skill_categories),
        certificates(&data.certificates),
        contact(profile),
        footer(name),
    ]
    .concat();

    document(name, stylesheet(), &body)
}

fn navigation() -> String {
    "<nav><a href=\"#hero\">Home</a><a href=\"#about\">About</a>\
     <a href=\"#projects\">Projects</a><a href=\"#skills\">Skills</a>\
     <a href=\"#certificates\">Certificates</a><a href=\"#contact\">Contact</a></nav>"
        .to_string()
}

fn hero(profile: Option<&Profile>) -> String {
    let name = profile.map_or(FALLBACK_NAME, |p| p.name.as_str());
    let title = profile.map_or(FALLBACK_TITLE, |p| p.title.as_str());
    let tagline = profile
        .and_then(|p| p.tagline.as_deref().or(p.short_bio.as_deref()))
        .map(|t| format!("<p class=\"muted\">{}</p>", escape(t)))
        .unwrap_or_default();
    let availability = profile
        .and_then(|p| p.availability.as_deref())
        .map(|a| format!("<span class=\"badge featured\">{}</span>", escape(a)))
        .unwrap_or_default();

    let links = profile
        .map(|p| {
            [
                link(p.resume_url.as_deref(), "Resume"),
                link(p.social_links.github.as_deref(), "GitHub"),
                link(p.social_links.linkedin.as_deref(), "LinkedIn"),
            ]
            .into_iter()
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" · ")
        })
        .unwrap_or_default();

    format!(
        "<section id=\"hero\">{}<h1>{}</h1><h3>{}</h3>{}<p>\
         <a href=\"#projects\">View my work</a> · <a href=\"#contact\">Get in touch</a></p>\
         <p>{}</p></section>",
        availability,
        escape(name),
        escape(title),
        tagline,
        links
    )
}

fn stats(profile: &Profile) -> String {
    format!(
        "<div class=\"stats\"><div><strong>{}</strong>Projects completed</div>\
         <div><strong>{}</strong>Certifications earned</div>\
         <div><strong>{}</strong>Technologies mastered</div></div>",
        profile.stats.projects_completed,
        profile.stats.certifications_earned,
        profile.stats.technologies_mastered
    )
}

fn about(data: &LandingData) -> String {
    let Some(profile) = data.profile.as_ref() else {
        return format!(
            "<section id=\"about\"><h2>About</h2>\
             <p class=\"muted\">Profile details are coming soon.</p>{}</section>",
            timeline(&data.experiences)
        );
    };

    let bio = profile
        .bio
        .as_deref()
        .map(|b| format!("<p>{}</p>", escape(b)))
        .unwrap_or_default();

    let education = if profile.education.is_empty() {
        String::new()
    } else {
        let e = &profile.education;
        format!(
            "<div class=\"card\"><h3>Education</h3><strong>{}</strong><p>{}</p>\
             <p class=\"muted\">{}</p>{}</div>",
            escape(e.degree.as_deref().unwrap_or_default()),
            escape(e.institution.as_deref().unwrap_or_default()),
            escape(e.year.as_deref().unwrap_or_default()),
            e.description
                .as_deref()
                .map(|d| format!("<p>{}</p>", escape(d)))
                .unwrap_or_default()
        )
    };

    let coursework = if profile.coursework.is_empty() {
        String::new()
    } else {
        format!(
            "<h3>Relevant coursework</h3><p>{}</p>",
            badges(&profile.coursework)
        )
    };

    let strengths = if profile.strengths.is_empty() {
        String::new()
    } else {
        format!("<h3>Strengths</h3>{}", bullet_list(&profile.strengths))
    };

    let now = data
        .headline_experience()
        .map(|e| {
            format!(
                "<p class=\"muted\">Currently: {} at {}</p>",
                escape(&e.role),
                escape(&e.company)
            )
        })
        .unwrap_or_default();

    format!(
        "<section id=\"about\"><h2>About</h2>{}{}{}{}{}{}{}</section>",
        bio,
        now,
        stats(profile),
        education,
        coursework,
        strengths,
        timeline(&data.experiences)
    )
}

fn date_range(e: &Experience) -> String {
    let start = e.start_date.map(month_year).unwrap_or_default();
    let end = if e.is_current {
        "Present".to_string()
    } else {
        e.end_date.map(month_year).unwrap_or_default()
    };

    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start,
        (true, false) => end,
        (false, false) => format!("{} – {}", start, end),
    }
}

/// Omitted entirely when there is no experience to show.
fn timeline(experiences: &[Experience]) -> String {
    if experiences.is_empty() {
        return String::new();
    }

    let items: String = experiences
        .iter()
        .map(|e| {
            format!(
                "<li><strong>{}</strong> · {}{}<div class=\"muted\">{}</div>{}{}{}</li>",
                escape(&e.role),
                escape(&e.company),
                e.location
                    .as_deref()
                    .map(|l| format!(" · {}", escape(l)))
                    .unwrap_or_default(),
                escape(&date_range(e)),
                e.description
                    .as_deref()
                    .map(|d| format!("<p>{}</p>", escape(d)))
                    .unwrap_or_default(),
                bullet_list(&e.achievements),
                badges(&e.technologies)
            )
        })
        .collect();

    format!("<h3>Experience</h3><ul class=\"timeline\">{}</ul>", items)
}

fn projects(projects: &[Project], filter: CategoryFilter) -> String {
    if projects.is_empty() {
        return "<section id=\"projects\"><h2>Projects</h2>\
                <p class=\"muted\">Projects will appear here soon.</p></section>"
            .to_string();
    }

    let selected = filter.selected();
    let all_tab = format!(
        "<a href=\"/#projects\"{}>All ({})</a>",
        if selected.is_none() { " class=\"active\"" } else { "" },
        projects.len()
    );
    let tabs: String = CategoryFilter::tabs(projects)
        .into_iter()
        .map(|(category, count)| {
            format!(
                "<a href=\"/?category={}#projects\"{}>{} ({})</a>",
                category.as_str().replace(' ', "%20"),
                if selected == Some(category) {
                    " class=\"active\""
                } else {
                    ""
                },
                escape(category.as_str()),
                count
            )
        })
        .collect();

    let shown = filter.apply(projects);
    let cards: String = if shown.is_empty() {
        "<p class=\"muted\">No projects found in this category.</p>".to_string()
    } else {
        shown.into_iter().map(project_card).collect()
    };

    format!(
        "<section id=\"projects\"><h2>Projects</h2><div class=\"tabs\">{}{}</div>\
         <div class=\"grid\">{}</div></section>",
        all_tab, tabs, cards
    )
}

fn project_card(p: &Project) -> String {
    format!(
        "<article class=\"card\"><div>{} <span class=\"badge\">{}</span>{}</div>\
         <h3><a href=\"/projects/{}\">{}</a></h3><p>{}</p><p class=\"muted\">{}</p>{}</article>",
        escape(&p.icon),
        escape(p.category.as_str()),
        if p.featured {
            "<span class=\"badge featured\">Featured</span>"
        } else {
            ""
        },
        p.id,
        escape(&p.title),
        escape(&p.problem),
        escape(&p.solution),
        badges(&p.tech_stack)
    )
}

fn skills(categories: &[SkillCategory]) -> String {
    if categories.is_empty() {
        return "<section id=\"skills\"><h2>Skills</h2>\
                <p class=\"muted\">Skills will appear here soon.</p></section>"
            .to_string();
    }

    let cards: String = categories
        .iter()
        .map(|c| {
            let rows: String = c
                .skills
                .iter()
                .map(|s| {
                    format!(
                        "<div>{} <span class=\"muted\">{}%</span>\
                         <div class=\"bar\"><span style=\"width:{}%\"></span></div></div>",
                        escape(&s.name),
                        s.level,
                        s.level
                    )
                })
                .collect();

            format!(
                "<article class=\"card\"><h3>{} {}</h3>{}{}</article>",
                escape(&c.icon),
                escape(&c.title),
                c.description
                    .as_deref()
                    .map(|d| format!("<p class=\"muted\">{}</p>", escape(d)))
                    .unwrap_or_default(),
                rows
            )
        })
        .collect();

    format!(
        "<section id=\"skills\"><h2>Skills</h2><div class=\"grid\">{}</div></section>",
        cards
    )
}

fn certificates(certificates: &[Certificate]) -> String {
    if certificates.is_empty() {
        return "<section id=\"certificates\"><h2>Certificates</h2>\
                <p class=\"muted\">Certificates will appear here soon.</p></section>"
            .to_string();
    }

    let cards: String = certificates
        .iter()
        .map(|c| {
            let color: String = c
                .color
                .chars()
                .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '-')
                .collect();

            format!(
                "<article class=\"card color-{}\"><h3>{}</h3><p class=\"muted\">{}{}</p>{}{}<p>{}{}</p></article>",
                color,
                escape(&c.title),
                escape(&c.platform),
                c.issue_date
                    .map(|d| format!(" · {}", month_year(d)))
                    .unwrap_or_default(),
                c.description
                    .as_deref()
                    .map(|d| format!("<p>{}</p>", escape(d)))
                    .unwrap_or_default(),
                badges(&c.skills),
                link(c.credential_url.as_deref(), "Verify credential"),
                c.certificate_file
                    .as_deref()
                    .map(|f| format!(" · {}", link(Some(f), "View certificate")))
                    .unwrap_or_default()
            )
        })
        .collect();

    format!(
        "<section id=\"certificates\"><h2>Certificates</h2><div class=\"grid\">{}</div></section>",
        cards
    )
}

fn contact(profile: Option<&Profile>) -> String {
    let Some(p) = profile else {
        return "<section id=\"contact\"><h2>Contact</h2>\
                <p class=\"muted\">Contact details are coming soon.</p></section>"
            .to_string();
    };

    let email = p.social_links.email.as_deref().or(p.email.as_deref());
    let rows: String = [
        email.map(|e| {
            format!(
                "<li>Email: <a href=\"mailto:{}\">{}</a></li>",
                escape(e),
                escape(e)
            )
        }),
        p.phone
            .as_deref()
            .map(|v| format!("<li>Phone: {}</li>", escape(v))),
        p.location
            .as_deref()
            .map(|v| format!("<li>Location: {}</li>", escape(v))),
        p.availability
            .as_deref()
            .map(|v| format!("<li>Availability: {}</li>", escape(v))),
    ]
    .into_iter()
    .flatten()
    .collect();

    let links = [
        link(p.social_links.github.as_deref(), "GitHub"),
        link(p.social_links.linkedin.as_deref(), "LinkedIn"),
        link(p.social_links.twitter.as_deref(), "Twitter"),
        link(p.social_links.website.as_deref(), "Website"),
    ]
    .into_iter()
    .filter(|l| !l.is_empty())
    .collect::<Vec<_>>()
    .join(" · ");

    format!(
        "<section id=\"contact\"><h2>Contact</h2><p>Let's work together.</p><ul>{}</ul><p>{}</p></section>",
        rows, links
    )
}

fn footer(name: &str) -> String {
    format!(
        "<footer>© {} {}. All rights reserved.</footer>",
        Utc::now().year(),
        escape(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::experience::application::domain::entities::fixtures::experience;
    use crate::modules::profile::application::domain::entities::fixtures::profile;
    use crate::modules::project::application::domain::entities::fixtures::project;
    use crate::modules::project::application::domain::ProjectCategory;
    use crate::modules::skill::application::domain::entities::fixtures::skill_category;
    use chrono::NaiveDate;

    #[test]
    fn empty_data_renders_placeholders() {
        let html = landing_page(&LandingData::empty(), CategoryFilter::default());

        assert!(html.contains("<title>Portfolio</title>"));
        assert!(html.contains(FALLBACK_TITLE.replace('&', "&amp;").as_str()));
        assert!(html.contains("Projects will appear here soon."));
        assert!(html.contains("Contact details are coming soon."));
        assert!(html.contains("Portfolio. All rights reserved."));
    }

    #[test]
    fn sections_render_profile_and_records() {
        let data = LandingData {
            profile: Some(profile()),
            projects: vec![project()],
            skill_categories: vec![skill_category()],
            experiences: vec![experience()],
            ..LandingData::empty()
        };
        let html = landing_page(&data, CategoryFilter::default());

        assert!(html.contains("<h1>Jane Doe</h1>"));
        assert!(html.contains("Churn Prediction"));
        assert!(html.contains(&format!("/projects/{}", data.projects[0].id)));
        assert!(html.contains("id=\"skills\""));
        assert!(html.contains("mailto:jane@example.com"));
        assert!(html.contains("BSc Statistics"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut p = project();
        p.title = "<script>alert(1)</script>".to_string();
        let data = LandingData {
            projects: vec![p],
            ..LandingData::empty()
        };

        let html = landing_page(&data, CategoryFilter::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn category_filter_hides_other_projects() {
        let mut web = project();
        web.title = "Storefront".to_string();
        web.category = ProjectCategory::WebDevelopment;
        let data = LandingData {
            projects: vec![project(), web],
            ..LandingData::empty()
        };

        let html = landing_page(&data, CategoryFilter::parse(Some("Web Development")));
        assert!(html.contains("Storefront"));
        assert!(!html.contains("Churn Prediction"));
        assert!(html.contains("All (2)"));
    }

    #[test]
    fn current_position_shows_present() {
        let e = Experience {
            is_current: true,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 15),
            end_date: None,
            ..experience()
        };
        assert_eq!(date_range(&e), "Jan 2023 – Present");
    }
}

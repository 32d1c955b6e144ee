//! The single profile edit page. Saving upserts.

use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::admin::adapter::incoming::web::form::{
    pending_key, FormAction, FormFields, ListAction,
};
use crate::modules::admin::adapter::incoming::web::render::{
    form_page, message_page, number_field, string_list, text_field, textarea_field, Notice,
};
use crate::modules::admin::adapter::incoming::web::resource::DraftError;
use crate::modules::profile::application::domain::{
    Education, ProfileInput, ProfilePatch, ProfileStats, SocialLinks,
};
use crate::modules::profile::application::ports::incoming::use_cases::UpsertProfileError;
use crate::shared::html::{html_status, see_other};
use crate::shared::list_editor::{DuplicatePolicy, ListEditor};
use crate::shared::validation::ValidationError;
use crate::AppState;

const PROFILE_PATH: &str = "/admin/profile";

fn count(form: &FormFields, name: &'static str) -> Result<u32, ValidationError> {
    let value = form.int(name)?;
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: name,
        min: 0,
        max: u32::MAX as i64,
    })
}

fn parse(form: &FormFields) -> Result<ProfileInput, ValidationError> {
    Ok(ProfileInput {
        name: form.text("name"),
        title: form.text("title"),
        tagline: form.optional("tagline"),
        bio: form.optional("bio"),
        short_bio: form.optional("shortBio"),
        email: form.optional("email"),
        phone: form.optional("phone"),
        location: form.optional("location"),
        availability: form.optional("availability"),
        avatar_url: form.optional("avatarUrl"),
        profile_image: form.optional("profileImage"),
        resume_url: form.optional("resumeUrl"),
        social_links: SocialLinks {
            github: form.optional("social.github"),
            linkedin: form.optional("social.linkedin"),
            twitter: form.optional("social.twitter"),
            website: form.optional("social.website"),
            email: form.optional("social.email"),
        },
        education: Education {
            degree: form.optional("education.degree"),
            institution: form.optional("education.institution"),
            year: form.optional("education.year"),
            description: form.optional("education.description"),
        },
        coursework: form.list("coursework"),
        strengths: form.list("strengths"),
        stats: ProfileStats {
            projects_completed: count(form, "stats.projectsCompleted")?,
            certifications_earned: count(form, "stats.certificationsEarned")?,
            technologies_mastered: count(form, "stats.technologiesMastered")?,
        },
    })
}

fn edit_list(
    input: &mut ProfileInput,
    action: &ListAction,
    form: &FormFields,
) -> Result<(), DraftError> {
    let items = match action.field.as_str() {
        "coursework" => &mut input.coursework,
        "strengths" => &mut input.strengths,
        other => return Err(DraftError::UnknownList(other.to_string())),
    };

    ListEditor::new(items, DuplicatePolicy::Reject)
        .apply(action.op, || form.text(&pending_key(&action.field)))?;
    Ok(())
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

fn fields(input: &ProfileInput, form: &FormFields) -> String {
    let stats = input.stats;

    [
        "<h2>Basics</h2>".to_string(),
        text_field("name", "Name", &input.name, true),
        text_field("title", "Title", &input.title, true),
        text_field("tagline", "Tagline", opt(&input.tagline), false),
        textarea_field("shortBio", "Short bio", opt(&input.short_bio)),
        textarea_field("bio", "Bio", opt(&input.bio)),
        "<h2>Contact</h2>".to_string(),
        text_field("email", "Email", opt(&input.email), false),
        text_field("phone", "Phone", opt(&input.phone), false),
        text_field("location", "Location", opt(&input.location), false),
        text_field("availability", "Availability", opt(&input.availability), false),
        "<h2>Media</h2>".to_string(),
        text_field("avatarUrl", "Avatar URL", opt(&input.avatar_url), false),
        text_field("profileImage", "Profile image URL", opt(&input.profile_image), false),
        text_field("resumeUrl", "Resume URL", opt(&input.resume_url), false),
        "<h2>Social links</h2>".to_string(),
        text_field("social.github", "GitHub", opt(&input.social_links.github), false),
        text_field("social.linkedin", "LinkedIn", opt(&input.social_links.linkedin), false),
        text_field("social.twitter", "Twitter", opt(&input.social_links.twitter), false),
        text_field("social.website", "Website", opt(&input.social_links.website), false),
        text_field("social.email", "Public email", opt(&input.social_links.email), false),
        "<h2>Education</h2>".to_string(),
        text_field("education.degree", "Degree", opt(&input.education.degree), false),
        text_field(
            "education.institution",
            "Institution",
            opt(&input.education.institution),
            false,
        ),
        text_field("education.year", "Year", opt(&input.education.year), false),
        textarea_field(
            "education.description",
            "Description",
            opt(&input.education.description),
        ),
        string_list("coursework", "Coursework", &input.coursework, form),
        string_list("strengths", "Strengths", &input.strengths, form),
        "<h2>Stats</h2>".to_string(),
        number_field(
            "stats.projectsCompleted",
            "Projects completed",
            stats.projects_completed.into(),
        ),
        number_field(
            "stats.certificationsEarned",
            "Certifications earned",
            stats.certifications_earned.into(),
        ),
        number_field(
            "stats.technologiesMastered",
            "Technologies mastered",
            stats.technologies_mastered.into(),
        ),
    ]
    .concat()
}

fn render(
    status: StatusCode,
    input: &ProfileInput,
    form: &FormFields,
    notice: Option<Notice>,
) -> HttpResponse {
    html_status(
        status,
        form_page(
            "profile",
            "Profile",
            PROFILE_PATH,
            &fields(input, form),
            notice.as_ref(),
        ),
    )
}

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    notice: Option<String>,
}

#[get("/admin/profile")]
pub async fn profile_page_handler(
    _session: AdminSession,
    query: web::Query<ProfileQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.get.execute().await {
        Ok(stored) => {
            let draft = stored.as_ref().map(ProfileInput::from).unwrap_or_default();
            let notice = (query.notice.as_deref() == Some("updated"))
                .then(|| Notice::Success("Profile updated successfully".to_string()));
            render(StatusCode::OK, &draft, &FormFields::default(), notice)
        }
        Err(e) => {
            error!(error = %e, "Failed to load profile");
            html_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                message_page(
                    "Profile",
                    "profile",
                    &Notice::Error("Failed to fetch profile".to_string()),
                    "/admin",
                ),
            )
        }
    }
}

#[post("/admin/profile")]
pub async fn profile_submit_handler(
    _session: AdminSession,
    form: web::Form<Vec<(String, String)>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = FormFields::new(form.into_inner());

    let mut draft = match parse(&form) {
        Ok(draft) => draft,
        Err(e) => {
            warn!(error = %e, "Unreadable profile form");
            return html_status(
                StatusCode::BAD_REQUEST,
                message_page("Profile", "profile", &Notice::Error(e.to_string()), PROFILE_PATH),
            );
        }
    };

    if let FormAction::Edit(action) = form.action() {
        return match edit_list(&mut draft, &action, &form) {
            Ok(()) => render(
                StatusCode::OK,
                &draft,
                &form.without_pending(&action.field),
                None,
            ),
            Err(e) => render(
                StatusCode::OK,
                &draft,
                &form,
                Some(Notice::Error(e.to_string())),
            ),
        };
    }

    match data
        .profile
        .upsert
        .execute(ProfilePatch::from(draft.clone()))
        .await
    {
        Ok(_) => {
            info!("Profile saved from admin");
            see_other(&format!("{}?notice=updated", PROFILE_PATH))
        }
        Err(UpsertProfileError::Validation(e)) => render(
            StatusCode::BAD_REQUEST,
            &draft,
            &form,
            Some(Notice::Error(e.to_string())),
        ),
        Err(UpsertProfileError::RepositoryError(e)) => {
            error!(error = %e, "Failed to save profile");
            render(
                StatusCode::INTERNAL_SERVER_ERROR,
                &draft,
                &form,
                Some(Notice::Error("Failed to update profile".to_string())),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::application::domain::entities::fixtures::{profile, profile_input};
    use crate::modules::profile::application::domain::Profile;
    use crate::modules::profile::application::ports::incoming::use_cases::{
        GetProfileError, GetProfileUseCase, UpsertProfileUseCase,
    };
    use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::shared::list_editor::ListOp;
    use crate::tests::support::auth_helper::{session, token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct Stored(Option<Profile>);

    #[async_trait]
    impl GetProfileUseCase for Stored {
        async fn execute(&self) -> Result<Option<Profile>, GetProfileError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct RecordingUpsert {
        seen: Mutex<Vec<ProfilePatch>>,
    }

    #[async_trait]
    impl UpsertProfileUseCase for RecordingUpsert {
        async fn execute(&self, patch: ProfilePatch) -> Result<Profile, UpsertProfileError> {
            let input = patch.clone().apply_to(None).validate()?;
            self.seen.lock().unwrap().push(patch);
            let mut saved = profile();
            saved.name = input.name;
            Ok(saved)
        }
    }

    fn use_cases(stored: Option<Profile>, upsert: Arc<RecordingUpsert>) -> ProfileUseCases {
        ProfileUseCases {
            get: Arc::new(Stored(stored)),
            upsert,
        }
    }

    fn form() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "Jane Doe"),
            ("title", "Data Scientist"),
            ("email", ""),
            ("social.github", "https://github.com/janedoe"),
            ("education.degree", "BSc Statistics"),
            ("coursework", "Statistics"),
            ("stats.projectsCompleted", "12"),
            ("stats.certificationsEarned", ""),
            ("_action", "save"),
        ]
    }

    #[actix_web::test]
    async fn test_page_prefills_stored_profile() {
        let state = TestAppStateBuilder::default()
            .with_profile(use_cases(Some(profile()), Arc::default()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(profile_page_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/profile?notice=updated")
            .cookie(session())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("value=\"Jane Doe\""));
        assert!(body.contains("name=\"coursework\" value=\"Machine Learning\""));
        assert!(body.contains("Profile updated successfully"));
    }

    #[actix_web::test]
    async fn test_page_shows_large_stats_unchanged() {
        let mut stored = profile();
        stored.stats.projects_completed = u32::MAX;
        let state = TestAppStateBuilder::default()
            .with_profile(use_cases(Some(stored), Arc::default()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(profile_page_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/profile")
            .cookie(session())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("name=\"stats.projectsCompleted\" value=\"4294967295\""));
    }

    #[actix_web::test]
    async fn test_page_without_profile_is_blank() {
        let state = TestAppStateBuilder::default()
            .with_profile(use_cases(None, Arc::default()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(profile_page_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/profile")
            .cookie(session())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_save_upserts_and_redirects() {
        let upsert = Arc::new(RecordingUpsert::default());
        let state = TestAppStateBuilder::default()
            .with_profile(use_cases(None, upsert.clone()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(profile_submit_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/profile")
            .cookie(session())
            .set_form(form())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get("Location").unwrap(),
            "/admin/profile?notice=updated"
        );

        let seen = upsert.seen.lock().unwrap();
        let stats = seen[0].stats.unwrap();
        assert_eq!(stats.projects_completed, 12);
        assert_eq!(stats.certifications_earned, 0);
        assert_eq!(seen[0].coursework, Some(vec!["Statistics".to_string()]));
    }

    #[actix_web::test]
    async fn test_missing_title_rerenders_with_draft() {
        let state = TestAppStateBuilder::default()
            .with_profile(use_cases(None, Arc::default()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(profile_submit_handler),
        )
        .await;

        let mut f = form();
        f[1] = ("title", "");

        let req = test::TestRequest::post()
            .uri("/admin/profile")
            .cookie(session())
            .set_form(f)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("title is required"));
        assert!(body.contains("value=\"Jane Doe\""));
    }

    #[::core::prelude::v1::test]
    fn strengths_reject_duplicates() {
        let mut input = profile_input();
        let f = FormFields::new(vec![(
            "strengths__new".to_string(),
            "Storytelling".to_string(),
        )]);
        let action = ListAction {
            field: "strengths".to_string(),
            op: ListOp::Add,
        };

        assert!(edit_list(&mut input, &action, &f).is_err());
        assert_eq!(input.strengths, vec!["Storytelling"]);
    }

    #[::core::prelude::v1::test]
    fn negative_stat_is_rejected() {
        let f = FormFields::new(vec![(
            "stats.projectsCompleted".to_string(),
            "-1".to_string(),
        )]);
        assert!(parse(&f).is_err());
    }
}

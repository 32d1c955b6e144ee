//! List, new, edit and delete pages for every [`AdminResource`].

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::admin::adapter::incoming::web::form::{FormAction, FormFields};
use crate::modules::admin::adapter::incoming::web::render::{
    form_page, list_page, message_page, Notice,
};
use crate::modules::admin::adapter::incoming::web::resource::{AdminResource, SubmitError};
use crate::shared::html::{html_response, html_status, see_other};
use crate::AppState;

/// What a redirect back to the list page announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Created,
    Updated,
    Deleted,
}

impl Outcome {
    fn as_str(&self) -> &'static str {
        match self {
            Outcome::Created => "created",
            Outcome::Updated => "updated",
            Outcome::Deleted => "deleted",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        [Outcome::Created, Outcome::Updated, Outcome::Deleted]
            .into_iter()
            .find(|o| o.as_str() == raw)
    }

    fn message(&self, singular: &str) -> String {
        format!("{} {} successfully", singular, self.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    confirm: Option<String>,
    notice: Option<String>,
}

fn list_url<R: AdminResource>() -> String {
    format!("/admin/{}", R::SLUG)
}

fn not_found<R: AdminResource>() -> HttpResponse {
    html_status(
        StatusCode::NOT_FOUND,
        message_page(
            "Not found",
            R::SLUG,
            &Notice::Error(format!("{} not found", R::SINGULAR)),
            &list_url::<R>(),
        ),
    )
}

fn store_failure<R: AdminResource>(message: String) -> HttpResponse {
    html_status(
        StatusCode::INTERNAL_SERVER_ERROR,
        message_page(R::PLURAL, R::SLUG, &Notice::Error(message), &list_url::<R>()),
    )
}

fn render_form<R: AdminResource>(
    status: StatusCode,
    id: Option<Uuid>,
    draft: &R::Input,
    form: &FormFields,
    notice: Option<Notice>,
) -> HttpResponse {
    let singular = R::SINGULAR.to_lowercase();
    let (heading, action) = match id {
        None => (
            format!("New {}", singular),
            format!("/admin/{}/new", R::SLUG),
        ),
        Some(id) => (
            format!("Edit {}", singular),
            format!("/admin/{}/{}", R::SLUG, id),
        ),
    };

    html_status(
        status,
        form_page(
            R::SLUG,
            &heading,
            &action,
            &R::fields(draft, form),
            notice.as_ref(),
        ),
    )
}

pub async fn list_page_handler<R: AdminResource>(
    _session: AdminSession,
    query: web::Query<ListQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let notice = query
        .notice
        .as_deref()
        .and_then(Outcome::parse)
        .map(|o| Notice::Success(o.message(R::SINGULAR)));
    let confirm = query
        .confirm
        .as_deref()
        .and_then(|raw| Uuid::parse_str(raw).ok());

    match R::from_state(&data).list().await {
        Ok(records) => {
            let rows: Vec<_> = records.iter().map(R::row).collect();
            html_response(list_page(
                R::SLUG,
                R::SINGULAR,
                R::PLURAL,
                &rows,
                confirm,
                notice.as_ref(),
            ))
        }
        Err(e) => {
            error!(error = %e, resource = R::SLUG, "Failed to load admin list");
            store_failure::<R>(format!("Failed to fetch {}", R::PLURAL.to_lowercase()))
        }
    }
}

pub async fn new_page_handler<R: AdminResource>(_session: AdminSession) -> HttpResponse {
    render_form::<R>(
        StatusCode::OK,
        None,
        &R::blank(),
        &FormFields::default(),
        None,
    )
}

pub async fn edit_page_handler<R: AdminResource>(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return not_found::<R>();
    };

    match R::from_state(&data).load(id).await {
        Ok(draft) => render_form::<R>(StatusCode::OK, Some(id), &draft, &FormFields::default(), None),
        Err(SubmitError::NotFound) => not_found::<R>(),
        Err(e) => {
            error!(error = %e, %id, resource = R::SLUG, "Failed to load admin record");
            store_failure::<R>(format!("Failed to fetch {}", R::SINGULAR.to_lowercase()))
        }
    }
}

pub async fn create_submit_handler<R: AdminResource>(
    _session: AdminSession,
    form: web::Form<Vec<(String, String)>>,
    data: web::Data<AppState>,
) -> HttpResponse {
    submit(R::from_state(&data), None, FormFields::new(form.into_inner())).await
}

pub async fn update_submit_handler<R: AdminResource>(
    _session: AdminSession,
    path: web::Path<String>,
    form: web::Form<Vec<(String, String)>>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return not_found::<R>();
    };

    submit(R::from_state(&data), Some(id), FormFields::new(form.into_inner())).await
}

/// A list button re-renders the draft; Save writes it and redirects.
async fn submit<R: AdminResource>(resource: R, id: Option<Uuid>, form: FormFields) -> HttpResponse {
    let mut draft = match R::parse(&form) {
        Ok(draft) => draft,
        Err(e) => {
            warn!(error = %e, resource = R::SLUG, "Unreadable admin form");
            return html_status(
                StatusCode::BAD_REQUEST,
                message_page(
                    R::PLURAL,
                    R::SLUG,
                    &Notice::Error(e.to_string()),
                    &list_url::<R>(),
                ),
            );
        }
    };

    if let FormAction::Edit(action) = form.action() {
        return match R::edit_list(&mut draft, &action, &form) {
            Ok(()) => render_form::<R>(
                StatusCode::OK,
                id,
                &draft,
                &form.without_pending(&action.field),
                None,
            ),
            Err(e) => render_form::<R>(
                StatusCode::OK,
                id,
                &draft,
                &form,
                Some(Notice::Error(e.to_string())),
            ),
        };
    }

    let (result, outcome, verb) = match id {
        None => (resource.create(draft.clone()).await, Outcome::Created, "create"),
        Some(id) => (
            resource.update(id, draft.clone()).await,
            Outcome::Updated,
            "update",
        ),
    };

    match result {
        Ok(()) => {
            info!(resource = R::SLUG, outcome = outcome.as_str(), "Admin save");
            see_other(&format!("{}?notice={}", list_url::<R>(), outcome.as_str()))
        }
        Err(SubmitError::NotFound) => not_found::<R>(),
        Err(SubmitError::Invalid(message)) => render_form::<R>(
            StatusCode::BAD_REQUEST,
            id,
            &draft,
            &form,
            Some(Notice::Error(message)),
        ),
        Err(SubmitError::Failed(e)) => {
            error!(error = %e, resource = R::SLUG, "Admin save failed");
            render_form::<R>(
                StatusCode::INTERNAL_SERVER_ERROR,
                id,
                &draft,
                &form,
                Some(Notice::Error(format!(
                    "Failed to {} {}",
                    verb,
                    R::SINGULAR.to_lowercase()
                ))),
            )
        }
    }
}

pub async fn delete_submit_handler<R: AdminResource>(
    _session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return not_found::<R>();
    };

    match R::from_state(&data).delete(id).await {
        Ok(()) => {
            info!(resource = R::SLUG, %id, "Admin delete");
            see_other(&format!(
                "{}?notice={}",
                list_url::<R>(),
                Outcome::Deleted.as_str()
            ))
        }
        Err(SubmitError::NotFound) => not_found::<R>(),
        Err(e) => {
            error!(error = %e, %id, resource = R::SLUG, "Admin delete failed");
            store_failure::<R>(format!("Failed to delete {}", R::SINGULAR.to_lowercase()))
        }
    }
}

/// Register the pages of one resource under `/admin/<slug>`.
pub fn configure<R: AdminResource>(cfg: &mut web::ServiceConfig) {
    let base = list_url::<R>();

    cfg.service(web::resource(base.clone()).route(web::get().to(list_page_handler::<R>)))
        .service(
            web::resource(format!("{}/new", base))
                .route(web::get().to(new_page_handler::<R>))
                .route(web::post().to(create_submit_handler::<R>)),
        )
        .service(
            web::resource(format!("{}/{{id}}", base))
                .route(web::get().to(edit_page_handler::<R>))
                .route(web::post().to(update_submit_handler::<R>)),
        )
        .service(
            web::resource(format!("{}/{{id}}/delete", base))
                .route(web::post().to(delete_submit_handler::<R>)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::admin::adapter::incoming::web::resources::{ExperienceAdmin, ProjectAdmin};
    use crate::modules::experience::application::domain::entities::fixtures::experience;
    use crate::modules::experience::application::domain::Experience;
    use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
    use crate::modules::experience::application::ports::incoming::use_cases::{
        ListExperiencesError, ListExperiencesUseCase,
    };
    use crate::modules::project::application::domain::entities::fixtures::project;
    use crate::modules::project::application::domain::{Project, ProjectInput, ProjectPatch};
    use crate::modules::project::application::ports::incoming::use_cases::{
        CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
        GetProjectError, GetProjectUseCase, ListProjectsError, ListProjectsUseCase,
        UpdateProjectError, UpdateProjectUseCase,
    };
    use crate::modules::project::application::project_use_cases::ProjectUseCases;
    use crate::shared::listing::ListScope;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{session, token_provider_data};
    use crate::tests::support::stubs::{stub_experience_use_cases, stub_project_use_cases};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    //
    // Mocks
    //

    struct ListOf(Vec<Project>);

    #[async_trait]
    impl ListProjectsUseCase for ListOf {
        async fn execute(&self, scope: ListScope) -> Result<Vec<Project>, ListProjectsError> {
            assert_eq!(scope, ListScope::All);
            Ok(self.0.clone())
        }
    }

    struct GetOne(Option<Project>);

    #[async_trait]
    impl GetProjectUseCase for GetOne {
        async fn execute(&self, _id: Uuid) -> Result<Project, GetProjectError> {
            self.0.clone().ok_or(GetProjectError::NotFound)
        }
    }

    /// Validates like the real service and records what it was given.
    #[derive(Default)]
    struct RecordingCreate {
        seen: Mutex<Vec<ProjectInput>>,
        fail: bool,
    }

    #[async_trait]
    impl CreateProjectUseCase for RecordingCreate {
        async fn execute(&self, input: ProjectInput) -> Result<Project, CreateProjectError> {
            let input = input.validate()?;
            self.seen.lock().unwrap().push(input);
            if self.fail {
                return Err(CreateProjectError::RepositoryError("db down".to_string()));
            }
            Ok(project())
        }
    }

    #[derive(Default)]
    struct RecordingUpdate {
        seen: Mutex<Vec<(Uuid, ProjectPatch)>>,
    }

    #[async_trait]
    impl UpdateProjectUseCase for RecordingUpdate {
        async fn execute(
            &self,
            id: Uuid,
            patch: ProjectPatch,
        ) -> Result<Project, UpdateProjectError> {
            self.seen.lock().unwrap().push((id, patch));
            Ok(project())
        }
    }

    struct DeleteResult(Result<(), DeleteProjectError>);

    #[async_trait]
    impl DeleteProjectUseCase for DeleteResult {
        async fn execute(&self, _id: Uuid) -> Result<(), DeleteProjectError> {
            self.0.clone()
        }
    }

    struct ExperienceList(Vec<Experience>);

    #[async_trait]
    impl ListExperiencesUseCase for ExperienceList {
        async fn execute(
            &self,
            _scope: ListScope,
        ) -> Result<Vec<Experience>, ListExperiencesError> {
            Ok(self.0.clone())
        }
    }

    fn app_config(project: ProjectUseCases) -> impl FnOnce(&mut web::ServiceConfig) {
        move |cfg| {
            cfg.app_data(
                TestAppStateBuilder::default()
                    .with_project(project)
                    .build(),
            )
            .app_data(token_provider_data());
            configure::<ProjectAdmin>(cfg);
        }
    }

    fn valid_form() -> Vec<(&'static str, &'static str)> {
        vec![
            ("title", "Churn"),
            ("icon", ""),
            ("category", "Machine Learning"),
            ("problem", "p"),
            ("solution", "s"),
            ("techStack", "Python"),
            ("isVisible", "on"),
            ("_action", "save"),
        ]
    }

    async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
        String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
    }

    //
    // List
    //

    #[actix_web::test]
    async fn test_list_requires_session() {
        let app = test::init_service(App::new().configure(app_config(stub_project_use_cases())))
            .await;

        let req = test::TestRequest::get().uri("/admin/projects").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get("Location").unwrap(), "/admin/login");
    }

    #[actix_web::test]
    async fn test_list_marks_hidden_records_and_shows_notice() {
        let mut hidden = project();
        hidden.title = "Secret".to_string();
        hidden.is_visible = false;

        let app = test::init_service(App::new().configure(app_config(ProjectUseCases {
            list: Arc::new(ListOf(vec![project(), hidden])),
            ..stub_project_use_cases()
        })))
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/projects?notice=created")
            .cookie(session())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("Secret"));
        assert!(body.contains("badge hidden"));
        assert!(body.contains("Project created successfully"));
    }

    #[actix_web::test]
    async fn test_confirm_query_shows_inline_confirmation() {
        let p = project();
        let id = p.id;
        let app = test::init_service(App::new().configure(app_config(ProjectUseCases {
            list: Arc::new(ListOf(vec![p])),
            ..stub_project_use_cases()
        })))
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/admin/projects?confirm={}", id))
            .cookie(session())
            .to_request();
        let body = body_text(test::call_service(&app, req).await).await;

        assert!(body.contains(&format!("action=\"/admin/projects/{}/delete\"", id)));
    }

    #[actix_web::test]
    async fn test_experience_list_puts_current_first() {
        let mut past = experience();
        past.role = "Intern".to_string();
        let mut current = experience();
        current.role = "Lead".to_string();
        current.is_current = true;

        let state = TestAppStateBuilder::default()
            .with_experience(ExperienceUseCases {
                list: Arc::new(ExperienceList(vec![past, current])),
                ..stub_experience_use_cases()
            })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .configure(configure::<ExperienceAdmin>),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/experience")
            .cookie(session())
            .to_request();
        let body = body_text(test::call_service(&app, req).await).await;

        assert!(body.find("Lead").unwrap() < body.find("Intern").unwrap());
    }

    //
    // New / create
    //

    #[actix_web::test]
    async fn test_new_page_renders_blank_form() {
        let app = test::init_service(App::new().configure(app_config(stub_project_use_cases())))
            .await;

        let req = test::TestRequest::get()
            .uri("/admin/projects/new")
            .cookie(session())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("New project"));
        assert!(body.contains("action=\"/admin/projects/new\""));
    }

    #[actix_web::test]
    async fn test_create_redirects_with_notice() {
        let create = Arc::new(RecordingCreate::default());
        let app = test::init_service(App::new().configure(app_config(ProjectUseCases {
            create: create.clone(),
            ..stub_project_use_cases()
        })))
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/projects/new")
            .cookie(session())
            .set_form(valid_form())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get("Location").unwrap(),
            "/admin/projects?notice=created"
        );
        let seen = create.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].icon, "📊");
        assert_eq!(seen[0].tech_stack, vec!["Python"]);
    }

    #[actix_web::test]
    async fn test_invalid_save_keeps_draft() {
        let app = test::init_service(App::new().configure(app_config(ProjectUseCases {
            create: Arc::new(RecordingCreate::default()),
            ..stub_project_use_cases()
        })))
        .await;

        let mut form = valid_form();
        form[0] = ("title", "  ");
        form.push(("results", "Kept result"));

        let req = test::TestRequest::post()
            .uri("/admin/projects/new")
            .cookie(session())
            .set_form(form)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_text(resp).await;
        assert!(body.contains("title is required"));
        assert!(body.contains("value=\"Kept result\""));
        assert!(body.contains("value=\"Python\""));
    }

    #[actix_web::test]
    async fn test_store_failure_keeps_draft() {
        let app = test::init_service(App::new().configure(app_config(ProjectUseCases {
            create: Arc::new(RecordingCreate {
                fail: true,
                ..Default::default()
            }),
            ..stub_project_use_cases()
        })))
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/projects/new")
            .cookie(session())
            .set_form(valid_form())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(resp).await;
        assert!(body.contains("Failed to create project"));
        assert!(body.contains("value=\"Churn\""));
    }

    #[actix_web::test]
    async fn test_list_button_edits_draft_without_saving() {
        let create = Arc::new(RecordingCreate::default());
        let app = test::init_service(App::new().configure(app_config(ProjectUseCases {
            create: create.clone(),
            ..stub_project_use_cases()
        })))
        .await;

        let mut form = valid_form();
        form.pop();
        form.push(("techStack__new", "SQL"));
        form.push(("_action", "add:techStack"));

        let req = test::TestRequest::post()
            .uri("/admin/projects/new")
            .cookie(session())
            .set_form(form)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("name=\"techStack\" value=\"SQL\""));
        assert!(body.contains("name=\"techStack__new\" value=\"\""));
        assert!(create.seen.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_duplicate_tag_shows_error_and_keeps_pending_text() {
        let app = test::init_service(App::new().configure(app_config(stub_project_use_cases())))
            .await;

        let mut form = valid_form();
        form.pop();
        form.push(("techStack__new", "Python"));
        form.push(("_action", "add:techStack"));

        let req = test::TestRequest::post()
            .uri("/admin/projects/new")
            .cookie(session())
            .set_form(form)
            .to_request();
        let body = body_text(test::call_service(&app, req).await).await;

        assert!(body.contains("&quot;Python&quot; is already in the list"));
        assert!(body.contains("name=\"techStack__new\" value=\"Python\""));
    }

    #[actix_web::test]
    async fn test_crafted_category_is_400() {
        let app = test::init_service(App::new().configure(app_config(stub_project_use_cases())))
            .await;

        let mut form = valid_form();
        form[2] = ("category", "Robotics");

        let req = test::TestRequest::post()
            .uri("/admin/projects/new")
            .cookie(session())
            .set_form(form)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    //
    // Edit / update
    //

    #[actix_web::test]
    async fn test_edit_page_loads_record() {
        let p = project();
        let id = p.id;
        let app = test::init_service(App::new().configure(app_config(ProjectUseCases {
            get: Arc::new(GetOne(Some(p))),
            ..stub_project_use_cases()
        })))
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/admin/projects/{}", id))
            .cookie(session())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("Edit project"));
        assert!(body.contains("value=\"Churn Prediction\""));
    }

    #[actix_web::test]
    async fn test_edit_page_unknown_or_bad_id_is_404() {
        let app = test::init_service(App::new().configure(app_config(ProjectUseCases {
            get: Arc::new(GetOne(None)),
            ..stub_project_use_cases()
        })))
        .await;

        for uri in [
            format!("/admin/projects/{}", Uuid::new_v4()),
            "/admin/projects/not-a-uuid".to_string(),
        ] {
            let req = test::TestRequest::get()
                .uri(&uri)
                .cookie(session())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_update_sends_full_replacement() {
        let update = Arc::new(RecordingUpdate::default());
        let app = test::init_service(App::new().configure(app_config(ProjectUseCases {
            update: update.clone(),
            ..stub_project_use_cases()
        })))
        .await;

        let id = Uuid::new_v4();
        let req = test::TestRequest::post()
            .uri(&format!("/admin/projects/{}", id))
            .cookie(session())
            .set_form(valid_form())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get("Location").unwrap(),
            "/admin/projects?notice=updated"
        );

        let seen = update.seen.lock().unwrap();
        assert_eq!(seen[0].0, id);
        assert_eq!(seen[0].1.title.as_deref(), Some("Churn"));
        assert_eq!(seen[0].1.featured, Some(false));
        assert_eq!(seen[0].1.features, Some(vec![]));
    }

    //
    // Delete
    //

    #[actix_web::test]
    async fn test_delete_redirects_with_notice() {
        let app = test::init_service(App::new().configure(app_config(ProjectUseCases {
            delete: Arc::new(DeleteResult(Ok(()))),
            ..stub_project_use_cases()
        })))
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/admin/projects/{}/delete", Uuid::new_v4()))
            .cookie(session())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get("Location").unwrap(),
            "/admin/projects?notice=deleted"
        );
    }

    #[actix_web::test]
    async fn test_delete_missing_is_404() {
        let app = test::init_service(App::new().configure(app_config(ProjectUseCases {
            delete: Arc::new(DeleteResult(Err(DeleteProjectError::NotFound))),
            ..stub_project_use_cases()
        })))
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/admin/projects/{}/delete", Uuid::new_v4()))
            .cookie(session())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[::core::prelude::v1::test]
    fn outcome_messages() {
        assert_eq!(
            Outcome::parse("updated").map(|o| o.message("Skill category")),
            Some("Skill category updated successfully".to_string())
        );
        assert_eq!(Outcome::parse("bogus"), None);
    }
}

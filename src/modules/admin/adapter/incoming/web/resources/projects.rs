use async_trait::async_trait;
use uuid::Uuid;

use super::edit_strings;
use crate::modules::admin::adapter::incoming::web::form::{FormFields, ListAction};
use crate::modules::admin::adapter::incoming::web::render::{
    checkbox_field, number_field, select_field, string_list, text_field, textarea_field,
};
use crate::modules::admin::adapter::incoming::web::resource::{
    AdminResource, DraftError, ListRow, SubmitError,
};
use crate::modules::project::application::domain::entities::DEFAULT_PROJECT_ICON;
use crate::modules::project::application::domain::{
    Project, ProjectCategory, ProjectInput, ProjectPatch,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, DeleteProjectError, GetProjectError, UpdateProjectError,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::shared::list_editor::DuplicatePolicy;
use crate::shared::listing::ListScope;
use crate::shared::validation::ValidationError;
use crate::AppState;

pub struct ProjectAdmin(ProjectUseCases);

#[async_trait]
impl AdminResource for ProjectAdmin {
    type Record = Project;
    type Input = ProjectInput;

    const SLUG: &'static str = "projects";
    const SINGULAR: &'static str = "Project";
    const PLURAL: &'static str = "Projects";

    fn from_state(state: &AppState) -> Self {
        Self(state.project.clone())
    }

    async fn list(&self) -> Result<Vec<Project>, SubmitError> {
        self.0
            .list
            .execute(ListScope::All)
            .await
            .map_err(|e| SubmitError::Failed(e.to_string()))
    }

    async fn load(&self, id: Uuid) -> Result<ProjectInput, SubmitError> {
        match self.0.get.execute(id).await {
            Ok(project) => Ok(ProjectInput::from(&project)),
            Err(GetProjectError::NotFound) => Err(SubmitError::NotFound),
            Err(e) => Err(SubmitError::Failed(e.to_string())),
        }
    }

    async fn create(&self, input: ProjectInput) -> Result<(), SubmitError> {
        match self.0.create.execute(input).await {
            Ok(_) => Ok(()),
            Err(CreateProjectError::Validation(e)) => Err(SubmitError::Invalid(e.to_string())),
            Err(CreateProjectError::RepositoryError(e)) => Err(SubmitError::Failed(e)),
        }
    }

    async fn update(&self, id: Uuid, input: ProjectInput) -> Result<(), SubmitError> {
        match self.0.update.execute(id, ProjectPatch::from(input)).await {
            Ok(_) => Ok(()),
            Err(UpdateProjectError::NotFound) => Err(SubmitError::NotFound),
            Err(UpdateProjectError::Validation(e)) => Err(SubmitError::Invalid(e.to_string())),
            Err(UpdateProjectError::RepositoryError(e)) => Err(SubmitError::Failed(e)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), SubmitError> {
        match self.0.delete.execute(id).await {
            Ok(()) => Ok(()),
            Err(DeleteProjectError::NotFound) => Err(SubmitError::NotFound),
            Err(DeleteProjectError::RepositoryError(e)) => Err(SubmitError::Failed(e)),
        }
    }

    fn row(project: &Project) -> ListRow {
        ListRow {
            id: project.id,
            title: format!("{} {}", project.icon, project.title),
            detail: project.category.to_string(),
            hidden: !project.is_visible,
            badge: project.featured.then(|| "Featured".to_string()),
        }
    }

    fn blank() -> ProjectInput {
        ProjectInput {
            title: String::new(),
            icon: DEFAULT_PROJECT_ICON.to_string(),
            category: ProjectCategory::MachineLearning,
            duration: None,
            problem: String::new(),
            solution: String::new(),
            full_description: None,
            tech_stack: vec![],
            features: vec![],
            challenges: vec![],
            results: vec![],
            images: vec![],
            github_url: None,
            live_url: None,
            featured: false,
            order: 0,
            is_visible: true,
        }
    }

    fn parse(form: &FormFields) -> Result<ProjectInput, ValidationError> {
        Ok(ProjectInput {
            title: form.text("title"),
            icon: form.text("icon"),
            category: form.text("category").parse()?,
            duration: form.optional("duration"),
            problem: form.text("problem"),
            solution: form.text("solution"),
            full_description: form.optional("fullDescription"),
            tech_stack: form.list("techStack"),
            features: form.list("features"),
            challenges: form.list("challenges"),
            results: form.list("results"),
            images: form.list("images"),
            github_url: form.optional("githubUrl"),
            live_url: form.optional("liveUrl"),
            featured: form.checkbox("featured"),
            order: form.int("order")?,
            is_visible: form.checkbox("isVisible"),
        })
    }

    fn edit_list(
        input: &mut ProjectInput,
        action: &ListAction,
        form: &FormFields,
    ) -> Result<(), DraftError> {
        let (items, policy) = match action.field.as_str() {
            "techStack" => (&mut input.tech_stack, DuplicatePolicy::Reject),
            "images" => (&mut input.images, DuplicatePolicy::Reject),
            "features" => (&mut input.features, DuplicatePolicy::Allow),
            "challenges" => (&mut input.challenges, DuplicatePolicy::Allow),
            "results" => (&mut input.results, DuplicatePolicy::Allow),
            other => return Err(DraftError::UnknownList(other.to_string())),
        };
        edit_strings(items, policy, action, form)
    }

    fn fields(input: &ProjectInput, form: &FormFields) -> String {
        let categories: Vec<&str> = ProjectCategory::ALL.iter().map(|c| c.as_str()).collect();

        [
            text_field("title", "Title", &input.title, true),
            text_field("icon", "Icon", &input.icon, false),
            select_field(
                "category",
                "Category",
                &categories,
                input.category.as_str(),
            ),
            text_field(
                "duration",
                "Duration",
                input.duration.as_deref().unwrap_or_default(),
                false,
            ),
            textarea_field("problem", "Problem", &input.problem),
            textarea_field("solution", "Solution", &input.solution),
            textarea_field(
                "fullDescription",
                "Full description",
                input.full_description.as_deref().unwrap_or_default(),
            ),
            string_list("techStack", "Tech stack", &input.tech_stack, form),
            string_list("features", "Features", &input.features, form),
            string_list("challenges", "Challenges", &input.challenges, form),
            string_list("results", "Results", &input.results, form),
            string_list("images", "Image URLs", &input.images, form),
            text_field(
                "githubUrl",
                "GitHub URL",
                input.github_url.as_deref().unwrap_or_default(),
                false,
            ),
            text_field(
                "liveUrl",
                "Live URL",
                input.live_url.as_deref().unwrap_or_default(),
                false,
            ),
            number_field("order", "Display order", input.order.into()),
            checkbox_field("featured", "Featured", input.featured),
            checkbox_field("isVisible", "Visible on site", input.is_visible),
        ]
        .concat()
    }
}

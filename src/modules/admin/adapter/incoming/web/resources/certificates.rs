use async_trait::async_trait;
use uuid::Uuid;

use super::edit_strings;
use crate::modules::admin::adapter::incoming::web::form::{FormFields, ListAction};
use crate::modules::admin::adapter::incoming::web::render::{
    checkbox_field, date_field, number_field, select_field, string_list, text_field,
    textarea_field,
};
use crate::modules::admin::adapter::incoming::web::resource::{
    AdminResource, DraftError, ListRow, SubmitError,
};
use crate::modules::certificate::application::certificate_use_cases::CertificateUseCases;
use crate::modules::certificate::application::domain::entities::DEFAULT_CERTIFICATE_COLOR;
use crate::modules::certificate::application::domain::{
    Certificate, CertificateInput, CertificatePatch,
};
use crate::modules::certificate::application::ports::incoming::use_cases::{
    CreateCertificateError, DeleteCertificateError, GetCertificateError, UpdateCertificateError,
};
use crate::shared::list_editor::DuplicatePolicy;
use crate::shared::listing::ListScope;
use crate::shared::validation::ValidationError;
use crate::AppState;

/// Accent colors the public certificate cards have styles for.
pub const CERTIFICATE_COLORS: [&str; 6] = ["amber", "blue", "green", "purple", "rose", "cyan"];

pub struct CertificateAdmin(CertificateUseCases);

#[async_trait]
impl AdminResource for CertificateAdmin {
    type Record = Certificate;
    type Input = CertificateInput;

    const SLUG: &'static str = "certificates";
    const SINGULAR: &'static str = "Certificate";
    const PLURAL: &'static str = "Certificates";

    fn from_state(state: &AppState) -> Self {
        Self(state.certificate.clone())
    }

    async fn list(&self) -> Result<Vec<Certificate>, SubmitError> {
        self.0
            .list
            .execute(ListScope::All)
            .await
            .map_err(|e| SubmitError::Failed(e.to_string()))
    }

    async fn load(&self, id: Uuid) -> Result<CertificateInput, SubmitError> {
        match self.0.get.execute(id).await {
            Ok(certificate) => Ok(CertificateInput::from(&certificate)),
            Err(GetCertificateError::NotFound) => Err(SubmitError::NotFound),
            Err(e) => Err(SubmitError::Failed(e.to_string())),
        }
    }

    async fn create(&self, input: CertificateInput) -> Result<(), SubmitError> {
        match self.0.create.execute(input).await {
            Ok(_) => Ok(()),
            Err(CreateCertificateError::Validation(e)) => Err(SubmitError::Invalid(e.to_string())),
            Err(CreateCertificateError::RepositoryError(e)) => Err(SubmitError::Failed(e)),
        }
    }

    async fn update(&self, id: Uuid, input: CertificateInput) -> Result<(), SubmitError> {
        match self.0.update.execute(id, CertificatePatch::from(input)).await {
            Ok(_) => Ok(()),
            Err(UpdateCertificateError::NotFound) => Err(SubmitError::NotFound),
            Err(UpdateCertificateError::Validation(e)) => Err(SubmitError::Invalid(e.to_string())),
            Err(UpdateCertificateError::RepositoryError(e)) => Err(SubmitError::Failed(e)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), SubmitError> {
        match self.0.delete.execute(id).await {
            Ok(()) => Ok(()),
            Err(DeleteCertificateError::NotFound) => Err(SubmitError::NotFound),
            Err(DeleteCertificateError::RepositoryError(e)) => Err(SubmitError::Failed(e)),
        }
    }

    fn row(certificate: &Certificate) -> ListRow {
        let detail = match certificate.issue_date {
            Some(date) => format!("{} · {}", certificate.platform, date.format("%b %Y")),
            None => certificate.platform.clone(),
        };

        ListRow {
            id: certificate.id,
            title: certificate.title.clone(),
            detail,
            hidden: !certificate.is_visible,
            badge: None,
        }
    }

    fn blank() -> CertificateInput {
        CertificateInput {
            title: String::new(),
            platform: String::new(),
            issue_date: None,
            credential_id: None,
            credential_url: None,
            certificate_file: None,
            skills: vec![],
            color: DEFAULT_CERTIFICATE_COLOR.to_string(),
            description: None,
            order: 0,
            is_visible: true,
        }
    }

    fn parse(form: &FormFields) -> Result<CertificateInput, ValidationError> {
        Ok(CertificateInput {
            title: form.text("title"),
            platform: form.text("platform"),
            issue_date: form.date("issueDate")?,
            credential_id: form.optional("credentialId"),
            credential_url: form.optional("credentialUrl"),
            certificate_file: form.optional("certificateFile"),
            skills: form.list("skills"),
            color: form.text("color"),
            description: form.optional("description"),
            order: form.int("order")?,
            is_visible: form.checkbox("isVisible"),
        })
    }

    fn edit_list(
        input: &mut CertificateInput,
        action: &ListAction,
        form: &FormFields,
    ) -> Result<(), DraftError> {
        match action.field.as_str() {
            "skills" => edit_strings(&mut input.skills, DuplicatePolicy::Reject, action, form),
            other => Err(DraftError::UnknownList(other.to_string())),
        }
    }

    fn fields(input: &CertificateInput, form: &FormFields) -> String {
        // A color set through the API stays selectable.
        let mut colors: Vec<&str> = CERTIFICATE_COLORS.to_vec();
        if !colors.contains(&input.color.as_str()) {
            colors.push(input.color.as_str());
        }

        [
            text_field("title", "Title", &input.title, true),
            text_field("platform", "Platform", &input.platform, true),
            date_field("issueDate", "Issue date", input.issue_date),
            text_field(
                "credentialId",
                "Credential ID",
                input.credential_id.as_deref().unwrap_or_default(),
                false,
            ),
            text_field(
                "credentialUrl",
                "Credential URL",
                input.credential_url.as_deref().unwrap_or_default(),
                false,
            ),
            text_field(
                "certificateFile",
                "Certificate file URL",
                input.certificate_file.as_deref().unwrap_or_default(),
                false,
            ),
            string_list("skills", "Skills", &input.skills, form),
            select_field("color", "Accent color", &colors, &input.color),
            textarea_field(
                "description",
                "Description",
                input.description.as_deref().unwrap_or_default(),
            ),
            number_field("order", "Display order", input.order.into()),
            checkbox_field("isVisible", "Visible on site", input.is_visible),
        ]
        .concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::certificate::application::domain::entities::fixtures::certificate;
    use crate::shared::list_editor::{ListEditError, ListOp};
    use chrono::NaiveDate;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn parse_reads_dates_and_tags() {
        let input = CertificateAdmin::parse(&form(&[
            ("title", "Data Analytics"),
            ("platform", "Coursera"),
            ("issueDate", "2024-05-01"),
            ("skills", "SQL"),
            ("skills", "R"),
            ("color", "blue"),
            ("isVisible", "on"),
        ]))
        .unwrap();

        assert_eq!(input.issue_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(input.skills, vec!["SQL", "R"]);
        assert_eq!(input.color, "blue");
        assert!(input.is_visible);
        assert_eq!(input.credential_id, None);
    }

    #[test]
    fn parse_rejects_bad_date() {
        let result = CertificateAdmin::parse(&form(&[("issueDate", "May 2024")]));
        assert!(result.is_err());
    }

    #[test]
    fn skills_reject_duplicates() {
        let mut input = CertificateInput::from(&certificate());
        let result = CertificateAdmin::edit_list(
            &mut input,
            &ListAction {
                field: "skills".to_string(),
                op: ListOp::Add,
            },
            &form(&[("skills__new", " SQL ")]),
        );

        assert_eq!(
            result,
            Err(DraftError::List(ListEditError::Duplicate("SQL".to_string())))
        );
        assert_eq!(input.skills, vec!["SQL", "Tableau"]);
    }

    #[test]
    fn unlisted_color_stays_selected() {
        let mut input = CertificateAdmin::blank();
        input.color = "teal".to_string();
        let html = CertificateAdmin::fields(&input, &FormFields::default());
        assert!(html.contains("<option value=\"teal\" selected>"));
    }

    #[test]
    fn row_shows_platform_and_date() {
        let row = CertificateAdmin::row(&certificate());
        assert_eq!(row.detail, "Coursera · May 2024");
        assert!(!row.hidden);
    }
}

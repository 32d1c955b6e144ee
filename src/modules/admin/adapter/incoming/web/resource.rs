//! One record type as the admin panel sees it.
//!
//! The list, new, edit and delete pages are written once against this
//! trait; `resources` holds the four implementations.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::admin::adapter::incoming::web::form::{FormFields, ListAction};
use crate::shared::list_editor::ListEditError;
use crate::shared::validation::ValidationError;
use crate::AppState;

/// A failed create, update, delete or load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Not found")]
    NotFound,

    /// Rejected input; the message is shown to the admin.
    #[error("{0}")]
    Invalid(String),

    /// Store failure; logged, the admin sees a generic message.
    #[error("{0}")]
    Failed(String),
}

/// A rejected list-editor button press.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error(transparent)]
    List(#[from] ListEditError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Unknown list \"{0}\"")]
    UnknownList(String),
}

/// One row of a list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: Uuid,
    pub title: String,
    pub detail: String,
    pub hidden: bool,
    /// Extra marker such as "Featured" or "Current".
    pub badge: Option<String>,
}

#[async_trait]
pub trait AdminResource: Send + Sync + Sized + 'static {
    type Record: Send;
    type Input: Clone + Send;

    /// Path segment under `/admin`.
    const SLUG: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    fn from_state(state: &AppState) -> Self;

    /// Every record, hidden ones included, in admin order.
    async fn list(&self) -> Result<Vec<Self::Record>, SubmitError>;
    /// The stored record as an editable draft.
    async fn load(&self, id: Uuid) -> Result<Self::Input, SubmitError>;
    async fn create(&self, input: Self::Input) -> Result<(), SubmitError>;
    /// Full replacement with the submitted draft.
    async fn update(&self, id: Uuid, input: Self::Input) -> Result<(), SubmitError>;
    async fn delete(&self, id: Uuid) -> Result<(), SubmitError>;

    fn row(record: &Self::Record) -> ListRow;
    fn blank() -> Self::Input;
    /// Rebuild the draft from a submitted form. Fails only on values a
    /// browser would not send (bad number, date or category).
    fn parse(form: &FormFields) -> Result<Self::Input, ValidationError>;
    fn edit_list(
        input: &mut Self::Input,
        action: &ListAction,
        form: &FormFields,
    ) -> Result<(), DraftError>;
    /// Form controls for the draft. `form` supplies the "add" boxes' text.
    fn fields(input: &Self::Input, form: &FormFields) -> String;
}

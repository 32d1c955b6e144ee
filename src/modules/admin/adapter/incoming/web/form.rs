//! Submitted admin forms.
//!
//! Forms post `application/x-www-form-urlencoded` pairs. List fields repeat
//! their name once per item, in order. The pressed button arrives as
//! `_action`: `save`, `add:<field>`, `remove:<field>:<index>`,
//! `up:<field>:<index>` or `down:<field>:<index>`. The text typed into a
//! list's "add" box arrives as `<field>__new` (skill entries use
//! `skills__new_name` and `skills__new_level`).

use chrono::NaiveDate;

use crate::shared::list_editor::ListOp;
use crate::shared::validation::ValidationError;

pub const ACTION_FIELD: &str = "_action";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListAction {
    pub field: String,
    pub op: ListOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Save,
    Edit(ListAction),
}

impl FormAction {
    /// Anything unrecognised is treated as a save.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return FormAction::Save;
        };

        let mut parts = raw.splitn(3, ':');
        let verb = parts.next().unwrap_or_default();
        let field = parts.next().unwrap_or_default();
        let index = parts.next().and_then(|i| i.parse::<usize>().ok());

        if field.is_empty() {
            return FormAction::Save;
        }

        let op = match (verb, index) {
            ("add", _) => ListOp::Add,
            ("remove", Some(i)) => ListOp::Remove(i),
            ("up", Some(i)) => ListOp::MoveUp(i),
            ("down", Some(i)) => ListOp::MoveDown(i),
            _ => return FormAction::Save,
        };

        FormAction::Edit(ListAction {
            field: field.to_string(),
            op,
        })
    }
}

pub fn pending_key(field: &str) -> String {
    format!("{}__new", field)
}

#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First value trimmed, or empty.
    pub fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().trim().to_string()
    }

    /// Blank collapses to `None`.
    pub fn optional(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Checkboxes are only submitted when ticked.
    pub fn checkbox(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Every value of a repeated field, in submission order.
    pub fn all(&self, name: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// A repeated text field as list items: trimmed, blanks dropped.
    pub fn list(&self, name: &str) -> Vec<String> {
        self.all(name)
            .into_iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Blank is zero.
    pub fn int(&self, name: &'static str) -> Result<i32, ValidationError> {
        match self.optional(name) {
            None => Ok(0),
            Some(v) => v.parse().map_err(|_| ValidationError::Invalid {
                field: name,
                message: format!("\"{}\" is not a whole number", v),
            }),
        }
    }

    /// `YYYY-MM-DD`; blank is `None`.
    pub fn date(&self, name: &'static str) -> Result<Option<NaiveDate>, ValidationError> {
        self.optional(name)
            .map(|v| {
                NaiveDate::parse_from_str(&v, "%Y-%m-%d").map_err(|_| ValidationError::Invalid {
                    field: name,
                    message: format!("\"{}\" is not a date", v),
                })
            })
            .transpose()
    }

    pub fn action(&self) -> FormAction {
        FormAction::parse(self.get(ACTION_FIELD))
    }

    /// The same form with one list's "add" inputs cleared.
    pub fn without_pending(&self, field: &str) -> Self {
        let prefix = pending_key(field);
        Self(
            self.0
                .iter()
                .filter(|(k, _)| !k.starts_with(&prefix))
                .cloned()
                .collect(),
        )
    }
}

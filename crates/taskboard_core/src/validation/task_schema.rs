//! Task form schema and validation boundary.
//!
//! # Responsibility
//! - Turn raw form text into a `ValidatedTaskInput` or field-level errors.
//! - Be the only place that can mint a `ValidatedTaskInput`.
//!
//! # Invariants
//! - A blank title never passes validation.
//! - Accepted titles and descriptions are kept exactly as submitted.
//! - Every violated rule is reported, in form field order.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::task::{Priority, Task};

pub const TITLE_REQUIRED_MESSAGE: &str = "Task title is required";
pub const INVALID_DATE_MESSAGE: &str = "Invalid date";
pub const INVALID_PRIORITY_MESSAGE: &str = "Invalid priority; expected Low, Medium or High";

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Raw form payload, as text fields straight from the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFormInput {
    pub title: String,
    pub description: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 date-time.
    pub due_date: Option<String>,
    /// One of `Low|Medium|High` when present.
    pub priority: Option<String>,
}

impl TaskFormInput {
    /// Convenience constructor for a title-only payload.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builds the edit-form prefill for an existing task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task
                .due_date
                .map(|date| date.format(DATE_INPUT_FORMAT).to_string()),
            priority: task.priority.map(|priority| priority.as_str().to_string()),
        }
    }
}

/// Form payload that passed `TaskSchema`.
///
/// Fields are private so the only way to obtain one is `FormSchema::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTaskInput {
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    priority: Option<Priority>,
}

impl ValidatedTaskInput {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub(crate) fn into_parts(
        self,
    ) -> (String, Option<String>, Option<NaiveDate>, Option<Priority>) {
        (self.title, self.description, self.due_date, self.priority)
    }
}

/// Form fields that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Title,
    DueDate,
    Priority,
}

impl FormField {
    /// Stable field key, matching the wire names of `TaskFormInput`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::DueDate => "dueDate",
            Self::Priority => "priority",
        }
    }
}

/// One violated rule, attached to the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// Submit-time validation failure. Always holds at least one field error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// All field errors in form field order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First message reported for `field`, if any.
    pub fn message_for(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field.as_str(), error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Validate-on-submit capability for one form shape.
pub trait FormSchema {
    type Input;
    type Output;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError>;
}

/// Schema for the add and edit task forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskSchema;

impl FormSchema for TaskSchema {
    type Input = TaskFormInput;
    type Output = ValidatedTaskInput;

    fn validate(&self, input: &TaskFormInput) -> Result<ValidatedTaskInput, ValidationError> {
        let mut errors = Vec::new();

        if input.title.trim().is_empty() {
            errors.push(FieldError {
                field: FormField::Title,
                message: TITLE_REQUIRED_MESSAGE.to_string(),
            });
        }

        let due_date = match non_blank(input.due_date.as_deref()) {
            Some(raw) => match parse_due_date(raw) {
                Some(date) => Some(date),
                None => {
                    errors.push(FieldError {
                        field: FormField::DueDate,
                        message: INVALID_DATE_MESSAGE.to_string(),
                    });
                    None
                }
            },
            None => None,
        };

        let priority = match non_blank(input.priority.as_deref()) {
            Some(raw) => match Priority::parse(raw) {
                Some(priority) => Some(priority),
                None => {
                    errors.push(FieldError {
                        field: FormField::Priority,
                        message: INVALID_PRIORITY_MESSAGE.to_string(),
                    });
                    None
                }
            },
            None => None,
        };

        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }

        Ok(ValidatedTaskInput {
            title: input.title.clone(),
            description: input.description.clone(),
            due_date,
            priority,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT) {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|value| value.date_naive())
}

#[cfg(test)]
mod tests {
    use super::{
        FormField, FormSchema, TaskFormInput, TaskSchema, INVALID_DATE_MESSAGE,
        INVALID_PRIORITY_MESSAGE, TITLE_REQUIRED_MESSAGE,
    };
    use crate::model::task::Priority;
    use chrono::NaiveDate;

    #[test]
    fn empty_and_whitespace_titles_are_rejected() {
        for title in ["", "   ", "\t\n"] {
            let err = TaskSchema
                .validate(&TaskFormInput::with_title(title))
                .expect_err("blank title must fail");
            assert_eq!(err.message_for(FormField::Title), Some(TITLE_REQUIRED_MESSAGE));
            assert_eq!(err.errors().len(), 1);
        }
    }

    #[test]
    fn title_is_kept_verbatim() {
        let validated = TaskSchema
            .validate(&TaskFormInput::with_title("  padded  "))
            .expect("non-blank title should pass");
        assert_eq!(validated.title(), "  padded  ");
    }

    #[test]
    fn empty_description_is_not_collapsed_into_none() {
        let input = TaskFormInput {
            description: Some(String::new()),
            ..TaskFormInput::with_title("a")
        };
        let validated = TaskSchema.validate(&input).expect("valid input");
        assert_eq!(validated.description(), Some(""));

        let validated = TaskSchema
            .validate(&TaskFormInput::with_title("a"))
            .expect("valid input");
        assert_eq!(validated.description(), None);
    }

    #[test]
    fn due_date_accepts_plain_date_and_rfc3339() {
        let expected = NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid date");
        for raw in ["2026-10-15", "2026-10-15T09:30:00Z", "2026-10-15T23:00:00+02:00"] {
            let input = TaskFormInput {
                due_date: Some(raw.to_string()),
                ..TaskFormInput::with_title("a")
            };
            let validated = TaskSchema.validate(&input).expect("date should parse");
            assert_eq!(validated.due_date(), Some(expected), "raw={raw}");
        }
    }

    #[test]
    fn blank_optional_fields_mean_absent() {
        let input = TaskFormInput {
            due_date: Some("  ".to_string()),
            priority: Some(String::new()),
            ..TaskFormInput::with_title("a")
        };
        let validated = TaskSchema.validate(&input).expect("valid input");
        assert_eq!(validated.due_date(), None);
        assert_eq!(validated.priority(), None);
    }

    #[test]
    fn reports_every_violation_in_field_order() {
        let input = TaskFormInput {
            title: String::new(),
            description: None,
            due_date: Some("next tuesday".to_string()),
            priority: Some("Urgent".to_string()),
        };
        let err = TaskSchema.validate(&input).expect_err("three rules violated");
        let fields: Vec<FormField> = err.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![FormField::Title, FormField::DueDate, FormField::Priority]
        );
        assert_eq!(err.message_for(FormField::DueDate), Some(INVALID_DATE_MESSAGE));
        assert_eq!(
            err.message_for(FormField::Priority),
            Some(INVALID_PRIORITY_MESSAGE)
        );
        assert!(err.to_string().starts_with("title: Task title is required"));
    }

    #[test]
    fn priority_levels_parse() {
        let input = TaskFormInput {
            priority: Some("High".to_string()),
            ..TaskFormInput::with_title("a")
        };
        let validated = TaskSchema.validate(&input).expect("valid input");
        assert_eq!(validated.priority(), Some(Priority::High));
    }
}

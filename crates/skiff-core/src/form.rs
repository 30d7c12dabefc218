use chrono::NaiveDate;
use tracing::debug;

use crate::task::TaskDraft;

/// Wire format of the HTML date
/// input.
pub const DUE_DATE_FORMAT: &str =
  "%Y-%m-%d";

/// Field-level validation errors.
/// The form surfaces each next to
/// its field and clears it as soon
/// as that field is edited.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct DraftErrors {
  pub title: Option<String>,
  pub due_date: Option<String>
}

impl DraftErrors {
  pub fn is_clean(&self) -> bool {
    self.title.is_none()
      && self.due_date.is_none()
  }
}

pub fn parse_due_date(
  raw: &str
) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(
    raw.trim(),
    DUE_DATE_FORMAT
  )
  .ok()
}

/// Validates the raw form fields
/// and builds the draft a
/// mutation will submit. No
/// remote interaction happens
/// here.
pub fn build_draft(
  title: &str,
  description: &str,
  due_date: &str
) -> Result<TaskDraft, DraftErrors>
{
  let mut errors =
    DraftErrors::default();

  if title.trim().is_empty() {
    errors.title = Some(
      "Title is required"
        .to_string()
    );
  }

  let parsed_due =
    if due_date.trim().is_empty() {
      errors.due_date = Some(
        "Due date is required"
          .to_string()
      );
      None
    } else {
      let parsed =
        parse_due_date(due_date);
      if parsed.is_none() {
        errors.due_date = Some(
          "Enter a valid due date"
            .to_string()
        );
      }
      parsed
    };

  if !errors.is_clean() {
    debug!(
      title_missing =
        errors.title.is_some(),
      due_missing =
        errors.due_date.is_some(),
      "rejected draft"
    );
    return Err(errors);
  }

  let due = match parsed_due {
    | Some(due) => due,
    | None => {
      return Err(errors);
    }
  };

  Ok(TaskDraft {
    title: title.to_string(),
    description: description
      .to_string(),
    due_date: due
  })
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::build_draft;

  #[test]
  fn empty_title_is_rejected() {
    let err = build_draft(
      "   ",
      "",
      "2024-01-01"
    )
    .expect_err("must reject");

    assert!(err.title.is_some());
    assert!(err.due_date.is_none());
  }

  #[test]
  fn missing_due_date_is_rejected()
  {
    let err =
      build_draft("Buy milk", "", "")
        .expect_err("must reject");

    assert!(err.title.is_none());
    assert_eq!(
      err.due_date.as_deref(),
      Some("Due date is required")
    );
  }

  #[test]
  fn malformed_due_date_is_rejected()
  {
    let err = build_draft(
      "Buy milk",
      "",
      "01/02/2024"
    )
    .expect_err("must reject");

    assert_eq!(
      err.due_date.as_deref(),
      Some("Enter a valid due date")
    );
  }

  #[test]
  fn both_errors_reported_at_once()
  {
    let err = build_draft("", "", "")
      .expect_err("must reject");

    assert!(err.title.is_some());
    assert!(err.due_date.is_some());
  }

  #[test]
  fn valid_fields_build_a_draft() {
    let draft = build_draft(
      "Buy milk",
      "Two litres",
      "2024-01-01"
    )
    .expect("valid draft");

    assert_eq!(
      draft.title,
      "Buy milk"
    );
    assert_eq!(
      draft.due_date,
      NaiveDate::from_ymd_opt(
        2024, 1, 1
      )
      .expect("valid date")
    );
  }
}

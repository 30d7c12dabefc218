use tracing::debug;
use uuid::Uuid;

use crate::task::{
  Task,
  TaskDraft
};

/// The canonical in-memory task
/// list for the current session.
/// The composition root owns one
/// and applies a mutation only
/// after the matching remote call
/// has succeeded.
#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct TaskBook {
  tasks: Vec<Task>
}

impl TaskBook {
  pub fn from_tasks(
    tasks: Vec<Task>
  ) -> Self {
    Self {
      tasks
    }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn get(
    &self,
    id: Uuid
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  /// Newest-first ordering: a
  /// freshly stored task lands at
  /// the front.
  pub fn insert_newest(
    &mut self,
    task: Task
  ) {
    debug!(
      id = %task.id,
      "inserting confirmed task"
    );
    self.tasks.insert(0, task);
  }

  /// Replaces the editable fields
  /// of the matching entry,
  /// leaving completion state and
  /// creation time untouched.
  pub fn apply_edit(
    &mut self,
    id: Uuid,
    draft: &TaskDraft
  ) -> bool {
    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)
    else {
      return false;
    };

    task.title = draft.title.clone();
    task.description =
      draft.description.clone();
    task.due_date = draft.due_date;

    debug!(
      %id,
      "applied confirmed edit"
    );
    true
  }

  /// Flips completion on the
  /// matching entry and returns
  /// the new state; `None` when
  /// the id is unknown.
  pub fn apply_toggle(
    &mut self,
    id: Uuid
  ) -> Option<bool> {
    let task = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)?;

    task.completed = !task.completed;

    debug!(
      %id,
      completed = task.completed,
      "applied confirmed toggle"
    );
    Some(task.completed)
  }

  pub fn remove(
    &mut self,
    id: Uuid
  ) -> bool {
    let before = self.tasks.len();
    self
      .tasks
      .retain(|task| task.id != id);

    let removed =
      self.tasks.len() != before;
    if removed {
      debug!(
        %id,
        "removed confirmed delete"
      );
    }
    removed
  }
}

#[cfg(test)]
mod tests {
  use chrono::{
    NaiveDate,
    TimeZone,
    Utc
  };
  use uuid::Uuid;

  use super::TaskBook;
  use crate::task::{
    Task,
    TaskDraft
  };

  fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      2024, 1, d
    )
    .expect("valid date")
  }

  fn task(
    id: u128,
    title: &str,
    completed: bool
  ) -> Task {
    Task {
      id: Uuid::from_u128(id),
      owner: Uuid::from_u128(99),
      title: title.to_string(),
      description: String::new(),
      due_date: date(10),
      completed,
      created_at: Utc
        .with_ymd_and_hms(
          2024, 1, 1, 0, 0, id as u32
        )
        .unwrap()
    }
  }

  fn book() -> TaskBook {
    TaskBook::from_tasks(vec![
      task(1, "Alpha", false),
      task(2, "Beta", true),
      task(3, "Gamma", false),
    ])
  }

  #[test]
  fn insert_newest_prepends() {
    let mut book = book();
    book.insert_newest(task(
      4, "Delta", false
    ));

    assert_eq!(
      book.tasks()[0].title,
      "Delta"
    );
    assert_eq!(book.tasks().len(), 4);
  }

  #[test]
  fn toggle_flips_exactly_one_flag()
  {
    let mut book = book();
    let before = book.tasks().to_vec();

    let state = book.apply_toggle(
      Uuid::from_u128(1)
    );
    assert_eq!(state, Some(true));

    for (was, now) in before
      .iter()
      .zip(book.tasks())
    {
      if was.id == Uuid::from_u128(1)
      {
        assert!(now.completed);
        assert_eq!(
          was.title, now.title
        );
        assert_eq!(
          was.due_date, now.due_date
        );
        assert_eq!(
          was.created_at,
          now.created_at
        );
      } else {
        assert_eq!(was, now);
      }
    }
  }

  #[test]
  fn toggle_unknown_id_is_a_noop() {
    let mut book = book();
    let before = book.clone();

    assert_eq!(
      book.apply_toggle(
        Uuid::from_u128(42)
      ),
      None
    );
    assert_eq!(book, before);
  }

  #[test]
  fn edit_leaves_completion_alone()
  {
    let mut book = book();
    let draft = TaskDraft {
      title: "Beta renamed"
        .to_string(),
      description: "notes"
        .to_string(),
      due_date: date(20)
    };

    assert!(book.apply_edit(
      Uuid::from_u128(2),
      &draft
    ));

    let edited = book
      .get(Uuid::from_u128(2))
      .expect("still present");
    assert_eq!(
      edited.title,
      "Beta renamed"
    );
    assert_eq!(
      edited.due_date,
      date(20)
    );
    assert!(edited.completed);
  }

  #[test]
  fn remove_keeps_relative_order()
  {
    let mut book = book();

    assert!(book.remove(
      Uuid::from_u128(2)
    ));
    assert!(
      book
        .get(Uuid::from_u128(2))
        .is_none()
    );

    let titles: Vec<_> = book
      .tasks()
      .iter()
      .map(|task| task.title.as_str())
      .collect();
    assert_eq!(
      titles,
      ["Alpha", "Gamma"]
    );
  }
}
